//! Text encoding of file content for the data column

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

pub fn encode(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    BASE64.decode(text)
}
