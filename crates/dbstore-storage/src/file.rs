//! In-memory file content

use std::io::{self, BufRead, Cursor, Read, Seek, SeekFrom};

/// File content held entirely in memory.
///
/// Returned by `open` and accepted by `save` (it implements [`Read`]).
#[derive(Debug, Clone)]
pub struct ContentFile {
    name: String,
    cursor: Cursor<Vec<u8>>,
}

impl ContentFile {
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            cursor: Cursor::new(bytes.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total content length, independent of the read position
    pub fn size(&self) -> u64 {
        self.cursor.get_ref().len() as u64
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.cursor.get_ref()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.cursor.into_inner()
    }
}

impl Read for ContentFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl BufRead for ContentFile {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.cursor.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.cursor.consume(amt)
    }
}

impl Seek for ContentFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}
