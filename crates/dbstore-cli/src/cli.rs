use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dbstore")]
#[command(about = "Store files in a database table", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the file table if it does not exist
    Init,

    /// Store a file, replacing any file with the same name
    Put {
        /// Name to store the file under
        name: String,

        /// Read content from this file instead of stdin
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// Write a stored file to stdout or to a path
    Get {
        /// Stored file name
        name: String,

        /// Write to this path instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Check whether a file is stored
    Exists {
        /// Stored file name
        name: String,
    },

    /// Remove a stored file
    Rm {
        /// Stored file name
        name: String,
    },

    /// Print the size of a stored file in bytes
    Size {
        /// Stored file name
        name: String,
    },

    /// Print the public URL of a file
    Url {
        /// File name
        name: String,
    },

    /// List stored files
    Ls {
        /// Show sizes
        #[arg(long, short)]
        long: bool,
    },
}
