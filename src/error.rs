//! Error types for merkle_root
//!
//! Every variant belongs to the ingestion boundary. Computing a root from
//! well-formed digests cannot fail.

use thiserror::Error;

/// Result type alias for merkle_root operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading leaf hashes
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot read {source_name}")]
    SourceUnreadable {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Line {line}: not a hex-encoded hash")]
    MalformedEncoding {
        line: usize,
        #[source]
        error: hex::FromHexError,
    },

    #[error("Line {line}: expected a 32-byte hash, decoded {len} bytes")]
    WrongDigestLength { line: usize, len: usize },
}
