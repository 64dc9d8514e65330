//! Loading leaf hashes from text
//!
//! One hex-encoded hash per line. Surrounding whitespace is trimmed and blank
//! lines are skipped. Any other line must decode to exactly 32 bytes or the
//! whole load fails; there is no partial result.

use crate::model::{Digest, DigestError};
use crate::{Error, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where leaf hashes are read from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeafSource {
    File(PathBuf),
    Stdin,
}

impl LeafSource {
    /// `-` selects stdin, anything else is a file path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            LeafSource::Stdin
        } else {
            LeafSource::File(PathBuf::from(arg))
        }
    }

    /// Read and validate every leaf from this source
    pub fn read(&self) -> Result<Vec<Digest>> {
        match self {
            LeafSource::File(path) => read_leaves_from_path(path),
            LeafSource::Stdin => read_named(io::stdin().lock(), &self.to_string()),
        }
    }
}

impl fmt::Display for LeafSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafSource::File(path) => write!(f, "{}", path.display()),
            LeafSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Parse one line. `None` for blank lines.
fn parse_line(line_no: usize, line: &str) -> Result<Option<Digest>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Digest::from_hex(trimmed)
        .map(Some)
        .map_err(|e| match e {
            DigestError::InvalidHex(error) => Error::MalformedEncoding {
                line: line_no,
                error,
            },
            DigestError::WrongLength(len) => Error::WrongDigestLength { line: line_no, len },
        })
}

/// Parse leaves from an in-memory document
pub fn parse_leaves(text: &str) -> Result<Vec<Digest>> {
    let mut leaves = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(leaf) = parse_line(idx + 1, line)? {
            leaves.push(leaf);
        }
    }
    Ok(leaves)
}

/// Read leaves line by line from any buffered reader
pub fn read_leaves<R: BufRead>(reader: R) -> Result<Vec<Digest>> {
    read_named(reader, "input")
}

fn read_named<R: BufRead>(reader: R, name: &str) -> Result<Vec<Digest>> {
    let mut leaves = Vec::new();
    // Split on raw bytes so a non-UTF-8 line is reported with its line number
    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|error| Error::SourceUnreadable {
            source_name: name.to_string(),
            error,
        })?;
        let text = decode_line(idx + 1, &line)?;
        if let Some(leaf) = parse_line(idx + 1, text)? {
            leaves.push(leaf);
        }
    }
    debug!(source = name, leaves = leaves.len(), "loaded leaves");
    Ok(leaves)
}

/// Reject non-UTF-8 bytes as a non-hex character at the first bad offset
fn decode_line(line_no: usize, bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| Error::MalformedEncoding {
        line: line_no,
        error: hex::FromHexError::InvalidHexCharacter {
            c: char::REPLACEMENT_CHARACTER,
            index: e.valid_up_to(),
        },
    })
}

/// Read leaves from a file
pub fn read_leaves_from_path(path: impl AsRef<Path>) -> Result<Vec<Digest>> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let file = File::open(path).map_err(|error| Error::SourceUnreadable {
        source_name: name.clone(),
        error,
    })?;
    read_named(BufReader::new(file), &name)
}
