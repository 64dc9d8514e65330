//! Core data model types for merkle_root

mod digest;

pub use digest::{Digest, DigestError, DIGEST_LEN};
