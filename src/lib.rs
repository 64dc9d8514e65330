//! # merkle_root
//!
//! Binary SHA-256 Merkle root over an ordered list of leaf hashes.
//!
//! Leaves are precomputed 32-byte digests, usually read as one hex string per
//! line. They are paired left to right and each pair is hashed into the next
//! level until a single digest, the root, remains.
//!
//! ## Rules
//!
//! - **No leaves**: the root is SHA-256 of the empty string
//! - **One leaf**: the root is the leaf itself
//! - **Odd level**: the last node is paired with 32 zero bytes, not with a
//!   copy of itself
//!
//! Leaves and internal nodes share one hash function with no domain prefix,
//! so roots are only meaningful over leaf lists you already trust.
//!
//! ## Example
//!
//! ```
//! use merkle_root::{input, merkle_root};
//!
//! let text = "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb\n\
//!             3e23e8160039594a33894f6564e1b1348bbd7a0088d42c4acb73eeaed59c009d\n";
//! let leaves = input::parse_leaves(text)?;
//! let root = merkle_root(&leaves);
//! assert_eq!(
//!     root.to_hex(),
//!     "e5a01fee14e0ed5c48714f22180f25ad8365b53f9779f79dc4a3d7e93963f94a"
//! );
//! # Ok::<(), merkle_root::Error>(())
//! ```

pub mod input;
pub mod logging;
pub mod model;
pub mod tree;

mod error;

pub use error::{Error, Result};
pub use input::LeafSource;
pub use model::{Digest, DigestError, DIGEST_LEN};
pub use tree::{hash_pair, merkle_root, reduce, tree_height, Reduction};

/// Input file read when none is given on the command line
pub const DEFAULT_INPUT: &str = "transactions.txt";
