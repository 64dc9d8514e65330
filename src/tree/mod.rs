//! Binary Merkle tree reduction
//!
//! Leaves are paired left to right and each pair is hashed with SHA-256
//! into the next level:
//! - a full pair `(a, b)` becomes `SHA256(a || b)`
//! - an unpaired last node `a` becomes `SHA256(a || 0x00 * 32)`
//!
//! The tree is never stored. Only the current level is held in memory.

mod reducer;

#[cfg(feature = "parallel")]
pub use reducer::PARALLEL_THRESHOLD;
pub use reducer::{hash_pair, merkle_root, next_level, reduce, tree_height, Reduction};
