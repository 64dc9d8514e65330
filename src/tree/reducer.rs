//! Level-by-level reduction of a leaf sequence to its Merkle root

use crate::model::Digest;
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Minimum number of pairs in a level before hashing moves to the rayon pool
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 1024;

/// Outcome of reducing a leaf sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Reduction {
    /// The Merkle root
    pub root: Digest,
    /// Number of leaves the root was computed over
    pub leaf_count: usize,
    /// Number of levels derived above the leaves
    pub passes: u32,
}

/// Combine two children into their parent: `SHA256(left || right)`
///
/// Raw 64-byte concatenation. Leaves and internal nodes are hashed the same
/// way, with no domain tag, so a root computed here must not be trusted to
/// bind an attacker-supplied leaf list.
pub fn hash_pair(left: &Digest, right: &Digest) -> Digest {
    Digest::digest_many(&[left.as_bytes().as_slice(), right.as_bytes().as_slice()])
}

/// Parent of one chunk of a level. A chunk without a right child is paired
/// with [`Digest::ZERO`]; the left child is never duplicated.
fn parent(pair: &[Digest]) -> Digest {
    match pair {
        [left, right] => hash_pair(left, right),
        [left] => {
            trace!(left = %left.short(), "padding odd node with zero digest");
            hash_pair(left, &Digest::ZERO)
        }
        _ => unreachable!("chunks(2) yields one or two digests"),
    }
}

fn pair_up(level: &[Digest]) -> Vec<Digest> {
    level.chunks(2).map(parent).collect()
}

#[cfg(feature = "parallel")]
fn pair_up_parallel(level: &[Digest]) -> Vec<Digest> {
    use rayon::prelude::*;

    // par_chunks is indexed, so collect keeps the left-to-right order
    level.par_chunks(2).map(parent).collect()
}

/// Derive the next level up. Output length is `ceil(level.len() / 2)`.
pub fn next_level(level: &[Digest]) -> Vec<Digest> {
    #[cfg(feature = "parallel")]
    if level.len() / 2 >= PARALLEL_THRESHOLD {
        return pair_up_parallel(level);
    }

    pair_up(level)
}

/// Reduce `leaves` to a root, reporting how many passes it took
///
/// - no leaves: the root is SHA-256 of the empty string
/// - one leaf: the root is that leaf
/// - otherwise levels are paired until one digest remains
pub fn reduce(leaves: &[Digest]) -> Reduction {
    let mut level = Cow::Borrowed(leaves);
    let mut passes = 0;

    let root = loop {
        match level.len() {
            0 => {
                debug!("no leaves, root is the empty-input hash");
                break Digest::empty();
            }
            1 => break level[0],
            len => {
                level = Cow::Owned(next_level(&level));
                passes += 1;
                debug!(pass = passes, from = len, to = level.len(), "reduced level");
            }
        }
    };

    Reduction {
        root,
        leaf_count: leaves.len(),
        passes,
    }
}

/// Merkle root of an ordered leaf sequence
pub fn merkle_root(leaves: &[Digest]) -> Digest {
    reduce(leaves).root
}

/// Number of reduction passes for `leaf_count` leaves: `ceil(log2(n))`,
/// and zero for `n <= 1`
pub fn tree_height(leaf_count: usize) -> u32 {
    if leaf_count <= 1 {
        return 0;
    }
    usize::BITS - (leaf_count - 1).leading_zeros()
}
