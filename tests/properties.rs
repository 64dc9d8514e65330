//! Property tests for the tree reducer

use merkle_root::tree::next_level;
use merkle_root::{hash_pair, input, merkle_root, reduce, tree_height, Digest, Error};
use proptest::prelude::*;

fn digest() -> impl Strategy<Value = Digest> {
    any::<[u8; 32]>().prop_map(Digest::from_bytes)
}

fn leaves(max: usize) -> impl Strategy<Value = Vec<Digest>> {
    prop::collection::vec(digest(), 0..max)
}

/// Straightforward restatement of the reduction rules
fn reference_root(leaves: &[Digest]) -> Digest {
    if leaves.is_empty() {
        return Digest::empty();
    }
    let mut level = leaves.to_vec();
    while level.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < level.len() {
            let right = if i + 1 < level.len() {
                level[i + 1]
            } else {
                Digest::ZERO
            };
            next.push(hash_pair(&level[i], &right));
            i += 2;
        }
        level = next;
    }
    level[0]
}

proptest! {
    #[test]
    fn root_matches_reference(l in leaves(70)) {
        prop_assert_eq!(merkle_root(&l), reference_root(&l));
    }

    #[test]
    fn reduction_is_deterministic(l in leaves(40)) {
        prop_assert_eq!(reduce(&l), reduce(&l));
    }

    #[test]
    fn passes_equal_height(l in leaves(130)) {
        let r = reduce(&l);
        prop_assert_eq!(r.passes, tree_height(l.len()));
        prop_assert_eq!(r.leaf_count, l.len());
    }

    #[test]
    fn level_halves_rounding_up(l in leaves(64)) {
        prop_assert_eq!(next_level(&l).len(), (l.len() + 1) / 2);
    }

    #[test]
    fn single_leaf_is_identity(d in digest()) {
        prop_assert_eq!(merkle_root(&[d]), d);
    }

    #[test]
    fn reversing_distinct_leaves_changes_root(l in prop::collection::hash_set(digest(), 2..20)) {
        let forward: Vec<Digest> = l.into_iter().collect();
        let mut backward = forward.clone();
        backward.reverse();
        prop_assert_ne!(merkle_root(&forward), merkle_root(&backward));
    }

    #[test]
    fn hex_lines_load_back(l in leaves(20)) {
        let text: String = l.iter().map(|d| format!("{}\n", d.to_hex().to_uppercase())).collect();
        prop_assert_eq!(input::parse_leaves(&text).unwrap(), l);
    }

    #[test]
    fn non_32_byte_lines_are_rejected(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        prop_assume!(bytes.len() != 32);
        let err = input::parse_leaves(&hex::encode(&bytes)).unwrap_err();
        let rejected_len = matches!(err, Error::WrongDigestLength { line: 1, len } if len == bytes.len());
        prop_assert!(rejected_len);
    }
}
