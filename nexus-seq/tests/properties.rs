//! Property tests shared by every strategy.
//!
//! - Order: a store matches a `Vec` driven by the same operations
//! - Length: `len == inserts - deletes`
//! - Round trip: `insert(i, v)` then `get(i) == v`
//! - Swap: `get_and_set` returns the old value and stores the new one
//! - Bounds: `len` and `len + 1` are rejected where they should be

use nexus_seq::{SeqError, SeqStore, Sequence, Strategy as Kind};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    /// Position is taken modulo `len + 1`.
    Insert(usize, u32),
    /// Position is taken modulo `len`.
    Remove(usize),
    /// Position is taken modulo `len`.
    Swap(usize, u32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<usize>(), any::<u32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => any::<usize>().prop_map(Op::Remove),
        1 => (any::<usize>(), any::<u32>()).prop_map(|(i, v)| Op::Swap(i, v)),
    ]
}

fn kind() -> impl Strategy<Value = Kind> {
    prop::sample::select(Kind::ALL.to_vec())
}

fn out_of_range<T>(index: usize, len: usize) -> Result<T, SeqError> {
    Err(SeqError::OutOfRange { index, len })
}

proptest! {
    #[test]
    fn matches_vec_model(kind in kind(), ops in prop::collection::vec(op(), 0..200)) {
        let mut seq: Sequence<u32> = Sequence::new(kind);
        let mut model: Vec<u32> = Vec::new();
        let (mut inserts, mut deletes) = (0usize, 0usize);

        for op in ops {
            match op {
                Op::Insert(i, v) => {
                    let i = i % (model.len() + 1);
                    seq.insert(i, v).unwrap();
                    model.insert(i, v);
                    inserts += 1;
                    prop_assert_eq!(seq.get(i), Ok(v));
                }
                Op::Remove(i) if !model.is_empty() => {
                    let i = i % model.len();
                    prop_assert_eq!(seq.remove(i), Ok(model.remove(i)));
                    deletes += 1;
                }
                Op::Swap(i, v) if !model.is_empty() => {
                    let i = i % model.len();
                    let old = std::mem::replace(&mut model[i], v);
                    prop_assert_eq!(seq.get_and_set(i, v), Ok(old));
                    prop_assert_eq!(seq.get(i), Ok(v));
                }
                _ => {}
            }
            prop_assert_eq!(seq.len(), inserts - deletes);
        }

        prop_assert_eq!(seq.to_vec(), model);
    }

    #[test]
    fn bounds_are_exact(kind in kind(), values in prop::collection::vec(any::<u8>(), 0..50)) {
        let mut seq: Sequence<u8> = Sequence::new(kind);
        seq.extend(values.iter().copied());
        let len = values.len();

        prop_assert_eq!(seq.get(len), out_of_range(len, len));
        prop_assert_eq!(seq.set(len, 0), out_of_range(len, len));
        prop_assert_eq!(seq.delete(len), out_of_range(len, len));
        prop_assert_eq!(seq.get_and_set(len + 1, 0), out_of_range(len + 1, len));
        prop_assert_eq!(seq.insert(len + 1, 0), out_of_range(len + 1, len));
        prop_assert_eq!(seq.get(usize::MAX), out_of_range(usize::MAX, len));

        // Failed calls change nothing.
        prop_assert_eq!(seq.to_vec(), values.clone());
        prop_assert_eq!(seq.insert(len, 7), Ok(()));
        prop_assert_eq!(seq.get(len), Ok(7));
    }

    #[test]
    fn unordered_take_moves_last_into_place(
        values in prop::collection::vec(any::<u16>(), 1..100),
        pick in any::<usize>(),
    ) {
        for kind in [Kind::Array, Kind::Indexed] {
            let mut seq: Sequence<u16> = Sequence::new(kind);
            seq.extend(values.iter().copied());
            let i = pick % values.len();

            let mut model = values.clone();
            let expected = model.swap_remove(i);
            prop_assert_eq!(seq.get_and_delete(i), Ok(expected));
            prop_assert_eq!(seq.to_vec(), model);
        }
    }

    #[test]
    fn linked_take_preserves_order(
        values in prop::collection::vec(any::<u16>(), 1..100),
        pick in any::<usize>(),
    ) {
        for kind in [Kind::Singly, Kind::Doubly, Kind::Ring] {
            let mut seq: Sequence<u16> = Sequence::new(kind);
            seq.extend(values.iter().copied());
            let i = pick % values.len();

            let mut model = values.clone();
            let expected = model.remove(i);
            prop_assert_eq!(seq.get_and_delete(i), Ok(expected));
            prop_assert_eq!(seq.to_vec(), model);
        }
    }
}
