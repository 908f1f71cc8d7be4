use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::rbtree::RbTree;

#[derive(Clone, Debug)]
enum Op {
    Insert(i16),
    Remove(i16),
    EraseMin,
    EraseMax,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0_i16..64).prop_map(Op::Insert),
        2 => (0_i16..64).prop_map(Op::Remove),
        1 => Just(Op::EraseMin),
        1 => Just(Op::EraseMax),
    ]
}

// drop one occurrence of key from the multiset model.
fn take_one(model: &mut BTreeMap<i16, usize>, key: i16) -> Option<i16> {
    let count = model.get_mut(&key)?;
    *count -= 1;
    if *count == 0 {
        model.remove(&key);
    }
    Some(key)
}

fn flatten(model: &BTreeMap<i16, usize>) -> Vec<i16> {
    model
        .iter()
        .flat_map(|(key, count)| std::iter::repeat(*key).take(*count))
        .collect()
}

proptest! {
    #[test]
    fn ops_keep_invariants(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut tree: RbTree<i16> = RbTree::new("prop-rbtree").unwrap();
        let mut model: BTreeMap<i16, usize> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    let node = tree.insert(key).unwrap();
                    prop_assert_eq!(tree.key(node), Some(&key));
                    *model.entry(key).or_insert(0) += 1;
                }
                Op::Remove(key) => {
                    let expected = take_one(&mut model, key);
                    prop_assert_eq!(tree.remove(&key), expected);
                }
                Op::EraseMin => {
                    let expected = model.keys().next().cloned();
                    let got = tree.min().map(|node| tree.erase(node).unwrap());
                    prop_assert_eq!(got, expected);
                    if let Some(key) = expected {
                        take_one(&mut model, key);
                    }
                }
                Op::EraseMax => {
                    let expected = model.keys().next_back().cloned();
                    let got = tree.max().map(|node| tree.erase(node).unwrap());
                    prop_assert_eq!(got, expected);
                    if let Some(key) = expected {
                        take_one(&mut model, key);
                    }
                }
            }
            prop_assert!(tree.validate().is_ok());
        }

        let expected = flatten(&model);
        prop_assert_eq!(tree.len(), expected.len());
        prop_assert_eq!(tree.to_vec(expected.len()), expected.clone());

        let stats = tree.stats();
        prop_assert_eq!(stats.allocs() - stats.frees(), expected.len());
        prop_assert_eq!(tree.destroy(), expected.len());
    }

    #[test]
    fn export_truncates_at_capacity(
        keys in prop::collection::vec(any::<i32>(), 0..100),
        capacity in 0_usize..120,
    ) {
        let tree = RbTree::load_from("prop-rbtree", keys.iter().cloned()).unwrap();
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.truncate(capacity);

        prop_assert_eq!(tree.to_vec(capacity), sorted.clone());

        let mut dst = vec![0_i32; capacity];
        let n = tree.to_array(&mut dst);
        prop_assert_eq!(n, sorted.len());
        prop_assert_eq!(&dst[..n], &sorted[..]);
    }
}
