// Public-surface property tests: randomized operation sequences checked
// against std::collections::HashMap as the model.

use bytemap::ByteMap;
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(Vec<u8>, i64),
    Remove(Vec<u8>),
    Get(Vec<u8>),
    Contains(Vec<u8>),
    Clear,
}

fn arb_key() -> impl Strategy<Value = Vec<u8>> {
    // Narrow alphabet and short lengths so keys repeat across ops.
    proptest::collection::vec(0u8..4, 1..4)
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        4 => (arb_key(), any::<i64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        2 => arb_key().prop_map(Op::Remove),
        2 => arb_key().prop_map(Op::Get),
        1 => arb_key().prop_map(Op::Contains),
        1 => Just(Op::Clear),
    ];
    proptest::collection::vec(op, 1..100)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn behaves_like_std_hashmap(ops in arb_ops()) {
        let mut sut: ByteMap<i64> = ByteMap::new();
        let mut model: HashMap<Vec<u8>, i64> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    prop_assert!(sut.insert(&k, v).is_ok());
                    model.insert(k, v);
                }
                Op::Remove(k) => {
                    prop_assert_eq!(sut.remove(&k), model.remove(&k).is_some());
                }
                Op::Get(k) => {
                    prop_assert_eq!(sut.get(&k), model.get(&k));
                }
                Op::Contains(k) => {
                    prop_assert_eq!(sut.contains_key(&k), model.contains_key(&k));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }

        // Final sweep: every model entry retrievable with its value.
        for (k, v) in &model {
            prop_assert_eq!(sut.get(k), Some(v));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn growth_never_loses_entries(count in 1usize..400, hint in 0usize..8) {
        // Distinct fixed-width keys; enough of them to cross the load
        // factor threshold several times from any small starting size.
        let mut sut: ByteMap<usize> = ByteMap::with_capacity(hint);
        for i in 0..count {
            sut.insert(&(i as u64).to_le_bytes(), i).unwrap();
        }
        prop_assert_eq!(sut.len(), count);
        for i in 0..count {
            prop_assert_eq!(sut.get(&(i as u64).to_le_bytes()), Some(&i));
        }
    }
}
