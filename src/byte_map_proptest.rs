#![cfg(test)]

// Property tests for ByteMap kept inside the crate so they can check the
// structural invariants (chain reachability, bucket homing, acyclicity)
// after every operation, not just observable behavior.

use crate::ByteMap;
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(usize),
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<Vec<u8>>, Vec<OpI>)> {
    proptest::collection::vec(proptest::collection::vec(any::<u8>(), 1..6), 1..=8).prop_flat_map(
        |pool| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let op = prop_oneof![
                4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
                2 => idx.clone().prop_map(OpI::Remove),
                2 => idx.clone().prop_map(OpI::Get),
                1 => idx.clone().prop_map(OpI::Contains),
                1 => Just(OpI::Clear),
            ];
            proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
        },
    )
}

// Drives one scenario against a std::collections::HashMap model and
// checks behavioral parity plus structural invariants after every op.
fn run_scenario(capacity_hint: usize, pool: &[Vec<u8>], ops: &[OpI]) -> Result<(), TestCaseError> {
    let mut sut: ByteMap<i32> = ByteMap::with_capacity(capacity_hint);
    let mut model: HashMap<Vec<u8>, i32> = HashMap::new();

    for op in ops {
        match *op {
            OpI::Insert(i, v) => {
                let k = &pool[i];
                prop_assert!(sut.insert(k, v).is_ok());
                model.insert(k.clone(), v);
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                let removed = sut.remove(k);
                let model_removed = model.remove(k).is_some();
                prop_assert_eq!(removed, model_removed);
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            OpI::Contains(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.contains_key(k), model.contains_key(k));
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
            }
        }

        // Post-conditions after each op
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        sut.assert_invariants();
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap
// at the default capacity. Invariants exercised across random operation
// sequences:
// - insert is upsert; get/contains/remove parity with the model.
// - len/is_empty parity after every op.
// - every arena entry reachable from exactly one chain, homed by its
//   stored hash, chains acyclic.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(0, &pool, &ops)?;
    }
}

// Property: Same invariants starting from a single bucket, so every
// entry chains through one slot until repeated doubling spreads them.
// This stresses chain scanning, predecessor patching, and the relink
// pass of the resize path.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_from_one_bucket((pool, ops) in arb_scenario()) {
        run_scenario(1, &pool, &ops)?;
    }
}

// Property: With a disposer registered, each value is disposed exactly
// once — on overwrite, on remove, on clear, and on drop for whatever
// remains. The expected count is derived from the model.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_disposer_exactly_once((pool, ops) in arb_scenario()) {
        let disposed = Rc::new(Cell::new(0usize));
        let counter = disposed.clone();
        let mut sut: ByteMap<i32> = ByteMap::with_disposer(0, move |_| {
            counter.set(counter.get() + 1);
        });
        let mut model: HashMap<Vec<u8>, i32> = HashMap::new();
        let mut expected = 0usize;

        for op in &ops {
            match *op {
                OpI::Insert(i, v) => {
                    let k = &pool[i];
                    prop_assert!(sut.insert(k, v).is_ok());
                    if model.insert(k.clone(), v).is_some() {
                        expected += 1; // overwrite disposed the old value
                    }
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    sut.remove(k);
                    if model.remove(k).is_some() {
                        expected += 1;
                    }
                }
                OpI::Get(i) | OpI::Contains(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k), model.get(k));
                }
                OpI::Clear => {
                    sut.clear();
                    expected += model.len();
                    model.clear();
                }
            }
            prop_assert_eq!(disposed.get(), expected);
        }

        // Dropping the map disposes everything still stored.
        expected += model.len();
        drop(sut);
        prop_assert_eq!(disposed.get(), expected);
    }
}
