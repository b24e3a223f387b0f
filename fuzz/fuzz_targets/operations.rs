#![no_main]

use libfuzzer_sys::fuzz_target;
use slink::{List, Operation};

// Replays the operations against a Vec model; index 0 of the model is the
// head of the list.
fuzz_target!(|ops: Vec<Operation<i32>>| {
    let mut list = List::new();
    let mut model: Vec<i32> = Vec::new();

    for op in ops {
        match op {
            Operation::Push { item } => {
                list.push(item);
                model.insert(0, item);
            }
            Operation::Pop => {
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(list.pop(), expected);
            }
            Operation::Peek => {
                assert_eq!(list.peek().map(|node| node.val), model.first().copied());
            }
            Operation::Ext { items } => {
                model.extend(items.iter().copied());
                list.extend(items);
            }
            Operation::Find { key } => {
                assert_eq!(list.find(&key).is_some(), model.contains(&key));
            }
            Operation::Clear => {
                list.clear();
                model.clear();
            }
            Operation::Iter => {
                assert!(list.iter().map(|node| node.val).eq(model.iter().copied()));
            }
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.is_empty(), model.is_empty());
    }

    assert!(list
        .iter_rev()
        .map(|node| node.val)
        .eq(model.iter().rev().copied()));
});
