#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use genstack::{find_all, find_all_in, push_all, Stack};

#[derive(Arbitrary, Debug)]
enum Action {
    Push(u8),
    Pop,
    PushAll(Vec<u8>),
    Map(u8),
    Filter(u8),
    Iterate,
    FindAll(u8),
    Clear,
}

use self::Action::*;

fuzz_target!(|actions: Vec<Action>| {
    let mut stack = Stack::new();
    let mut model: Vec<u8> = Vec::new();
    for action in actions {
        match action {
            Push(value) => {
                stack.push(value);
                model.push(value);
            }
            Pop => {
                assert_eq!(model.pop(), stack.pop());
            }
            PushAll(values) => {
                model.extend(values.iter().copied());
                push_all(&mut stack, values);
            }
            Map(offset) => {
                stack = stack.map(|value| value.wrapping_add(offset));
                model = model.iter().map(|value| value.wrapping_add(offset)).collect();
            }
            Filter(limit) => {
                stack = stack.filter(|value| *value < limit);
                model.retain(|value| *value < limit);
            }
            Iterate => {
                let expected: Vec<u8> = model.iter().rev().copied().collect();
                assert_eq!(expected, stack.iter().collect::<Vec<_>>());
            }
            FindAll(target) => {
                let found = find_all(&model, &target);
                assert_eq!(found, find_all_in(&stack, &target));
            }
            Clear => {
                stack.clear();
                model.clear();
            }
        }
        assert_eq!(model.len(), stack.len());
        assert_eq!(model.as_slice(), stack.as_slice());
    }
});
