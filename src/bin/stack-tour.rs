// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A walk through everything `genstack` does, logged at `info` level.
//!
//! Set `RUST_LOG=trace` to also see the library's own trace output.

use std::collections::BTreeMap;

use env_logger::Env;
use log::info;

use genstack::{
    descriptions_match, find_all, find_all_in, is_equal, map_sequence, push_all, Stack,
};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut my_stack = Stack::new();
    my_stack.push(10);
    my_stack.push(20);
    my_stack.push(30);

    for value in my_stack.clone() {
        info!("got {}", value);
    }
    for value in my_stack.iter() {
        info!("for loop: got {}", value);
    }

    let mut int_stack = Stack::new();
    int_stack.push(1);
    int_stack.push(2);
    let mut double_stack = int_stack.map(|value| 2 * value);
    for _ in 0..3 {
        info!("int stack pop: {:?}", int_stack.pop());
    }
    for _ in 0..2 {
        info!("double stack pop: {:?}", double_stack.pop());
    }

    let mut string_stack = Stack::new();
    string_stack.push("this is a string".to_string());
    string_stack.push("another string".to_string());
    info!("string stack pop: {:?}", string_stack.pop());

    let strings = ["one", "two", "three"];
    let string_lengths = map_sequence(strings.iter(), |string| string.chars().count());
    info!("string lengths: {:?}", string_lengths);

    info!("1 == 1: {}", is_equal(&1, &1));
    info!(
        "\"a string\" == \"a string\": {}",
        is_equal("a string", "a string")
    );
    info!("\"bob\" == \"tom\": {}", is_equal("bob", "tom"));

    info!("descriptions of 1 and 1 match: {}", descriptions_match(&1, &1));
    info!(
        "descriptions of 1 and \"something\" match: {}",
        descriptions_match(&1, "something")
    );

    let mut my_other_stack = Stack::new();
    push_all(&mut my_other_stack, vec![1, 2, 3]);
    push_all(&mut my_stack, my_other_stack.iter());
    for value in my_stack.iter() {
        info!("after pushing: got {}", value);
    }

    let mut bronze_stack = Stack::new();
    push_all(&mut bronze_stack, vec![1, 2, 3, 4]);
    for value in bronze_stack.filter(|value| *value == 1 || *value == 4) {
        info!("after filtering: got {}", value);
    }

    info!(
        "find_all([5, 3, 7, 3, 9], 3) = {:?}",
        find_all(&[5, 3, 7, 3, 9], &3)
    );
    info!(
        "find_all_in([5, 3, 7, 3, 9, 5], 5) = {:?}",
        find_all_in(&vec![5, 3, 7, 3, 9, 5], &5)
    );

    let mut ages = BTreeMap::new();
    ages.insert("bob", 31);
    ages.insert("tom", 27);
    ages.insert("ann", 31);
    info!("everyone aged 31: {:?}", find_all_in(&ages, &31));
}
