// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A generic last-in-first-out [`Stack`][Stack], and a handful of generic
//! functions for mapping, comparing and searching values.
//!
//! # The Stack
//!
//! [`Stack<A>`][Stack] holds values of any type `A`. You
//! [`push()`][Stack::push] values onto it and [`pop()`][Stack::pop] them off
//! again, most recent first. Popping an empty stack gives you `None`.
//!
//! [`map()`][Stack::map] and [`filter()`][Stack::filter] build new stacks
//! from an existing one without touching it, and
//! [`iter()`][Stack::iter] gives you an [`Iter`][Iter] over a snapshot of
//! the stack, top first. The snapshot is a copy, so you can keep pushing
//! and popping the original while you iterate.
//!
//! # Generic Functions
//!
//!   * [`map_sequence()`][map_sequence] maps any iterable into a `Vec`.
//!   * [`is_equal()`][is_equal] compares two values of one type.
//!   * [`descriptions_match()`][descriptions_match] compares the
//!     [`Display`][Display] output of two values of any two types.
//!   * [`push_all()`][push_all] pushes everything from an iterable onto a
//!     stack.
//!   * [`find_all()`][find_all] finds every position of a value in a slice,
//!     and [`find_all_in()`][find_all_in] does the same for any
//!     [`IndexedCollection`][IndexedCollection], reporting the collection's
//!     own index type.
//!
//! # Example
//!
//! ```rust
//! # use genstack::{find_all, push_all, Stack};
//! let mut stack = Stack::new();
//! push_all(&mut stack, vec![1, 2, 3, 4]);
//!
//! // Iteration goes top first.
//! let ends: Vec<_> = stack.filter(|value| *value == 1 || *value == 4).iter().collect();
//! assert_eq!(vec![4, 1], ends);
//!
//! // The stack is unaffected by filtering and iterating.
//! assert_eq!(Some(4), stack.pop());
//!
//! assert_eq!(vec![1, 3], find_all(&[5, 3, 7, 3, 9], &3));
//! ```
//!
//! # Feature Flags
//!
//! The `serde` feature provides `Serialize` and `Deserialize`
//! implementations for [`Stack`][Stack], which is represented as a plain
//! sequence, bottom first.
//!
//! [Stack]: struct.Stack.html
//! [Stack::push]: struct.Stack.html#method.push
//! [Stack::pop]: struct.Stack.html#method.pop
//! [Stack::map]: struct.Stack.html#method.map
//! [Stack::filter]: struct.Stack.html#method.filter
//! [Stack::iter]: struct.Stack.html#method.iter
//! [Iter]: struct.Iter.html
//! [map_sequence]: fn.map_sequence.html
//! [is_equal]: fn.is_equal.html
//! [descriptions_match]: fn.descriptions_match.html
//! [push_all]: fn.push_all.html
//! [find_all]: fn.find_all.html
//! [find_all_in]: fn.find_all_in.html
//! [IndexedCollection]: trait.IndexedCollection.html
//! [Display]: https://doc.rust-lang.org/std/fmt/trait.Display.html

#![forbid(rust_2018_idioms, unsafe_code)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

mod generic;
mod stack;

pub use self::generic::{
    descriptions_match, find_all, find_all_in, is_equal, map_sequence, push_all,
    IndexedCollection, KeyedIter,
};
pub use self::stack::{Iter, Stack};

#[cfg(test)]
mod test {
    use super::*;
    use proptest::{collection::vec, prelude::*};

    proptest! {
        #[test]
        fn pops_come_back_in_reverse(pushes in vec(any::<i32>(), 0..256)) {
            let mut stack = Stack::new();
            for value in &pushes {
                stack.push(*value);
            }
            for value in pushes.iter().rev() {
                prop_assert_eq!(Some(*value), stack.pop());
            }
            prop_assert_eq!(None, stack.pop());
        }

        #[test]
        fn map_commutes_with_popping(pushes in vec(any::<i16>(), 0..256)) {
            let stack: Stack<i16> = pushes.into();
            let f = |value: &i16| i32::from(*value) * 3 - 1;
            let mapped_then_popped: Vec<i32> = stack.map(f).into_iter().collect();
            let popped_then_mapped: Vec<i32> = stack.into_iter().map(|value| f(&value)).collect();
            prop_assert_eq!(mapped_then_popped, popped_then_mapped);
        }

        #[test]
        fn filter_only_shrinks(pushes in vec(0u8..16, 0..256), keep in 0u8..16) {
            let stack: Stack<u8> = pushes.into();
            let filtered = stack.filter(|value| *value < keep);
            prop_assert!(filtered.len() <= stack.len());
            prop_assert!(filtered.as_slice().iter().all(|value| *value < keep));
            prop_assert_eq!(&stack, &stack.filter(|_| true));
        }

        #[test]
        fn iter_matches_popping(pushes in vec(any::<u64>(), 0..256)) {
            let mut stack: Stack<u64> = pushes.into();
            let mut iter = stack.iter();
            let size = stack.len();
            for _ in 0..size {
                prop_assert_eq!(stack.pop(), iter.next());
            }
            prop_assert_eq!(None, iter.next());
            prop_assert_eq!(0, iter.len());
        }

        #[test]
        fn find_all_variants_agree(values in vec(0u8..8, 0..128), target in 0u8..8) {
            let found = find_all(&values, &target);
            prop_assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(found.iter().all(|index| values[*index] == target));
            prop_assert_eq!(values.iter().filter(|value| **value == target).count(), found.len());
            prop_assert_eq!(&found, &find_all_in(&values, &target));
            let stack: Stack<u8> = values.into();
            prop_assert_eq!(&found, &find_all_in(&stack, &target));
        }
    }

    #[test]
    fn push_all_then_iterate() {
        let mut stack = Stack::new();
        push_all(&mut stack, [1, 2, 3]);
        assert_eq!(vec![3, 2, 1], stack.iter().collect::<Vec<_>>());
    }

    #[test]
    fn stack_is_send_and_sync_when_its_values_are() {
        fn assert_send_sync<A: Send + Sync>() {}
        assert_send_sync::<Stack<String>>();
        assert_send_sync::<Iter<String>>();
    }
}
