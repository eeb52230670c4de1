// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Generic functions over sequences, collections and stacks.

use std::collections::{btree_map, vec_deque, BTreeMap, VecDeque};
use std::fmt::Display;
use std::iter::Enumerate;
use std::slice;

use log::trace;

use crate::Stack;

/// A collection whose values can be addressed through an index type of its
/// own.
///
/// This is what [`find_all_in()`][find_all_in] needs to report where it
/// found things: a slice reports `usize` positions, a `BTreeMap<K, V>`
/// reports keys.
///
/// [find_all_in]: fn.find_all_in.html
pub trait IndexedCollection {
    /// The type used to address a value in the collection.
    type Index;
    /// The type of value stored in the collection.
    type Item;
    /// An iterator over index and value pairs.
    type Indexed<'a>: Iterator<Item = (Self::Index, &'a Self::Item)>
    where
        Self: 'a;

    /// Iterate over every value in the collection along with its index, in
    /// the collection's natural order.
    fn indexed(&self) -> Self::Indexed<'_>;
}

impl<A> IndexedCollection for [A] {
    type Index = usize;
    type Item = A;
    type Indexed<'a> = Enumerate<slice::Iter<'a, A>> where Self: 'a;

    fn indexed(&self) -> Self::Indexed<'_> {
        self.iter().enumerate()
    }
}

impl<A> IndexedCollection for Vec<A> {
    type Index = usize;
    type Item = A;
    type Indexed<'a> = Enumerate<slice::Iter<'a, A>> where Self: 'a;

    fn indexed(&self) -> Self::Indexed<'_> {
        self.iter().enumerate()
    }
}

impl<A> IndexedCollection for VecDeque<A> {
    type Index = usize;
    type Item = A;
    type Indexed<'a> = Enumerate<vec_deque::Iter<'a, A>> where Self: 'a;

    fn indexed(&self) -> Self::Indexed<'_> {
        self.iter().enumerate()
    }
}

/// Positions count from the bottom of the stack.
impl<A> IndexedCollection for Stack<A> {
    type Index = usize;
    type Item = A;
    type Indexed<'a> = Enumerate<slice::Iter<'a, A>> where Self: 'a;

    fn indexed(&self) -> Self::Indexed<'_> {
        self.as_slice().iter().enumerate()
    }
}

impl<K, V> IndexedCollection for BTreeMap<K, V>
where
    K: Clone,
{
    type Index = K;
    type Item = V;
    type Indexed<'a> = KeyedIter<'a, K, V> where Self: 'a;

    fn indexed(&self) -> Self::Indexed<'_> {
        KeyedIter { inner: self.iter() }
    }
}

/// Index and value pairs from a [`BTreeMap`][BTreeMap], in ascending key
/// order.
///
/// [BTreeMap]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
#[derive(Debug)]
pub struct KeyedIter<'a, K, V> {
    inner: btree_map::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for KeyedIter<'a, K, V>
where
    K: Clone,
{
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.clone(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Apply `f` to each value in `items`, collecting the results in the same
/// order.
///
/// # Examples
///
/// ```rust
/// # use genstack::map_sequence;
/// let strings = ["one", "two", "three"];
/// let lengths = map_sequence(strings.iter(), |string| string.chars().count());
/// assert_eq!(vec![3, 3, 5], lengths);
/// ```
pub fn map_sequence<A, B, I, F>(items: I, f: F) -> Vec<B>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> B,
{
    items.into_iter().map(f).collect()
}

/// Test whether two values of the same type are equal.
///
/// ```rust
/// # use genstack::is_equal;
/// assert!(is_equal(&1, &1));
/// assert!(is_equal("a string", "a string"));
/// assert!(!is_equal("bob", "tom"));
/// ```
pub fn is_equal<A>(first: &A, second: &A) -> bool
where
    A: PartialEq + ?Sized,
{
    first == second
}

/// Test whether two values, possibly of different types, render to the
/// same text through [`Display`][Display].
///
/// ```rust
/// # use genstack::descriptions_match;
/// assert!(descriptions_match(&1, &1));
/// assert!(descriptions_match(&1, "1"));
/// assert!(!descriptions_match(&1, "something"));
/// ```
///
/// [Display]: https://doc.rust-lang.org/std/fmt/trait.Display.html
pub fn descriptions_match<A, B>(first: &A, second: &B) -> bool
where
    A: Display + ?Sized,
    B: Display + ?Sized,
{
    first.to_string() == second.to_string()
}

/// Push every value from `source` onto `stack`, in the order `source`
/// yields them.
///
/// ```rust
/// # use genstack::{push_all, Stack};
/// let mut stack = Stack::new();
/// push_all(&mut stack, vec![1, 2, 3]);
/// assert_eq!(vec![3, 2, 1], stack.into_iter().collect::<Vec<_>>());
/// ```
pub fn push_all<A, I>(stack: &mut Stack<A>, source: I)
where
    I: IntoIterator<Item = A>,
{
    let before = stack.len();
    stack.extend(source);
    trace!(
        "push_all: pushed {} values, stack size now {}",
        stack.len() - before,
        stack.len()
    );
}

/// Find the position of every value in `values` equal to `target`, in
/// ascending order.
///
/// You get an empty vector back if nothing matches.
///
/// ```rust
/// # use genstack::find_all;
/// assert_eq!(vec![1, 3], find_all(&[5, 3, 7, 3, 9], &3));
/// assert!(find_all(&[1, 2, 3], &9).is_empty());
/// ```
pub fn find_all<A>(values: &[A], target: &A) -> Vec<usize>
where
    A: PartialEq,
{
    values
        .iter()
        .enumerate()
        .filter(|(_, value)| *value == target)
        .map(|(index, _)| index)
        .collect()
}

/// Find the index of every value in `values` equal to `target`, using the
/// collection's own index type.
///
/// Indices come back in the order [`IndexedCollection::indexed()`][indexed]
/// visits them, and every match is reported at its own index, including
/// repeats of the same value.
///
/// # Examples
///
/// ```rust
/// # use genstack::find_all_in;
/// # use std::collections::BTreeMap;
/// assert_eq!(vec![0, 5], find_all_in(&vec![5, 3, 7, 3, 9, 5], &5));
///
/// let mut ages = BTreeMap::new();
/// ages.insert("bob", 31);
/// ages.insert("tom", 27);
/// ages.insert("ann", 31);
/// assert_eq!(vec!["ann", "bob"], find_all_in(&ages, &31));
/// ```
///
/// [indexed]: trait.IndexedCollection.html#tymethod.indexed
pub fn find_all_in<C>(values: &C, target: &C::Item) -> Vec<C::Index>
where
    C: IndexedCollection + ?Sized,
    C::Item: PartialEq,
{
    values
        .indexed()
        .filter(|(_, value)| *value == target)
        .map(|(index, _)| index)
        .collect()
}
