// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Error, Formatter};
use std::iter::FusedIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A last-in-first-out stack of `A`.
///
/// The top of the stack is the most recently pushed value. Values are
/// stored bottom first, which is the order [`map()`][map] and
/// [`filter()`][filter] walk them in, and the order the stack converts
/// to and from a [`Vec`][Vec].
///
/// # Examples
///
/// ```rust
/// # use genstack::Stack;
/// let mut stack = Stack::new();
/// stack.push(10);
/// stack.push(20);
/// stack.push(30);
/// assert_eq!(Some(30), stack.pop());
/// assert_eq!(Some(20), stack.pop());
/// assert_eq!(Some(10), stack.pop());
/// assert_eq!(None, stack.pop());
/// ```
///
/// [map]: #method.map
/// [filter]: #method.filter
/// [Vec]: https://doc.rust-lang.org/std/vec/struct.Vec.html
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Stack<A> {
    items: Vec<A>,
}

impl<A> Stack<A> {
    /// Construct an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Construct an empty stack with room for `capacity` values before it
    /// has to reallocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of values on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Test whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Push a value onto the top of the stack.
    #[inline(always)]
    pub fn push(&mut self, value: A) {
        self.items.push(value);
    }

    /// Remove the value on top of the stack and return it.
    ///
    /// Popping an empty stack gives you `None`. This isn't an error, it's
    /// just what an empty stack looks like.
    #[inline(always)]
    pub fn pop(&mut self) -> Option<A> {
        self.items.pop()
    }

    /// Get a reference to the value on top of the stack without removing it.
    ///
    /// ```rust
    /// # use genstack::Stack;
    /// let mut stack: Stack<&str> = Stack::new();
    /// assert_eq!(None, stack.peek());
    /// stack.push("this is a string");
    /// stack.push("another string");
    /// assert_eq!(Some(&"another string"), stack.peek());
    /// assert_eq!(2, stack.len());
    /// ```
    pub fn peek(&self) -> Option<&A> {
        self.items.last()
    }

    /// Remove every value from the stack.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Construct a new stack by applying `f` to each value, leaving this
    /// stack as it is.
    ///
    /// The new stack has the same shape as this one: the value at each
    /// position is `f` applied to the value at the same position here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use genstack::Stack;
    /// let int_stack: Stack<i32> = vec![1, 2].into();
    /// let mut double_stack = int_stack.map(|value| 2 * value);
    /// assert_eq!(Some(4), double_stack.pop());
    /// assert_eq!(Some(2), double_stack.pop());
    /// assert_eq!(2, int_stack.len());
    /// ```
    pub fn map<B, F>(&self, f: F) -> Stack<B>
    where
        F: FnMut(&A) -> B,
    {
        Stack {
            items: self.items.iter().map(f).collect(),
        }
    }

    /// Construct a new stack holding only the values for which `f` returns
    /// `true`, in their original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use genstack::Stack;
    /// let stack: Stack<i32> = vec![1, 2, 3, 4].into();
    /// let ends = stack.filter(|value| *value == 1 || *value == 4);
    /// assert_eq!(vec![4, 1], ends.into_iter().collect::<Vec<_>>());
    /// ```
    pub fn filter<F>(&self, mut f: F) -> Stack<A>
    where
        A: Clone,
        F: FnMut(&A) -> bool,
    {
        Stack {
            items: self.items.iter().filter(|item| f(*item)).cloned().collect(),
        }
    }

    /// Iterate over a snapshot of the stack, top first.
    ///
    /// The iterator works on its own copy of the stack, so changes made to
    /// the stack after calling this won't show up in the iteration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use genstack::Stack;
    /// let mut stack: Stack<i32> = vec![10, 20, 30].into();
    /// let iter = stack.iter();
    /// stack.push(40);
    /// assert_eq!(vec![30, 20, 10], iter.collect::<Vec<_>>());
    /// ```
    pub fn iter(&self) -> Iter<A>
    where
        A: Clone,
    {
        Iter {
            stack: self.clone(),
        }
    }

    /// View the stack's values as a slice, bottom first.
    pub fn as_slice(&self) -> &[A] {
        &self.items
    }
}

impl<A> Default for Stack<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Debug for Stack<A>
where
    A: Debug,
{
    /// Debug implementation for `Stack`.
    ///
    /// Values are listed bottom first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use genstack::Stack;
    /// let stack: Stack<usize> = vec![1, 2, 3].into();
    /// assert_eq!("Stack[1, 2, 3]", format!("{:?}", stack));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "Stack")?;
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<A> From<Vec<A>> for Stack<A> {
    /// The last value in the vector ends up on top of the stack.
    fn from(items: Vec<A>) -> Self {
        Self { items }
    }
}

impl<A> From<Stack<A>> for Vec<A> {
    fn from(stack: Stack<A>) -> Self {
        stack.items
    }
}

impl<A> FromIterator<A> for Stack<A> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<A> Extend<A> for Stack<A> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = A>,
    {
        for value in iter {
            self.push(value);
        }
    }
}

impl<A> IntoIterator for Stack<A> {
    type Item = A;
    type IntoIter = Iter<A>;

    /// Consume the stack, iterating top first.
    fn into_iter(self) -> Self::IntoIter {
        Iter { stack: self }
    }
}

/// An iterator over a stack, top first.
///
/// It owns the stack it walks, and each step pops a value off it. Get one
/// with [`Stack::iter()`][iter], which hands it a copy, or by consuming a
/// stack with `into_iter()`.
///
/// [iter]: struct.Stack.html#method.iter
#[derive(Clone)]
pub struct Iter<A> {
    stack: Stack<A>,
}

impl<A> Iterator for Iter<A> {
    type Item = A;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.stack.len();
        (len, Some(len))
    }
}

impl<A> ExactSizeIterator for Iter<A> {}

impl<A> FusedIterator for Iter<A> {}

impl<A> Debug for Iter<A>
where
    A: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "Iter(")?;
        self.stack.fmt(f)?;
        write!(f, ")")
    }
}
