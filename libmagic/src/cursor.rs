// Copyright 2018-2019 Joe Neeman.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// See the LICENSE-APACHE or LICENSE-MIT files at the top-level directory
// of this distribution.

use std::{cmp::Ordering, fmt, iter::FusedIterator, marker::PhantomData, ptr, rc::Rc};

use crate::{
    container::MagicalContainer,
    error::Error,
    order::{Ascending, Order, Prime, SideCross},
};

/// Visits the elements of a container from smallest to largest.
pub type AscendingIterator<'a> = Cursor<'a, Ascending>;

/// Visits the elements of a container alternately from the small end and the large end.
pub type SideCrossIterator<'a> = Cursor<'a, SideCross>;

/// Visits the prime elements of a container from smallest to largest.
pub type PrimeIterator<'a> = Cursor<'a, Prime>;

/// A position in one of the traversals of a [`MagicalContainer`].
///
/// A cursor is created at the start of its traversal, and it moves with [`Cursor::advance`] until
/// it reaches the end. The end position is one past the last element, like `it == it.end()` in
/// other languages: there is nothing to read there, and trying to read or advance fails with
/// [`Error::OutOfRange`].
///
/// Cursors also implement [`Iterator`], which reads the current element and then advances. Each
/// cursor has its own position, so moving one never affects another.
///
/// Two cursors are only related if they were created from the same container. Between cursors
/// from different containers, `==` is always `false` and neither `<` nor `>` holds.
///
/// Because a cursor is also an [`Iterator`], `a.partial_cmp(&b)` resolves to
/// [`Iterator::partial_cmp`] and won't compile; write `PartialOrd::partial_cmp(&a, &b)` or use the
/// comparison operators.
pub struct Cursor<'a, O: Order> {
    container: &'a MagicalContainer,
    // Built by `new` and shared with this cursor's clones and its `end()`. It's never modified,
    // so sharing is unobservable.
    view: Rc<[i64]>,
    pos: usize,
    order: PhantomData<O>,
}

impl<'a, O: Order> Cursor<'a, O> {
    /// Creates a cursor at the start of the traversal of `container`.
    pub fn new(container: &'a MagicalContainer) -> Cursor<'a, O> {
        let view: Rc<[i64]> = O::view(container.elements()).into();
        trace!(
            "created {} cursor visiting {} of {} elements",
            O::NAME,
            view.len(),
            container.size()
        );
        Cursor {
            container,
            view,
            pos: 0,
            order: PhantomData,
        }
    }

    /// Returns a cursor at the end of this cursor's traversal.
    ///
    /// This doesn't move `self`.
    pub fn end(&self) -> Cursor<'a, O> {
        Cursor {
            container: self.container,
            view: Rc::clone(&self.view),
            pos: self.view.len(),
            order: PhantomData,
        }
    }

    /// Returns `true` if there are no more elements to visit.
    pub fn is_end(&self) -> bool {
        self.pos == self.view.len()
    }

    /// The number of elements that have been stepped over so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The element at the current position.
    pub fn value(&self) -> Result<i64, Error> {
        if self.is_end() {
            Err(self.out_of_range())
        } else {
            Ok(O::at(&self.view, self.pos))
        }
    }

    /// Moves to the next position, returning `self` so that calls can be chained.
    ///
    /// If the cursor is already at the end, it stays there and [`Error::OutOfRange`] is returned.
    pub fn advance(&mut self) -> Result<&mut Self, Error> {
        if self.is_end() {
            return Err(self.out_of_range());
        }
        self.pos += 1;
        Ok(self)
    }

    /// Moves this cursor to the position of `other`.
    ///
    /// Both cursors must belong to the same container; if they don't, nothing changes and
    /// [`Error::InvalidOperation`] is returned.
    pub fn assign_from(&mut self, other: &Cursor<'a, O>) -> Result<(), Error> {
        if !self.same_container(other) {
            debug!("refusing to assign a {} cursor across containers", O::NAME);
            return Err(Error::InvalidOperation);
        }
        self.pos = other.pos;
        Ok(())
    }

    /// Returns `true` if both cursors were created from the same container.
    ///
    /// This is about identity, not contents: two containers with equal elements are still
    /// different containers.
    pub fn same_container(&self, other: &Cursor<'_, O>) -> bool {
        ptr::eq(self.container, other.container)
    }

    fn out_of_range(&self) -> Error {
        Error::OutOfRange {
            len: self.view.len(),
        }
    }
}

impl<O: Order> Clone for Cursor<'_, O> {
    fn clone(&self) -> Self {
        Cursor {
            container: self.container,
            view: Rc::clone(&self.view),
            pos: self.pos,
            order: PhantomData,
        }
    }
}

impl<O: Order> fmt::Debug for Cursor<'_, O> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Cursor")
            .field("order", &O::NAME)
            .field("pos", &self.pos)
            .field("len", &self.view.len())
            .finish()
    }
}

impl<O: Order> PartialEq for Cursor<'_, O> {
    fn eq(&self, other: &Self) -> bool {
        self.same_container(other) && self.pos == other.pos
    }
}

impl<O: Order> PartialOrd for Cursor<'_, O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_container(other) {
            Some(self.pos.cmp(&other.pos))
        } else {
            None
        }
    }
}

impl<O: Order> Iterator for Cursor<'_, O> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let ret = self.value().ok()?;
        self.pos += 1;
        Some(ret)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<O: Order> ExactSizeIterator for Cursor<'_, O> {}

impl<O: Order> FusedIterator for Cursor<'_, O> {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn container(elts: &[i64]) -> MagicalContainer {
        elts.iter().copied().collect()
    }

    // Walks a cursor to its end with `value` and `advance`, the long way around.
    fn drain<O: Order>(mut it: Cursor<'_, O>) -> Vec<i64> {
        let end = it.end();
        let mut ret = Vec::new();
        while it != end {
            ret.push(it.value().unwrap());
            it.advance().unwrap();
        }
        ret
    }

    #[test]
    fn ascending_walk() {
        let c = container(&[10, 20, 30, 15, 25]);
        assert_eq!(drain(c.ascending()), vec![10, 15, 20, 25, 30]);
    }

    #[test]
    fn side_cross_walk() {
        let c = container(&[10, 20, 30, 40]);
        assert_eq!(drain(c.side_cross()), vec![10, 40, 20, 30]);
    }

    #[test]
    fn prime_walk() {
        let c = container(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(drain(c.primes()), vec![2, 3, 5]);
    }

    #[test]
    fn empty_starts_at_end() {
        let c = MagicalContainer::new();
        assert!(c.ascending().is_end());
        assert!(c.side_cross().is_end());
        assert!(c.primes().is_end());
        assert_eq!(c.side_cross(), c.side_cross().end());
    }

    #[test]
    fn end_is_idempotent() {
        let c = container(&[3, 1, 2]);
        let it = c.ascending();
        assert_eq!(it.end(), it.end());
        assert_eq!(it.end(), it.end().end());
        assert_eq!(it.position(), 0);
    }

    #[test]
    fn value_at_end() {
        let c = container(&[4, 6, 8]);
        let it = c.primes();
        assert_eq!(it.value(), Err(Error::OutOfRange { len: 0 }));
    }

    #[test]
    fn advance_at_end() {
        let c = container(&[1, 2]);
        let mut it = c.ascending();
        it.advance().unwrap().advance().unwrap();
        assert!(it.is_end());
        assert_eq!(it.advance().unwrap_err(), Error::OutOfRange { len: 2 });
        assert_eq!(it.position(), 2);
        assert_eq!(it, it.end());
    }

    #[test]
    fn ordering() {
        let c = container(&[1, 2, 4, 5, 14]);
        let mut it1 = c.side_cross();
        let it2 = c.side_cross();
        assert!(it1 == it2);
        assert!(!(it1 < it2) && !(it1 > it2));
        it1.advance().unwrap();
        assert!(it1 != it2);
        assert!(it1 > it2);
        assert!(it2 < it1);
    }

    #[test]
    fn assign_same_container() {
        let c = container(&[5, 3, 1]);
        let mut it1 = c.ascending();
        let mut it2 = c.ascending();
        it2.advance().unwrap();
        it1.assign_from(&it2).unwrap();
        assert_eq!(it1, it2);
        assert_eq!(it1.value(), Ok(3));
    }

    #[test]
    fn assign_different_container() {
        let c1 = container(&[1, 2, 3]);
        let c2 = container(&[4, 5, 6]);
        let mut it1 = c1.primes();
        let mut it2 = c2.primes();
        it2.advance().unwrap();
        assert_eq!(it1.assign_from(&it2), Err(Error::InvalidOperation));
        assert_eq!(it1.position(), 0);
        assert_eq!(it2.position(), 1);
    }

    #[test]
    fn equal_contents_are_still_different_containers() {
        let c1 = container(&[1, 2, 3]);
        let c2 = c1.clone();
        let it1 = c1.ascending();
        let it2 = c2.ascending();
        assert!(!it1.same_container(&it2));
        assert!(it1 != it2);
        assert_eq!(PartialOrd::partial_cmp(&it1, &it2), None);
        assert!(!(it1 < it2) && !(it1 > it2));
    }

    #[test]
    fn iterator_resumes_from_position() {
        let c = container(&[9, 8, 7, 6]);
        let mut it = c.side_cross();
        it.advance().unwrap();
        assert_eq!(it.len(), 3);
        assert_eq!(it.by_ref().collect::<Vec<_>>(), vec![9, 7, 8]);
        assert!(it.is_end());
        assert_eq!(it.next(), None);
    }

    #[test]
    fn clone_is_independent() {
        let c = container(&[1, 2, 3]);
        let mut it1 = c.ascending();
        let it2 = it1.clone();
        it1.advance().unwrap();
        assert_eq!(it2.value(), Ok(1));
        assert_eq!(it1.value(), Ok(2));
    }

    proptest! {
        #[test]
        fn advancing_one_leaves_the_other(
            elts in prop::collection::vec(-20i64..20, 1..30),
            steps in 0usize..30,
        ) {
            let c = container(&elts);
            let mut a = c.side_cross();
            let b = c.side_cross();
            let first = b.value().unwrap();
            for _ in 0..steps.min(elts.len()) {
                a.advance().unwrap();
            }
            prop_assert_eq!(b.value(), Ok(first));
            prop_assert_eq!(b.position(), 0);
            prop_assert_eq!(PartialOrd::partial_cmp(&a, &b), Some(a.position().cmp(&0)));
        }

        #[test]
        fn fully_advanced_equals_end(elts in prop::collection::vec(-20i64..20, 0..30)) {
            let c = container(&elts);
            let mut it = c.primes();
            let count = it.len();
            for _ in 0..count {
                it.advance().unwrap();
            }
            prop_assert_eq!(&it, &it.end());
            prop_assert!(it.advance().is_err());
        }
    }
}
