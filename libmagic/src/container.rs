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

use crate::{
    cursor::{AscendingIterator, PrimeIterator, SideCrossIterator},
    error::Error,
};

/// A bag of integers, stored in the order they were added.
///
/// Duplicates are allowed. The storage order is never exposed directly; use one of the iterators
/// to look at the elements.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MagicalContainer {
    elements: Vec<i64>,
}

impl MagicalContainer {
    /// Creates an empty container.
    pub fn new() -> MagicalContainer {
        MagicalContainer::default()
    }

    /// Adds an element to the container, even if an equal element is already there.
    pub fn add_element(&mut self, elt: i64) {
        trace!("adding element {elt}");
        self.elements.push(elt);
    }

    /// Removes the first element equal to `elt`.
    ///
    /// The remaining elements keep their relative order. If there is no such element, the
    /// container is left alone and [`Error::NotFound`] is returned.
    pub fn remove_element(&mut self, elt: i64) -> Result<(), Error> {
        match self.elements.iter().position(|&x| x == elt) {
            Some(idx) => {
                debug!("removing element {elt} from index {idx}");
                self.elements.remove(idx);
                Ok(())
            }
            None => {
                debug!("tried to remove missing element {elt}");
                Err(Error::NotFound(elt))
            }
        }
    }

    /// The number of elements in the container, counting duplicates.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the container has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if some element is equal to `elt`.
    pub fn contains(&self, elt: i64) -> bool {
        self.elements.contains(&elt)
    }

    /// The elements, in the order they were added.
    pub(crate) fn elements(&self) -> &[i64] {
        &self.elements
    }

    /// Returns an iterator that visits the elements in ascending order.
    pub fn ascending(&self) -> AscendingIterator<'_> {
        AscendingIterator::new(self)
    }

    /// Returns an iterator that alternates between the smallest and the largest unvisited
    /// elements.
    pub fn side_cross(&self) -> SideCrossIterator<'_> {
        SideCrossIterator::new(self)
    }

    /// Returns an iterator that visits the prime elements in ascending order.
    pub fn primes(&self) -> PrimeIterator<'_> {
        PrimeIterator::new(self)
    }
}

impl FromIterator<i64> for MagicalContainer {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> MagicalContainer {
        let mut ret = MagicalContainer::new();
        ret.extend(iter);
        ret
    }
}

impl Extend<i64> for MagicalContainer {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for elt in iter {
            self.add_element(elt);
        }
    }
}
