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

#![deny(missing_docs)]

//! A container of integers that can be walked in several different orders.
//!
//! A [`MagicalContainer`] just stores its elements in the order they were added. The interesting
//! part is the iterators: an [`AscendingIterator`] visits the elements from smallest to largest, a
//! [`SideCrossIterator`] alternates between the smallest and largest elements that haven't been
//! visited yet, and a [`PrimeIterator`] visits only the primes, in ascending order.
//!
//! ```
//! use libmagic::MagicalContainer;
//!
//! let container: MagicalContainer = [10, 20, 30, 40].into_iter().collect();
//! assert_eq!(container.side_cross().collect::<Vec<_>>(), vec![10, 40, 20, 30]);
//! ```
//!
//! Each iterator borrows the container it came from, so the container can't be modified while
//! it is being traversed. Iterators are also positions: two iterators over the same container can
//! be compared, and one can be assigned to the other, but only if they share a container.

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod container;
mod cursor;
mod error;
pub mod order;

pub use {
    crate::{
        container::MagicalContainer,
        cursor::{AscendingIterator, Cursor, PrimeIterator, SideCrossIterator},
        error::Error,
        order::Order,
    },
    magic_primes::is_prime,
};
