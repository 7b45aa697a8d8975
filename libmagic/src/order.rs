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

//! The traversal orders that a [`Cursor`](crate::Cursor) can follow.
//!
//! An order has two jobs. When a cursor is created, it builds a *view* of the container's
//! elements; after that, it maps each position of the cursor to an element of the view. All of the
//! sorting and filtering happens up front, so moving a cursor is constant-time.

use itertools::Itertools;
use magic_primes::primes_in;

/// A policy for walking through the elements of a container.
pub trait Order {
    /// A short name for the order, used in debug output.
    const NAME: &'static str;

    /// Builds the view that positions index into. The view has one entry per element that the
    /// order visits.
    fn view(elements: &[i64]) -> Vec<i64>;

    /// Returns the element visited at step `pos`, which must be less than `view.len()`.
    fn at(view: &[i64], pos: usize) -> i64;
}

// Sorting is stable, so equal elements stay in the order they were added. For plain integers that
// isn't observable, but it keeps all the orders consistent with one another.
fn sorted(elements: &[i64]) -> Vec<i64> {
    elements.iter().copied().sorted().collect()
}

/// Smallest to largest.
#[derive(Clone, Copy, Debug)]
pub enum Ascending {}

impl Order for Ascending {
    const NAME: &'static str = "ascending";

    fn view(elements: &[i64]) -> Vec<i64> {
        sorted(elements)
    }

    fn at(view: &[i64], pos: usize) -> i64 {
        view[pos]
    }
}

/// Alternates between the two ends of the sorted elements, working inwards: smallest, largest,
/// second smallest, second largest, and so on. With an odd number of elements, the middle one
/// comes last.
#[derive(Clone, Copy, Debug)]
pub enum SideCross {}

impl Order for SideCross {
    const NAME: &'static str = "side-cross";

    fn view(elements: &[i64]) -> Vec<i64> {
        sorted(elements)
    }

    // Even steps walk forward from the front of the view and odd steps walk backward from the
    // back, so `pos / 2` is how far the relevant end has moved.
    fn at(view: &[i64], pos: usize) -> i64 {
        let offset = pos / 2;
        if pos % 2 == 0 {
            view[offset]
        } else {
            view[view.len() - 1 - offset]
        }
    }
}

/// Only the prime elements, smallest to largest.
#[derive(Clone, Copy, Debug)]
pub enum Prime {}

impl Order for Prime {
    const NAME: &'static str = "prime";

    fn view(elements: &[i64]) -> Vec<i64> {
        primes_in(sorted(elements)).collect()
    }

    fn at(view: &[i64], pos: usize) -> i64 {
        view[pos]
    }
}
