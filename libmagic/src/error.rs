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

/// The errors that can come out of a container or one of its iterators.
///
/// Every fallible operation either succeeds completely or fails without touching any state.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Tried to remove a value that isn't in the container.
    #[error("There is no element {0} in the container")]
    NotFound(i64),
    /// Tried to read or advance an iterator that was already at its end.
    #[error("The iterator is past the last of its {len} elements")]
    OutOfRange {
        /// The number of elements the iterator visits.
        len: usize,
    },
    /// Tried to assign between iterators that belong to different containers.
    #[error("Cannot assign an iterator from a different container")]
    InvalidOperation,
}
