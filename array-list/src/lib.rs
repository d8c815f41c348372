//! Growable, index-addressable list backed by a doubling array.
//!
//! # What Is This Crate?
//! A small, teaching-sized take on the classic array list: a [`DynamicArrayList`] owns one
//! contiguous buffer of slots, appends in amortized constant time by doubling that buffer when it
//! fills up, and closes gaps on removal by shifting later elements down.
//!
//! The operations are described by two capability traits, [`List`] for reading and
//! [`MutableList`] for writing, so code can be written against the contract rather than the
//! concrete type.
//!
//! # Things To Know About This Crate
//! - Capacity starts at [`DEFAULT_CAPACITY`] and only ever grows.
//! - Out-of-range access and cursor exhaustion are reported as [`Error`] values, never as
//!   defaults or clamped indices.
//! - The list is not synchronized. Wrap it in a mutex if it must be shared mutably across
//!   threads.
//!
//! # Examples
//! ```
//! use array_list::{DynamicArrayList, Error, List as _, MutableList as _};
//!
//! let mut list = DynamicArrayList::new();
//! list.add(1);
//! list.add(2);
//! list.add(3);
//!
//! let mut cur = list.iter();
//! while cur.has_next() {
//!     println!("{}", cur.try_next()?);
//! }
//! assert_eq!(cur.try_next(), Err(Error::Exhausted));
//! # Ok::<_, Error>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod cursor;
mod dynamic;
mod error;
mod list;

pub use self::{
    cursor::Cursor,
    dynamic::DynamicArrayList,
    error::Error,
    list::{List, MutableList},
};

/// Number of slots allocated by [`DynamicArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 1;

/// Factor the backing buffer is multiplied by each time it fills up.
pub const GROWTH_FACTOR: usize = 2;
