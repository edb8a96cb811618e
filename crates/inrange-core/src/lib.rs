//! Integer types restricted to a compile-time range, and arrays indexed by them.
//!
//! This crate makes out-of-range indexing a type error instead of a runtime
//! bug. It is built from two pieces:
//!
//! 1. **Bounded values** - [`bounded`]: `BoundedXX<LOW, HIGH>` wraps a primitive
//!    integer and guarantees `LOW <= value < HIGH` for as long as the value
//!    exists. Construction and reassignment validate their input and fail with
//!    a [`BoundsError`] of kind [`ErrorKind::OutOfRange`] otherwise.
//!
//! 2. **Fixed arrays** - [`fixed_array`]: [`FixedArray<T, N>`] only accepts an
//!    [`ArrayIndex<N>`] (an alias of `BoundedUsize<0, N>`) as its index, so the
//!    range check happens once, when the index is created, and never at the
//!    access site.
//!
//! # Examples
//!
//! ```
//! use inrange_core::{ArrayIndex, FixedArray};
//!
//! let mut lanes = FixedArray::<u32, 4>::new();
//!
//! for raw in [0, 3, 4, 7] {
//!     match ArrayIndex::<4>::new(raw) {
//!         Ok(i) => lanes[i] += 1,
//!         Err(err) => println!("skipping lane: {err}"),
//!     }
//! }
//!
//! assert_eq!(lanes.into_array(), [1, 0, 0, 1]);
//! ```
//!
//! # Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for the bounded types.
//!   Deserialization validates the value like [`BoundedValue::new`] does.

pub mod bounded;
pub mod error;
pub mod fixed_array;

pub use self::{
    bounded::{
        ArrayIndex, BoundedI8, BoundedI16, BoundedI32, BoundedI64, BoundedIsize, BoundedU8,
        BoundedU16, BoundedU32, BoundedU64, BoundedUsize, BoundedValue,
    },
    error::{BoundsError, ErrorKind},
    fixed_array::FixedArray,
};
