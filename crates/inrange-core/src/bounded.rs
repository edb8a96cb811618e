//! Integers fixed to a compile-time half-open range.
//!
//! Each primitive integer type has a bounded counterpart parameterized by two
//! const generic bounds, `LOW` (inclusive) and `HIGH` (exclusive):
//!
//! | Raw type | Bounded type                    |
//! |----------|---------------------------------|
//! | `u8`     | [`BoundedU8<LOW, HIGH>`]        |
//! | `u16`    | [`BoundedU16<LOW, HIGH>`]       |
//! | `u32`    | [`BoundedU32<LOW, HIGH>`]       |
//! | `u64`    | [`BoundedU64<LOW, HIGH>`]       |
//! | `usize`  | [`BoundedUsize<LOW, HIGH>`]     |
//! | `i8`     | [`BoundedI8<LOW, HIGH>`]        |
//! | `i16`    | [`BoundedI16<LOW, HIGH>`]       |
//! | `i32`    | [`BoundedI32<LOW, HIGH>`]       |
//! | `i64`    | [`BoundedI64<LOW, HIGH>`]       |
//! | `isize`  | [`BoundedIsize<LOW, HIGH>`]     |
//!
//! The bounds are part of the type: `BoundedUsize<0, 3>` and `BoundedUsize<0, 4>`
//! are distinct types, and every value of either one lies inside its range.
//! Values can only be created through a validating constructor, and
//! reassignment validates the new value before storing it.
//!
//! [`ArrayIndex<N>`] is the bounded type used to address a
//! [`FixedArray<T, N>`](crate::FixedArray).
//!
//! # Examples
//!
//! ```
//! use inrange_core::{BoundedI32, ErrorKind};
//!
//! type Celsius = BoundedI32<-40, 125>;
//!
//! let mut t = Celsius::new(21)?;
//! assert_eq!(t.get(), 21);
//!
//! // The upper bound is exclusive.
//! assert_eq!(Celsius::new(125).unwrap_err().kind(), ErrorKind::OutOfRange);
//!
//! // A rejected reassignment leaves the old value in place.
//! assert!(t.set(-41).is_err());
//! assert_eq!(t.get(), 21);
//! # Ok::<(), inrange_core::BoundsError>(())
//! ```
//!
//! Constructors are `const`, so bounded values can be checked at compile time:
//!
//! ```
//! use inrange_core::BoundedU8;
//!
//! const PERCENT: BoundedU8<0, 101> = match BoundedU8::new(42) {
//!     Ok(v) => v,
//!     Err(_) => panic!("not a percentage"),
//! };
//! assert_eq!(PERCENT.get(), 42);
//! ```

use std::fmt;

use crate::BoundsError;

/// Common interface of the bounded integer types.
///
/// Implemented by every `BoundedXX<LOW, HIGH>` type in this module, so that code
/// can be generic over the raw type and the bounds.
///
/// # Examples
///
/// ```
/// use inrange_core::{BoundedI16, BoundedU8, BoundedValue};
///
/// fn parse<B: BoundedValue>(raw: B::Raw) -> Option<B> {
///     B::new(raw).ok()
/// }
///
/// assert_eq!(parse::<BoundedU8<1, 7>>(6).map(BoundedValue::get), Some(6));
/// assert!(parse::<BoundedI16<-5, 5>>(5).is_none());
/// ```
pub trait BoundedValue: Copy + Ord + fmt::Debug {
    /// The primitive integer type holding the value.
    type Raw: Copy + Ord + fmt::Debug + fmt::Display;

    /// Inclusive lower bound.
    const LOW: Self::Raw;

    /// Exclusive upper bound.
    const HIGH: Self::Raw;

    /// Creates a bounded value, validating `LOW <= value < HIGH`.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundsError`] of kind
    /// [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) if `value` is
    /// outside the range.
    fn new(value: Self::Raw) -> Result<Self, BoundsError>;

    /// Replaces the stored value with `value` if it is inside the range.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundsError`] of kind
    /// [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) if `value` is
    /// outside the range. The stored value is left unchanged in that case.
    fn set(&mut self, value: Self::Raw) -> Result<(), BoundsError>;

    /// Returns the stored value.
    fn get(self) -> Self::Raw;

    /// Returns `true` if `value` lies in `LOW..HIGH`.
    fn contains(value: Self::Raw) -> bool {
        Self::LOW <= value && value < Self::HIGH
    }
}

macro_rules! bounded_type {
    ($(#[$attr:meta])* $name:ident, $raw:ty) => {
        $(#[$attr])*
        ///
        /// Values are constructed with [`new`](Self::new) or [`TryFrom`], reassigned
        /// with [`set`](Self::set) and read back with [`get`](Self::get) or [`From`].
        /// A type whose `LOW` is not below `HIGH` has no values: every constructor
        /// call fails.
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name<const LOW: $raw, const HIGH: $raw> {
            value: $raw,
        }

        impl<const LOW: $raw, const HIGH: $raw> $name<LOW, HIGH> {
            /// Inclusive lower bound.
            pub const LOW: $raw = LOW;

            /// Exclusive upper bound.
            pub const HIGH: $raw = HIGH;

            /// Creates a bounded value, validating `LOW <= value < HIGH`.
            ///
            /// # Errors
            ///
            /// Returns a [`BoundsError`] of kind
            /// [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) if `value`
            /// is outside the range.
            #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
            pub const fn new(value: $raw) -> Result<Self, BoundsError> {
                if Self::contains(value) {
                    Ok(Self { value })
                } else {
                    Err(BoundsError::out_of_range(
                        value as i128,
                        LOW as i128,
                        HIGH as i128,
                    ))
                }
            }

            /// Replaces the stored value with `value` if it is inside the range.
            ///
            /// # Errors
            ///
            /// Returns a [`BoundsError`] of kind
            /// [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) if `value`
            /// is outside the range. The stored value is left unchanged in that
            /// case.
            pub fn set(&mut self, value: $raw) -> Result<(), BoundsError> {
                *self = Self::new(value)?;
                Ok(())
            }

            /// Returns the stored value.
            #[must_use]
            pub const fn get(self) -> $raw {
                self.value
            }

            /// Returns `true` if `value` lies in `LOW..HIGH`.
            #[must_use]
            pub const fn contains(value: $raw) -> bool {
                LOW <= value && value < HIGH
            }

            /// Returns an iterator over every value of this type in ascending order.
            pub fn all() -> impl DoubleEndedIterator<Item = Self> {
                (LOW..HIGH).map(|value| Self { value })
            }
        }

        impl<const LOW: $raw, const HIGH: $raw> BoundedValue for $name<LOW, HIGH> {
            type Raw = $raw;

            const LOW: $raw = LOW;
            const HIGH: $raw = HIGH;

            fn new(value: $raw) -> Result<Self, BoundsError> {
                Self::new(value)
            }

            fn set(&mut self, value: $raw) -> Result<(), BoundsError> {
                Self::set(self, value)
            }

            fn get(self) -> $raw {
                self.value
            }

            fn contains(value: $raw) -> bool {
                Self::contains(value)
            }
        }

        impl<const LOW: $raw, const HIGH: $raw> TryFrom<$raw> for $name<LOW, HIGH> {
            type Error = BoundsError;

            fn try_from(value: $raw) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl<const LOW: $raw, const HIGH: $raw> From<$name<LOW, HIGH>> for $raw {
            fn from(bounded: $name<LOW, HIGH>) -> $raw {
                bounded.value
            }
        }

        impl<const LOW: $raw, const HIGH: $raw> fmt::Debug for $name<LOW, HIGH> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.value).finish()
            }
        }

        impl<const LOW: $raw, const HIGH: $raw> fmt::Display for $name<LOW, HIGH> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.value, f)
            }
        }

        #[cfg(feature = "serde")]
        impl<const LOW: $raw, const HIGH: $raw> serde::Serialize for $name<LOW, HIGH> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.value, serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de, const LOW: $raw, const HIGH: $raw> serde::Deserialize<'de>
            for $name<LOW, HIGH>
        {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <$raw as serde::Deserialize<'de>>::deserialize(deserializer)?;
                Self::new(value).map_err(serde::de::Error::custom)
            }
        }
    };
}

bounded_type!(
    /// A `u8` in the range `LOW..HIGH`.
    BoundedU8,
    u8
);
bounded_type!(
    /// A `u16` in the range `LOW..HIGH`.
    BoundedU16,
    u16
);
bounded_type!(
    /// A `u32` in the range `LOW..HIGH`.
    BoundedU32,
    u32
);
bounded_type!(
    /// A `u64` in the range `LOW..HIGH`.
    BoundedU64,
    u64
);
bounded_type!(
    /// A `usize` in the range `LOW..HIGH`.
    BoundedUsize,
    usize
);
bounded_type!(
    /// An `i8` in the range `LOW..HIGH`.
    BoundedI8,
    i8
);
bounded_type!(
    /// An `i16` in the range `LOW..HIGH`.
    BoundedI16,
    i16
);
bounded_type!(
    /// An `i32` in the range `LOW..HIGH`.
    BoundedI32,
    i32
);
bounded_type!(
    /// An `i64` in the range `LOW..HIGH`.
    BoundedI64,
    i64
);
bounded_type!(
    /// An `isize` in the range `LOW..HIGH`.
    BoundedIsize,
    isize
);

/// An index into a container of exactly `N` elements (range `0..N`).
///
/// This is the only index type accepted by [`FixedArray<T, N>`](crate::FixedArray).
///
/// # Examples
///
/// ```
/// use inrange_core::ArrayIndex;
///
/// let i = ArrayIndex::<3>::new(2)?;
/// assert_eq!(i.get(), 2);
/// assert!(ArrayIndex::<3>::new(3).is_err());
///
/// let all: Vec<usize> = ArrayIndex::<3>::all().map(|i| i.get()).collect();
/// assert_eq!(all, [0, 1, 2]);
/// # Ok::<(), inrange_core::BoundsError>(())
/// ```
pub type ArrayIndex<const N: usize> = BoundedUsize<0, N>;
