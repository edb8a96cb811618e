//! Errors reported when a raw value does not fit a bounded type.

/// The category of a [`BoundsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The candidate value is below the inclusive lower bound or at or above
    /// the exclusive upper bound.
    #[display("out of range")]
    OutOfRange,
}

/// A raw value was rejected by a bounded type.
///
/// Returned by construction and reassignment of every bounded type. The
/// rejected value and the bounds are widened to `i128` so that a single error
/// type covers every primitive.
///
/// # Examples
///
/// ```
/// use inrange_core::{BoundedU8, ErrorKind};
///
/// let err = BoundedU8::<1, 10>::new(10).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::OutOfRange);
/// assert_eq!(err.value(), 10);
/// assert_eq!((err.low(), err.high()), (1, 10));
/// assert_eq!(err.to_string(), "value 10 is out of range [1, 10)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
#[display("value {value} is out of range [{low}, {high})")]
pub struct BoundsError {
    kind: ErrorKind,
    value: i128,
    low: i128,
    high: i128,
}

impl BoundsError {
    pub(crate) const fn out_of_range(value: i128, low: i128, high: i128) -> Self {
        Self {
            kind: ErrorKind::OutOfRange,
            value,
            low,
            high,
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the rejected value.
    #[must_use]
    pub const fn value(&self) -> i128 {
        self.value
    }

    /// Returns the inclusive lower bound of the type that rejected the value.
    #[must_use]
    pub const fn low(&self) -> i128 {
        self.low
    }

    /// Returns the exclusive upper bound of the type that rejected the value.
    #[must_use]
    pub const fn high(&self) -> i128 {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = BoundsError::out_of_range(-1, 0, 5);
        assert_eq!(err.to_string(), "value -1 is out of range [0, 5)");
        assert_eq!(ErrorKind::OutOfRange.to_string(), "out of range");
    }

    #[test]
    fn test_accessors() {
        let err = BoundsError::out_of_range(300, 20, 200);
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.value(), 300);
        assert_eq!(err.low(), 20);
        assert_eq!(err.high(), 200);
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(BoundsError::out_of_range(3, 0, 3));
        assert!(err.source().is_none());
    }
}
