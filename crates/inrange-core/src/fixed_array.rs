//! Fixed-capacity array addressed by bounded indices.

use std::ops::{Index, IndexMut};

use crate::ArrayIndex;

/// An array of exactly `N` elements that can only be indexed by [`ArrayIndex<N>`].
///
/// Since every `ArrayIndex<N>` lies in `0..N`, element access never fails and
/// performs no bounds check of its own. An out-of-range index is rejected
/// earlier, when the caller tries to construct the `ArrayIndex`.
///
/// # Examples
///
/// ```
/// use inrange_core::{ArrayIndex, ErrorKind, FixedArray};
///
/// let mut a = FixedArray::<i32, 3>::new();
/// let i = ArrayIndex::<3>::new(2)?;
/// a[i] = 42;
/// assert_eq!(a[i], 42);
///
/// let err = ArrayIndex::<3>::new(3).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::OutOfRange);
/// # Ok::<(), inrange_core::BoundsError>(())
/// ```
///
/// An index for a different capacity does not type-check:
///
/// ```compile_fail
/// use inrange_core::{ArrayIndex, FixedArray};
///
/// let a = FixedArray::<i32, 3>::new();
/// let i = ArrayIndex::<4>::new(1).unwrap();
/// let _ = a[i];
/// ```
///
/// Neither does a raw `usize`:
///
/// ```compile_fail
/// use inrange_core::FixedArray;
///
/// let a = FixedArray::<i32, 3>::new();
/// let _ = a[1_usize];
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedArray<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Number of elements.
    pub const LEN: usize = N;

    /// Creates an array with every element set to `T::default()`.
    #[must_use]
    pub fn new() -> Self
    where
        T: Default,
    {
        Self {
            data: std::array::from_fn(|_| T::default()),
        }
    }

    /// Creates an array from caller-provided elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use inrange_core::{ArrayIndex, FixedArray};
    ///
    /// let a = FixedArray::from_array(['a', 'b', 'c']);
    /// assert_eq!(a[ArrayIndex::new(1)?], 'b');
    /// # Ok::<(), inrange_core::BoundsError>(())
    /// ```
    #[must_use]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Consumes the array and returns its elements.
    #[must_use]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// Returns the number of elements, `N`.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if `N` is zero.
    ///
    /// An empty array can never be indexed: `ArrayIndex<0>` has no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the element at `index`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: ArrayIndex<N>) -> &T {
        // SAFETY: an `ArrayIndex<N>` can only be constructed for values in `0..N`.
        unsafe { self.data.get_unchecked(index.get()) }
    }

    /// Returns a mutable reference to the element at `index`.
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, index: ArrayIndex<N>) -> &mut T {
        // SAFETY: an `ArrayIndex<N>` can only be constructed for values in `0..N`.
        unsafe { self.data.get_unchecked_mut(index.get()) }
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const N: usize> Index<ArrayIndex<N>> for FixedArray<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: ArrayIndex<N>) -> &Self::Output {
        self.get(index)
    }
}

impl<T, const N: usize> IndexMut<ArrayIndex<N>> for FixedArray<T, N> {
    #[inline]
    fn index_mut(&mut self, index: ArrayIndex<N>) -> &mut Self::Output {
        self.get_mut(index)
    }
}
