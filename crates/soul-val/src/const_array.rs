//! Immutable arrays and recursive const propagation
//!
//! `AsConst` maps a value type to its read-only counterpart. For arrays the
//! mapping recurses into the element type, so an array of arrays becomes a
//! read-only array of read-only arrays.

use crate::{Array, Char, LiteralArray, Span};
use std::fmt;

/// Read-only owning array. Only read operations are exposed.
pub struct ConstArray<T> {
    inner: Array<T>,
}

impl<T> ConstArray<T> {
    pub fn empty() -> Self {
        Self {
            inner: Array::empty(),
        }
    }

    pub(crate) fn from_vec(values: Vec<T>) -> Self {
        Self {
            inner: Array::from_vec(values),
        }
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.inner.offset()
    }

    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    pub fn get(&self, index: usize) -> T
    where
        T: Clone,
    {
        self.inner.get(index)
    }

    pub fn get_ref(&self, index: usize) -> &T {
        self.inner.get_ref(index)
    }

    pub fn slice(&self, start: usize, end: usize) -> Span<'_, T> {
        self.inner.slice(start, end)
    }

    pub fn as_span(&self) -> Span<'_, T> {
        self.inner.as_span()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Copy into a mutable array with independent storage
    pub fn to_array(&self) -> Array<T>
    where
        T: Clone,
    {
        self.inner.clone()
    }

    pub fn free(self) {
        self.inner.free()
    }
}

impl<T: Clone> Clone for ConstArray<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> std::ops::Index<usize> for ConstArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl<'a, T> IntoIterator for &'a ConstArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for ConstArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for ConstArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Type-level mapping to the read-only counterpart of a value type
pub trait AsConst {
    type Const;

    /// Produce a read-only copy; arrays always allocate
    fn as_const(&self) -> Self::Const;
}

macro_rules! impl_as_const_self {
    ($($t:ty),*) => {
        $(
            impl AsConst for $t {
                type Const = $t;

                fn as_const(&self) -> Self::Const {
                    *self
                }
            }
        )*
    };
}

impl_as_const_self!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, Char);

fn const_elements<T: AsConst>(values: &[T]) -> ConstArray<T::Const> {
    log::trace!("array: const copy of {} elements", values.len());
    ConstArray::from_vec(values.iter().map(AsConst::as_const).collect())
}

impl<T: AsConst> AsConst for Array<T> {
    type Const = ConstArray<T::Const>;

    fn as_const(&self) -> Self::Const {
        const_elements(self.as_slice())
    }
}

impl<T: AsConst> AsConst for Span<'_, T> {
    type Const = ConstArray<T::Const>;

    fn as_const(&self) -> Self::Const {
        const_elements(self.as_slice())
    }
}

impl<T: AsConst> AsConst for ConstArray<T> {
    type Const = ConstArray<T::Const>;

    fn as_const(&self) -> Self::Const {
        const_elements(self.as_slice())
    }
}

impl<T: AsConst, const N: usize> AsConst for LiteralArray<T, N> {
    type Const = ConstArray<T::Const>;

    fn as_const(&self) -> Self::Const {
        const_elements(self.as_slice())
    }
}
