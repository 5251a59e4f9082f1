use crate::Span;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dynamically sized array that owns its buffer and exposes a view into it.
///
/// The owning buffer is released exactly once: either by [`Array::free`] or
/// when the value goes out of scope. Borrowed sub-ranges are [`Span`]s and
/// can never release anything.
///
/// # Layout
///
/// ```text
/// Array
/// ├── buf: Option<Box<[T]>>   // owning buffer, None for the empty array
/// ├── start: usize            // first visible element inside buf
/// └── len: usize              // number of visible elements
/// ```
pub struct Array<T> {
    buf: Option<Box<[T]>>,
    start: usize,
    len: usize,
}

pub(crate) fn check_range(start: usize, end: usize, len: usize) {
    assert!(
        start <= end && end <= len,
        "slice bounds [{}, {}) out of range for view of length {}",
        start,
        end,
        len
    );
}

impl<T> Array<T> {
    /// Array with no buffer and no elements
    pub const fn empty() -> Self {
        Self {
            buf: None,
            start: 0,
            len: 0,
        }
    }

    /// Allocate `len` default-valued elements
    pub fn new(len: usize) -> Self
    where
        T: Default,
    {
        log::trace!("array: allocate {} elements", len);
        let values: Vec<T> = std::iter::repeat_with(T::default).take(len).collect();
        Self::adopt(values.into_boxed_slice())
    }

    /// Take ownership of caller-supplied storage
    pub fn adopt(buf: Box<[T]>) -> Self {
        let len = buf.len();
        log::trace!("array: adopt buffer of {} elements", len);
        Self {
            buf: Some(buf),
            start: 0,
            len,
        }
    }

    pub fn from_vec(values: Vec<T>) -> Self {
        Self::adopt(values.into_boxed_slice())
    }

    /// Number of elements in the current view
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance of the view from the start of the owning buffer
    pub fn offset(&self) -> usize {
        self.start
    }

    /// Whether this value holds an allocation
    pub fn owns_buffer(&self) -> bool {
        self.buf.is_some()
    }

    pub fn as_slice(&self) -> &[T] {
        match &self.buf {
            Some(buf) => &buf[self.start..self.start + self.len],
            None => &[],
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.buf {
            Some(buf) => &mut buf[self.start..self.start + self.len],
            None => &mut [],
        }
    }

    pub fn get(&self, index: usize) -> T
    where
        T: Clone,
    {
        self[index].clone()
    }

    pub fn get_ref(&self, index: usize) -> &T {
        &self[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    /// Borrow `[start, end)` of the current view without allocating.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end <= self.size()`.
    pub fn slice(&self, start: usize, end: usize) -> Span<'_, T> {
        self.as_span().slice(start, end)
    }

    /// Borrow the whole current view
    pub fn as_span(&self) -> Span<'_, T> {
        match &self.buf {
            Some(buf) => Span::with_base(buf, self.start, self.len),
            None => Span::empty(),
        }
    }

    /// Move ownership into a value viewing `[start, end)` of the current view.
    ///
    /// The buffer is neither copied nor shrunk; `free` still releases all of it.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end <= self.size()`.
    pub fn narrow(mut self, start: usize, end: usize) -> Self {
        check_range(start, end, self.len);
        log::trace!("array: narrow view to [{}, {})", start, end);
        self.start += start;
        self.len = end - start;
        self
    }

    /// Release the owning buffer. Consuming `self` rules out any later use.
    pub fn free(self) {
        if let Some(buf) = &self.buf {
            log::trace!("array: free buffer of {} elements", buf.len());
        }
        drop(self);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Clone> Clone for Array<T> {
    /// Copies the current view into a fresh, independently owned buffer
    fn clone(&self) -> Self {
        if self.buf.is_none() {
            return Self::empty();
        }
        log::trace!("array: clone {} elements", self.len);
        Self::from_vec(self.as_slice().to_vec())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_default_values() {
        let arr: Array<i32> = Array::new(4);
        assert_eq!(arr.size(), 4);
        assert!(arr.iter().all(|v| *v == 0));
        assert_eq!(arr.offset(), 0);
    }

    #[test]
    fn test_empty() {
        let arr: Array<u64> = Array::empty();
        assert_eq!(arr.size(), 0);
        assert!(!arr.owns_buffer());
        assert_eq!(arr.iter().count(), 0);
        arr.free();
    }

    #[test]
    fn test_slice_reads_source() {
        let arr = Array::from_vec(vec![10, 20, 30, 40, 50]);
        let span = arr.slice(1, 4);
        assert_eq!(span.size(), 3);
        assert_eq!(span.offset(), 1);
        for i in 0..span.size() {
            assert_eq!(span.get(i), arr.get(1 + i));
        }
    }

    #[test]
    fn test_slice_of_slice_keeps_offset() {
        let arr = Array::from_vec(vec![1, 2, 3, 4, 5, 6]);
        let inner = arr.slice(1, 5).slice(2, 4);
        assert_eq!(inner.offset(), 3);
        assert_eq!(inner.as_slice(), &[4, 5]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_slice_out_of_bounds() {
        let arr = Array::from_vec(vec![1, 2, 3]);
        let _ = arr.slice(2, 4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_slice_inverted() {
        let arr = Array::from_vec(vec![1, 2, 3]);
        let _ = arr.slice(2, 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut arr = Array::from_vec(vec![1, 2, 3]);
        let mut copy = arr.clone();
        copy[0] = 100;
        *arr.get_mut(2) = 300;
        assert_eq!(arr.as_slice(), &[1, 2, 300]);
        assert_eq!(copy.as_slice(), &[100, 2, 3]);
    }

    #[test]
    fn test_narrow_then_clone() {
        let arr = Array::from_vec(vec![1, 2, 3, 4, 5]).narrow(1, 4);
        assert_eq!(arr.offset(), 1);
        assert_eq!(arr.as_slice(), &[2, 3, 4]);

        let copy = arr.clone();
        assert_eq!(copy.offset(), 0);
        assert_eq!(copy, arr);
        arr.free();
        copy.free();
    }

    #[test]
    fn test_iter_mut() {
        let mut arr = Array::from_vec(vec![1, 2, 3]);
        for v in &mut arr {
            *v *= 2;
        }
        assert_eq!(arr.as_slice(), &[2, 4, 6]);
    }
}
