/// Borrowed view into an owning buffer
///
/// A `Span` is the Rust counterpart of a view that shares its source's
/// buffer: it keeps the whole buffer (`base`) so that `offset` can be
/// reported, but the borrow ties it to the owner and it has no way to free.
///
/// ```text
/// Span<'a, T>
/// ├── base: &'a [T]   // the full owning buffer
/// ├── start: usize    // offset of the first visible element
/// └── len: usize      // number of visible elements
/// ```
pub struct Span<'a, T> {
    base: &'a [T],
    start: usize,
    len: usize,
}

impl<T> Clone for Span<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<'_, T> {}

impl<'a, T> Span<'a, T> {
    /// View over borrowed storage that this runtime does not own
    pub fn new(values: &'a [T]) -> Self {
        Self {
            base: values,
            start: 0,
            len: values.len(),
        }
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }

    pub(crate) fn with_base(base: &'a [T], start: usize, len: usize) -> Self {
        debug_assert!(start + len <= base.len());
        Self { base, start, len }
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn offset(&self) -> usize {
        self.start
    }

    pub fn as_slice(&self) -> &'a [T] {
        &self.base[self.start..self.start + self.len]
    }

    pub fn get(&self, index: usize) -> T
    where
        T: Clone,
    {
        self.as_slice()[index].clone()
    }

    pub fn get_ref(&self, index: usize) -> &'a T {
        &self.as_slice()[index]
    }

    /// # Panics
    ///
    /// Panics unless `start <= end <= self.size()`.
    pub fn slice(&self, start: usize, end: usize) -> Span<'a, T> {
        crate::array::check_range(start, end, self.len);
        Self::with_base(self.base, self.start + start, end - start)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// Copy the view into an independently owned array
    pub fn to_array(&self) -> crate::Array<T>
    where
        T: Clone,
    {
        crate::Array::from_vec(self.as_slice().to_vec())
    }
}

impl<T> std::ops::Index<usize> for Span<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a, T> IntoIterator for Span<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Span<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Span<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
