use crate::{Array, Char, Span};

/// Immutable array whose length is part of its type.
///
/// Meant for compile-time constants:
///
/// ```rust
/// use soul_val::{literal_text, LiteralArray};
///
/// static PRIMES: LiteralArray<i32, 4> = LiteralArray::new([2, 3, 5, 7]);
/// static GREETING: LiteralArray<soul_val::Char, 5> = literal_text(b"hello");
///
/// let primes = PRIMES.to_runtime_array(6);
/// assert_eq!(primes.size(), 6);
/// assert_eq!(GREETING.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralArray<T, const N: usize> {
    values: [T; N],
}

impl<T, const N: usize> LiteralArray<T, N> {
    pub const fn new(values: [T; N]) -> Self {
        Self { values }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub const fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Non-allocating view over the fixed store
    pub fn as_span(&self) -> Span<'_, T> {
        Span::new(&self.values)
    }

    pub fn get_ref(&self, index: usize) -> &T {
        &self.values[index]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Allocate a runtime array of `len` elements.
    ///
    /// The first `min(len, N)` elements are copied from the literal, the rest
    /// keep their default value.
    pub fn to_runtime_array(&self, len: usize) -> Array<T>
    where
        T: Clone + Default,
    {
        let mut arr = Array::new(len);
        for (slot, value) in arr.iter_mut().zip(self.values.iter()) {
            *slot = value.clone();
        }
        arr
    }
}

/// Character literal array built from a byte string, usable in const context
pub const fn literal_text<const N: usize>(bytes: &[u8; N]) -> LiteralArray<Char, N> {
    let mut values = [Char::NUL; N];
    let mut i = 0;
    while i < N {
        values[i] = Char(bytes[i]);
        i += 1;
    }
    LiteralArray::new(values)
}

impl<T: Clone + Default, const N: usize> From<LiteralArray<T, N>> for Array<T> {
    fn from(literal: LiteralArray<T, N>) -> Self {
        literal.to_runtime_array(N)
    }
}

impl<T: Clone + Default, const N: usize> From<&LiteralArray<T, N>> for Array<T> {
    fn from(literal: &LiteralArray<T, N>) -> Self {
        literal.to_runtime_array(N)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a LiteralArray<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGITS: LiteralArray<i32, 4> = LiteralArray::new([1, 2, 3, 4]);

    #[test]
    fn test_to_runtime_array_exact() {
        let arr = DIGITS.to_runtime_array(4);
        assert_eq!(arr.size(), 4);
        assert_eq!(arr.as_slice(), DIGITS.as_slice());
    }

    #[test]
    fn test_to_runtime_array_longer_pads_default() {
        let arr = DIGITS.to_runtime_array(7);
        assert_eq!(arr.as_slice(), &[1, 2, 3, 4, 0, 0, 0]);
    }

    #[test]
    fn test_to_runtime_array_shorter_truncates() {
        let arr = DIGITS.to_runtime_array(2);
        assert_eq!(arr.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_runtime_copy_leaves_literal() {
        let mut arr: Array<i32> = DIGITS.into();
        arr[0] = 42;
        assert_eq!(DIGITS.get_ref(0), &1);
    }

    #[test]
    fn test_literal_text() {
        const WORD: LiteralArray<Char, 3> = literal_text(b"abc");
        assert_eq!(WORD.len(), 3);
        assert_eq!(WORD.get_ref(1), &Char(b'b'));
    }

    #[test]
    fn test_empty_literal() {
        const NONE: LiteralArray<u8, 0> = LiteralArray::new([]);
        assert!(NONE.is_empty());
        assert_eq!(NONE.to_runtime_array(2).as_slice(), &[0, 0]);
    }
}
