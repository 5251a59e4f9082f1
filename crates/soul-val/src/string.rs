//! Strings are arrays of `Char`
//!
//! `SoulStr` owns its bytes; `StrSpan` borrows bytes owned elsewhere, such as
//! a NUL-terminated buffer handed over by the host.

use crate::chars::{bytes_of, chars_of};
use crate::render::Render;
use crate::{Array, Char, ConstArray, LiteralArray, Span};
use std::borrow::Cow;

/// Owned string
pub type SoulStr = Array<Char>;

/// Borrowed string view
pub type StrSpan<'a> = Span<'a, Char>;

/// Render any value with the print engine into a freshly allocated string.
///
/// This is the single string constructor for primitives, strings and arrays.
///
/// ```rust
/// use soul_val::str;
///
/// assert_eq!(str(&-42i64), "-42");
/// assert_eq!(str(&true), "true");
/// assert_eq!(str(&3.5f64), "3.5");
/// ```
pub fn str<V: Render + ?Sized>(value: &V) -> SoulStr {
    crate::render::format_values(&[&value as &dyn Render])
}

/// Byte length of any string-like value
pub fn len<S: AsChars + ?Sized>(text: &S) -> u64 {
    text.as_chars().len() as u64
}

/// Anything that can be read as a run of characters
pub trait AsChars {
    fn as_chars(&self) -> &[Char];

    fn as_bytes(&self) -> &[u8] {
        bytes_of(self.as_chars())
    }
}

impl AsChars for [Char] {
    fn as_chars(&self) -> &[Char] {
        self
    }
}

impl AsChars for [u8] {
    fn as_chars(&self) -> &[Char] {
        chars_of(self)
    }
}

impl AsChars for str {
    fn as_chars(&self) -> &[Char] {
        chars_of(self.as_bytes())
    }
}

impl AsChars for String {
    fn as_chars(&self) -> &[Char] {
        chars_of(self.as_bytes())
    }
}

impl AsChars for Array<Char> {
    fn as_chars(&self) -> &[Char] {
        self.as_slice()
    }
}

impl AsChars for ConstArray<Char> {
    fn as_chars(&self) -> &[Char] {
        self.as_slice()
    }
}

impl AsChars for Span<'_, Char> {
    fn as_chars(&self) -> &[Char] {
        self.as_slice()
    }
}

impl<const N: usize> AsChars for LiteralArray<Char, N> {
    fn as_chars(&self) -> &[Char] {
        self.as_slice()
    }
}

impl<S: AsChars + ?Sized> AsChars for &S {
    fn as_chars(&self) -> &[Char] {
        (**self).as_chars()
    }
}

impl Array<Char> {
    /// Copy bytes into a new owned string
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Array::from_vec(chars_of(bytes).to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytes_of(self.as_slice())
    }

    /// Fresh NUL-terminated copy for hosts that expect C strings
    pub fn to_c_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len() + 1);
        bytes.extend_from_slice(self.as_bytes());
        bytes.push(0);
        bytes
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}

impl<'a> Span<'a, Char> {
    /// Borrow an externally owned byte buffer of known length
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Span::new(chars_of(bytes))
    }

    /// Borrow an externally owned buffer up to its first NUL byte.
    ///
    /// Without a terminator the whole buffer is used.
    pub fn from_c_bytes(bytes: &'a [u8]) -> Self {
        let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
        Self::from_bytes(&bytes[..end])
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        bytes_of(self.as_slice())
    }
}

impl From<&str> for Array<Char> {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl From<String> for Array<Char> {
    fn from(s: String) -> Self {
        Self::from(s.into_bytes())
    }
}

impl From<Vec<u8>> for Array<Char> {
    fn from(bytes: Vec<u8>) -> Self {
        Array::from_vec(bytes.into_iter().map(Char).collect())
    }
}

impl PartialEq<str> for Array<Char> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Array<Char> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Span<'_, Char> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for ConstArray<Char> {
    fn eq(&self, other: &&str) -> bool {
        bytes_of(self.as_slice()) == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for LiteralArray<Char, N> {
    fn eq(&self, other: &&str) -> bool {
        bytes_of(self.as_slice()) == other.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal_text;

    #[test]
    fn test_from_str_copies() {
        let s = SoulStr::from("hello");
        assert_eq!(s.len(), 5);
        assert_eq!(len(&s), 5);
        assert_eq!(s, "hello");
    }

    #[test]
    fn test_from_c_bytes_stops_at_nul() {
        let raw = b"prog\0garbage";
        let span = StrSpan::from_c_bytes(raw);
        assert_eq!(span.size(), 4);
        assert_eq!(span, "prog");
    }

    #[test]
    fn test_from_c_bytes_without_terminator() {
        let span = StrSpan::from_c_bytes(b"abc");
        assert_eq!(span.size(), 3);
    }

    #[test]
    fn test_to_c_bytes() {
        let s = SoulStr::from("test");
        let c = s.to_c_bytes();
        assert_eq!(c.len(), 5);
        assert_eq!(c[4], 0);
    }

    #[test]
    fn test_str_of_primitives() {
        assert_eq!(str(&0i32), "0");
        assert_eq!(str(&-7i8), "-7");
        assert_eq!(str(&255u8), "255");
        assert_eq!(str(&false), "false");
        assert_eq!(str(&Char(b'x')), "x");
        assert_eq!(str(&u64::MAX), "18446744073709551615");
    }

    #[test]
    fn test_str_of_string_copies() {
        let original = SoulStr::from("abc");
        let copy = str(&original);
        assert_eq!(copy, original);
        assert_eq!(str(&original.slice(1, 3)), "bc");
    }

    #[test]
    fn test_len_of_literal_and_span() {
        const WORD: LiteralArray<Char, 4> = literal_text(b"soul");
        assert_eq!(len(&WORD), 4);
        assert_eq!(len("héllo"), 6);
        assert_eq!(WORD, "soul");
    }

    #[test]
    fn test_empty_string() {
        let s = str("");
        assert!(s.is_empty());
        assert_eq!(s.to_c_bytes(), vec![0]);
    }
}
