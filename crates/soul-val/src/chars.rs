//! Byte-sized character element
//!
//! `Char` is kept apart from `u8`/`i8` so that an array of characters prints
//! as text while an array of bytes prints as numbers.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Char(pub u8);

impl Char {
    pub const NUL: Char = Char(0);

    pub const fn byte(self) -> u8 {
        self.0
    }
}

impl From<u8> for Char {
    fn from(b: u8) -> Self {
        Char(b)
    }
}

impl From<Char> for u8 {
    fn from(c: Char) -> Self {
        c.0
    }
}

impl fmt::Display for Char {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 as char)
    }
}

/// View a byte slice as characters without copying
pub fn chars_of(bytes: &[u8]) -> &[Char] {
    // SAFETY: Char is repr(transparent) over u8, so both slices share layout
    unsafe { std::slice::from_raw_parts(bytes.as_ptr() as *const Char, bytes.len()) }
}

/// View a character slice as bytes without copying
pub fn bytes_of(chars: &[Char]) -> &[u8] {
    // SAFETY: see `chars_of`
    unsafe { std::slice::from_raw_parts(chars.as_ptr() as *const u8, chars.len()) }
}
