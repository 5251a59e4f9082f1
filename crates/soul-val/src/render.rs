//! Type-dispatching print engine
//!
//! Every printable value describes itself as a [`Shape`]:
//!
//! - `Prim`: a number, bool or single character
//! - `Text`: a run of characters, written raw
//! - `List`: the elements of an array, written as `[a, b, c]` or `[empty]`
//!
//! One recursive function renders shapes. Inside a list, elements whose
//! shape is `Text` are wrapped in double quotes; a `Text` value rendered on
//! its own is not.

use crate::chars::{bytes_of, chars_of};
use crate::{Array, Char, ConstArray, LiteralArray, SoulStr, Span};
use std::fmt;
use std::io;

pub const EMPTY_SENTINEL: &[u8] = b"[empty]";
const SEPARATOR: &[u8] = b", ";
const QUOTE: &[u8] = b"\"";

/// Primitive leaf values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prim {
    Bool(bool),
    Int(i64),
    Uint(u64),
    F32(f32),
    F64(f64),
    Char(Char),
}

/// The closed set of renderable forms
pub enum Shape<'a> {
    Prim(Prim),
    Text(&'a [Char]),
    List(Vec<&'a dyn Render>),
}

/// Values the print engine can render
pub trait Render {
    fn shape(&self) -> Shape<'_>;

    /// Shape of an array whose elements are `Self`.
    ///
    /// Arrays of `Char` override this to become text.
    fn seq_shape(items: &[Self]) -> Shape<'_>
    where
        Self: Sized,
    {
        Shape::List(items.iter().map(|item| item as &dyn Render).collect())
    }
}

/// Destination of rendered bytes
pub trait Out {
    type Error;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    fn put_display(&mut self, value: &dyn fmt::Display) -> Result<(), Self::Error> {
        self.put(value.to_string().as_bytes())
    }
}

/// In-memory sink used by formatting; never fails
#[derive(Debug, Default)]
pub struct TextBuf {
    bytes: Vec<u8>,
}

impl TextBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_str(self) -> SoulStr {
        SoulStr::from(self.bytes)
    }
}

impl Out for TextBuf {
    type Error = std::convert::Infallible;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.bytes.extend_from_slice(bytes);
        Ok(())
    }
}

/// Sink over any byte writer
pub struct WriteOut<'w, W: io::Write + ?Sized>(pub &'w mut W);

impl<W: io::Write + ?Sized> Out for WriteOut<'_, W> {
    type Error = io::Error;

    fn put(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.0.write_all(bytes)
    }

    fn put_display(&mut self, value: &dyn fmt::Display) -> io::Result<()> {
        write!(self.0, "{}", value)
    }
}

pub fn render<O: Out + ?Sized>(value: &dyn Render, out: &mut O) -> Result<(), O::Error> {
    render_shape(value.shape(), out)
}

fn render_shape<O: Out + ?Sized>(shape: Shape<'_>, out: &mut O) -> Result<(), O::Error> {
    match shape {
        Shape::Prim(prim) => render_prim(prim, out),
        Shape::Text(chars) => out.put(bytes_of(chars)),
        Shape::List(items) => {
            if items.is_empty() {
                return out.put(EMPTY_SENTINEL);
            }
            out.put(b"[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.put(SEPARATOR)?;
                }
                render_element(item.shape(), out)?;
            }
            out.put(b"]")
        }
    }
}

fn render_element<O: Out + ?Sized>(shape: Shape<'_>, out: &mut O) -> Result<(), O::Error> {
    match shape {
        Shape::Text(chars) => {
            out.put(QUOTE)?;
            out.put(bytes_of(chars))?;
            out.put(QUOTE)
        }
        other => render_shape(other, out),
    }
}

fn render_prim<O: Out + ?Sized>(prim: Prim, out: &mut O) -> Result<(), O::Error> {
    match prim {
        Prim::Bool(true) => out.put(b"true"),
        Prim::Bool(false) => out.put(b"false"),
        Prim::Int(v) => out.put_display(&v),
        Prim::Uint(v) => out.put_display(&v),
        Prim::F32(v) => out.put_display(&v),
        Prim::F64(v) => out.put_display(&v),
        Prim::Char(c) => out.put(&[c.byte()]),
    }
}

/// Render each argument in order, with no separator, into a new string
pub fn format_values(args: &[&dyn Render]) -> SoulStr {
    let mut buf = TextBuf::new();
    for arg in args {
        match render(*arg, &mut buf) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
    buf.into_str()
}

/// Render each argument in order to a writer
pub fn write_values<W: io::Write + ?Sized>(out: &mut W, args: &[&dyn Render]) -> io::Result<()> {
    let mut sink = WriteOut(out);
    for arg in args {
        render(*arg, &mut sink)?;
    }
    Ok(())
}

macro_rules! impl_render_signed {
    ($($t:ty),*) => {
        $(
            impl Render for $t {
                fn shape(&self) -> Shape<'_> {
                    Shape::Prim(Prim::Int(*self as i64))
                }
            }
        )*
    };
}

macro_rules! impl_render_unsigned {
    ($($t:ty),*) => {
        $(
            impl Render for $t {
                fn shape(&self) -> Shape<'_> {
                    Shape::Prim(Prim::Uint(*self as u64))
                }
            }
        )*
    };
}

// i8/u8 are widened here, so they always print as numbers
impl_render_signed!(i8, i16, i32, i64, isize);
impl_render_unsigned!(u8, u16, u32, u64, usize);

impl Render for f32 {
    fn shape(&self) -> Shape<'_> {
        Shape::Prim(Prim::F32(*self))
    }
}

impl Render for f64 {
    fn shape(&self) -> Shape<'_> {
        Shape::Prim(Prim::F64(*self))
    }
}

impl Render for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Prim(Prim::Bool(*self))
    }
}

impl Render for Char {
    fn shape(&self) -> Shape<'_> {
        Shape::Prim(Prim::Char(*self))
    }

    fn seq_shape(items: &[Self]) -> Shape<'_> {
        Shape::Text(items)
    }
}

impl Render for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(chars_of(self.as_bytes()))
    }
}

impl Render for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(chars_of(self.as_bytes()))
    }
}

impl<T: Render> Render for [T] {
    fn shape(&self) -> Shape<'_> {
        T::seq_shape(self)
    }
}

impl<T: Render> Render for Array<T> {
    fn shape(&self) -> Shape<'_> {
        T::seq_shape(self.as_slice())
    }
}

impl<T: Render> Render for ConstArray<T> {
    fn shape(&self) -> Shape<'_> {
        T::seq_shape(self.as_slice())
    }
}

impl<T: Render> Render for Span<'_, T> {
    fn shape(&self) -> Shape<'_> {
        T::seq_shape(self.as_slice())
    }
}

impl<T: Render, const N: usize> Render for LiteralArray<T, N> {
    fn shape(&self) -> Shape<'_> {
        T::seq_shape(self.as_slice())
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}
