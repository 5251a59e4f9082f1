mod error;
pub use error::*;

mod chars;
pub use chars::*;

mod array;
pub use array::*;

mod span;
pub use span::*;

mod const_array;
pub use const_array::*;

mod literal;
pub use literal::*;

mod string;
pub use string::*;

pub mod render;
pub use render::{format_values, Prim, Render, Shape};

mod config;
pub use config::*;

mod printer;
pub use printer::*;

mod parse;
pub use parse::*;

pub mod io;
pub use io::{args_from_env, ingest_args, input, read_input};
