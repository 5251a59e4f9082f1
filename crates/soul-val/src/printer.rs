use crate::render::{write_values, Render};
use crate::{RuntimeConfig, SoulResult};
use std::io::{self, Write};

/// Writes rendered values straight to a byte sink
pub struct Printer<W: Write> {
    out: W,
    config: RuntimeConfig,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, config: RuntimeConfig) -> Self {
        log::debug!("printer: line ending {:?}, flush {}", config.line_ending, config.flush_on_newline);
        Self { out, config }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn print(&mut self, args: &[&dyn Render]) -> io::Result<()> {
        write_values(&mut self.out, args)
    }

    pub fn println(&mut self, args: &[&dyn Render]) -> io::Result<()> {
        self.print(args)?;
        self.newline()
    }

    pub fn newline(&mut self) -> io::Result<()> {
        self.out.write_all(self.config.line_ending.as_bytes())?;
        if self.config.flush_on_newline {
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Printer over the locked process stdout
pub fn stdout_printer() -> Printer<io::StdoutLock<'static>> {
    Printer::new(io::stdout().lock(), RuntimeConfig::global().clone())
}

pub fn print(args: &[&dyn Render]) -> SoulResult<()> {
    let mut printer = stdout_printer();
    printer.print(args)?;
    Ok(())
}

pub fn println(args: &[&dyn Render]) -> SoulResult<()> {
    let mut printer = stdout_printer();
    printer.println(args)?;
    Ok(())
}

/// Write only the line terminator
pub fn newline() -> SoulResult<()> {
    stdout_printer().newline()?;
    Ok(())
}

/// Render any number of values into a new `SoulStr`.
///
/// ```rust
/// use soul_val::{soul_format, SoulStr};
///
/// let names = soul_val::Array::from_vec(vec![SoulStr::from("a"), SoulStr::from("b")]);
/// assert_eq!(soul_format!("names: ", names), "names: [\"a\", \"b\"]");
/// ```
#[macro_export]
macro_rules! soul_format {
    ($($arg:expr),* $(,)?) => {
        $crate::format_values(&[$(&$arg as &dyn $crate::Render),*])
    };
}

#[macro_export]
macro_rules! soul_print {
    ($($arg:expr),* $(,)?) => {
        $crate::print(&[$(&$arg as &dyn $crate::Render),*])
    };
}

/// Print values followed by the line terminator; with no arguments only the
/// terminator is written.
///
/// ```rust
/// use soul_val::{soul_println, SoulResult};
///
/// fn greet() -> SoulResult<()> {
///     soul_println!("hello, ", 42)?;
///     soul_println!()?;
///     Ok(())
/// }
/// greet().unwrap();
/// ```
#[macro_export]
macro_rules! soul_println {
    () => {
        $crate::newline()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::println(&[$(&$arg as &dyn $crate::Render),+])
    };
}
