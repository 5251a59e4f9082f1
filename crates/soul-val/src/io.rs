//! Host-facing adapters: console input and process arguments

use crate::{Array, SoulResult, SoulStr};
use std::io::{self, BufRead};

/// Read one line, without its terminator. Returns an empty string at end of input.
pub fn input<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<SoulStr> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    Ok(SoulStr::from(line))
}

/// Read one line from stdin
pub fn read_input() -> SoulResult<SoulStr> {
    let stdin = io::stdin();
    let line = input(&mut stdin.lock())?;
    Ok(line)
}

/// Build the argument array, one string per argument.
///
/// By convention element 0 is the program name.
pub fn ingest_args<I, S>(args: I) -> Array<SoulStr>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let args: Array<SoulStr> = args
        .into_iter()
        .map(|arg| SoulStr::from_bytes(arg.as_ref()))
        .collect();
    log::trace!("args: ingested {} arguments", args.size());
    args
}

/// Arguments of the running process
pub fn args_from_env() -> Array<SoulStr> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStringExt;
        ingest_args(std::env::args_os().map(OsStringExt::into_vec))
    }
    #[cfg(not(unix))]
    {
        ingest_args(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()))
    }
}
