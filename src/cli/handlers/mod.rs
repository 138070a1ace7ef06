pub mod config;
pub mod decode;
pub mod encode;

use std::error::Error;
use std::fmt::Display;
use std::io::{self, BufWriter, Read, Write};

/// Items from the command line, or whitespace-separated items from stdin
/// when none were given.
fn collect_items(args: Vec<String>) -> io::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    tracing::debug!("reading items from stdin");
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.split_whitespace().map(str::to_owned).collect())
}

/// Runs `convert` over every item, writing one result per line.
///
/// Without `keep_going` the first failure is returned. With it each failure
/// is reported on stderr and the run fails at the end.
fn process<T, E, F>(
    items: Vec<String>,
    keep_going: bool,
    mut convert: F,
) -> Result<(), Box<dyn Error>>
where
    T: Display,
    E: Error + 'static,
    F: FnMut(&str) -> Result<T, E>,
{
    let total = items.len();
    let mut failed = 0usize;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for item in &items {
        match convert(item) {
            Ok(converted) => {
                tracing::trace!(input = %item, output = %converted, "converted");
                writeln!(out, "{converted}")?;
            }
            Err(e) if keep_going => {
                failed += 1;
                out.flush()?;
                eprintln!("{e}");
            }
            Err(e) => {
                out.flush()?;
                return Err(e.into());
            }
        }
    }
    out.flush()?;

    if failed > 0 {
        return Err(format!("error: {failed} of {total} items failed").into());
    }
    tracing::debug!(total, "all items converted");
    Ok(())
}
