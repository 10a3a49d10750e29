//! Sorting and filtering of IPv4 address lists.
//!
//! Addresses are read from the first tab-separated field of each input line,
//! encoded as order-preserving 32-bit keys and collected into an
//! [`AddressPool`], which answers prefix and any-octet queries.

pub mod error;
pub mod ipv4;
pub mod pool;
pub mod report;

pub use error::{Error, ParseError, Result};
pub use ipv4::{parse_line, parse_record, prefix_range, Address, Key};
pub use pool::{AddressPool, MalformedLines};
pub use report::{render, write_report, Order};

use std::io::{BufRead, Write};

/// Reads every record from `input`, aborting on the first malformed one, and
/// writes the report to `output`. Nothing is written unless all input parsed.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
    let pool = AddressPool::from_reader(input, MalformedLines::Abort)?;
    write_report(&pool, output)?;
    Ok(())
}
