//! Ordered, duplicate-preserving collection of parsed addresses.
//!
//! Keys are held in a `BTreeMap` from key to multiplicity, so every query is a
//! walk over the map in key order and each key is repeated as many times as it
//! was inserted. All sequences are double-ended; reverse them for descending
//! output.

use crate::error::{Error, Result};
use crate::ipv4::{self, Address, Key};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::BufRead;
use std::iter::FromIterator;

/// What to do with a line whose address does not parse.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MalformedLines {
    /// Stop reading and return the error; nothing read so far is kept.
    Abort,
    /// Log the line and carry on.
    Skip,
}

impl Default for MalformedLines {
    fn default() -> Self {
        MalformedLines::Abort
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AddressPool {
    inner: BTreeMap<Key, usize>,
    len: usize,
}

fn repeat_keys<'a, I>(entries: I) -> impl DoubleEndedIterator<Item = Key> + 'a
where
    I: DoubleEndedIterator<Item = (&'a Key, &'a usize)> + 'a,
{
    entries.flat_map(|(&k, &n)| (0..n).map(move |_| k))
}

impl AddressPool {
    pub fn new() -> Self {
        AddressPool {
            inner: BTreeMap::new(),
            len: 0,
        }
    }

    /// Reads one record per line, taking the address from the first
    /// tab-separated field. Other fields are never decoded, so they may hold
    /// arbitrary bytes.
    pub fn from_reader<R: BufRead>(reader: R, policy: MalformedLines) -> Result<Self> {
        let mut pool = AddressPool::new();
        let mut skipped = 0usize;
        for (i, record) in reader.split(b'\n').enumerate() {
            let mut record = record?;
            if record.last() == Some(&b'\r') {
                record.pop();
            }
            let line = i + 1;
            match ipv4::parse_record(&record) {
                Ok(addr) => pool.insert(addr.key()),
                Err(source) => match policy {
                    MalformedLines::Abort => {
                        debug!("Dropping {} addresses read before line {}", pool.len(), line);
                        return Err(Error::Malformed { line, source });
                    }
                    MalformedLines::Skip => {
                        warn!("Skipping line {}: {}", line, source);
                        skipped += 1;
                    }
                },
            }
        }
        info!(
            "Read {} addresses ({} distinct, {} lines skipped)",
            pool.len(),
            pool.inner.len(),
            skipped
        );
        Ok(pool)
    }

    pub fn insert(&mut self, key: Key) {
        *self.inner.entry(key).or_insert(0) += 1;
        self.len += 1;
    }

    /// Number of addresses, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How many times `key` was inserted.
    pub fn count(&self, key: Key) -> usize {
        self.inner.get(&key).copied().unwrap_or(0)
    }

    /// Every key, ascending.
    pub fn all(&self) -> impl DoubleEndedIterator<Item = Key> + '_ {
        repeat_keys(self.inner.iter())
    }

    /// Keys of addresses starting with `prefix`, ascending.
    pub fn range_by_prefix(&self, prefix: &[u8]) -> impl DoubleEndedIterator<Item = Key> + '_ {
        repeat_keys(self.inner.range(ipv4::prefix_range(prefix)))
    }

    pub fn range_by_prefix1(&self, first: u8) -> impl DoubleEndedIterator<Item = Key> + '_ {
        self.range_by_prefix(&[first])
    }

    pub fn range_by_prefix2(
        &self,
        first: u8,
        second: u8,
    ) -> impl DoubleEndedIterator<Item = Key> + '_ {
        self.range_by_prefix(&[first, second])
    }

    /// Keys with `target` in any of the four octets, ascending. Full scan.
    pub fn filter_any_octet(&self, target: u8) -> impl DoubleEndedIterator<Item = Key> + '_ {
        repeat_keys(
            self.inner
                .iter()
                .filter(move |entry| Address::from(*entry.0).contains_octet(target)),
        )
    }
}

impl Extend<Address> for AddressPool {
    fn extend<T: IntoIterator<Item = Address>>(&mut self, iter: T) {
        for addr in iter {
            self.insert(addr.key());
        }
    }
}

impl FromIterator<Address> for AddressPool {
    fn from_iter<T: IntoIterator<Item = Address>>(iter: T) -> Self {
        let mut pool = AddressPool::new();
        pool.extend(iter);
        pool
    }
}

impl Display for AddressPool {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for k in self.all() {
            writeln!(f, "{}", Address::from(k))?;
        }
        Ok(())
    }
}
