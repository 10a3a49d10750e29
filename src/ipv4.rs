use crate::error::ParseError;
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::net::Ipv4Addr;
use std::ops::RangeInclusive;
use std::str::{self, FromStr};

/// 32-bit encoding of an [`Address`], first octet most significant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Key(u32);

impl Key {
    pub const MIN: Key = Key(0);
    pub const MAX: Key = Key(u32::MAX);

    pub const fn new(value: u32) -> Self {
        Key(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Keys sort as unsigned integers, ascending. Because the first octet sits in
/// the high byte this is the same order as comparing addresses octet by octet.
impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Address {
    octets: [u8; 4],
}

impl Address {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Address {
            octets: [a, b, c, d],
        }
    }

    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    pub fn key(&self) -> Key {
        let [a, b, c, d] = self.octets;
        Key(((a as u32) << 24) | ((b as u32) << 16) | ((c as u32) << 8) | d as u32)
    }

    pub fn contains_octet(&self, octet: u8) -> bool {
        self.octets.contains(&octet)
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.octets.starts_with(prefix)
    }
}

impl From<Key> for Address {
    fn from(key: Key) -> Self {
        let k = key.0;
        Address::new((k >> 24) as u8, (k >> 16) as u8, (k >> 8) as u8, k as u8)
    }
}

impl From<Address> for Key {
    fn from(addr: Address) -> Self {
        addr.key()
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address {
            octets: ip.octets(),
        }
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        Ipv4Addr::from(addr.octets)
    }
}

/// Closed key range covering every address that starts with `prefix`.
///
/// Octets past the fourth are ignored; an empty prefix covers the whole space.
pub fn prefix_range(prefix: &[u8]) -> RangeInclusive<Key> {
    let mut low = [0u8; 4];
    let mut high = [u8::MAX; 4];
    for (i, &octet) in prefix.iter().take(4).enumerate() {
        low[i] = octet;
        high[i] = octet;
    }
    Address { octets: low }.key()..=Address { octets: high }.key()
}

fn parse_octet(s: &str) -> Result<u8, ParseError> {
    lazy_static! {
        static ref DIGITS: Regex = Regex::new(r"^[0-9]+$").expect("Not possible");
    }
    if !DIGITS.is_match(s) {
        return Err(ParseError::NotNumeric {
            octet: s.to_owned(),
        });
    }
    // Only overflow is left once the text is all digits.
    s.parse::<u8>().map_err(|_| ParseError::OutOfRange {
        octet: s.to_owned(),
    })
}

impl FromStr for Address {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return Err(ParseError::OctetCount {
                input: s.to_owned(),
                count: parts.len(),
            });
        }
        let mut octets = [0u8; 4];
        for (slot, part) in octets.iter_mut().zip(parts) {
            *slot = parse_octet(part)?;
        }
        Ok(Address { octets })
    }
}

/// Parses the address held in the first tab-separated field of a record.
pub fn parse_line(line: &str) -> Result<Address, ParseError> {
    line.split('\t').next().unwrap_or_default().parse()
}

/// Like [`parse_line`], for raw bytes. Only the first field has to be UTF-8.
pub fn parse_record(record: &[u8]) -> Result<Address, ParseError> {
    let field = record.split(|&b| b == b'\t').next().unwrap_or_default();
    str::from_utf8(field)
        .map_err(|_| ParseError::NotUtf8 {
            field: String::from_utf8_lossy(field).into_owned(),
        })?
        .parse()
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let [a, b, c, d] = self.octets;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}
