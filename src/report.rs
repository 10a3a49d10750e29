use crate::ipv4::{Address, Key};
use crate::pool::AddressPool;
use std::io::{self, Write};

/// First octet selected by the second section.
pub const FIRST_OCTET: u8 = 1;
/// Leading octets selected by the third section.
pub const PREFIX: [u8; 2] = [46, 70];
/// Octet searched for in any position by the fourth section.
pub const ANY_OCTET: u8 = 46;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Order {
    Ascending,
    Descending,
}

fn dotted(key: Key) -> String {
    Address::from(key).to_string()
}

/// Renders keys as `o1.o2.o3.o4` lines, walking the sequence in `order`.
pub fn render<'a, I>(keys: I, order: Order) -> Box<dyn Iterator<Item = String> + 'a>
where
    I: DoubleEndedIterator<Item = Key> + 'a,
{
    match order {
        Order::Ascending => Box::new(keys.map(dotted)),
        Order::Descending => Box::new(keys.rev().map(dotted)),
    }
}

/// Writes the four report sections back to back, each in descending order:
/// every address, first octet [`FIRST_OCTET`], leading octets [`PREFIX`],
/// and any octet equal to [`ANY_OCTET`].
pub fn write_report<W: Write>(pool: &AddressPool, mut out: W) -> io::Result<()> {
    let sections = vec![
        render(pool.all(), Order::Descending),
        render(pool.range_by_prefix1(FIRST_OCTET), Order::Descending),
        render(pool.range_by_prefix2(PREFIX[0], PREFIX[1]), Order::Descending),
        render(pool.filter_any_octet(ANY_OCTET), Order::Descending),
    ];
    for section in sections {
        for line in section {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()
}
