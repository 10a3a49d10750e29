use std::io;

/// Reasons a dotted-decimal address is rejected.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("IPv4 must have 4 octets, got {count} in {input:?}")]
    OctetCount { input: String, count: usize },

    #[error("Invalid IPv4 octet: {octet:?}")]
    NotNumeric { octet: String },

    #[error("IPv4 octet out of range: {octet}")]
    OutOfRange { octet: String },

    #[error("Address field is not valid UTF-8: {field:?}")]
    NotUtf8 { field: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
