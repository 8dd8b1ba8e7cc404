//! Error definitions for number set construction and parsing.

use core::fmt;

/// Errors that may occur when constructing ranges or splicing them
/// into a set.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RangeError {
    /// A range bound fell outside the caller supplied limits, or a
    /// linear range was combined with a wrapped one.
    InvalidRange,
    /// No enclosing interval of the wrap point partition contains the
    /// requested range.
    InvalidWrapRange,
    /// A decimal literal exceeded the representable range.
    Overflow,
    /// Two ranges in the same set intersect.
    OverlappingRanges,
    /// A range was supplied out of ascending order.
    NotAscending,
    /// A character outside the set notation was encountered.
    InvalidCharacter,
    /// Memory for a new range could not be allocated.
    InsufficientMemory,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange => write!(f, "range is outside the valid bounds"),
            Self::InvalidWrapRange => {
                write!(f, "no enclosing interval contains the range")
            }
            Self::Overflow => write!(f, "number is too large"),
            Self::OverlappingRanges => write!(f, "ranges overlap"),
            Self::NotAscending => write!(f, "ranges are not in ascending order"),
            Self::InvalidCharacter => write!(f, "invalid character"),
            Self::InsufficientMemory => write!(f, "exceeded memory limits"),
        }
    }
}

impl std::error::Error for RangeError {}

/// Parse failure together with the position of the offending token.
///
/// `pos` is a byte offset into the parsed string pointing at the first
/// character of the token that caused the failure, not at the scan
/// cursor, so callers can produce precise diagnostics.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ParseError {
    pub kind: RangeError,
    pub pos: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.pos)
    }
}

impl std::error::Error for ParseError {}
