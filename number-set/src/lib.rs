//! Sparse sets of non-negative integers for hinting control languages.
//!
//! Hinting tools let users pin size dependent adjustments to specific
//! glyph points and pixel sizes with a compact textual notation:
//! `"8-12, 14, 20-"` selects the values 8 to 12, the value 14, and
//! everything from 20 up to the caller's upper bound. This crate
//! implements the underlying set algebra: [`Range`] values, the
//! incremental [`NumberSetBuilder`] with ordered, merging insertion,
//! the frozen [`NumberSet`] with membership queries and element
//! iteration, and the parser and renderer for the notation.
//!
//! Sets come in two kinds. *Linear* sets hold plain integer ranges and
//! back point index and ppem selections; numerically adjacent ranges
//! are fused automatically. *Wrapped* sets hold ranges confined to the
//! intervals of a wrap point partition (one interval per glyph
//! contour) and describe groups of contour points; a group may wrap
//! past the point at which its contour starts, written `18-12`, and
//! such ranges are never fused. The two kinds cannot be mixed in one
//! set.
//!
//! ```
//! use number_set::NumberSet;
//!
//! let ppems = NumberSet::parse("8-12, 14, 20-", 6, 48).unwrap();
//! assert!(ppems.contains(11));
//! assert!(!ppems.contains(13));
//! assert_eq!(ppems.show(6, 48), "8-12, 14, 20-");
//! assert_eq!(ppems.iter().take(3).collect::<Vec<_>>(), [8, 9, 10]);
//! ```
//!
//! Builders accept ranges in ascending order in O(1)
//! ([`NumberSetBuilder::append`]) or splice them anywhere in O(n)
//! ([`NumberSetBuilder::insert`]); [`NumberSetBuilder::finish`]
//! freezes the accumulated ranges into the canonical order used by all
//! queries. Every misuse (out of order or overlapping ranges, bounds
//! violations, mixed kinds, oversized literals) surfaces as a typed
//! [`RangeError`], and parse failures additionally carry the byte
//! offset of the offending token.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod iter;
mod parse;
mod range;
mod set;
mod show;

pub use error::{ParseError, RangeError};
pub use iter::Elements;
pub use range::{check_wrap_points, Range};
pub use set::{NumberSet, NumberSetBuilder};
