//! Parser for the textual number set notation.
//!
//! The notation is a comma or whitespace separated list of ascending
//! ranges over the decimal digits and `-`:
//!
//! ```text
//! set    := (range (sep range)*)?
//! sep    := (',' | ws)*
//! range  := '-' upper | lower '-' upper? | lower
//! ```
//!
//! `n` selects the single value n, `n-m` the values from n to m (in
//! either order), `-n` everything from the lower bound up to n, `n-`
//! everything from n up to the upper bound, and a bare `-` the whole
//! window. Adjacent ranges are fused, so `"-3, 4"` parsed with bounds
//! `[1, 13]` is the single range `1-4`.

use crate::error::{ParseError, RangeError};
use crate::range::{clamp_bounds, Range};
use crate::set::{NumberSet, NumberSetBuilder};

impl NumberSet {
    /// Parses `text` as a number set over the window `[min, max]`.
    ///
    /// The bound conventions of [`Range::new`] apply: a negative `min`
    /// selects 0, a negative `max` selects [`i32::MAX`], a reversed
    /// pair is swapped. The entire input must belong to the notation;
    /// anything else fails with [`RangeError::InvalidCharacter`] at the
    /// position of the first stray byte. All errors carry the byte
    /// offset of the token that caused them.
    pub fn parse(text: &str, min: i32, max: i32) -> Result<NumberSet, ParseError> {
        let (set, consumed) = Self::parse_prefix(text, min, max)?;
        if consumed != text.len() {
            return Err(ParseError {
                kind: RangeError::InvalidCharacter,
                pos: consumed,
            });
        }
        Ok(set)
    }

    /// Parses the longest prefix of `text` that belongs to the
    /// notation, returning the set and the number of bytes consumed.
    ///
    /// Separators following the last range are consumed, so the
    /// returned position rests on the first byte that cannot continue
    /// the set. This is the embedding point for surrounding languages
    /// that place a number set in the middle of a larger expression.
    pub fn parse_prefix(
        text: &str,
        min: i32,
        max: i32,
    ) -> Result<(NumberSet, usize), ParseError> {
        let (min, max) = clamp_bounds(min, max);
        let bytes = text.as_bytes();
        let mut builder = NumberSetBuilder::new();
        let mut pos = 0;

        loop {
            while bytes
                .get(pos)
                .is_some_and(|&b| b == b',' || b.is_ascii_whitespace())
            {
                pos += 1;
            }
            let token_start = pos;
            let at_error = |kind| ParseError {
                kind,
                pos: token_start,
            };

            let lower = match bytes.get(pos) {
                Some(b) if b.is_ascii_digit() => {
                    Some(parse_decimal(bytes, &mut pos).map_err(at_error)?)
                }
                Some(b'-') => None,
                _ => break,
            };
            let (start, end) = if bytes.get(pos) == Some(&b'-') {
                pos += 1;
                let upper = match bytes.get(pos) {
                    Some(b) if b.is_ascii_digit() => {
                        Some(parse_decimal(bytes, &mut pos).map_err(at_error)?)
                    }
                    _ => None,
                };
                (lower.unwrap_or(min), upper.unwrap_or(max))
            } else {
                // the token began with a digit, so `lower` is present
                let n = lower.unwrap_or(min);
                (n, n)
            };

            let range = Range::new(start, end, min, max).map_err(at_error)?;
            builder.append(range).map_err(at_error)?;
        }

        Ok((builder.finish(), pos))
    }
}

impl core::str::FromStr for NumberSet {
    type Err = ParseError;

    /// Parses with the widest window, `[0, i32::MAX]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumberSet::parse(s, -1, -1)
    }
}

/// Accumulates a decimal literal, failing with
/// [`RangeError::Overflow`] before the value can wrap.
fn parse_decimal(bytes: &[u8], pos: &mut usize) -> Result<i32, RangeError> {
    let mut value: i32 = 0;
    while let Some(&b) = bytes.get(*pos) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as i32))
            .ok_or(RangeError::Overflow)?;
        *pos += 1;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(set: &NumberSet) -> Vec<(i32, i32)> {
        set.ranges().iter().map(|r| (r.start(), r.end())).collect()
    }

    #[test]
    fn range_forms() {
        let set = NumberSet::parse("3", 0, 100).unwrap();
        assert_eq!(spans(&set), [(3, 3)]);
        let set = NumberSet::parse("3-7", 0, 100).unwrap();
        assert_eq!(spans(&set), [(3, 7)]);
        let set = NumberSet::parse("7-3", 0, 100).unwrap();
        assert_eq!(spans(&set), [(3, 7)]);
        let set = NumberSet::parse("-7", 2, 100).unwrap();
        assert_eq!(spans(&set), [(2, 7)]);
        let set = NumberSet::parse("7-", 2, 100).unwrap();
        assert_eq!(spans(&set), [(7, 100)]);
        let set = NumberSet::parse("-", 2, 100).unwrap();
        assert_eq!(spans(&set), [(2, 100)]);
    }

    #[test]
    fn separators_are_free_form() {
        let set = NumberSet::parse(" ,,3 ,  5-7,,\t9 , ", 0, 100).unwrap();
        assert_eq!(spans(&set), [(3, 3), (5, 7), (9, 9)]);
        let set = NumberSet::parse("", 0, 100).unwrap();
        assert!(set.is_empty());
        let set = NumberSet::parse(" , ", 0, 100).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn adjacent_ranges_fuse() {
        let set = NumberSet::parse("-3, 4, 6-8, 10-", 1, 13).unwrap();
        assert_eq!(spans(&set), [(1, 4), (6, 8), (10, 13)]);
    }

    #[test]
    fn ordering_errors_point_at_the_token() {
        // entirely before the previous range
        let err = NumberSet::parse("9-10, 3-4", 0, 100).unwrap_err();
        assert_eq!(err.kind, RangeError::NotAscending);
        assert_eq!(err.pos, 6);
        // intersecting the previous range
        let err = NumberSet::parse(" 12-15, 13-20", 0, 100).unwrap_err();
        assert_eq!(err.kind, RangeError::OverlappingRanges);
        assert_eq!(err.pos, 8);
        // touching the previous range's start counts as out of order
        let err = NumberSet::parse("3-5, 1-3", 0, 100).unwrap_err();
        assert_eq!(err.kind, RangeError::NotAscending);
        assert_eq!(err.pos, 5);
    }

    #[test]
    fn overflow_is_detected_before_it_happens() {
        // 2 * 2147483647
        let err = NumberSet::parse("4294967294", 0, -1).unwrap_err();
        assert_eq!(err.kind, RangeError::Overflow);
        assert_eq!(err.pos, 0);
        let err = NumberSet::parse("5, 4294967294", 0, -1).unwrap_err();
        assert_eq!(err.pos, 3);
        // the maximum itself is fine
        let set = NumberSet::parse("2147483647", 0, -1).unwrap();
        assert_eq!(spans(&set), [(i32::MAX, i32::MAX)]);
    }

    #[test]
    fn out_of_window_ranges_are_rejected() {
        let err = NumberSet::parse("3-9", 0, 5).unwrap_err();
        assert_eq!(err.kind, RangeError::InvalidRange);
        assert_eq!(err.pos, 0);
        let err = NumberSet::parse("8, 0-2", 1, 100).unwrap_err();
        assert_eq!(err.kind, RangeError::InvalidRange);
        assert_eq!(err.pos, 3);
    }

    #[test]
    fn stray_bytes_fail_strict_parsing() {
        let err = NumberSet::parse("1-3 x", 0, 100).unwrap_err();
        assert_eq!(err.kind, RangeError::InvalidCharacter);
        assert_eq!(err.pos, 4);
        let err = NumberSet::parse("x", 0, 100).unwrap_err();
        assert_eq!(err.pos, 0);
    }

    #[test]
    fn prefix_parsing_rests_on_the_first_stray_byte() {
        let (set, consumed) = NumberSet::parse_prefix("1-3, 7 @ 26", 0, 100).unwrap();
        assert_eq!(spans(&set), [(1, 3), (7, 7)]);
        assert_eq!(consumed, 7);
        assert_eq!(&"1-3, 7 @ 26"[consumed..], "@ 26");

        let (set, consumed) = NumberSet::parse_prefix("4-6  ", 0, 100).unwrap();
        assert_eq!(spans(&set), [(4, 6)]);
        assert_eq!(consumed, 5);

        let (set, consumed) = NumberSet::parse_prefix("@", 0, 100).unwrap();
        assert!(set.is_empty());
        assert_eq!(consumed, 0);
    }

    #[test]
    fn from_str_uses_the_widest_window() {
        let set: NumberSet = "100-".parse().unwrap();
        assert_eq!(spans(&set), [(100, i32::MAX)]);
        assert!("1-3 x".parse::<NumberSet>().is_err());
    }

    #[test]
    fn round_trip_is_canonical() {
        for text in ["-3, 4, 6-8, 10-", "1,2,3", "5-7 9 11-", "-"] {
            let set = NumberSet::parse(text, 1, 13).unwrap();
            let shown = set.show(1, 13);
            let reparsed = NumberSet::parse(&shown, 1, 13).unwrap();
            assert_eq!(set, reparsed, "{text:?} -> {shown:?}");
        }
    }
}
