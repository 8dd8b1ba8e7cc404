//! Range values and wrap point validation.

use crate::error::RangeError;

/// Non-cyclic ranges keep both interval bounds at this value.
const NO_INTERVAL: i32 = 0;

/// A contiguous or cyclically wrapping interval of non-negative integers.
///
/// A range is either *linear*, denoting the contiguous integers
/// `start..=end`, or confined to an enclosing interval `[base, wrap]`
/// carved out of a strictly ascending partition of the number line (the
/// wrap points, see [`check_wrap_points`]). A confined range with
/// `start > end` genuinely wraps past the end of its interval and
/// denotes `start..=wrap` followed by `base..=end`. Point groups on a
/// closed glyph contour are described this way, since a group may wrap
/// past the point at which the contour starts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub(crate) start: i32,
    pub(crate) end: i32,
    /// First value of the enclosing interval, or `NO_INTERVAL`.
    pub(crate) base: i32,
    /// Last value of the enclosing interval, or `NO_INTERVAL`.
    pub(crate) wrap: i32,
}

impl Range {
    /// Creates a linear range covering `start..=end`.
    ///
    /// `start` and `end` may be given in either order. A negative `min`
    /// is treated as 0 and a negative `max` as [`i32::MAX`]; `min` and
    /// `max` may also be given in either order. Fails with
    /// [`RangeError::InvalidRange`] if the range does not lie inside
    /// `[min, max]`.
    pub fn new(start: i32, end: i32, min: i32, max: i32) -> Result<Self, RangeError> {
        let (min, max) = clamp_bounds(min, max);
        let (start, end) = if start > end {
            (end, start)
        } else {
            (start, end)
        };
        if start < min || end > max {
            return Err(RangeError::InvalidRange);
        }
        Ok(Range {
            start,
            end,
            base: NO_INTERVAL,
            wrap: NO_INTERVAL,
        })
    }

    /// Creates a range confined to the enclosing interval of `points`
    /// that contains both `start` and `end`.
    ///
    /// The caller's `start`/`end` order is preserved: `start > end`
    /// produces a range that wraps past the end of its interval. Fails
    /// with [`RangeError::InvalidWrapRange`] if `points` is not a valid
    /// partition or no interval of it contains both values.
    pub fn new_wrapped(start: i32, end: i32, points: &[i32]) -> Result<Self, RangeError> {
        if !check_wrap_points(points) {
            return Err(RangeError::InvalidWrapRange);
        }
        let (s, e) = if start > end {
            (end, start)
        } else {
            (start, end)
        };
        for pair in points.windows(2) {
            if s > pair[0] && e <= pair[1] {
                return Ok(Range {
                    start,
                    end,
                    base: pair[0] + 1,
                    wrap: pair[1],
                });
            }
        }
        Err(RangeError::InvalidWrapRange)
    }

    /// First value of the range as given by the caller.
    ///
    /// For a genuinely wrapping range this is numerically greater than
    /// [`end`](Self::end).
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Last value of the range as given by the caller.
    pub fn end(&self) -> i32 {
        self.end
    }

    /// The enclosing interval as `(base, wrap)`, or `None` for a
    /// linear range.
    pub fn enclosing_interval(&self) -> Option<(i32, i32)> {
        self.is_wrapped().then_some((self.base, self.wrap))
    }

    /// Returns true if `n` is a member of this range.
    pub fn contains(&self, n: i32) -> bool {
        if self.wraps() {
            (self.start <= n && n <= self.wrap) || (self.base <= n && n <= self.end)
        } else {
            self.start <= n && n <= self.end
        }
    }

    /// True if this range is confined to an enclosing interval.
    pub(crate) fn is_wrapped(&self) -> bool {
        self.base != self.wrap
    }

    /// True if this range genuinely wraps past the end of its interval.
    pub(crate) fn wraps(&self) -> bool {
        self.is_wrapped() && self.start > self.end
    }

    /// First value produced when enumerating this range.
    pub(crate) fn first_value(&self) -> i32 {
        self.start
    }

    /// The value following `v` in enumeration order, if any.
    ///
    /// `v` must be a member of the range.
    pub(crate) fn next_value(&self, v: i32) -> Option<i32> {
        if self.wraps() {
            if v == self.end {
                None
            } else if v == self.wrap {
                Some(self.base)
            } else {
                Some(v + 1)
            }
        } else if v < self.end {
            Some(v + 1)
        } else {
            None
        }
    }
}

/// Applies the bound conventions shared by range construction, parsing
/// and rendering: negative `min` selects 0, negative `max` selects
/// [`i32::MAX`], and a reversed pair is swapped.
pub(crate) fn clamp_bounds(min: i32, max: i32) -> (i32, i32) {
    let min = if min < 0 { 0 } else { min };
    let max = if max < 0 { i32::MAX } else { max };
    if min > max {
        (max, min)
    } else {
        (min, max)
    }
}

/// Returns true if `points` is a valid wrap point partition: at least
/// two entries, the first no less than -1, strictly ascending.
///
/// Each adjacent pair `(points[i-1], points[i])` describes the
/// enclosing interval `[points[i-1] + 1, points[i]]`. For glyph contour
/// groups the entries are the last point index of each contour,
/// preceded by one less than the first contour's starting point
/// (conventionally -1).
pub fn check_wrap_points(points: &[i32]) -> bool {
    points.len() >= 2 && points[0] >= -1 && points.windows(2).all(|p| p[0] < p[1])
}
