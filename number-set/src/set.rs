//! Number sets and their construction algebra.

use crate::error::RangeError;
use crate::iter::Elements;
use crate::range::Range;

/// A frozen sparse set of non-negative integers.
///
/// The ranges of a set are kept in canonical order: ascending, without
/// overlaps, with numerically adjacent linear ranges fused into one.
/// Wrapped sets are ordered by enclosing interval first and by start
/// within an interval; a genuinely wrapping range, when present, is the
/// last of its interval. Sets are built with [`NumberSetBuilder`] or
/// parsed with [`NumberSet::parse`]; once frozen they only serve
/// membership queries, iteration and rendering, so sharing one between
/// readers is safe.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberSet {
    pub(crate) ranges: Vec<Range>,
}

impl NumberSet {
    /// Returns true if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The ranges of the set in canonical order.
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    /// Returns true if `n` is a member of the set.
    pub fn contains(&self, n: i32) -> bool {
        self.ranges.iter().any(|r| r.contains(n))
    }

    /// Returns an iterator over every element of the set in canonical
    /// order.
    pub fn iter(&self) -> Elements<'_> {
        Elements::new(self)
    }
}

impl From<Range> for NumberSet {
    fn from(range: Range) -> Self {
        NumberSet {
            ranges: vec![range],
        }
    }
}

/// Incremental builder for [`NumberSet`].
///
/// Ranges are accumulated in construction order: the most recently
/// accepted range is the construction head and, for the checked
/// methods, also the numeric maximum, which makes [`append`] the O(1)
/// fast path for callers that produce ranges in ascending order (the
/// parser, and bulk loads). [`insert`] splices a range anywhere at
/// O(n). [`finish`] converts the accumulated list into a frozen
/// canonical set in one linear pass.
///
/// A builder holds either linear or wrapped ranges, never both; the
/// checked methods reject the other kind with
/// [`RangeError::InvalidRange`].
///
/// [`append`]: Self::append
/// [`insert`]: Self::insert
/// [`finish`]: Self::finish
#[derive(Clone, Default, Debug)]
pub struct NumberSetBuilder {
    // Ascending by (interval, start); the construction head is at the
    // back so accepting a new maximum is a push.
    ranges: Vec<Range>,
}

impl NumberSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn reserve_one(&mut self) -> Result<(), RangeError> {
        self.ranges
            .try_reserve(1)
            .map_err(|_| RangeError::InsufficientMemory)
    }

    /// Accepts a linear range lying strictly past everything accepted
    /// so far.
    ///
    /// `element` must start past the end of the construction head;
    /// exact adjacency (`element.start == head.end + 1`) fuses the two
    /// into one range. Fails with [`RangeError::NotAscending`] if the
    /// element lies entirely before the head,
    /// [`RangeError::OverlappingRanges`] if the two intersect, and
    /// [`RangeError::InvalidRange`] if either operand is wrapped.
    pub fn append(&mut self, element: Range) -> Result<(), RangeError> {
        if element.is_wrapped() || self.ranges.last().is_some_and(|r| r.is_wrapped()) {
            return Err(RangeError::InvalidRange);
        }
        let Some(head) = self.ranges.last_mut() else {
            self.reserve_one()?;
            self.ranges.push(element);
            return Ok(());
        };
        if element.start <= head.end {
            return Err(if head.start >= element.end {
                RangeError::NotAscending
            } else {
                RangeError::OverlappingRanges
            });
        }
        if element.start == head.end + 1 {
            head.end = element.end;
        } else {
            self.reserve_one()?;
            self.ranges.push(element);
        }
        Ok(())
    }

    /// Accepts a range without any ordering, overlap or kind checks.
    ///
    /// For bulk loads that are known to be sorted, disjoint and
    /// non-adjacent: the per-element comparisons of [`append`] are
    /// skipped entirely. A builder fed through this method must not be
    /// given to [`insert`] or [`insert_wrapped`] afterwards; the order
    /// of the finished set is then unspecified.
    ///
    /// [`append`]: Self::append
    /// [`insert`]: Self::insert
    /// [`insert_wrapped`]: Self::insert_wrapped
    pub fn append_unchecked(&mut self, element: Range) -> Result<(), RangeError> {
        self.reserve_one()?;
        self.ranges.push(element);
        Ok(())
    }

    /// Splices a linear range into its sorted position.
    ///
    /// Fuses with the predecessor and/or successor when numerically
    /// adjacent; fusing on one side can expose adjacency on the other,
    /// in which case all three ranges collapse into one. Fails with
    /// [`RangeError::OverlappingRanges`] if the element intersects an
    /// existing range and [`RangeError::InvalidRange`] if either
    /// operand is wrapped.
    pub fn insert(&mut self, element: Range) -> Result<(), RangeError> {
        if element.is_wrapped() || self.ranges.first().is_some_and(|r| r.is_wrapped()) {
            return Err(RangeError::InvalidRange);
        }
        // First position whose range lies entirely past the element.
        let ix = self.ranges.partition_point(|r| r.start <= element.end);
        if ix > 0 && self.ranges[ix - 1].end >= element.start {
            return Err(RangeError::OverlappingRanges);
        }
        let fuse_prev = ix > 0 && self.ranges[ix - 1].end + 1 == element.start;
        let fuse_next = ix < self.ranges.len() && element.end + 1 == self.ranges[ix].start;
        match (fuse_prev, fuse_next) {
            (true, true) => {
                self.ranges[ix - 1].end = self.ranges[ix].end;
                self.ranges.remove(ix);
            }
            (true, false) => self.ranges[ix - 1].end = element.end,
            (false, true) => self.ranges[ix].start = element.start,
            (false, false) => {
                self.reserve_one()?;
                self.ranges.insert(ix, element);
            }
        }
        Ok(())
    }

    /// Accepts a wrapped range lying past everything accepted so far.
    ///
    /// Ranges confined to different enclosing intervals are ordered by
    /// interval and never compared for overlap. Within one interval the
    /// ordering rules of [`append`] apply, except that nothing is ever
    /// fused and a genuinely wrapping candidate is checked against the
    /// whole run of ranges sharing the interval, since its low tail can
    /// collide with any of them. Fails with
    /// [`RangeError::InvalidRange`] if either operand is linear.
    ///
    /// [`append`]: Self::append
    pub fn append_wrapped(&mut self, element: Range) -> Result<(), RangeError> {
        if !element.is_wrapped() || self.ranges.last().is_some_and(|r| !r.is_wrapped()) {
            return Err(RangeError::InvalidRange);
        }
        let Some(head) = self.ranges.last() else {
            self.reserve_one()?;
            self.ranges.push(element);
            return Ok(());
        };
        if element.base != head.base {
            if element.base < head.base {
                return Err(RangeError::NotAscending);
            }
        } else if element.wraps() || head.wraps() {
            if self
                .interval_run(element.base)
                .iter()
                .any(|r| wrapped_ranges_collide(r, &element))
            {
                return Err(RangeError::OverlappingRanges);
            }
            if head.wraps() {
                // The wrapping range closes its interval; anything that
                // does not collide with it belongs before it.
                return Err(RangeError::NotAscending);
            }
        } else if element.start <= head.end {
            return Err(if head.start >= element.end {
                RangeError::NotAscending
            } else {
                RangeError::OverlappingRanges
            });
        }
        self.reserve_one()?;
        self.ranges.push(element);
        Ok(())
    }

    /// Splices a wrapped range into its sorted position.
    ///
    /// Like [`append_wrapped`] but the range may belong anywhere;
    /// overlap is checked against the whole run of ranges sharing its
    /// enclosing interval. Nothing is ever fused.
    ///
    /// [`append_wrapped`]: Self::append_wrapped
    pub fn insert_wrapped(&mut self, element: Range) -> Result<(), RangeError> {
        if !element.is_wrapped() || self.ranges.first().is_some_and(|r| !r.is_wrapped()) {
            return Err(RangeError::InvalidRange);
        }
        if self
            .interval_run(element.base)
            .iter()
            .any(|r| wrapped_ranges_collide(r, &element))
        {
            return Err(RangeError::OverlappingRanges);
        }
        let ix = self
            .ranges
            .partition_point(|r| (r.base, r.start) <= (element.base, element.start));
        self.reserve_one()?;
        self.ranges.insert(ix, element);
        Ok(())
    }

    /// Freezes the accumulated ranges into a canonical, queryable set.
    pub fn finish(self) -> NumberSet {
        NumberSet {
            ranges: self.ranges,
        }
    }

    /// The contiguous run of ranges confined to the interval starting
    /// at `base`.
    fn interval_run(&self, base: i32) -> &[Range] {
        let end = self.ranges.partition_point(|r| r.base <= base);
        let start = self.ranges.partition_point(|r| r.base < base);
        &self.ranges[start..end]
    }
}

/// Overlap test for two ranges confined to the same enclosing interval.
fn wrapped_ranges_collide(a: &Range, b: &Range) -> bool {
    match (a.wraps(), b.wraps()) {
        // Two wrapping ranges both contain the end of the interval.
        (true, true) => true,
        (true, false) => b.end >= a.start || b.start <= a.end,
        (false, true) => a.end >= b.start || a.start <= b.end,
        (false, false) => a.start <= b.end && b.start <= a.end,
    }
}
