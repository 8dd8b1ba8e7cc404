//! Ordered enumeration of set elements.

use core::iter::FusedIterator;

use crate::range::Range;
use crate::set::NumberSet;

/// Iterator over every element of a [`NumberSet`] in canonical order.
///
/// A genuinely wrapping range contributes its upper arc first and its
/// lower arc second, so a contour group `18-12` over the interval
/// `[10, 20]` yields `18, 19, 20, 10, 11, 12`.
#[derive(Clone, Debug)]
pub struct Elements<'a> {
    ranges: &'a [Range],
    /// Range currently being walked.
    ix: usize,
    /// Next value to yield, or `None` once exhausted.
    value: Option<i32>,
}

impl<'a> Elements<'a> {
    pub(crate) fn new(set: &'a NumberSet) -> Self {
        Elements {
            ranges: &set.ranges,
            ix: 0,
            value: set.ranges.first().map(|r| r.first_value()),
        }
    }
}

impl Iterator for Elements<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let current = self.value?;
        self.value = match self.ranges[self.ix].next_value(current) {
            Some(v) => Some(v),
            None => {
                self.ix += 1;
                self.ranges.get(self.ix).map(|r| r.first_value())
            }
        };
        Some(current)
    }
}

impl FusedIterator for Elements<'_> {}

impl<'a> IntoIterator for &'a NumberSet {
    type Item = i32;
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
