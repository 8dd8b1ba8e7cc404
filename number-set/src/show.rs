//! Textual rendering of number sets.

use core::fmt;

use crate::range::clamp_bounds;
use crate::set::NumberSet;

impl NumberSet {
    /// Renders the set in the textual notation, clipped to the window
    /// `[min, max]`.
    ///
    /// The bound conventions of [`Range::new`](crate::Range::new)
    /// apply. For linear sets, ranges entirely below `min` are skipped
    /// and the first range entirely above `max` ends the walk; a range
    /// reaching `min` renders as `-m`, one reaching `max` as `n-`, one
    /// doing both as a bare `-`, and singletons as `n`. For wrapped
    /// sets the window is ignored (clipping has no meaning in a
    /// modular domain) and every range renders as `start-end`, keeping
    /// the wrap direction visible.
    ///
    /// The output parses back to an equal set over the same window.
    pub fn show(&self, min: i32, max: i32) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_clipped(&mut out, min, max);
        out
    }

    fn write_clipped(&self, out: &mut impl fmt::Write, min: i32, max: i32) -> fmt::Result {
        let (min, max) = clamp_bounds(min, max);
        let mut sep = "";
        for range in &self.ranges {
            if range.is_wrapped() {
                write!(out, "{sep}{}-{}", range.start(), range.end())?;
                sep = ", ";
                continue;
            }
            if range.start() > max {
                break;
            }
            if range.end() < min {
                continue;
            }
            out.write_str(sep)?;
            sep = ", ";
            match (range.start() <= min, range.end() >= max) {
                (true, true) => out.write_char('-')?,
                (true, false) => write!(out, "-{}", range.end())?,
                (false, true) => write!(out, "{}-", range.start())?,
                (false, false) if range.start() == range.end() => {
                    write!(out, "{}", range.start())?
                }
                (false, false) => write!(out, "{}-{}", range.start(), range.end())?,
            }
        }
        Ok(())
    }
}

/// Renders with the widest window, `[0, i32::MAX]`.
impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_clipped(f, 0, i32::MAX)
    }
}
