#![no_main]
//! Drives the wrapped-range builder with arbitrary operation sequences
//! and checks the canonical-order invariants of the result.

use libfuzzer_sys::{arbitrary, fuzz_target};
use number_set::{check_wrap_points, NumberSetBuilder, Range};

#[derive(Debug, arbitrary::Arbitrary)]
enum Operation {
    Append { start: u8, end: u8 },
    Insert { start: u8, end: u8 },
}

const OP_COUNT_LIMIT: usize = 256;

fuzz_target!(|input: (Vec<i32>, Vec<Operation>)| {
    let (points, operations) = input;
    if !check_wrap_points(&points) {
        return;
    }

    let mut builder = NumberSetBuilder::new();
    for op in operations.into_iter().take(OP_COUNT_LIMIT) {
        let (start, end, insert) = match op {
            Operation::Append { start, end } => (start, end, false),
            Operation::Insert { start, end } => (start, end, true),
        };
        let Ok(range) = Range::new_wrapped(start as i32, end as i32, &points) else {
            continue;
        };
        // rejections are expected; the invariants below must hold anyway
        let _ = if insert {
            builder.insert_wrapped(range)
        } else {
            builder.append_wrapped(range)
        };
    }

    let set = builder.finish();
    let ranges = set.ranges();

    // Ascending by interval, ascending by start within an interval,
    // and only the last range of an interval may wrap.
    for pair in ranges.windows(2) {
        let a_interval = pair[0].enclosing_interval().unwrap();
        let b_interval = pair[1].enclosing_interval().unwrap();
        assert!(a_interval.0 <= b_interval.0);
        if a_interval == b_interval {
            assert!(pair[0].start() < pair[1].start());
            assert!(pair[0].start() <= pair[0].end(), "wrapping range not last");
        }
    }

    // No two ranges of one interval share an element.
    for (ix, a) in ranges.iter().enumerate() {
        for b in &ranges[ix + 1..] {
            if a.enclosing_interval() != b.enclosing_interval() {
                continue;
            }
            for n in i32::from(u8::MIN)..=i32::from(u8::MAX) {
                assert!(!(a.contains(n) && b.contains(n)), "{a:?} and {b:?} share {n}");
            }
        }
    }

    // Everything iteration reports is a member.
    for n in set.iter().take(4096) {
        assert!(set.contains(n));
    }
});
