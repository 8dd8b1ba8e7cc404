#![no_main]
//! Round trips the textual notation: parse, render, reparse, compare.

use libfuzzer_sys::fuzz_target;
use number_set::NumberSet;

fuzz_target!(|input: (&str, i32, i32)| {
    let (text, min, max) = input;
    let Ok((set, consumed)) = NumberSet::parse_prefix(text, min, max) else {
        return;
    };
    assert!(consumed <= text.len());
    assert!(text.is_char_boundary(consumed));

    // Rendering over the same window must reproduce an equal set:
    // parsing bounded every range to the window, so nothing clips away.
    let shown = set.show(min, max);
    let reparsed = NumberSet::parse(&shown, min, max)
        .unwrap_or_else(|e| panic!("show output {shown:?} failed to reparse: {e}"));
    assert_eq!(set, reparsed);

    // Everything iteration reports is a member.
    for n in set.iter().take(4096) {
        assert!(set.contains(n));
    }
});
