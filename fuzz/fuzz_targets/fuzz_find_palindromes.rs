#![no_main]

use libfuzzer_sys::fuzz_target;
use palscan::palindrome::PalindromeFinder;

fuzz_target!(|data: &str| {
    // Invalid input must be rejected, never panic
    let Ok(matches) = PalindromeFinder::with_defaults().find_matches(data) else {
        return;
    };

    let mut prev_end = None;
    for m in &matches {
        let chars: Vec<char> = m.text.chars().collect();
        assert!(chars.len() >= 3);
        assert!(chars.iter().eq(chars.iter().rev()));
        assert_eq!(&data[m.byte_start..m.byte_end], m.text);
        if let Some(end) = prev_end {
            assert!(m.interval.start > end);
        }
        prev_end = Some(m.interval.end);
    }
});
