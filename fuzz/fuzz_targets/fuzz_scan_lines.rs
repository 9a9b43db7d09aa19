#![no_main]

use libfuzzer_sys::fuzz_target;
use palscan::palindrome::ScanConfig;
use palscan::scan::scan_lines;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes: invalid UTF-8 and separators are reported per line
    let config = ScanConfig {
        parallel: false,
        ..Default::default()
    };
    let _ = scan_lines(data, &config, false);
});
