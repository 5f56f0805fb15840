//! Fuzz target for Markdown fact extraction.
//!
//! Goal: front matter and heading extraction should **never panic** on any input.
//! Unclosed front matter is an error, not a crash.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_markdown_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(facts) = docguard_extract::parse_markdown("PRJ01-MAC-ZZ-00-RP-A-0001.md", text) {
            // Extracted sections are trimmed and never empty.
            for section in facts.sections() {
                assert!(!section.is_empty());
                assert_eq!(section.trim(), section);
            }
        }
    }
});
