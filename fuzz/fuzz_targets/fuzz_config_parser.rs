//! Fuzz target for `docguard.toml` parsing and resolution.
//!
//! Goal: parsing and resolving should **never panic**. A config that resolves must also
//! produce a rule set or a typed configuration error.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(cfg) = docguard_settings::parse_config_toml(text) else {
        return;
    };
    if let Ok(resolved) = docguard_settings::resolve_config(cfg, Default::default()) {
        let _ = resolved.effective.rule_set();
    }
});
