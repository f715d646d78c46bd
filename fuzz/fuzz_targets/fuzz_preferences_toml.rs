#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Fuzz preferences parsing - this should never panic
        let _ = toml::from_str::<tutordesk::Preferences>(text);
    }
});
