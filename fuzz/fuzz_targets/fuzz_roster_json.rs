#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Fuzz document parsing and reconstruction - neither should panic
        if let Ok(document) = tutordesk::AdaptedRoster::from_json_str(text) {
            let _ = document.to_model();
        }
    }
});
