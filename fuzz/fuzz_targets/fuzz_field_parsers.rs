#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Every field parser must be total - reject, never panic
        let _ = tutordesk::parser::parse_name(raw);
        let _ = tutordesk::parser::parse_phone(raw);
        let _ = tutordesk::parser::parse_email(raw);
        let _ = tutordesk::parser::parse_address(raw);
        let _ = tutordesk::parser::parse_tag(raw);
        let _ = tutordesk::parser::parse_level(raw);
        let _ = tutordesk::parser::parse_subject(raw);
        let _ = tutordesk::parser::parse_index(raw);
        let _ = tutordesk::parser::parse_time(raw);
        let _ = tutordesk::parser::parse_hours(raw);
        let _ = tutordesk::parser::parse_child(raw);
    }
});
