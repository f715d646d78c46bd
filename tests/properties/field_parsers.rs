//! Property tests for the field parsers.

use proptest::prelude::*;

use tutordesk::parser::{
    self, parse_hours, parse_index, parse_name, parse_tag, parse_time, DATE_TIME_PATTERN,
};
use tutordesk::{Name, ParseError};

/// Names the validity predicate accepts: start alphanumeric, then
/// alphanumerics and spaces.
fn valid_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9 ]{0,30}").unwrap()
}

fn padding() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ \t]{0,4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: whenever the trimmed input satisfies Name's predicate,
    /// parsing succeeds and the string form equals the trimmed input.
    #[test]
    fn property_parse_name_equals_trimmed_input(
        name in valid_name(),
        left in padding(),
        right in padding(),
    ) {
        let raw = format!("{left}{name}{right}");
        prop_assume!(Name::is_valid(raw.trim()));

        let parsed = parse_name(&raw).expect("trimmed input satisfies the predicate");
        prop_assert_eq!(parsed.as_str(), raw.trim());
    }

    /// PROPERTY: inputs whose trimmed form fails the predicate always fail
    /// with Name's constraint message, never any other error.
    #[test]
    fn property_parse_name_failure_is_the_constraint_message(
        raw in "(?s).{0,64}"
    ) {
        prop_assume!(!Name::is_valid(raw.trim()));
        prop_assert_eq!(
            parse_name(&raw),
            Err(ParseError::InvalidFormat(Name::MESSAGE_CONSTRAINTS))
        );
    }

    /// PROPERTY: every positive integer round-trips through parse_index,
    /// with or without surrounding whitespace.
    #[test]
    fn property_parse_index_round_trips(
        value in 1usize..=99_999,
        left in padding(),
        right in padding(),
    ) {
        let raw = format!("{left}{value}{right}");
        let index = parse_index(&raw).expect("positive integers are valid indexes");
        prop_assert_eq!(index.one_based(), value);
        prop_assert_eq!(index.zero_based(), value - 1);
    }

    /// PROPERTY: integer hours text parses to the same value as a float.
    #[test]
    fn property_parse_hours_matches_integer_value(value in 0u64..=1_000_000) {
        prop_assert_eq!(parse_hours(&value.to_string()), Ok(value as f64));
    }

    /// PROPERTY: a formatted valid timestamp always parses back to itself.
    /// Days stop at 28 so every generated date exists.
    #[test]
    fn property_parse_time_round_trips(
        year in 1990i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
    ) {
        let time = chrono::NaiveDate::from_ymd_opt(year, month, day)
            .expect("day <= 28 always exists")
            .and_hms_opt(hour, minute, 0)
            .expect("hour/minute in range");
        let text = time.format(DATE_TIME_PATTERN).to_string();
        prop_assert_eq!(parse_time(&text), Ok(time));
    }

    /// PROPERTY: none of the field parsers panic on arbitrary input.
    #[test]
    fn property_parsers_never_panic(raw in "(?s).{0,128}") {
        let _ = parse_name(&raw);
        let _ = parse_tag(&raw);
        let _ = parse_index(&raw);
        let _ = parse_time(&raw);
        let _ = parse_hours(&raw);
        let _ = parser::parse_phone(&raw);
        let _ = parser::parse_email(&raw);
        let _ = parser::parse_address(&raw);
        let _ = parser::parse_level(&raw);
        let _ = parser::parse_subject(&raw);
    }

    /// PROPERTY: fail-fast means nothing after the first invalid element
    /// changes the outcome.
    #[test]
    fn property_collection_parse_fails_on_first_invalid(
        valid in proptest::collection::vec(valid_name(), 0..4),
        suffix in proptest::collection::vec("(?s).{0,16}", 0..4),
    ) {
        let mut raws = valid;
        raws.push(" ".to_string()); // blank never satisfies the predicate
        raws.extend(suffix);
        prop_assert_eq!(
            tutordesk::parser::parse_children(&raws),
            Err(ParseError::InvalidFormat(Name::MESSAGE_CONSTRAINTS))
        );
    }
}
