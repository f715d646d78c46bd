//! Property tests for the serialization adapters.

use std::collections::BTreeSet;

use proptest::prelude::*;

use tutordesk::{
    AdaptedReminder, AdaptedRoster, Name, PersonRef, Reminder, Tag,
};

fn valid_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9 ]{0,20}").unwrap()
}

fn valid_tag() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9]{1,12}").unwrap()
}

fn timestamp() -> impl Strategy<Value = chrono::NaiveDateTime> {
    (1990i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(
        |(year, month, day, hour, minute)| {
            chrono::NaiveDate::from_ymd_opt(year, month, day)
                .expect("day <= 28 always exists")
                .and_hms_opt(hour, minute, 0)
                .expect("hour/minute in range")
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a reminder survives the flat record unchanged in name,
    /// time, notes and tags; people come back as references with the same
    /// names.
    #[test]
    fn property_reminder_round_trips(
        name in valid_name(),
        time in timestamp(),
        notes in "(?s).{0,64}",
        people in proptest::collection::btree_set(valid_name(), 0..5),
        tags in proptest::collection::btree_set(valid_tag(), 0..5),
    ) {
        let people: BTreeSet<PersonRef> = people
            .into_iter()
            .map(|raw| PersonRef::Reference(Name::new(raw).expect("strategy emits valid names")))
            .collect();
        let tags: BTreeSet<Tag> = tags
            .into_iter()
            .map(|raw| Tag::new(raw).expect("strategy emits valid tags"))
            .collect();
        let original = Reminder::new(
            Name::new(name).expect("strategy emits valid names"),
            time,
            notes,
            people,
            tags,
        );

        let restored = AdaptedReminder::from(&original)
            .to_model()
            .expect("a record written by the adapter always loads");

        prop_assert_eq!(restored.name(), original.name());
        prop_assert_eq!(restored.time(), original.time());
        prop_assert_eq!(restored.notes(), original.notes());
        prop_assert_eq!(restored.tags(), original.tags());

        let restored_names: Vec<&Name> =
            restored.people().iter().map(PersonRef::name).collect();
        let original_names: Vec<&Name> =
            original.people().iter().map(PersonRef::name).collect();
        prop_assert_eq!(restored_names, original_names);
    }

    /// PROPERTY: document parsing and reconstruction are total - arbitrary
    /// text either fails cleanly or loads, but never panics.
    #[test]
    fn property_document_load_never_panics(text in "(?s).{0,256}") {
        if let Ok(document) = AdaptedRoster::from_json_str(&text) {
            let _ = document.to_model();
        }
    }

    /// PROPERTY: the JSON document itself round-trips: serialize, parse,
    /// reconstruct, re-serialize, and the two texts agree.
    #[test]
    fn property_document_json_is_stable(
        names in proptest::collection::btree_set(valid_name(), 0..4),
        time in timestamp(),
    ) {
        let people: BTreeSet<PersonRef> = names
            .into_iter()
            .map(|raw| PersonRef::Reference(Name::new(raw).expect("strategy emits valid names")))
            .collect();
        let mut roster = tutordesk::Roster::new();
        roster.add_reminder(Reminder::new(
            Name::new("Check in").expect("fixed valid name"),
            time,
            "",
            people,
            BTreeSet::new(),
        ));

        let first = AdaptedRoster::from(&roster).to_json_string().expect("serializable");
        let reloaded = AdaptedRoster::from_json_str(&first)
            .expect("own output parses")
            .to_model()
            .expect("own output loads");
        let second = AdaptedRoster::from(&reloaded).to_json_string().expect("serializable");
        prop_assert_eq!(first, second);
    }
}
