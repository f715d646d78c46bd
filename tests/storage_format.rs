//! Pins the on-disk document shape.
//!
//! The JSON layout is a compatibility contract with existing data files;
//! any change here must come with a migration story.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tutordesk::{
    AdaptedRoster, Address, Email, Level, Name, Person, PersonRef, Phone, Reminder, Roster,
    Student, Subject, Tag,
};

fn sample_roster() -> Roster {
    let alice = Person::new(
        Name::new("Alice Tan").unwrap(),
        Phone::new("91234567").unwrap(),
        Email::new("alice@example.com").unwrap(),
        Address::new("12 Kent Ridge Dr").unwrap(),
        BTreeSet::from([Tag::new("mondays").unwrap()]),
    );
    let mut roster = Roster::new();
    roster
        .add_student(Student::new(
            alice,
            Level::new("P5").unwrap(),
            BTreeSet::from([
                Subject::new("Math").unwrap(),
                Subject::new("Science").unwrap(),
            ]),
        ))
        .unwrap();
    roster.add_reminder(Reminder::new(
        Name::new("Progress call").unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
        "Discuss mock exam results",
        BTreeSet::from([PersonRef::Reference(Name::new("Alice Tan").unwrap())]),
        BTreeSet::new(),
    ));
    roster
}

#[test]
fn persisted_document_shape_is_stable() {
    let json = AdaptedRoster::from(&sample_roster())
        .to_json_string()
        .unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "students": [
        {
          "name": "Alice Tan",
          "phone": "91234567",
          "email": "alice@example.com",
          "address": "12 Kent Ridge Dr",
          "level": "P5",
          "subjects": [
            "Math",
            "Science"
          ],
          "tags": [
            {
              "name": "mondays"
            }
          ]
        }
      ],
      "reminders": [
        {
          "name": "Progress call",
          "time": "2024-03-01 10:00",
          "notes": "Discuss mock exam results",
          "people": [
            "Alice Tan"
          ],
          "tags": []
        }
      ]
    }
    "#);
}

#[test]
fn documents_written_by_older_versions_still_load() {
    // A minimal document with absent optional lists.
    let json = r#"{
        "students": [],
        "reminders": [
            {"name": "Collect fees", "time": "2023-11-20 18:00", "notes": "cash only"}
        ]
    }"#;
    let roster = AdaptedRoster::from_json_str(json)
        .unwrap()
        .to_model()
        .unwrap();
    assert_eq!(roster.reminders().len(), 1);
    assert!(roster.reminders()[0].people().is_empty());
    assert!(roster.reminders()[0].tags().is_empty());
}
