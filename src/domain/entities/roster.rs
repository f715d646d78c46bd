//! Roster entity - the in-memory collection the host application holds

use crate::domain::entities::{Reminder, Student};
use crate::error::{ParseError, ParseResult};

/// All students and reminders currently loaded. Students are unique by
/// name; reminders are kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
    reminders: Vec<Reminder>,
}

impl Roster {
    /// Message used when a students list holds two entries with one name
    pub const MESSAGE_DUPLICATE_STUDENTS: &'static str =
        "Students list contains duplicate student(s).";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Returns true if a student with the same name is already present
    pub fn has_student(&self, candidate: &Student) -> bool {
        self.students
            .iter()
            .any(|existing| existing.name() == candidate.name())
    }

    /// Add a student, rejecting a duplicate name
    pub fn add_student(&mut self, student: Student) -> ParseResult<()> {
        if self.has_student(&student) {
            return Err(ParseError::DuplicateEntity(Self::MESSAGE_DUPLICATE_STUDENTS));
        }
        self.students.push(student);
        Ok(())
    }

    pub fn add_reminder(&mut self, reminder: Reminder) {
        self.reminders.push(reminder);
    }
}
