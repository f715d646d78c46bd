//! Domain entities
//!
//! Composite records built from validated value objects, plus the lazy
//! reference types (`PersonRef`, `StudentRef`) used where an entity is known
//! by name only.

mod person;
mod reminder;
mod roster;
mod student;

pub use person::{Person, PersonRef};
pub use reminder::Reminder;
pub use roster::Roster;
pub use student::{Student, StudentRef};
