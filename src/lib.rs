//! Tutordesk core - domain model, input validation and storage adapters
//!
//! Tutordesk is a desktop app for tutors: a roster of student contacts plus
//! scheduled reminders. This crate is the layer between what the user (or
//! the data file) says and what the rest of the app trusts:
//!
//! - [`parser`] turns raw command-argument strings into validated domain
//!   values, with fixed, user-facing error messages.
//! - [`storage`] converts between entities and the flat records persisted
//!   on disk, re-validating everything on the way back in.
//!
//! The command shell, the GUI and file I/O live in the application crates;
//! everything that enforces a data invariant lives here.

pub mod config;
pub mod domain;
pub mod error;
pub mod parser;
pub mod storage;

// Re-exports for convenience
pub use config::{ConfigError, GuiSettings, Preferences};
pub use domain::entities::{Person, PersonRef, Reminder, Roster, Student, StudentRef};
pub use domain::value_objects::{Address, Email, Index, Level, Name, Phone, Subject, Tag};
pub use error::{ParseError, ParseResult};
pub use storage::{AdaptedReminder, AdaptedRoster, AdaptedStudent, AdaptedTag};
