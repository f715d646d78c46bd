//! Serialization adapters
//!
//! Bidirectional converters between domain entities and the flat records
//! persisted on disk. Converting an entity out copies already-valid values
//! without re-checking them; converting a record back re-validates every
//! field through the same predicates the command parser uses, because a
//! storage file may have been hand-edited or corrupted since we wrote it.
//!
//! Reading and writing the bytes is the host's job; this module only maps
//! between records and entities (plus JSON text via serde on the document).

mod reminder;
mod roster;
mod student;
mod tag;

pub use reminder::AdaptedReminder;
pub use roster::AdaptedRoster;
pub use student::AdaptedStudent;
pub use tag::AdaptedTag;
