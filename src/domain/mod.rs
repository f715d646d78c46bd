//! Domain layer: value objects and entities
//!
//! Everything here follows one discipline: validation lives in the
//! constructor, so no invalid instance can exist anywhere in the program.

pub mod entities;
pub mod value_objects;
