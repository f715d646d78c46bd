//! Serialization-friendly version of [`Tag`]

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Tag;
use crate::error::{ParseError, ParseResult};

/// Flat tag record as it appears inside persisted documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptedTag {
    name: Option<String>,
}

impl AdaptedTag {
    const ENTITY: &'static str = "Tag";

    /// Convert this record back into the model's [`Tag`].
    ///
    /// The stored name is not trusted: it goes through Tag's own predicate
    /// and fails with Tag's constraint message, so a hand-edited storage
    /// file cannot introduce a tag the command parser would reject.
    pub fn to_model(&self) -> ParseResult<Tag> {
        let name = self.name.as_deref().ok_or(ParseError::MissingField {
            entity: Self::ENTITY,
            field: "Name",
        })?;
        Tag::new(name)
    }
}

impl From<&Tag> for AdaptedTag {
    fn from(source: &Tag) -> Self {
        Self {
            name: Some(source.as_str().to_string()),
        }
    }
}
