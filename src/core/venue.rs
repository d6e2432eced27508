use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::types::VenueId;

/// Name of the field every venue record must carry
pub const ID_FIELD: &str = "id";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VenueError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("record has no string \"id\" field")]
    MissingId,

    #[error("record has an empty \"id\" field")]
    EmptyId,
}

/// A single venue record from the catalog
///
/// Only `id` is interpreted. Every other field (name, address, capacity, ...)
/// is carried through untouched, and the record serializes back exactly as it
/// was read, key order included.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Venue {
    /// Unique identifier, copied out of `record` for lookups
    id: VenueId,

    /// The full record as it appeared in the data file
    record: Map<String, Value>,
}

impl Venue {
    /// Build a venue from a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Fails when the value is not an object, has no string `id`, or the `id`
    /// is empty.
    pub fn from_value(value: Value) -> Result<Self, VenueError> {
        let Value::Object(record) = value else {
            return Err(VenueError::NotAnObject);
        };

        let id = match record.get(ID_FIELD) {
            Some(Value::String(id)) if id.is_empty() => return Err(VenueError::EmptyId),
            Some(Value::String(id)) => VenueId::new(id.as_str()),
            _ => return Err(VenueError::MissingId),
        };

        Ok(Self { id, record })
    }

    pub fn id(&self) -> &VenueId {
        &self.id
    }

    /// Look up a pass-through field by name
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.record.get(name)
    }

    /// The complete record, `id` included
    pub fn record(&self) -> &Map<String, Value> {
        &self.record
    }

    /// Best-effort human-readable name for terminal output.
    ///
    /// Plain string names are returned as-is. Localized names
    /// (`{"en": "...", "fr": "..."}`) prefer English, then the first string value.
    pub fn display_name(&self) -> Option<&str> {
        match self.record.get("name")? {
            Value::String(name) => Some(name),
            Value::Object(localized) => localized
                .get("en")
                .and_then(Value::as_str)
                .or_else(|| localized.values().find_map(Value::as_str)),
            _ => None,
        }
    }
}

impl TryFrom<Value> for Venue {
    type Error = VenueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl Serialize for Venue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}
