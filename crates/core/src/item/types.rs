use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Status assigned when a create or update request omits one.
pub const DEFAULT_STATUS: &str = "active";

/// A record in the items table.
///
/// Only `id` is checked on a stored record. Records created through an update
/// upsert have no `created_at`, and records written by other tools may lack
/// any of the other attributes or hold them with other types, so everything
/// else is kept as raw JSON. `None` means the attribute is absent; an explicit
/// `null` is `Some(Value::Null)` and is written back as `null`. Unknown
/// attributes are kept in `extra` and serialized back inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Creates an item with the default status and an empty `data` object.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: Some(Value::String(DEFAULT_STATUS.to_string())),
            data: Some(Value::Object(Map::new())),
            created_at: None,
            updated_at: None,
            extra: Map::new(),
        }
    }

    /// Sets the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(Value::String(status.into()));
        self
    }

    /// Sets the opaque `data` payload.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(Value::String(created_at.into()));
        self
    }

    /// The status, when stored as a string.
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().and_then(Value::as_str)
    }

    /// The creation timestamp, when stored as a string.
    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_ref().and_then(Value::as_str)
    }

    /// The last update timestamp, when stored as a string.
    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_ref().and_then(Value::as_str)
    }
}

/// Deserializes an attribute that is present in the input, keeping `null`
/// as `Some(Value::Null)`. Absent attributes fall back to `#[serde(default)]`.
pub(crate) fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// The attributes rewritten by an update. Everything else on the record is
/// left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemUpdate {
    pub status: String,
    pub data: Value,
    pub updated_at: String,
}

impl ItemUpdate {
    /// Applies the update to a record, creating the attributes if missing.
    pub fn apply_to(&self, item: &mut Item) {
        item.status = Some(Value::String(self.status.clone()));
        item.data = Some(self.data.clone());
        item.updated_at = Some(Value::String(self.updated_at.clone()));
    }
}
