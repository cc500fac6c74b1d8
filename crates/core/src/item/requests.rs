use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::operations::{format_timestamp, generate_item_id, parse_json_object, read_id};
use super::types::deserialize_present;
use super::{Item, ItemError, ItemUpdate, DEFAULT_STATUS};

/// Fields accepted in a create or update body besides `id`.
///
/// An explicit `"data": null` is kept; only an absent `data` gets the default.
#[derive(Debug, Deserialize)]
struct ItemFields {
    #[serde(default)]
    status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    data: Option<Value>,
}

impl ItemFields {
    fn from_map(mut map: Map<String, Value>) -> Result<Self, ItemError> {
        map.remove("id");
        serde_json::from_value(Value::Object(map))
            .map_err(|e| ItemError::InvalidField(e.to_string()))
    }
}

/// Request payload for creating an item (POST).
#[derive(Debug, Clone, PartialEq)]
pub struct CreateItemRequest {
    pub id: Option<String>,
    pub status: Option<String>,
    pub data: Option<Value>,
}

impl CreateItemRequest {
    /// Parses a raw request body.
    pub fn from_body(body: &[u8]) -> Result<Self, ItemError> {
        let map = parse_json_object(body)?.ok_or(ItemError::BodyRequired)?;
        let id = read_id(&map)?;
        let fields = ItemFields::from_map(map)?;

        Ok(Self {
            id,
            status: fields.status,
            data: fields.data,
        })
    }

    /// Builds the full record to write, filling in defaults.
    pub fn into_item(self, now: DateTime<Utc>) -> Item {
        let id = self.id.unwrap_or_else(|| generate_item_id(now));
        let mut item = Item::new(id).with_created_at(format_timestamp(now));
        if let Some(status) = self.status {
            item = item.with_status(status);
        }
        if let Some(data) = self.data {
            item = item.with_data(data);
        }
        item
    }
}

/// Request payload for updating an item (PUT).
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateItemRequest {
    pub id: String,
    pub status: Option<String>,
    pub data: Option<Value>,
}

impl UpdateItemRequest {
    /// Parses a raw request body. A missing body and a body without `id`
    /// are the same error.
    pub fn from_body(body: &[u8]) -> Result<Self, ItemError> {
        let map = parse_json_object(body)?.ok_or(ItemError::MissingId)?;
        let id = read_id(&map)?.ok_or(ItemError::MissingId)?;
        let fields = ItemFields::from_map(map)?;

        Ok(Self {
            id,
            status: fields.status,
            data: fields.data,
        })
    }

    /// Splits the request into the key and the attributes to set.
    ///
    /// Omitted fields reset to their defaults rather than being kept.
    pub fn into_update(self, now: DateTime<Utc>) -> (String, ItemUpdate) {
        let update = ItemUpdate {
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            data: self.data.unwrap_or_else(|| Value::Object(Map::new())),
            updated_at: format_timestamp(now),
        };
        (self.id, update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_create_requires_body() {
        assert_eq!(
            CreateItemRequest::from_body(b""),
            Err(ItemError::BodyRequired)
        );
        assert_eq!(
            CreateItemRequest::from_body(b"{}"),
            Err(ItemError::BodyRequired)
        );
    }

    #[test]
    fn test_create_rejects_malformed_json() {
        assert_eq!(
            CreateItemRequest::from_body(b"{oops"),
            Err(ItemError::InvalidJson)
        );
    }

    #[test]
    fn test_create_rejects_non_string_status() {
        let result = CreateItemRequest::from_body(br#"{"status": 3}"#);
        assert!(matches!(result, Err(ItemError::InvalidField(_))));
    }

    #[test]
    fn test_create_generates_id_and_defaults() {
        let request = CreateItemRequest::from_body(br#"{"data": {"x": 1}}"#).unwrap();
        let item = request.into_item(now());

        assert_eq!(item.id, format!("item-{}", now().timestamp()));
        assert_eq!(item.status(), Some("active"));
        assert_eq!(item.data, Some(json!({"x": 1})));
        assert_eq!(item.created_at(), Some("2024-01-15T10:30:00.000000Z"));
        assert!(item.updated_at.is_none());
    }

    #[test]
    fn test_create_keeps_client_fields() {
        let request =
            CreateItemRequest::from_body(br#"{"id": "abc", "status": "pending", "extra": 1}"#)
                .unwrap();
        let item = request.into_item(now());

        assert_eq!(item.id, "abc");
        assert_eq!(item.status(), Some("pending"));
        assert_eq!(item.data, Some(json!({})));
        assert!(item.extra.is_empty());
    }

    #[test]
    fn test_create_keeps_null_data() {
        let item = CreateItemRequest::from_body(br#"{"id": "a", "data": null}"#)
            .unwrap()
            .into_item(now());

        assert_eq!(item.data, Some(Value::Null));
    }

    #[test]
    fn test_update_requires_id() {
        assert_eq!(
            UpdateItemRequest::from_body(b""),
            Err(ItemError::MissingId)
        );
        assert_eq!(
            UpdateItemRequest::from_body(br#"{"status": "done"}"#),
            Err(ItemError::MissingId)
        );
        assert_eq!(
            UpdateItemRequest::from_body(b"{bad"),
            Err(ItemError::InvalidJson)
        );
    }

    #[test]
    fn test_update_defaults_omitted_fields() {
        let request = UpdateItemRequest::from_body(br#"{"id": "item-1"}"#).unwrap();
        let (id, update) = request.into_update(now());

        assert_eq!(id, "item-1");
        assert_eq!(update.status, "active");
        assert_eq!(update.data, json!({}));
        assert_eq!(update.updated_at, "2024-01-15T10:30:00.000000Z");
    }

    #[test]
    fn test_update_uses_supplied_fields() {
        let request =
            UpdateItemRequest::from_body(br#"{"id": "item-1", "status": "archived", "data": [1, 2]}"#)
                .unwrap();
        let (_, update) = request.into_update(now());

        assert_eq!(update.status, "archived");
        assert_eq!(update.data, json!([1, 2]));
    }

    #[test]
    fn test_update_keeps_null_data() {
        let (_, update) = UpdateItemRequest::from_body(br#"{"id": "a", "data": null}"#)
            .unwrap()
            .into_update(now());

        assert_eq!(update.data, Value::Null);
    }
}
