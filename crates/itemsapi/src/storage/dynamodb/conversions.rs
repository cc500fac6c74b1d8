//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! items. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose, Engine as _};
use itemsapi_core::item::Item;
use itemsapi_core::storage::{decimal_to_number, RepositoryError};
use serde_json::{Map, Value};

/// Convert an Item to a DynamoDB item.
pub fn item_to_attributes(item: &Item) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
    match serde_json::to_value(item) {
        Ok(Value::Object(map)) => Ok(map
            .into_iter()
            .map(|(key, value)| (key, json_to_attribute(value)))
            .collect()),
        Ok(_) => Err(RepositoryError::Serialization(
            "Item did not serialize to an object".to_string(),
        )),
        Err(e) => Err(RepositoryError::Serialization(e.to_string())),
    }
}

/// Convert a DynamoDB item to an Item.
pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, RepositoryError> {
    let map = attributes
        .iter()
        .map(|(key, value)| attribute_to_json(value).map(|v| (key.clone(), v)))
        .collect::<Result<Map<String, Value>, RepositoryError>>()?;

    if !matches!(map.get("id"), Some(Value::String(_))) {
        return Err(RepositoryError::InvalidData(
            "Missing or invalid field: id".to_string(),
        ));
    }

    serde_json::from_value(Value::Object(map))
        .map_err(|e| RepositoryError::InvalidData(e.to_string()))
}

/// Convert a JSON value to a DynamoDB attribute.
pub fn json_to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(values) => {
            AttributeValue::L(values.into_iter().map(json_to_attribute).collect())
        }
        Value::Object(map) => AttributeValue::M(
            map.into_iter()
                .map(|(key, value)| (key, json_to_attribute(value)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB attribute to a JSON value.
///
/// Sets become arrays and binary values become base64 strings.
pub fn attribute_to_json(attribute: &AttributeValue) -> Result<Value, RepositoryError> {
    let value = match attribute {
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::N(n) => Value::Number(parse_number(n)?),
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(attribute_to_json)
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(map) => Value::Object(
            map.iter()
                .map(|(key, value)| attribute_to_json(value).map(|v| (key.clone(), v)))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::Ss(values) => {
            Value::Array(values.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(values) => Value::Array(
            values
                .iter()
                .map(|n| parse_number(n).map(Value::Number))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::B(blob) => Value::String(general_purpose::STANDARD.encode(blob.as_ref())),
        AttributeValue::Bs(blobs) => Value::Array(
            blobs
                .iter()
                .map(|blob| Value::String(general_purpose::STANDARD.encode(blob.as_ref())))
                .collect(),
        ),
        other => {
            return Err(RepositoryError::InvalidData(format!(
                "Unsupported attribute type: {:?}",
                other
            )))
        }
    };
    Ok(value)
}

fn parse_number(n: &str) -> Result<serde_json::Number, RepositoryError> {
    decimal_to_number(n)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Invalid number: {}", n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::primitives::Blob;
    use serde_json::json;

    fn sample_item() -> Item {
        Item::new("item-1700000000")
            .with_status("pending")
            .with_data(json!({
                "name": "widget",
                "count": 3,
                "ratio": 0.25,
                "tags": ["a", "b"],
                "nested": {"ok": true, "missing": null}
            }))
            .with_created_at("2024-01-15T10:30:00.000000Z")
    }

    #[test]
    fn test_item_round_trip() {
        let item = sample_item();
        let attributes = item_to_attributes(&item).unwrap();
        let parsed = attributes_to_item(&attributes).unwrap();

        assert_eq!(item, parsed);
    }

    #[test]
    fn test_item_attributes_use_native_types() {
        let attributes = item_to_attributes(&sample_item()).unwrap();

        assert_eq!(
            attributes.get("id"),
            Some(&AttributeValue::S("item-1700000000".to_string()))
        );
        assert_eq!(
            attributes.get("status"),
            Some(&AttributeValue::S("pending".to_string()))
        );
        assert!(matches!(attributes.get("data"), Some(AttributeValue::M(_))));
        assert!(!attributes.contains_key("updated_at"));
    }

    #[test]
    fn test_numbers_read_back_as_integer_or_float() {
        assert_eq!(
            attribute_to_json(&AttributeValue::N("10.0".to_string())).unwrap(),
            json!(10)
        );
        assert_eq!(
            attribute_to_json(&AttributeValue::N("0.5".to_string())).unwrap(),
            json!(0.5)
        );
        assert_eq!(
            attribute_to_json(&AttributeValue::N("-3".to_string())).unwrap(),
            json!(-3)
        );
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let result = attribute_to_json(&AttributeValue::N("twelve".to_string()));
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn test_sets_become_arrays() {
        assert_eq!(
            attribute_to_json(&AttributeValue::Ss(vec!["x".to_string(), "y".to_string()]))
                .unwrap(),
            json!(["x", "y"])
        );
        assert_eq!(
            attribute_to_json(&AttributeValue::Ns(vec!["1".to_string(), "1.5".to_string()]))
                .unwrap(),
            json!([1, 1.5])
        );
    }

    #[test]
    fn test_binary_becomes_base64() {
        assert_eq!(
            attribute_to_json(&AttributeValue::B(Blob::new(b"hi".to_vec()))).unwrap(),
            json!("aGk=")
        );
    }

    #[test]
    fn test_foreign_attributes_are_kept() {
        let mut attributes = HashMap::new();
        attributes.insert("id".to_string(), AttributeValue::S("legacy".to_string()));
        attributes.insert("ttl".to_string(), AttributeValue::N("1700000000".to_string()));

        let item = attributes_to_item(&attributes).unwrap();

        assert_eq!(item.id, "legacy");
        assert!(item.status.is_none());
        assert_eq!(item.extra.get("ttl"), Some(&json!(1_700_000_000)));
    }

    #[test]
    fn test_attributes_are_returned_as_stored() {
        let mut attributes = HashMap::new();
        attributes.insert("id".to_string(), AttributeValue::S("a".to_string()));
        attributes.insert("status".to_string(), AttributeValue::N("3".to_string()));
        attributes.insert("data".to_string(), AttributeValue::Null(true));
        attributes.insert("created_at".to_string(), AttributeValue::Bool(false));

        let item = attributes_to_item(&attributes).unwrap();

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"id": "a", "status": 3, "data": null, "created_at": false})
        );
        assert_eq!(item_to_attributes(&item).unwrap(), attributes);
    }

    #[test]
    fn test_missing_id_is_invalid() {
        let mut attributes = HashMap::new();
        attributes.insert("status".to_string(), AttributeValue::S("active".to_string()));

        let result = attributes_to_item(&attributes);
        assert_eq!(
            result,
            Err(RepositoryError::InvalidData(
                "Missing or invalid field: id".to_string()
            ))
        );
    }
}
