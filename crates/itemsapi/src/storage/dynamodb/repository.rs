//! DynamoDB repository implementation.
//!
//! Implements `ItemRepository` from `itemsapi_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use itemsapi_core::item::{Item, ItemUpdate};
use itemsapi_core::storage::{ItemRepository, RepositoryError, Result, ScanLimit};

use super::conversions::{attributes_to_item, item_to_attributes, json_to_attribute};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};

/// Partition key attribute of the items table.
const KEY: &str = "id";

const UPDATE_EXPRESSION: &str = "SET #status = :status, #data = :data, updated_at = :updated_at";

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    pub async fn from_env(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ItemRepository for DynamoDbRepository {
    async fn get_item(&self, id: &str) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(attributes_to_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn scan_items(&self, limit: ScanLimit) -> Result<Vec<Item>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(i32::try_from(limit.get()).unwrap_or(i32::MAX))
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(attributes_to_item).collect()
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        let attributes = item_to_attributes(item)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(attributes))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_item(&self, id: &str, update: &ItemUpdate) -> Result<Item> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(KEY, AttributeValue::S(id.to_string()))
            .update_expression(UPDATE_EXPRESSION)
            .expression_attribute_names("#status", "status")
            .expression_attribute_names("#data", "data")
            .expression_attribute_values(":status", AttributeValue::S(update.status.clone()))
            .expression_attribute_values(":data", json_to_attribute(update.data.clone()))
            .expression_attribute_values(
                ":updated_at",
                AttributeValue::S(update.updated_at.clone()),
            )
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(map_update_item_error)?;

        match result.attributes {
            Some(attributes) => attributes_to_item(&attributes),
            None => Err(RepositoryError::QueryFailed(format!(
                "UpdateItem returned no attributes for {}",
                id
            ))),
        }
    }

    async fn delete_item(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
