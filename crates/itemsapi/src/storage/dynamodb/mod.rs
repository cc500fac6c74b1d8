//! DynamoDB storage backend implementation.
//!
//! The table has a single string partition key, `id`. Items are stored as
//! native DynamoDB maps so that `data` stays queryable from the console and
//! other tools.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
