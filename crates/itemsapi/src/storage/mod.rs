//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `ItemRepository`
//! trait defined in `itemsapi_core::storage`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! Without `dynamodb` the function serves from the in-memory store, which is
//! useful for local runs. Tests always use the in-memory store.
//!
//! Build without DynamoDB:
//! ```bash
//! cargo build -p itemsapi --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, not(feature = "dynamodb")))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg(any(test, not(feature = "dynamodb")))]
pub use inmemory::InMemoryRepository;
