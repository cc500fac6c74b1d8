//! In-memory storage backend.
//!
//! Stores items in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Data is not
//! persisted and is lost when the process exits.

mod repository;

pub use repository::InMemoryRepository;
