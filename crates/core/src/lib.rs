//! Functional core for the itemsapi Lambda.
//!
//! Everything in this crate is free of I/O: the item model, request body
//! parsing, item construction, and the storage abstraction that the
//! `itemsapi` binary implements against DynamoDB.

pub mod item;
pub mod storage;
