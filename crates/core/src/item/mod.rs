mod error;
mod operations;
mod requests;
mod types;

pub use error::ItemError;
pub use operations::{format_timestamp, generate_item_id, parse_json_object};
pub use requests::{CreateItemRequest, UpdateItemRequest};
pub use types::{Item, ItemUpdate, DEFAULT_STATUS};
