mod error;
mod http_mapping;
mod numeric;
mod traits;
mod types;

pub use error::{RepositoryError, Result, ScanLimitError};
pub use http_mapping::repository_error_to_status_code;
pub use numeric::decimal_to_number;
pub use traits::ItemRepository;
pub use types::ScanLimit;
