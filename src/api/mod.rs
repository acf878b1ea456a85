pub mod client;
pub mod error;
pub mod filters;
pub mod traits;

pub use client::ApiClient;
pub use error::ApiError;
pub use filters::{FilterField, PropertyFilters, SortKey, SortOrder};
pub use traits::PropertyApi;
