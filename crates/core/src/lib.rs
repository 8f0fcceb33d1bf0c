pub mod config;
pub mod endpoint;
pub mod error;
pub mod numerology;
pub mod params;
pub mod response;
pub mod types;

pub use config::{Config, parse_config};
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use numerology::{LuckyDaysRequest, PersonName};
pub use params::QueryParams;
pub use response::{ApiResponse, RawResponse};
pub use types::*;
