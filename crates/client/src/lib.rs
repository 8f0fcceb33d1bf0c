//! Async client for The Numerology API (birth charts, horoscopes and
//! astrology reference lookups) hosted on RapidAPI.
//!
//! ```no_run
//! use starmap_client::StarMapClient;
//! use starmap_core::BirthChartRequest;
//!
//! # async fn run() -> starmap_core::Result<()> {
//! let client = StarMapClient::new(std::env::var("STARMAP_API_KEY").unwrap_or_default());
//! let chart = BirthChartRequest::new("John Doe", 1990, 7, 16)
//!     .coordinates(48.8566, 2.3522)
//!     .timezone("Europe/Paris");
//! let response = client.birth_chart(&chart).await?;
//! println!("{}", response.into_value());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod transport;

pub use client::StarMapClient;
pub use transport::{ReqwestTransport, Transport};
