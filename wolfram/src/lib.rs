//! # Prime Time Wolfram
//!
//! A small client for the Wolfram|Alpha full-results query API, used to look
//! up the Nth prime.
//!
//! ## Example
//!
//! ```no_run
//! use prime_time_wolfram::{WolframAlphaClient, WolframConfig};
//!
//! # async fn example() -> Result<(), prime_time_wolfram::WolframError> {
//! let client = WolframAlphaClient::new(WolframConfig::new("DEMO-APPID"))?;
//! let prime = client.nth_prime(6).await?;
//! assert_eq!(prime, 13);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::WolframAlphaClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, WolframConfig};
pub use error::WolframError;
pub use types::{Pod, QueryResult, SubPod, WolframAlphaResult};
