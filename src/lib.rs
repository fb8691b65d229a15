//! Rust client for the Starfish Data Platform.
//!
//! The platform manages devices, their sensor observations, and the
//! device templates describing sensor capabilities, all scoped to a
//! solution (tenant namespace). This crate handles the token lifecycle
//! for you: construct a service with client credentials and every call
//! fetches or refreshes the bearer token as needed, or supply your own
//! token and the service uses it as-is.
//!
//! ```no_run
//! use starfish_sdk::{ServiceConfig, StarfishService};
//!
//! # async fn run() -> starfish_sdk::Result<()> {
//! let config = ServiceConfig::with_credentials(
//!     "https://api.data-platform.developer.ssni.com",
//!     "sandbox",
//!     "my-client-id",
//!     "my-client-secret",
//! )?;
//! let service = StarfishService::new(config);
//!
//! let devices = service.get_devices().await?;
//! let observations = service
//!     .query_observations(&[("limit", "100")])
//!     .await?;
//! if let Some(next) = &observations.next_page {
//!     let _more = service.get_next_page(next).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;

pub use api::{AuthMethod, Credentials, PagedResult, ServiceConfig, ServiceOptions, StarfishService};
pub use error::{Error, Result};
