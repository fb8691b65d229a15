//! Starfish Data Platform API client
//!
//! Wraps the platform's REST API (devices, observations, device
//! templates) behind [`StarfishService`], with transparent bearer-token
//! acquisition and refresh around every call.

pub mod auth;
pub mod client;
pub mod config;
pub mod constants;
pub mod operations;
pub mod query;

pub use auth::{AuthMethod, Credentials};
pub use client::StarfishService;
pub use config::{ServiceConfig, ServiceOptions};
pub use query::PagedResult;
