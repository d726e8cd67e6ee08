//! # DPA Infrastructure
//!
//! I/O side of the Dynamic Privileged Access client.
//!
//! This crate contains:
//! - The authenticated invocation engine and the [`Service`] façade
//! - Resource operations (policies, connectors, target sets, settings, public
//!   keys)
//! - OAuth token sources
//! - Configuration loading and tracing setup
//!
//! ## Architecture
//! - Wire types live in `dpa-domain`
//! - API calls go through [`http::HttpSender`]; token grants use `reqwest`
//!   directly

pub mod api;
pub mod config;
pub mod http;
pub mod observability;
pub mod resources;

// Re-export commonly used items
pub use api::{
    ApiClient, ApiError, ApiOutcome, ClientCredentialsTokenSource, ErrorKind, ExecutionContext,
    Service, StaticTokenSource, TokenSource, Transport,
};
pub use http::{HttpClient, HttpSender};
pub use observability::init_tracing;
pub use resources::DpaResult;
