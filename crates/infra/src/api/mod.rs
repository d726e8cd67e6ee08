//! Authenticated invocation engine for the DPA API
//!
//! Request flow: [`ClientOptions::build`] → [`Transport::round_trip`] (token
//! injection) → [`classify`] → decode into the success or domain-error type.
//!
//! # Architecture
//!
//! - [`ApiClient`] exposes the generic verbs; [`Service`] validates the token
//!   and owns one client
//! - Token acquisition is behind the [`TokenSource`] trait
//! - Every call runs inside an [`ExecutionContext`] (cancellation + deadline)
//! - No retries, no queueing, no internal locking

pub mod auth;
pub mod client;
pub mod context;
pub mod errors;
pub mod request;
pub mod service;
pub mod status;
pub mod transport;

pub use auth::{
    platform_token, resource_owner_token, AuthError, ClientCredentialsTokenSource,
    OAuthErrorBody, StaticTokenSource, TokenSource,
};
pub use client::{ApiClient, ApiOutcome};
pub use context::{ExecutionContext, Interrupted};
pub use errors::{ApiError, ErrorKind};
pub use request::{ClientOptions, WIRE_TARGET};
pub use service::Service;
pub use status::{classify, StatusClass};
pub use transport::Transport;
