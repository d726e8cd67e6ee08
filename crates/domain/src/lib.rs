//! # DPA Domain
//!
//! Wire-level domain types for the Dynamic Privileged Access API.
//!
//! This crate contains:
//! - The bearer [`Token`] model and its validity rules
//! - Request/response schemas for every resource (policies, connectors,
//!   target sets, settings, public keys)
//! - The structured [`ErrorResponse`] body returned by the service
//! - The [`ResponseBody`] decoding contract used by the invocation engine
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other DPA crates
//! - No I/O; serde data structures and pure helpers only

pub mod body;
pub mod config;
pub mod constants;
pub mod macros;
pub mod token;
pub mod types;

// Re-export commonly used items
pub use body::{BodyKind, DecodeError, Discard, Json, ResponseBody};
pub use config::*;
pub use token::Token;
pub use types::*;
