//! Underlying HTTP sender
//!
//! The invocation engine never talks to `reqwest` directly; it forwards
//! fully built requests to an [`HttpSender`], so tests and callers can swap
//! the sender without touching the engine.

pub mod client;

pub use client::{HttpClient, HttpClientBuilder, HttpSender, DEFAULT_USER_AGENT};
