//! Response body decoding contract
//!
//! The invocation engine routes a response body into one of two decode
//! targets depending on the status class. Each target type declares how it
//! wants the body handled through [`ResponseBody::KIND`]:
//!
//! - [`BodyKind::Discard`]: the caller does not want the payload; the body is
//!   never read.
//! - [`BodyKind::Text`]: the raw body is copied verbatim (non-JSON payloads
//!   such as key material).
//! - [`BodyKind::Json`]: the body is decoded with `serde_json`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Error produced when a body does not match the target schema.
pub type DecodeError = serde_json::Error;

/// How a decode target consumes a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Body is not read.
    Discard,
    /// Body is copied as text without JSON decoding.
    Text,
    /// Body is decoded as JSON.
    Json,
}

/// A type the engine can decode a response body into.
pub trait ResponseBody: Sized {
    /// Body handling for this target.
    const KIND: BodyKind;

    /// Build the target from the buffered body.
    ///
    /// Never called for [`BodyKind::Discard`] targets with a real body; they
    /// receive an empty slice.
    ///
    /// # Errors
    /// Returns the decoder error when the body does not match the schema.
    fn from_body(body: &[u8]) -> Result<Self, DecodeError>;
}

/// Decode a JSON body, treating an empty (or whitespace-only) body as `null`.
///
/// Empty bodies arrive on `204 No Content`; decoding them as `null` lets
/// optional and unit-like targets succeed while real schemas still fail.
///
/// # Errors
/// Returns the `serde_json` error when the body does not match `T`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"null")
    } else {
        serde_json::from_slice(body)
    }
}

/// Explicit "nil target" marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Discard;

impl ResponseBody for Discard {
    const KIND: BodyKind = BodyKind::Discard;

    fn from_body(_body: &[u8]) -> Result<Self, DecodeError> {
        Ok(Self)
    }
}

impl ResponseBody for () {
    const KIND: BodyKind = BodyKind::Discard;

    fn from_body(_body: &[u8]) -> Result<Self, DecodeError> {
        Ok(())
    }
}

impl ResponseBody for String {
    const KIND: BodyKind = BodyKind::Text;

    fn from_body(body: &[u8]) -> Result<Self, DecodeError> {
        Ok(String::from_utf8_lossy(body).into_owned())
    }
}

impl ResponseBody for serde_json::Value {
    const KIND: BodyKind = BodyKind::Json;

    fn from_body(body: &[u8]) -> Result<Self, DecodeError> {
        decode_json(body)
    }
}

/// JSON decode target for ad-hoc types that do not implement
/// [`ResponseBody`] themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Unwrap the decoded value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned> ResponseBody for Json<T> {
    const KIND: BodyKind = BodyKind::Json;

    fn from_body(body: &[u8]) -> Result<Self, DecodeError> {
        decode_json(body).map(Json)
    }
}
