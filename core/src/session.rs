//! Request values and the session dispatch seam.
//!
//! # Design
//! Every ADE call is a named operation plus a flat parameter map. A
//! `Request` carries exactly that as plain data; a `Session` executes it
//! and hands back the decoded response. Authentication, framing and retry
//! all live behind the `Session` implementation, never in this crate.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Flat parameter mapping sent with an operation.
pub type Params = Map<String, Value>;

/// A single ADE call described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub operation: &'static str,
    pub params: Params,
}

impl Request {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            params: Params::new(),
        }
    }

    /// Add a parameter; chains.
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }
}

/// Session-authenticated dispatch primitive.
///
/// Implementations perform the round-trip for `request` and return the
/// decoded response, or fail with whatever error the transport or the
/// remote system produced.
pub trait Session {
    fn request(&self, request: Request) -> Result<Value, ApiError>;
}

impl<S: Session + ?Sized> Session for &S {
    fn request(&self, request: Request) -> Result<Value, ApiError> {
        (**self).request(request)
    }
}

/// A `Session` backed by a closure.
#[derive(Debug, Clone)]
pub struct FnSession<F>(F);

/// Adapt a closure into a `Session`.
pub fn from_fn<F>(f: F) -> FnSession<F>
where
    F: Fn(Request) -> Result<Value, ApiError>,
{
    FnSession(f)
}

impl<F> Session for FnSession<F>
where
    F: Fn(Request) -> Result<Value, ApiError>,
{
    fn request(&self, request: Request) -> Result<Value, ApiError> {
        (self.0)(request)
    }
}

/// Serialize a model into a parameter map.
///
/// Fails if the model does not serialize to a JSON object.
pub fn to_params<T: Serialize>(model: &T) -> Result<Params, ApiError> {
    match serde_json::to_value(model).map_err(|e| ApiError::SerializationError(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::SerializationError(format!(
            "expected an object, got {other}"
        ))),
    }
}

/// Decode a response value into a model.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
