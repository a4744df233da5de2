//! API wrappers, one per group of ADE operations.

pub mod pickup;
pub mod prepare;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::session::{from_value, Request, Session};
use crate::types::{Consignment, ConsignmentState};

pub use pickup::PickupApi;
pub use prepare::PrepareApi;

fn dispatch<S: Session>(session: &S, request: Request) -> Result<Value, ApiError> {
    debug!(operation = request.operation, params = request.params.len(), "ADE request");
    session.request(request)
}

fn decode_ids(value: Value) -> Result<Vec<u64>, ApiError> {
    from_value(value)
}

fn decode_consignment(value: Value, state: ConsignmentState) -> Result<Consignment, ApiError> {
    from_value::<Consignment>(value).map(|c| c.with_state(state))
}

/// Documents come back either bare or wrapped as `{ "<field>": "..." }`.
fn decode_document(value: Value, field: &str) -> Result<String, ApiError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Document {
        Bare(String),
        Wrapped(serde_json::Map<String, Value>),
    }

    match from_value::<Document>(value)? {
        Document::Bare(doc) => Ok(doc),
        Document::Wrapped(mut map) => match map.remove(field) {
            Some(Value::String(doc)) => Ok(doc),
            _ => Err(ApiError::DeserializationError(format!(
                "expected a `{field}` string in the response"
            ))),
        },
    }
}
