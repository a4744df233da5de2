//! HTTP envelope for ADE calls in the host-does-IO style.
//!
//! # Design
//! `AdeEndpoint` turns a `Request` into a plain `HttpRequest` and a plain
//! `HttpResponse` back into the decoded value. It never touches the
//! network: the host executes the round-trip, which keeps this crate free
//! of any HTTP client and lets tests drive it with canned responses.
//!
//! Every call is `POST {base_url}/{operation}` with a JSON object body
//! holding the parameters and the `session` id. A 200 carries the decoded
//! value; other statuses carry `{"code", "message"}` when ADE rejected the
//! call.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::session::Request;

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Deserialize)]
struct FaultBody {
    code: String,
    #[serde(default)]
    message: String,
}

/// An ADE endpoint plus the session id every call is made under.
#[derive(Debug, Clone)]
pub struct AdeEndpoint {
    base_url: String,
    session: String,
}

impl AdeEndpoint {
    pub fn new(base_url: &str, session: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session: session.to_string(),
        }
    }

    pub fn encode(&self, request: Request) -> Result<HttpRequest, ApiError> {
        let mut params = request.params;
        params.insert("session".to_string(), Value::String(self.session.clone()));
        let body = serde_json::to_string(&params).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            url: format!("{}/{}", self.base_url, request.operation),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        })
    }

    pub fn decode(&self, response: HttpResponse) -> Result<Value, ApiError> {
        if response.status == 200 {
            return serde_json::from_str(&response.body)
                .map_err(|e| ApiError::DeserializationError(e.to_string()));
        }
        match serde_json::from_str::<FaultBody>(&response.body) {
            Ok(fault) => Err(ApiError::Fault {
                code: fault.code,
                message: fault.message,
            }),
            Err(_) => Err(ApiError::HttpError {
                status: response.status,
                body: response.body,
            }),
        }
    }
}
