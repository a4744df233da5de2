//! Client for the GLS ADE web API: pickup confirmations and the preparing
//! box.
//!
//! # Overview
//! Typed models (`Consignment`, `Parcel`, `SenderAddress`, `Pickup` and the
//! service blocks) serialize into the flat parameter maps ADE expects and
//! deserialize from its replies. API wrappers turn each method call into
//! one named ADE operation and hand it to a caller-supplied `Session`.
//!
//! # Design
//! - The crate performs no I/O. A `Session` executes requests; `AdeEndpoint`
//!   helps hosts that speak to ADE over HTTP build and read the exchange.
//! - Remote failures are passed through untouched: no retry, no local
//!   validation, no renaming of ADE fault codes.
//! - Each operation is split into a pure `build_*` function and an API
//!   method, so requests can be checked without a session.

pub mod client;
pub mod error;
pub mod http;
pub mod session;
pub mod types;

pub use client::{PickupApi, PrepareApi};
pub use error::ApiError;
pub use http::{AdeEndpoint, HttpRequest, HttpResponse};
pub use session::{from_fn, Params, Request, Session};
pub use types::{
    Consignment, ConsignmentState, LabelMode, Parcel, Pickup, PickupReceiptMode, SenderAddress,
    ServiceDaw, ServiceIdent, ServicePpe, ServicesBool,
};
