//! Domain models for the ADE API.
//!
//! # Design
//! Wire names, optionality and direction are declared with serde
//! attributes on each field: `rename` gives the ADE key, absent optional
//! fields are omitted from requests, and fields ADE computes (ids,
//! quantity, weight, `srv_ade`) are private, deserialized only, and never
//! serialized. Dates use `YYYY-MM-DD`; weights and quantities are text.

mod address;
mod consignment;
mod modes;
mod parcel;
mod pickup;
mod services;

use serde::{Deserialize, Deserializer};

pub use address::SenderAddress;
pub use consignment::{Consignment, ConsignmentState};
pub use modes::{LabelMode, PickupReceiptMode};
pub use parcel::Parcel;
pub use pickup::Pickup;
pub use services::{ServiceDaw, ServiceIdent, ServicePpe, ServicesBool};

/// Read an optional string, treating `""` as absent.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

/// Read an optional text field that ADE sometimes sends as a number.
///
/// Text is kept as sent. A number is rendered with its shortest decimal
/// form, so `4.20` on the wire reads back as `"4.2"`, not the two-decimal
/// text weights otherwise use.
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) if s.is_empty() => None,
        Some(Raw::Text(s)) => Some(s),
        Some(Raw::Number(n)) => Some(n.to_string()),
        None => None,
    })
}
