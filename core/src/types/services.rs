//! Service flags and the per-service data blocks of a consignment.
//!
//! PR, PS, EXC and SRS change how address data is read: with those
//! services the consignment's `r*` fields may be left empty and the
//! addresses come from `ServicePpe` instead.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Boolean service list (`srv_bool`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServicesBool {
    /// Cash on delivery.
    pub cod: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_amount: Option<String>,
    /// Ex works: recipient pays.
    pub exw: bool,
    /// Return of documents.
    pub rod: bool,
    /// Proof of delivery.
    pub pod: bool,
    /// Exchange service.
    pub exc: bool,
    pub ident: bool,
    /// Delivery to a named person at the address.
    pub daw: bool,
    /// Pick&Ship.
    pub ps: bool,
    /// Pick&Return.
    pub pr: bool,
    /// Delivery by 10:00.
    pub s10: bool,
    /// Delivery by 12:00.
    pub s12: bool,
    /// Saturday delivery.
    pub sat: bool,
    pub ow: bool,
    /// Shop return.
    pub srs: bool,
    pub sds: bool,
}

/// DAW service data (`srv_daw`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceDaw {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Alternative recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altrec: Option<String>,
}

/// IDENT service data (`srv_ident`): hand over only after checking the
/// recipient's identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceIdent {
    pub name: String,
    pub country: String,
    pub zipcode: String,
    pub city: String,
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_birth: Option<NaiveDate>,
    #[serde(default)]
    pub identity: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ident_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ident_number: Option<String>,
    #[serde(default)]
    pub spages: bool,
}

/// PR, PS, EXC and SRS service data (`srv_ppe`).
///
/// `s*` fields describe the pickup address, `r*` fields the delivery
/// address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServicePpe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sname1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sname2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sname3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scountry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub szipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sstreet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sphone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scontact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rname1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rname2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rname3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcountry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rzipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rstreet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rphone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcontact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}
