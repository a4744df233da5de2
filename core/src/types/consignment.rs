use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{text_or_number, Parcel, SenderAddress, ServiceDaw, ServiceIdent, ServicePpe, ServicesBool};

/// Where a consignment record was read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsignmentState {
    /// Still in the preparing box, not part of any pickup.
    #[default]
    Staged,
    /// Part of a confirmed pickup.
    Dispatched,
}

/// A shipment record with its parcels.
///
/// `r*` fields describe the recipient. For PR, PS, EXC and SRS services
/// they may stay empty; ADE reads the addresses from `ppe` instead. Empty
/// `r*` fields are omitted from requests.
///
/// `id`, `quantity`, `weight` and `services_ade` are filled by ADE and
/// never sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Consignment {
    #[serde(default, skip_serializing)]
    id: Option<u64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rname1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rname2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rname3: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rcountry: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rzipcode: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rcity: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rstreet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rphone: Option<String>,
    /// Email or contact person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rcontact: Option<String>,
    /// Printed on labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "text_or_number", skip_serializing)]
    quantity: Option<String>,
    #[serde(default, deserialize_with = "text_or_number", skip_serializing)]
    weight: Option<String>,
    /// Send date; ADE uses the current day when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Cost center (MPK) identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfc: Option<String>,
    #[serde(rename = "sendaddr", default, skip_serializing_if = "Option::is_none")]
    pub sender_address: Option<SenderAddress>,
    #[serde(rename = "srv_bool", default, skip_serializing_if = "Option::is_none")]
    pub services: Option<ServicesBool>,
    #[serde(rename = "srv_ade", default, skip_serializing)]
    services_ade: Option<String>,
    #[serde(rename = "srv_daw", default, skip_serializing_if = "Option::is_none")]
    pub daw: Option<ServiceDaw>,
    #[serde(rename = "srv_ident", default, skip_serializing_if = "Option::is_none")]
    pub ident: Option<ServiceIdent>,
    #[serde(rename = "srv_ppe", default, skip_serializing_if = "Option::is_none")]
    pub ppe: Option<ServicePpe>,
    /// On input, per-parcel services are replaced by `services`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    parcels: Vec<Parcel>,
    #[serde(skip)]
    state: ConsignmentState,
}

impl Consignment {
    /// A consignment with only the required recipient fields set.
    pub fn new(rname1: &str, rcountry: &str, rzipcode: &str, rcity: &str, rstreet: &str) -> Self {
        Self {
            rname1: rname1.to_string(),
            rcountry: rcountry.to_string(),
            rzipcode: rzipcode.to_string(),
            rcity: rcity.to_string(),
            rstreet: rstreet.to_string(),
            ..Self::default()
        }
    }

    /// A PR, PS, EXC or SRS consignment: no recipient fields, addresses
    /// taken from `ppe`.
    pub fn for_ppe(services: ServicesBool, ppe: ServicePpe) -> Self {
        Self {
            services: Some(services),
            ppe: Some(ppe),
            ..Self::default()
        }
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// Parcel count as computed by ADE.
    pub fn quantity(&self) -> Option<&str> {
        self.quantity.as_deref()
    }

    /// Total weight in kilograms as computed by ADE.
    pub fn weight(&self) -> Option<&str> {
        self.weight.as_deref()
    }

    /// Services in ADE notation, e.g. `COD 120.00PLN,EXW,ROD,POD,12:00`.
    pub fn services_ade(&self) -> Option<&str> {
        self.services_ade.as_deref()
    }

    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Append a parcel unless an equal one is already present.
    pub fn add_parcel(&mut self, parcel: Parcel) {
        if !self.parcels.contains(&parcel) {
            self.parcels.push(parcel);
        }
    }

    /// Remove the parcel equal to `parcel`; returns whether one was removed.
    pub fn remove_parcel(&mut self, parcel: &Parcel) -> bool {
        match self.parcels.iter().position(|p| p == parcel) {
            Some(index) => {
                self.parcels.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> ConsignmentState {
        self.state
    }

    pub fn is_dispatched(&self) -> bool {
        self.state == ConsignmentState::Dispatched
    }

    pub(crate) fn with_state(mut self, state: ConsignmentState) -> Self {
        self.state = state;
        self
    }
}
