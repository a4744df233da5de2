use serde::{Deserialize, Serialize};

use super::{empty_as_none, ServicesBool};

/// A single package within a consignment.
///
/// Weight travels as text. ADE rejects parcels under 0.01 kg; no check
/// happens here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Parcel {
    /// Parcel number. A client may send its own; ADE keeps it or replaces
    /// it, and numbers unnumbered parcels when a pickup is created. Empty
    /// on output means the parcel has no number yet.
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Kilograms, as text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(rename = "srv_bool", default, skip_serializing_if = "Option::is_none")]
    pub services: Option<ServicesBool>,
    #[serde(rename = "srv_ade", default, skip_serializing)]
    services_ade: Option<String>,
}

impl Parcel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference = Some(reference.to_string());
        self
    }

    /// Set the weight from kilograms, formatted with two decimals.
    pub fn with_weight_kg(mut self, kg: f64) -> Self {
        self.weight = Some(format!("{kg:.2}"));
        self
    }

    pub fn is_numbered(&self) -> bool {
        self.number.is_some()
    }

    /// Services in ADE notation, e.g. `COD 120.00PLN,EXW,ROD,POD,12:00`.
    pub fn services_ade(&self) -> Option<&str> {
        self.services_ade.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn weight_is_text() {
        let parcel = Parcel::new().with_weight_kg(2.5);
        let value = serde_json::to_value(&parcel).unwrap();
        assert_eq!(value, json!({"weight": "2.50"}));
    }

    #[test]
    fn tiny_weight_is_not_rejected() {
        let parcel = Parcel {
            weight: Some("0.001".to_string()),
            ..Parcel::new()
        };
        let value = serde_json::to_value(&parcel).unwrap();
        assert_eq!(value["weight"], "0.001");
    }

    #[test]
    fn empty_number_means_unassigned() {
        let parcel: Parcel = serde_json::from_value(json!({"number": "", "weight": "1.00"})).unwrap();
        assert!(!parcel.is_numbered());
    }

    #[test]
    fn client_number_is_sent() {
        let mut parcel = Parcel::new().with_weight_kg(1.0);
        parcel.number = Some("99900000001".to_string());
        let value = serde_json::to_value(&parcel).unwrap();
        assert_eq!(value, json!({"number": "99900000001", "weight": "1.00"}));
    }

    #[test]
    fn services_ade_is_read_only() {
        let parcel: Parcel =
            serde_json::from_value(json!({"number": "10000000001", "srv_ade": "COD 12.00PLN"})).unwrap();
        assert_eq!(parcel.services_ade(), Some("COD 12.00PLN"));
        let value = serde_json::to_value(&parcel).unwrap();
        assert!(value.get("srv_ade").is_none());
        assert_eq!(value["number"], "10000000001");
    }
}
