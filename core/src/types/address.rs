use serde::{Deserialize, Serialize};

/// Sender address attached to a consignment (`sendaddr`).
///
/// Overrides the account's default sender for one consignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SenderAddress {
    pub name1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name3: Option<String>,
    /// ISO 3166-1 alpha-2.
    pub country: String,
    pub zipcode: String,
    pub city: String,
    pub street: String,
}

impl SenderAddress {
    pub fn new(name1: &str, country: &str, zipcode: &str, city: &str, street: &str) -> Self {
        Self {
            name1: name1.to_string(),
            name2: None,
            name3: None,
            country: country.to_string(),
            zipcode: zipcode.to_string(),
            city: city.to_string(),
            street: street.to_string(),
        }
    }
}
