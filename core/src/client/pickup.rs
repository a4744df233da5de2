//! Pickup confirmations (`adePickup_*`).
//!
//! Each operation has a pure `build_*` function producing the `Request`
//! and a `PickupApi` method that sends it through the session and decodes
//! the reply.

use serde_json::Value;
use tracing::trace;

use super::{decode_consignment, decode_document, decode_ids};
use crate::error::ApiError;
use crate::session::{from_value, Request, Session};
use crate::types::{Consignment, ConsignmentState, LabelMode, Pickup, PickupReceiptMode};

/// Maximum number of ids returned by one `adePickup_GetIDs` call.
pub const PAGE_SIZE: usize = 100;

pub fn build_create_pickup(consignment_ids: &[u64], description: &str) -> Request {
    Request::new("adePickup_Create")
        .param("consigns_ids", consignment_ids.to_vec())
        .param("desc", description)
}

pub fn build_pickup_ids(id_start: u64) -> Request {
    Request::new("adePickup_GetIDs").param("id_start", id_start)
}

pub fn build_pickup(id: u64) -> Request {
    Request::new("adePickup_Get").param("id", id)
}

pub fn build_consignment(id: u64) -> Request {
    Request::new("adePickup_GetConsign").param("id", id)
}

pub fn build_receipt(id: u64, mode: PickupReceiptMode) -> Request {
    Request::new("adePickup_GetReceipt")
        .param("id", id)
        .param("mode", mode.as_str())
}

pub fn build_labels(id: u64, mode: LabelMode) -> Request {
    Request::new("adePickup_GetLabels")
        .param("id", id)
        .param("mode", mode.as_str())
}

pub fn build_ident(id: u64) -> Request {
    Request::new("adePickup_GetIdent").param("id", id)
}

pub fn build_consignment_labels(id: u64, mode: LabelMode) -> Request {
    Request::new("adePickup_GetConsignLabels")
        .param("id", id)
        .param("mode", mode.as_str())
}

pub fn build_search_parcel(number: &str) -> Request {
    Request::new("adePickup_ParcelNumberSearch").param("number", number)
}

/// Pickup confirmation operations bound to a session.
#[derive(Debug, Clone)]
pub struct PickupApi<S> {
    session: S,
}

impl<S: Session> PickupApi<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// Create a pickup confirmation from staged consignments.
    ///
    /// Unnumbered parcels get numbers, and the consignments get new ids
    /// that differ from their preparing-box ids.
    pub fn create_pickup(&self, consignment_ids: &[u64], description: &str) -> Result<u64, ApiError> {
        let value = self.call(build_create_pickup(consignment_ids, description))?;
        from_value(value)
    }

    /// Up to `PAGE_SIZE` pickup ids lower than `id_start`, newest first.
    ///
    /// `id_start = 0` yields the newest ids. A page shorter than
    /// `PAGE_SIZE` is the last one.
    pub fn pickup_ids(&self, id_start: u64) -> Result<Vec<u64>, ApiError> {
        decode_ids(self.call(build_pickup_ids(id_start))?)
    }

    /// Every pickup id, newest first, fetched page by page.
    ///
    /// Fails with `DeserializationError` when a page does not end below
    /// the cursor it was requested with.
    pub fn all_pickup_ids(&self) -> Result<Vec<u64>, ApiError> {
        let mut ids = Vec::new();
        let mut cursor = 0;
        loop {
            let page = self.pickup_ids(cursor)?;
            trace!(cursor, fetched = page.len(), "pickup id page");
            let last_page = page.len() < PAGE_SIZE;
            let Some(&last) = page.last() else {
                break;
            };
            if last == 0 || (cursor != 0 && last >= cursor) {
                return Err(ApiError::DeserializationError(format!(
                    "pickup id page ending at {last} does not descend below {cursor}"
                )));
            }
            cursor = last;
            ids.extend(page);
            if last_page {
                break;
            }
        }
        Ok(ids)
    }

    pub fn pickup(&self, id: u64) -> Result<Pickup, ApiError> {
        let mut pickup: Pickup = from_value(self.call(build_pickup(id))?)?;
        pickup.consignments = pickup
            .consignments
            .into_iter()
            .map(|c| c.with_state(ConsignmentState::Dispatched))
            .collect();
        Ok(pickup)
    }

    /// A consignment that belongs to a pickup confirmation.
    pub fn consignment(&self, id: u64) -> Result<Consignment, ApiError> {
        decode_consignment(self.call(build_consignment(id))?, ConsignmentState::Dispatched)
    }

    /// Receipt print, MIME base64 encoded.
    pub fn receipt(&self, id: u64, mode: PickupReceiptMode) -> Result<String, ApiError> {
        decode_document(self.call(build_receipt(id, mode))?, "receipt")
    }

    /// Labels of every consignment in the pickup, MIME base64 encoded.
    pub fn labels(&self, id: u64, mode: LabelMode) -> Result<String, ApiError> {
        decode_document(self.call(build_labels(id, mode))?, "labels")
    }

    /// IDENT prints of the pickup, MIME base64 encoded.
    pub fn ident(&self, id: u64) -> Result<String, ApiError> {
        decode_document(self.call(build_ident(id))?, "ident")
    }

    /// Labels of one consignment from any pickup, MIME base64 encoded.
    pub fn consignment_labels(&self, id: u64, mode: LabelMode) -> Result<String, ApiError> {
        decode_document(self.call(build_consignment_labels(id, mode))?, "labels")
    }

    /// Find a consignment by parcel number.
    ///
    /// Only consignments in pickup confirmations are searched; parcels
    /// still in the preparing box are not found.
    pub fn search_parcel(&self, number: &str) -> Result<Consignment, ApiError> {
        decode_consignment(self.call(build_search_parcel(number))?, ConsignmentState::Dispatched)
    }

    fn call(&self, request: Request) -> Result<Value, ApiError> {
        super::dispatch(&self.session, request)
    }
}
