//! The preparing box (`adePreparingBox_*`): staging area for consignments
//! that are not yet part of a pickup confirmation.

use serde_json::Value;

use super::{decode_consignment, decode_ids};
use crate::error::ApiError;
use crate::session::{from_value, to_params, Request, Session};
use crate::types::{Consignment, ConsignmentState};

pub fn build_insert_consignment(consignment: &Consignment) -> Result<Request, ApiError> {
    let data = to_params(consignment)?;
    Ok(Request::new("adePreparingBox_Insert").param("consign_prep_data", Value::Object(data)))
}

pub fn build_consignment_ids(id_start: u64) -> Request {
    Request::new("adePreparingBox_GetConsignIDs").param("id_start", id_start)
}

pub fn build_consignment(id: u64) -> Request {
    Request::new("adePreparingBox_GetConsign").param("id", id)
}

pub fn build_delete_consignment(id: u64) -> Request {
    Request::new("adePreparingBox_DeleteConsign").param("id", id)
}

/// Preparing box operations bound to a session.
#[derive(Debug, Clone)]
pub struct PrepareApi<S> {
    session: S,
}

impl<S: Session> PrepareApi<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// Stage a consignment; returns its preparing-box id.
    pub fn insert_consignment(&self, consignment: &Consignment) -> Result<u64, ApiError> {
        let request = build_insert_consignment(consignment)?;
        from_value(super::dispatch(&self.session, request)?)
    }

    /// Up to 100 staged consignment ids lower than `id_start`, newest first.
    pub fn consignment_ids(&self, id_start: u64) -> Result<Vec<u64>, ApiError> {
        decode_ids(super::dispatch(&self.session, build_consignment_ids(id_start))?)
    }

    pub fn consignment(&self, id: u64) -> Result<Consignment, ApiError> {
        let value = super::dispatch(&self.session, build_consignment(id))?;
        decode_consignment(value, ConsignmentState::Staged)
    }

    /// Remove a staged consignment; returns the removed id.
    pub fn delete_consignment(&self, id: u64) -> Result<u64, ApiError> {
        from_value(super::dispatch(&self.session, build_delete_consignment(id))?)
    }
}
