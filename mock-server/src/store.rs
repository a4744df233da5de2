//! In-memory ADE state: the preparing box, pickups and their consignments.
//!
//! Consignments are kept as the JSON objects clients sent, extended with
//! the fields ADE computes (`id`, `quantity`, `weight`, `srv_ade`).

use std::collections::BTreeMap;

use axum::http::StatusCode;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Map, Value};

use crate::fault::Fault;

pub const PAGE_SIZE: usize = 100;

/// Dispatched consignment ids start here so they never collide with
/// preparing-box ids.
const FIRST_DISPATCHED_ID: u64 = 100_000;
const FIRST_PARCEL_NUMBER: u64 = 10_000_000_001;
const MIN_PARCEL_WEIGHT: f64 = 0.01;

const REQUIRED_FIELDS: [&str; 5] = ["rname1", "rcountry", "rzipcode", "rcity", "rstreet"];
/// With any of these services the recipient comes from `srv_ppe`.
const PPE_SERVICES: [&str; 4] = ["pr", "ps", "exc", "srs"];
const RECEIPT_MODES: [&str; 2] = ["condensed", "detailed"];
const LABEL_MODES: [&str; 12] = [
    "one_label_on_a4_lt_pdf",
    "one_label_on_a4_rt_pdf",
    "one_label_on_a4_lb_pdf",
    "one_label_on_a4_rb_pdf",
    "one_label_on_a4_pdf",
    "four_labels_on_a4_pdf",
    "four_labels_on_a4_right_pdf",
    "roll_160x100_pdf",
    "roll_160x100_vertical_pdf",
    "roll_160x100_datamax",
    "roll_160x100_zebra",
    "roll_160x100_zebra_epl",
];

pub type Record = Map<String, Value>;

#[derive(Debug, Clone)]
pub struct PickupRecord {
    pub id: u64,
    pub description: String,
    pub consignment_ids: Vec<u64>,
    pub datetime: String,
}

#[derive(Debug)]
pub struct Store {
    next_staged_id: u64,
    next_dispatched_id: u64,
    next_pickup_id: u64,
    next_parcel_number: u64,
    staged: BTreeMap<u64, Record>,
    dispatched: BTreeMap<u64, Record>,
    pickups: BTreeMap<u64, PickupRecord>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_staged_id: 1,
            next_dispatched_id: FIRST_DISPATCHED_ID,
            next_pickup_id: 1,
            next_parcel_number: FIRST_PARCEL_NUMBER,
            staged: BTreeMap::new(),
            dispatched: BTreeMap::new(),
            pickups: BTreeMap::new(),
        }
    }
}

impl Store {
    /// Add `count` empty pickups; returns their ids in creation order.
    pub fn seed_pickups(&mut self, count: usize) -> Vec<u64> {
        (0..count)
            .map(|n| self.open_pickup(format!("seed {n}"), Vec::new()))
            .collect()
    }

    /// Run one ADE operation against the store.
    pub fn handle(&mut self, operation: &str, params: &Map<String, Value>) -> Result<Value, Fault> {
        match operation {
            "adePreparingBox_Insert" => self.insert_staged(params),
            "adePreparingBox_GetConsignIDs" => {
                let start = u64_param(params, "id_start").unwrap_or(0);
                Ok(json!(page(self.staged.keys(), start)))
            }
            "adePreparingBox_GetConsign" => {
                let id = u64_param(params, "id")?;
                self.staged
                    .get(&id)
                    .map(|c| Value::Object(c.clone()))
                    .ok_or_else(|| Fault::invalid("err_cons_not_found", format!("no staged consignment {id}")))
            }
            "adePreparingBox_DeleteConsign" => {
                let id = u64_param(params, "id")?;
                self.staged
                    .remove(&id)
                    .map(|_| json!(id))
                    .ok_or_else(|| Fault::invalid("err_cons_not_found", format!("no staged consignment {id}")))
            }
            "adePickup_Create" => self.create_pickup(params),
            "adePickup_GetIDs" => {
                let start = u64_param(params, "id_start").unwrap_or(0);
                Ok(json!(page(self.pickups.keys(), start)))
            }
            "adePickup_Get" => {
                let pickup = self.pickup(params)?;
                let consignments: Vec<Value> = pickup
                    .consignment_ids
                    .iter()
                    .filter_map(|id| self.dispatched.get(id))
                    .map(|c| Value::Object(c.clone()))
                    .collect();
                let (quantity, weight) = totals(&consignments);
                Ok(json!({
                    "id": pickup.id,
                    "receipt": pickup.description,
                    "quantity": quantity.to_string(),
                    "weight": format!("{weight:.2}"),
                    "datetime": pickup.datetime,
                    "consignments": consignments,
                }))
            }
            "adePickup_GetConsign" => self.dispatched_consignment(params).map(|c| Value::Object(c.clone())),
            "adePickup_GetReceipt" => {
                let pickup = self.pickup(params)?;
                let mode = mode_param(params, &RECEIPT_MODES)?;
                Ok(json!({ "receipt": document("receipt", pickup.id, mode) }))
            }
            "adePickup_GetLabels" => {
                let pickup = self.pickup(params)?;
                let mode = mode_param(params, &LABEL_MODES)?;
                Ok(json!({ "labels": document("labels", pickup.id, mode) }))
            }
            "adePickup_GetIdent" => {
                let pickup = self.pickup(params)?;
                Ok(json!({ "ident": document("ident", pickup.id, "ident") }))
            }
            "adePickup_GetConsignLabels" => {
                let id = self.dispatched_consignment(params)?["id"].as_u64().unwrap_or_default();
                let mode = mode_param(params, &LABEL_MODES)?;
                Ok(json!({ "labels": document("consignment labels", id, mode) }))
            }
            "adePickup_ParcelNumberSearch" => {
                let number = str_param(params, "number")?;
                self.dispatched
                    .values()
                    .find(|c| has_parcel(c, number))
                    .map(|c| Value::Object(c.clone()))
                    .ok_or_else(|| Fault::invalid("err_parcel_not_found", format!("no parcel {number}")))
            }
            other => Err(Fault::new(
                StatusCode::NOT_FOUND,
                "err_operation_unknown",
                format!("unknown operation {other}"),
            )),
        }
    }

    fn insert_staged(&mut self, params: &Map<String, Value>) -> Result<Value, Fault> {
        let mut data = match params.get("consign_prep_data") {
            Some(Value::Object(data)) => data.clone(),
            _ => return Err(Fault::invalid("err_param_missing", "consign_prep_data is required")),
        };
        let fields: &[&str] = if uses_ppe(&data) { &[] } else { &REQUIRED_FIELDS };
        for &field in fields {
            if data.get(field).and_then(Value::as_str).map_or(true, str::is_empty) {
                return Err(Fault::invalid("err_cons_data_invalid", format!("{field} is required")));
            }
        }
        if let Some(Value::Array(parcels)) = data.get("parcels") {
            for parcel in parcels {
                if let Some(weight) = parcel_weight(parcel) {
                    if weight < MIN_PARCEL_WEIGHT {
                        return Err(Fault::invalid(
                            "err_parcel_weight_invalid",
                            format!("parcel weight {weight} is below {MIN_PARCEL_WEIGHT}"),
                        ));
                    }
                }
            }
        }

        let id = self.next_staged_id;
        self.next_staged_id += 1;
        data.insert("id".to_string(), json!(id));
        compute_fields(&mut data);
        self.staged.insert(id, data);
        Ok(json!(id))
    }

    fn create_pickup(&mut self, params: &Map<String, Value>) -> Result<Value, Fault> {
        let ids: Vec<u64> = match params.get("consigns_ids") {
            Some(Value::Array(ids)) => ids.iter().filter_map(as_u64).collect(),
            _ => return Err(Fault::invalid("err_param_missing", "consigns_ids is required")),
        };
        if ids.is_empty() {
            return Err(Fault::invalid("err_cons_empty", "no consignments given"));
        }
        if let Some(missing) = ids.iter().find(|id| !self.staged.contains_key(*id)) {
            return Err(Fault::invalid(
                "err_cons_id_invalid",
                format!("consignment {missing} is not in the preparing box"),
            ));
        }
        let description = params.get("desc").and_then(Value::as_str).unwrap_or_default().to_string();

        let mut dispatched_ids = Vec::with_capacity(ids.len());
        for staged_id in ids {
            let Some(mut data) = self.staged.remove(&staged_id) else {
                continue;
            };
            let id = self.next_dispatched_id;
            self.next_dispatched_id += 1;
            data.insert("id".to_string(), json!(id));
            if let Some(Value::Array(parcels)) = data.get_mut("parcels") {
                for parcel in parcels.iter_mut().filter_map(Value::as_object_mut) {
                    let numbered = parcel.get("number").and_then(Value::as_str).is_some_and(|n| !n.is_empty());
                    if !numbered {
                        parcel.insert("number".to_string(), json!(self.next_parcel_number.to_string()));
                        self.next_parcel_number += 1;
                    }
                }
            }
            self.dispatched.insert(id, data);
            dispatched_ids.push(id);
        }
        Ok(json!(self.open_pickup(description, dispatched_ids)))
    }

    fn open_pickup(&mut self, description: String, consignment_ids: Vec<u64>) -> u64 {
        let id = self.next_pickup_id;
        self.next_pickup_id += 1;
        self.pickups.insert(
            id,
            PickupRecord {
                id,
                description,
                consignment_ids,
                datetime: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            },
        );
        id
    }

    fn pickup(&self, params: &Map<String, Value>) -> Result<&PickupRecord, Fault> {
        let id = u64_param(params, "id")?;
        self.pickups
            .get(&id)
            .ok_or_else(|| Fault::invalid("err_pickup_id_invalid", format!("no pickup {id}")))
    }

    fn dispatched_consignment(&self, params: &Map<String, Value>) -> Result<&Record, Fault> {
        let id = u64_param(params, "id")?;
        self.dispatched
            .get(&id)
            .ok_or_else(|| Fault::invalid("err_cons_not_found", format!("no consignment {id}")))
    }
}

/// Up to `PAGE_SIZE` ids below `start` (all ids when `start` is 0),
/// highest first.
fn page<'a>(ids: impl DoubleEndedIterator<Item = &'a u64>, start: u64) -> Vec<u64> {
    ids.rev()
        .copied()
        .filter(|&id| start == 0 || id < start)
        .take(PAGE_SIZE)
        .collect()
}

fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn u64_param(params: &Map<String, Value>, key: &str) -> Result<u64, Fault> {
    params
        .get(key)
        .and_then(as_u64)
        .ok_or_else(|| Fault::invalid("err_param_missing", format!("{key} must be an integer")))
}

fn str_param<'a>(params: &'a Map<String, Value>, key: &str) -> Result<&'a str, Fault> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| Fault::invalid("err_param_missing", format!("{key} is required")))
}

fn mode_param<'a>(params: &'a Map<String, Value>, allowed: &[&str]) -> Result<&'a str, Fault> {
    let mode = str_param(params, "mode")?;
    if allowed.contains(&mode) {
        Ok(mode)
    } else {
        Err(Fault::invalid("err_mode_invalid", format!("unsupported mode {mode}")))
    }
}

fn parcel_weight(parcel: &Value) -> Option<f64> {
    match parcel.get("weight")? {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn uses_ppe(consignment: &Record) -> bool {
    let Some(services) = consignment.get("srv_bool") else {
        return false;
    };
    PPE_SERVICES
        .iter()
        .any(|key| services.get(key).and_then(Value::as_bool).unwrap_or(false))
}

fn has_parcel(consignment: &Record, number: &str) -> bool {
    match consignment.get("parcels") {
        Some(Value::Array(parcels)) => parcels
            .iter()
            .any(|p| p.get("number").and_then(Value::as_str) == Some(number)),
        _ => false,
    }
}

/// Fill `quantity`, `weight` and `srv_ade` from the parcels and services,
/// overwriting whatever the client sent.
fn compute_fields(data: &mut Record) {
    let (quantity, weight) = match data.get("parcels") {
        Some(Value::Array(parcels)) => (parcels.len(), parcels.iter().filter_map(parcel_weight).sum::<f64>()),
        _ => (0, 0.0),
    };
    data.insert("quantity".to_string(), json!(quantity.to_string()));
    data.insert("weight".to_string(), json!(format!("{weight:.2}")));
    let services = data.get("srv_bool").map(services_ade).unwrap_or_default();
    data.insert("srv_ade".to_string(), json!(services));
}

fn totals(consignments: &[Value]) -> (u64, f64) {
    consignments.iter().fold((0, 0.0), |(quantity, weight), c| {
        let q = c.get("quantity").and_then(as_u64).unwrap_or(0);
        let w = c
            .get("weight")
            .and_then(Value::as_str)
            .and_then(|w| w.parse::<f64>().ok())
            .unwrap_or(0.0);
        (quantity + q, weight + w)
    })
}

/// Render `srv_bool` in ADE notation, e.g. `COD 120.00PLN,POD,12:00`.
fn services_ade(services: &Value) -> String {
    const FLAGS: [(&str, &str); 14] = [
        ("exw", "EXW"),
        ("rod", "ROD"),
        ("pod", "POD"),
        ("exc", "EXC"),
        ("ident", "IDENT"),
        ("daw", "DAW"),
        ("ps", "PS"),
        ("pr", "PR"),
        ("s10", "10:00"),
        ("s12", "12:00"),
        ("sat", "SAT"),
        ("ow", "OW"),
        ("srs", "SRS"),
        ("sds", "SDS"),
    ];
    let enabled = |key: &str| services.get(key).and_then(Value::as_bool).unwrap_or(false);

    let mut parts = Vec::new();
    if enabled("cod") {
        let amount = services.get("cod_amount").and_then(Value::as_str).unwrap_or("0.00");
        parts.push(format!("COD {amount}PLN"));
    }
    parts.extend(FLAGS.iter().filter(|&&(key, _)| enabled(key)).map(|&(_, code)| code.to_string()));
    parts.join(",")
}

/// A fake PDF, MIME base64 encoded.
fn document(kind: &str, id: u64, mode: &str) -> String {
    STANDARD.encode(format!("%PDF-1.4\n% {kind} {id} ({mode})\n%%EOF\n"))
}
