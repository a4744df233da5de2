//! End-to-end runs against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the API wrappers
//! over real HTTP: `AdeEndpoint` builds and reads the exchange, ureq
//! executes it. Each test gets its own server so stores do not interfere.

use ade_mock_server::AppState;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use gls_ade::{
    AdeEndpoint, ApiError, Consignment, ConsignmentState, HttpResponse, LabelMode, Parcel, PickupApi,
    PickupReceiptMode, PrepareApi, Request, SenderAddress, ServicePpe, ServicesBool, Session,
};
use serde_json::Value;

const SESSION: &str = "integration-session";

/// A `Session` that executes requests with ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so ADE faults
/// come back as data and `AdeEndpoint::decode` interprets them.
struct HttpSession {
    endpoint: AdeEndpoint,
    agent: ureq::Agent,
}

impl HttpSession {
    fn new(base_url: &str, session: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            endpoint: AdeEndpoint::new(base_url, session),
            agent,
        }
    }
}

impl Session for HttpSession {
    fn request(&self, request: Request) -> Result<Value, ApiError> {
        let req = self.endpoint.encode(request)?;
        let mut response = self
            .agent
            .post(&req.url)
            .content_type("application/json")
            .send(req.body.as_bytes())
            .map_err(ApiError::transport)?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().map_err(ApiError::transport)?;
        self.endpoint.decode(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

/// Start a mock server in a background thread; returns its base URL.
fn spawn_server(state: AppState) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            ade_mock_server::run(listener, state).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn recipient(name: &str) -> Consignment {
    Consignment::new(name, "PL", "00-950", "Warszawa", "Marszalkowska 1")
}

fn decoded(document: &str) -> String {
    String::from_utf8(STANDARD.decode(document).unwrap()).unwrap()
}

#[test]
fn staging_to_pickup_lifecycle() {
    let base_url = spawn_server(AppState::new(SESSION));
    let session = HttpSession::new(&base_url, SESSION);
    let prepare = PrepareApi::new(&session);
    let pickups = PickupApi::new(&session);

    // Step 1: stage three consignments.
    let mut first = recipient("Jan Kowalski");
    first.references = Some("ORDER-1".to_string());
    first.date = chrono::NaiveDate::from_ymd_opt(2024, 3, 5);
    first.sender_address = Some(SenderAddress::new("Sklep", "PL", "30-001", "Krakow", "Rynek 1"));
    first.services = Some(ServicesBool {
        cod: true,
        cod_amount: Some("120.00".to_string()),
        pod: true,
        ..Default::default()
    });
    first.add_parcel(Parcel::new().with_reference("box 1").with_weight_kg(1.5));
    first.add_parcel(Parcel::new().with_reference("box 2").with_weight_kg(2.25));

    let mut second = recipient("Anna Nowak");
    second.add_parcel(Parcel::new().with_weight_kg(0.5));
    let third = recipient("Piotr Wisniewski");

    let staged_ids: Vec<u64> = [&first, &second, &third]
        .into_iter()
        .map(|c| prepare.insert_consignment(c).unwrap())
        .collect();

    // Step 2: the preparing box lists them newest first.
    let listed = prepare.consignment_ids(0).unwrap();
    let mut expected = staged_ids.clone();
    expected.reverse();
    assert_eq!(listed, expected);

    // Step 3: a staged consignment carries the server-computed fields.
    let staged = prepare.consignment(staged_ids[0]).unwrap();
    assert_eq!(staged.state(), ConsignmentState::Staged);
    assert_eq!(staged.id(), Some(staged_ids[0]));
    assert_eq!(staged.quantity(), Some("2"));
    assert_eq!(staged.weight(), Some("3.75"));
    assert_eq!(staged.services_ade(), Some("COD 120.00PLN,POD"));
    assert_eq!(staged.references.as_deref(), Some("ORDER-1"));
    assert_eq!(staged.date, first.date);

    // Step 4: drop the third one again.
    assert_eq!(prepare.delete_consignment(staged_ids[2]).unwrap(), staged_ids[2]);

    // Step 5: create a pickup from the remaining two.
    let pickup_id = pickups
        .create_pickup(&staged_ids[..2], "weekly batch")
        .unwrap();
    assert!(prepare.consignment_ids(0).unwrap().is_empty());
    assert_eq!(pickups.pickup_ids(0).unwrap(), vec![pickup_id]);

    // Step 6: the pickup holds both consignments under new ids.
    let pickup = pickups.pickup(pickup_id).unwrap();
    assert_eq!(pickup.receipt.as_deref(), Some("weekly batch"));
    assert_eq!(pickup.quantity.as_deref(), Some("3"));
    assert_eq!(pickup.consignments.len(), 2);
    for c in &pickup.consignments {
        assert!(c.is_dispatched());
        assert!(!staged_ids.contains(&c.id().unwrap()));
        assert!(c.parcels().iter().all(Parcel::is_numbered));
    }

    // Step 7: fetch one consignment and find it again by parcel number.
    let dispatched_id = pickup.consignments[0].id().unwrap();
    let dispatched = pickups.consignment(dispatched_id).unwrap();
    assert_eq!(dispatched.rname1, "Jan Kowalski");
    let number = dispatched.parcels()[0].number.clone().unwrap();
    let found = pickups.search_parcel(&number).unwrap();
    assert_eq!(found.id(), Some(dispatched_id));
    assert!(found.is_dispatched());

    // Step 8: documents arrive as base64 and are left undecoded.
    let receipt = pickups.receipt(pickup_id, PickupReceiptMode::Detailed).unwrap();
    assert!(decoded(&receipt).starts_with("%PDF-1.4"));
    assert!(decoded(&receipt).contains("detailed"));
    let labels = pickups.labels(pickup_id, LabelMode::default()).unwrap();
    assert!(decoded(&labels).contains("one_label_on_a4_pdf"));
    let ident = pickups.ident(pickup_id).unwrap();
    assert!(decoded(&ident).starts_with("%PDF-1.4"));
    let consignment_labels = pickups
        .consignment_labels(dispatched_id, LabelMode::Roll160x100Zebra)
        .unwrap();
    assert!(decoded(&consignment_labels).contains("roll_160x100_zebra"));
}

#[test]
fn search_does_not_see_staged_parcels() {
    let base_url = spawn_server(AppState::new(SESSION));
    let session = HttpSession::new(&base_url, SESSION);

    let mut staged = recipient("Jan Kowalski");
    let mut parcel = Parcel::new().with_weight_kg(1.0);
    parcel.number = Some("99900000001".to_string());
    staged.add_parcel(parcel);
    let prepare = PrepareApi::new(&session);
    let id = prepare.insert_consignment(&staged).unwrap();
    let kept = prepare.consignment(id).unwrap();
    assert_eq!(kept.parcels()[0].number.as_deref(), Some("99900000001"));

    let err = PickupApi::new(&session).search_parcel("99900000001").unwrap_err();
    assert_eq!(err.fault_code(), Some("err_parcel_not_found"));
}

#[test]
fn ppe_consignment_is_staged_without_recipient() {
    let base_url = spawn_server(AppState::new(SESSION));
    let session = HttpSession::new(&base_url, SESSION);
    let prepare = PrepareApi::new(&session);

    let services = ServicesBool {
        srs: true,
        ..Default::default()
    };
    let ppe = ServicePpe {
        sname1: Some("Magazyn".to_string()),
        rname1: Some("Odbiorca".to_string()),
        ..Default::default()
    };
    let mut c = Consignment::for_ppe(services, ppe);
    c.add_parcel(Parcel::new().with_weight_kg(1.0));

    let id = prepare.insert_consignment(&c).unwrap();
    let staged = prepare.consignment(id).unwrap();
    assert!(staged.rname1.is_empty());
    assert_eq!(staged.services_ade(), Some("SRS"));
    assert_eq!(staged.ppe, c.ppe);
}

#[test]
fn light_parcel_is_left_to_the_server() {
    let base_url = spawn_server(AppState::new(SESSION));
    let session = HttpSession::new(&base_url, SESSION);

    let mut c = recipient("Jan Kowalski");
    let mut parcel = Parcel::new();
    parcel.weight = Some("0.005".to_string());
    c.add_parcel(parcel);
    let err = PrepareApi::new(&session).insert_consignment(&c).unwrap_err();
    assert_eq!(err.fault_code(), Some("err_parcel_weight_invalid"));
}

#[test]
fn all_pickup_ids_enumerates_every_page() {
    let state = AppState::new(SESSION);
    let seeded = state.store.blocking_write().seed_pickups(250);
    let base_url = spawn_server(state);
    let session = HttpSession::new(&base_url, SESSION);
    let api = PickupApi::new(&session);

    let last_page = api.pickup_ids(51).unwrap();
    assert_eq!(last_page.len(), 50);

    let ids = api.all_pickup_ids().unwrap();
    let mut expected = seeded;
    expected.reverse();
    assert_eq!(ids, expected);
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn wrong_session_surfaces_remote_fault() {
    let base_url = spawn_server(AppState::new(SESSION));
    let session = HttpSession::new(&base_url, "expired");

    let err = PickupApi::new(&session).pickup_ids(0).unwrap_err();
    assert!(matches!(err, ApiError::Fault { .. }));
    assert_eq!(err.fault_code(), Some("err_sess_not_found"));
}

#[test]
fn unreachable_endpoint_is_a_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let session = HttpSession::new(&format!("http://127.0.0.1:{port}"), SESSION);

    let err = PickupApi::new(&session).pickup(1).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
