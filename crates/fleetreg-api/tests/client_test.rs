// Integration tests for `RegistryClient` using wiremock.
//
// Cover both halves of the client's contract: faithful pass-through when
// the registry answers, and deterministic synthetic fallback when it
// doesn't (5xx, auth rejection, timeout, unreachable origin).
#![allow(clippy::unwrap_used)]

use std::time::{Duration, Instant};

use secrecy::SecretString;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fleetreg_api::{ClientConfig, Error, OriginMode, Portal, RegistryClient, SessionStore};

// ── Helpers ─────────────────────────────────────────────────────────

/// Matches requests that carry no Authorization header at all.
struct NoAuthHeader;

impl wiremock::Match for NoAuthHeader {
    fn matches(&self, request: &wiremock::Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

/// Remote-mode config against a wiremock server. Origin mode is forced
/// because mock servers listen on loopback, which would otherwise
/// short-circuit to the synthetic catalogue.
fn remote_config(uri: &str) -> ClientConfig {
    let mut cfg = ClientConfig::new(uri.parse().unwrap(), Portal::Admin);
    cfg.origin = Some(OriginMode::Remote);
    cfg
}

fn build_client(cfg: ClientConfig, dir: &TempDir) -> RegistryClient {
    let store = SessionStore::at_path(dir.path().join("session.json"));
    RegistryClient::with_session_store(cfg, store).unwrap()
}

async fn setup() -> (MockServer, TempDir, RegistryClient) {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = build_client(remote_config(&server.uri()), &dir);
    (server, dir, client)
}

// ── Happy-path pass-through ─────────────────────────────────────────

#[tokio::test]
async fn dvla_vehicles_pass_through_from_remote() {
    let (server, _dir, client) = setup().await;

    let body = json!([
        {
            "id": 42,
            "reg_number": "AB12 CDE",
            "owner_name": "Priya Nair",
            "make": "Honda",
            "model": "Civic",
            "year": 2021,
            "status": "active"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/dvla/vehicles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let vehicles = client.get_dvla_vehicles().await.unwrap();

    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].reg_number, "AB12 CDE");
    assert_eq!(vehicles[0].owner_name, "Priya Nair");
    assert_eq!(vehicles[0].status, "active");
}

#[tokio::test]
async fn submit_violation_posts_body_and_parses_reply() {
    let (server, _dir, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/violations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 88,
            "reg_number": "AB12 CDE",
            "violation_type": "speeding",
            "status": "pending"
        })))
        .mount(&server)
        .await;

    let new = fleetreg_api::models::NewViolation {
        reg_number: "AB12 CDE".into(),
        violation_type: "speeding".into(),
        location: "M4 J17".into(),
        description: None,
        fine_amount: Some(100.0),
    };
    let violation = client.submit_violation(&new).await.unwrap();

    assert_eq!(violation.id, Some(88));
    assert_eq!(violation.status, "pending");
}

// ── Fallback behaviors ──────────────────────────────────────────────

#[tokio::test]
async fn server_error_falls_back_to_catalogue() {
    let (server, _dir, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/dvla/vehicles"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let vehicles = client.get_dvla_vehicles().await.unwrap();

    assert!(!vehicles.is_empty(), "fallback catalogue must not be empty");
    assert_eq!(vehicles[0].reg_number, "LD63 KWF");
}

#[tokio::test]
async fn unreachable_origin_falls_back_to_catalogue() {
    let dir = tempfile::tempdir().unwrap();
    let client = build_client(remote_config("http://registry.fleetreg.invalid"), &dir);

    let vehicles = client.get_dvla_vehicles().await.unwrap();

    assert!(!vehicles.is_empty());
    assert_eq!(vehicles[0].reg_number, "LD63 KWF");
}

#[tokio::test]
async fn timeout_resolves_to_fallback_within_ceiling() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    let mut cfg = remote_config(&server.uri());
    cfg.transport.timeout = Duration::from_millis(500);
    let client = build_client(cfg, &dir);

    Mock::given(method("GET"))
        .and(path("/dvla/fines"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
        .mount(&server)
        .await;

    let started = Instant::now();
    let fines = client.get_dvla_fines().await.unwrap();

    assert!(
        started.elapsed() < Duration::from_secs(5),
        "call must resolve promptly, took {:?}",
        started.elapsed()
    );
    assert!(!fines.is_empty(), "timeout must serve the fine catalogue");
}

#[tokio::test]
async fn auth_rejection_is_served_synthetically() {
    // Documented trade-off: with fallback enabled a 401 from a real
    // backend is indistinguishable from an outage — login still succeeds
    // with an offline token.
    let (server, _dir, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let resp = client
        .login("officer1", &SecretString::from("wrongpass"))
        .await
        .unwrap();

    assert!(resp.token.starts_with("offline-admin-"), "token: {}", resp.token);
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn fallback_disabled_surfaces_typed_errors() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    let mut cfg = remote_config(&server.uri());
    cfg.offline_fallback = false;
    let client = build_client(cfg, &dir);

    Mock::given(method("GET"))
        .and(path("/dvla/vehicles"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.get_dvla_vehicles().await;

    match result {
        Err(Error::Api { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Session / bearer header ─────────────────────────────────────────

#[tokio::test]
async fn login_token_is_attached_to_subsequent_requests() {
    let (server, _dir, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "srv-token-1",
            "role": "admin"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/vehicles"))
        .and(header("authorization", "Bearer srv-token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client
        .login("admin", &SecretString::from("hunter2"))
        .await
        .unwrap();
    assert!(client.is_authenticated());

    let vehicles = client.get_vehicles().await.unwrap();
    assert!(vehicles.is_empty());
}

#[tokio::test]
async fn logout_stops_attaching_the_bearer_header() {
    let (server, _dir, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "srv-token-2",
            "role": "admin"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/vehicles"))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client
        .login("admin", &SecretString::from("hunter2"))
        .await
        .unwrap();
    client.logout().await.unwrap();
    assert!(!client.is_authenticated());

    let vehicles = client.get_vehicles().await.unwrap();
    assert!(vehicles.is_empty());
}

#[tokio::test]
async fn session_rehydrates_across_client_instances() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ClientConfig::new("http://127.0.0.1:9".parse().unwrap(), Portal::Police);

    {
        let client = build_client(cfg.clone(), &dir);
        assert_eq!(client.origin_mode(), OriginMode::Local);
        client
            .login("pc.adeyemi", &SecretString::from("anything"))
            .await
            .unwrap();
        assert!(client.is_authenticated());
    }

    let revived = build_client(cfg, &dir);
    assert!(revived.is_authenticated());
    let session = revived.session().unwrap();
    assert_eq!(session.role, "officer");
    assert!(session.token.starts_with("offline-officer-"));
}

// ── Local origin short-circuit ──────────────────────────────────────

#[tokio::test]
async fn local_origin_short_circuits_without_network() {
    let dir = tempfile::tempdir().unwrap();
    // Nothing listens on this port; a network attempt would error or hang.
    let cfg = ClientConfig::new("http://localhost:1".parse().unwrap(), Portal::Dvla);
    let client = build_client(cfg, &dir);

    let started = Instant::now();
    let vehicles = client.get_dvla_vehicles().await.unwrap();

    assert!(started.elapsed() < Duration::from_millis(250));
    assert!(!vehicles.is_empty());
    for vehicle in &vehicles {
        assert!(!vehicle.reg_number.is_empty());
        assert!(!vehicle.owner_name.is_empty());
        assert!(!vehicle.status.is_empty());
    }
}

#[tokio::test]
async fn every_domain_method_resolves_offline() {
    // The headline property: against an undeployed origin, the whole typed
    // surface yields well-formed data and never an error.
    let dir = tempfile::tempdir().unwrap();
    let cfg = ClientConfig::new("http://127.0.0.1:8000".parse().unwrap(), Portal::Supervisor);
    let client = build_client(cfg, &dir);

    client
        .login("sup1", &SecretString::from("pw"))
        .await
        .unwrap();
    client
        .register("new.user", &SecretString::from("pw"), "New User")
        .await
        .unwrap();
    assert!(!client.get_vehicles().await.unwrap().is_empty());
    client.lookup_vehicle("RV19 XTC").await.unwrap();
    assert!(!client.get_violations().await.unwrap().is_empty());
    client.approve_violation(7001).await.unwrap();
    client.reject_violation(7001, Some("duplicate")).await.unwrap();
    assert!(!client.get_dvla_vehicles().await.unwrap().is_empty());
    let new_vehicle = fleetreg_api::models::NewVehicle {
        reg_number: "AK23 ZRP".into(),
        owner_name: "Pending Owner".into(),
        make: "Skoda".into(),
        model: "Octavia".into(),
        colour: "Green".into(),
        year: 2023,
    };
    client.create_dvla_vehicle(&new_vehicle).await.unwrap();
    client.update_dvla_vehicle(1, &new_vehicle).await.unwrap();
    client.delete_dvla_vehicle(3).await.unwrap();
    client.create_dvla_renewal("LD63 KWF", 12).await.unwrap();
    assert!(!client.get_dvla_fines().await.unwrap().is_empty());
    client.clear_dvla_fine(501).await.unwrap();
    let analytics = client.get_dvla_analytics().await.unwrap();
    assert!(analytics.total_vehicles > 0);
    let stats = client.get_violation_stats().await.unwrap();
    assert!(stats.total > 0);
    assert!(!client.get_officer_stats().await.unwrap().is_empty());
    client.logout().await.unwrap();
    assert!(!client.is_authenticated());
}
