//! The hosted REST backend against a local fake of the `/rest/v1` interface.
//!
//! Each test starts an actix-web server on an ephemeral port that records
//! every request and answers with a fixed status and body.
//!
//! Run with: `cargo test --test postgrest_store_test`
mod common;

use actix_web::dev::ServerHandle;
use actix_web::http::{Method, StatusCode};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use agency_site_backend::content::services::fetch_services;
use agency_site_backend::content::{FallbackReason, Outcome};
use agency_site_backend::handlers::ListResponse;
use agency_site_backend::models::services::Model as ServiceRow;
use agency_site_backend::store::{PostgrestClient, PostgrestTable, RemoteTable, StoreError};

use common::service;

const ANON_KEY: &str = "anon-test-key";

/// One request as the fake store received it.
#[derive(Debug, Clone)]
struct Seen {
    method: Method,
    path: String,
    query: HashMap<String, String>,
    apikey: Option<String>,
    authorization: Option<String>,
    prefer: Option<String>,
    body: Value,
}

struct FakeStore {
    status: StatusCode,
    reply: Value,
    seen: Mutex<Vec<Seen>>,
}

impl FakeStore {
    fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

async fn record(req: HttpRequest, body: web::Bytes, fake: web::Data<FakeStore>) -> HttpResponse {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .map(|q| q.into_inner())
        .unwrap_or_default();

    fake.seen.lock().unwrap().push(Seen {
        method: req.method().clone(),
        path: req.path().to_string(),
        query,
        apikey: header("apikey"),
        authorization: header("authorization"),
        prefer: header("prefer"),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    HttpResponse::build(fake.status).json(&fake.reply)
}

/// Start a fake answering every request with `status` and `reply`.
fn start(status: StatusCode, reply: Value) -> (PostgrestClient, web::Data<FakeStore>, ServerHandle) {
    let fake = web::Data::new(FakeStore {
        status,
        reply,
        seen: Mutex::new(Vec::new()),
    });

    let app_fake = fake.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_fake.clone())
            .default_service(web::to(record))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let client = PostgrestClient::new(
        &format!("http://{addr}/"),
        ANON_KEY,
        Some(Duration::from_secs(5)),
    )
    .unwrap();

    (client, fake, handle)
}

fn services_table(client: PostgrestClient) -> PostgrestTable<ServiceRow> {
    PostgrestTable::new(client)
}

#[actix_web::test]
async fn select_asks_for_newest_first_and_sends_the_anon_key() {
    let rows = vec![service("new", "Récent", 1), service("old", "Ancien", 30)];
    let (client, fake, handle) = start(StatusCode::OK, serde_json::to_value(&rows).unwrap());
    let table = services_table(client);

    let fetched = fetch_services(&table).await;

    assert_eq!(fetched.outcome, Outcome::Remote);
    let ids: Vec<String> = fetched.into_items().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, ["new", "old"]);

    let seen = fake.seen();
    assert_eq!(seen.len(), 1);
    let request = &seen[0];
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/rest/v1/services");
    assert_eq!(request.query.get("select").map(String::as_str), Some("*"));
    assert_eq!(
        request.query.get("order").map(String::as_str),
        Some("created_at.desc")
    );
    assert_eq!(request.apikey.as_deref(), Some(ANON_KEY));
    assert_eq!(
        request.authorization.as_deref(),
        Some(format!("Bearer {ANON_KEY}").as_str())
    );

    handle.stop(false).await;
}

#[actix_web::test]
async fn select_any_limits_to_one() {
    let (client, fake, handle) = start(StatusCode::OK, serde_json::json!([]));
    let table = services_table(client);

    assert!(table.select_any().await.unwrap().is_none());

    let seen = fake.seen();
    assert_eq!(seen[0].query.get("limit").map(String::as_str), Some("1"));

    handle.stop(false).await;
}

#[actix_web::test]
async fn lookup_by_id_filters_with_eq() {
    let rows = vec![service("abc", "Audit", 0)];
    let (client, fake, handle) = start(StatusCode::OK, serde_json::to_value(&rows).unwrap());
    let table = services_table(client);

    let found = table.find_by_id("abc").await.unwrap();
    assert_eq!(found.map(|row| row.title).as_deref(), Some("Audit"));
    assert_eq!(
        fake.seen()[0].query.get("id").map(String::as_str),
        Some("eq.abc")
    );

    handle.stop(false).await;
}

#[actix_web::test]
async fn a_server_error_is_a_status_error_and_serves_defaults_with_a_notice() {
    let (client, _fake, handle) = start(
        StatusCode::INTERNAL_SERVER_ERROR,
        serde_json::json!({ "message": "upstream down" }),
    );
    let table = services_table(client);

    match table.select_newest_first().await {
        Err(StoreError::Status {
            table: name,
            status,
            body,
        }) => {
            assert_eq!(name, "services");
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("upstream down"));
        }
        other => panic!("expected a status error, got {other:?}"),
    }

    let fetched = fetch_services(&table).await;
    assert_eq!(
        fetched.outcome,
        Outcome::Defaults(FallbackReason::Unreachable)
    );
    assert!(!fetched.items.is_empty());

    let response = ListResponse::new(fetched, "services");
    assert_eq!(
        response.notice.as_deref(),
        Some("Impossible de charger les services")
    );

    handle.stop(false).await;
}

#[actix_web::test]
async fn a_reply_that_is_not_rows_is_a_decode_error() {
    let (client, _fake, handle) = start(StatusCode::OK, serde_json::json!({ "rows": 0 }));
    let table = services_table(client);

    assert!(matches!(
        table.select_newest_first().await,
        Err(StoreError::Decode {
            table: "services",
            ..
        })
    ));

    handle.stop(false).await;
}

#[actix_web::test]
async fn writes_ask_for_the_stored_representation() {
    let row = service("s1", "Audit", 0);
    let (client, fake, handle) = start(
        StatusCode::OK,
        serde_json::to_value(vec![row.clone()]).unwrap(),
    );
    let table = services_table(client);

    let inserted = table.insert(vec![row.clone()]).await.unwrap();
    assert_eq!(inserted, vec![row.clone()]);

    let updated = table.update(row.clone()).await.unwrap();
    assert_eq!(updated, Some(row.clone()));

    assert_eq!(table.delete("s1").await.unwrap(), 1);

    let seen = fake.seen();
    assert_eq!(seen.len(), 3);

    let (insert, update, delete) = (&seen[0], &seen[1], &seen[2]);
    assert_eq!(insert.method, Method::POST);
    assert_eq!(insert.body.as_array().map(Vec::len), Some(1));
    assert_eq!(insert.body[0]["longdescription"], Value::Null);

    assert_eq!(update.method, Method::PATCH);
    assert_eq!(update.query.get("id").map(String::as_str), Some("eq.s1"));
    assert_eq!(update.body["title"], "Audit");

    assert_eq!(delete.method, Method::DELETE);
    assert_eq!(delete.query.get("id").map(String::as_str), Some("eq.s1"));

    for request in &seen {
        assert_eq!(request.prefer.as_deref(), Some("return=representation"));
        assert_eq!(request.apikey.as_deref(), Some(ANON_KEY));
    }

    handle.stop(false).await;
}
