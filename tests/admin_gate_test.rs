//! The admin gate over HTTP: flag cookie, header credentials, login/logout.
//!
//! Run with: `cargo test --test admin_gate_test`
mod common;

use actix_web::cookie::Cookie;
use actix_web::http::{StatusCode, header};
use actix_web::test;

use agency_site_backend::auth::gate::AUTH_FLAG;
use agency_site_backend::auth::middleware::{EMAIL_HEADER, PASSWORD_HEADER};
use agency_site_backend::store::ContentStore;

use common::{ADMIN_EMAIL, ADMIN_PASSWORD, app};

fn flag_set_in(resp: &actix_web::dev::ServiceResponse) -> Option<String> {
    resp.response()
        .cookies()
        .find(|c| c.name() == AUTH_FLAG)
        .map(|c| c.value().to_string())
}

#[actix_web::test]
async fn no_session_is_redirected_to_login() {
    let app = test::init_service(app(ContentStore::memory())).await;

    let req = test::TestRequest::get()
        .uri("/api/admin/services")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
}

#[actix_web::test]
async fn the_flag_cookie_alone_passes_the_gate() {
    // No credentials at all: the client-held flag is trusted as is.
    let app = test::init_service(app(ContentStore::memory())).await;

    let req = test::TestRequest::get()
        .uri("/api/admin/services")
        .cookie(Cookie::new(AUTH_FLAG, "true"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(flag_set_in(&resp), None);
}

#[actix_web::test]
async fn a_flag_with_another_value_is_redirected() {
    let app = test::init_service(app(ContentStore::memory())).await;

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .cookie(Cookie::new(AUTH_FLAG, "yes"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[actix_web::test]
async fn stored_credentials_pass_and_set_the_flag() {
    let app = test::init_service(app(ContentStore::memory())).await;

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header((EMAIL_HEADER, ADMIN_EMAIL))
        .insert_header((PASSWORD_HEADER, ADMIN_PASSWORD))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(flag_set_in(&resp).as_deref(), Some("true"));
}

#[actix_web::test]
async fn wrong_credentials_are_redirected() {
    let app = test::init_service(app(ContentStore::memory())).await;

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header((EMAIL_HEADER, ADMIN_EMAIL))
        .insert_header((PASSWORD_HEADER, "devine"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[actix_web::test]
async fn login_sets_the_flag_and_logout_clears_it() {
    let app = test::init_service(app(ContentStore::memory())).await;

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(flag_set_in(&resp).as_deref(), Some("true"));

    let req = test::TestRequest::post()
        .uri("/api/admin/logout")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(flag_set_in(&resp).as_deref(), Some(""));
}

#[actix_web::test]
async fn login_with_a_bad_password_is_unauthorized() {
    let app = test::init_service(app(ContentStore::memory())).await;

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(serde_json::json!({ "email": ADMIN_EMAIL, "password": "devine" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(flag_set_in(&resp), None);
}

#[actix_web::test]
async fn public_routes_are_not_gated() {
    let app = test::init_service(app(ContentStore::memory())).await;

    let req = test::TestRequest::get().uri("/api/services").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
