use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use std::sync::Arc;

use crate::auth::gate::{self, CredentialVerifier, Credentials};
use crate::auth::middleware::AdminSession;
use crate::settings::{EmailSettingsStore, UpdateEmailSettings};
use crate::store::{ContentStore, RemoteTable, StoredRow};

/// POST /api/admin/login — check the credential pair and set the flag cookie.
pub async fn login(
    verifier: web::Data<Arc<dyn CredentialVerifier>>,
    body: web::Json<Credentials>,
) -> impl Responder {
    let credentials = body.into_inner();
    if verifier.verify(&credentials) {
        tracing::info!("Admin login for {}", credentials.email);
        HttpResponse::Ok()
            .cookie(gate::flag_cookie())
            .json(serde_json::json!({ "authenticated": true }))
    } else {
        tracing::warn!("Rejected admin login for {}", credentials.email);
        HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Identifiants invalides",
        }))
    }
}

/// POST /api/admin/logout — clear the flag cookie.
pub async fn logout() -> impl Responder {
    HttpResponse::Ok()
        .cookie(gate::clear_flag_cookie())
        .json(serde_json::json!({ "authenticated": false }))
}

/// Row counts per table; `None` where the store could not be read.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub services: Option<usize>,
    pub projects: Option<usize>,
    pub testimonials: Option<usize>,
    pub resources: Option<usize>,
    pub pricing: Option<usize>,
}

async fn count<R: StoredRow>(table: &dyn RemoteTable<R>) -> Option<usize> {
    match table.select_newest_first().await {
        Ok(rows) => Some(rows.len()),
        Err(e) => {
            tracing::error!("Failed to count {}: {e}", R::TABLE);
            None
        }
    }
}

/// GET /api/admin/dashboard
pub async fn dashboard(session: AdminSession, store: web::Data<ContentStore>) -> HttpResponse {
    let (services, projects, testimonials, resources, pricing) = futures_util::join!(
        count(store.services.as_ref()),
        count(store.projects.as_ref()),
        count(store.testimonials.as_ref()),
        count(store.resources.as_ref()),
        count(store.pricing.as_ref()),
    );

    session.finish(HttpResponse::Ok().json(Dashboard {
        services,
        projects,
        testimonials,
        resources,
        pricing,
    }))
}

/// GET /api/admin/email-settings
pub async fn get_email_settings(
    session: AdminSession,
    settings: web::Data<EmailSettingsStore>,
) -> HttpResponse {
    session.finish(HttpResponse::Ok().json(settings.get().await))
}

/// PUT /api/admin/email-settings
pub async fn update_email_settings(
    session: AdminSession,
    settings: web::Data<EmailSettingsStore>,
    body: web::Json<UpdateEmailSettings>,
) -> HttpResponse {
    let response = match settings.update(body.into_inner()).await {
        Ok(updated) => {
            tracing::info!("Email settings updated");
            HttpResponse::Ok().json(updated)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string(),
        })),
    };
    session.finish(response)
}
