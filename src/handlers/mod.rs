pub mod admin;
pub mod crud;
pub mod pricing;
pub mod projects;
pub mod resources;
pub mod services;
pub mod testimonials;

use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;

use crate::content::{Fetched, Source};

/// Body of every public list endpoint.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub source: Source,
    /// Set when the store failed and default content is shown instead.
    pub notice: Option<String>,
}

impl<T> ListResponse<T> {
    /// `label` is the French plural used in the notice, e.g. "services".
    pub fn new(fetched: Fetched<T>, label: &str) -> Self {
        let notice = fetched
            .load_failed()
            .then(|| format!("Impossible de charger les {label}"));
        Self {
            source: fetched.source(),
            data: fetched.into_items(),
            notice,
        }
    }
}

/// GET /api/health
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));

    // ── Public content (fallback-aware, no gate) ──
    cfg.service(
        web::scope("/services")
            .route("", web::get().to(services::get_services))
            .route("/{id}", web::get().to(services::get_service)),
    );
    cfg.service(
        web::scope("/projects")
            .route("", web::get().to(projects::get_projects))
            .route("/categories", web::get().to(projects::get_project_categories))
            .route("/{id}", web::get().to(projects::get_project)),
    );
    cfg.route("/testimonials", web::get().to(testimonials::get_testimonials));
    cfg.service(
        web::scope("/resources")
            .route("", web::get().to(resources::get_resources))
            .route("/{id}", web::get().to(resources::get_resource)),
    );
    cfg.route("/pricing", web::get().to(pricing::get_pricing));

    // ── Admin (behind the AdminSession gate, except login/logout) ──
    cfg.service(
        web::scope("/admin")
            .route("/login", web::post().to(admin::login))
            .route("/logout", web::post().to(admin::logout))
            .route("/dashboard", web::get().to(admin::dashboard))
            .route("/email-settings", web::get().to(admin::get_email_settings))
            .route("/email-settings", web::put().to(admin::update_email_settings))
            .route("/services", web::get().to(services::admin_list_services))
            .route("/services", web::post().to(services::create_service))
            .route("/services/{id}", web::get().to(services::admin_get_service))
            .route("/services/{id}", web::put().to(services::update_service))
            .route("/services/{id}", web::delete().to(services::delete_service))
            .route("/projects", web::get().to(projects::admin_list_projects))
            .route("/projects", web::post().to(projects::create_project))
            .route("/projects/categories", web::get().to(projects::admin_project_categories))
            .route("/projects/{id}", web::get().to(projects::admin_get_project))
            .route("/projects/{id}", web::put().to(projects::update_project))
            .route("/projects/{id}", web::delete().to(projects::delete_project))
            .route("/testimonials", web::get().to(testimonials::admin_list_testimonials))
            .route("/testimonials", web::post().to(testimonials::create_testimonial))
            .route("/testimonials/{id}", web::get().to(testimonials::admin_get_testimonial))
            .route("/testimonials/{id}", web::put().to(testimonials::update_testimonial))
            .route("/testimonials/{id}", web::delete().to(testimonials::delete_testimonial))
            .route("/resources", web::get().to(resources::admin_list_resources))
            .route("/resources", web::post().to(resources::create_resource))
            .route("/resources/{id}", web::get().to(resources::admin_get_resource))
            .route("/resources/{id}", web::put().to(resources::update_resource))
            .route("/resources/{id}", web::delete().to(resources::delete_resource))
            .route("/pricing", web::get().to(pricing::admin_list_plans))
            .route("/pricing", web::post().to(pricing::create_plan))
            .route("/pricing/{id}", web::get().to(pricing::admin_get_plan))
            .route("/pricing/{id}", web::put().to(pricing::update_plan))
            .route("/pricing/{id}", web::delete().to(pricing::delete_plan)),
    );
}
