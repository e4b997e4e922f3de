//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::marker::PhantomData;
use std::sync::Arc;

use agency_site_backend::models::{pricing, projects, resources, services, testimonials};
use agency_site_backend::store::{ContentStore, RemoteTable, StoreError, StoredRow};

/// A table whose every call fails, standing in for an unreachable store.
pub struct Unreachable<R>(PhantomData<fn() -> R>);

impl<R> Default for Unreachable<R> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

fn down() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl<R: StoredRow> RemoteTable<R> for Unreachable<R> {
    async fn select_newest_first(&self) -> Result<Vec<R>, StoreError> {
        Err(down())
    }

    async fn select_any(&self) -> Result<Option<R>, StoreError> {
        Err(down())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<R>, StoreError> {
        Err(down())
    }

    async fn insert(&self, _rows: Vec<R>) -> Result<Vec<R>, StoreError> {
        Err(down())
    }

    async fn update(&self, _row: R) -> Result<Option<R>, StoreError> {
        Err(down())
    }

    async fn delete(&self, _id: &str) -> Result<u64, StoreError> {
        Err(down())
    }
}

/// Every table unreachable.
pub fn unreachable_store() -> ContentStore {
    ContentStore {
        services: Arc::new(Unreachable::default()),
        projects: Arc::new(Unreachable::default()),
        testimonials: Arc::new(Unreachable::default()),
        resources: Arc::new(Unreachable::default()),
        pricing: Arc::new(Unreachable::default()),
    }
}

/// `minutes` minutes before a fixed instant, so ordering is predictable.
pub fn at(minutes: i64) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-03-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
        - Duration::minutes(minutes)
}

pub fn service(id: &str, title: &str, minutes_ago: i64) -> services::Model {
    services::Model {
        id: id.to_string(),
        title: title.to_string(),
        icon: None,
        description: None,
        longdescription: None,
        image: None,
        status: None,
        created_at: at(minutes_ago),
        updated_at: None,
    }
}

pub fn project(id: &str, title: &str, category: Option<&str>, minutes_ago: i64) -> projects::Model {
    projects::Model {
        id: id.to_string(),
        title: title.to_string(),
        category: category.map(str::to_string),
        client: None,
        description: None,
        image: None,
        status: None,
        date: None,
        link: None,
        created_at: at(minutes_ago),
        updated_at: None,
    }
}

pub fn testimonial(id: &str, name: &str, minutes_ago: i64) -> testimonials::Model {
    testimonials::Model {
        id: id.to_string(),
        name: name.to_string(),
        company: None,
        role: None,
        content: Some("Très satisfaits.".to_string()),
        rating: None,
        avatar: None,
        created_at: at(minutes_ago),
        updated_at: None,
    }
}

pub fn resource(id: &str, title: &str, category: &str, kind: &str, minutes_ago: i64) -> resources::Model {
    resources::Model {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(format!("À propos de {title}")),
        content: None,
        excerpt: None,
        image: None,
        category: Some(category.to_string()),
        kind: Some(kind.to_string()),
        downloadurl: None,
        author: None,
        date: None,
        readtime: None,
        created_at: at(minutes_ago),
        updated_at: None,
    }
}

pub fn plan(id: &str, name: &str, price: f64, minutes_ago: i64) -> pricing::Model {
    pricing::Model {
        id: id.to_string(),
        name: name.to_string(),
        price: Some(price),
        description: None,
        features: Some(serde_json::json!(["Support"])),
        popular: None,
        created_at: at(minutes_ago),
        updated_at: None,
    }
}

/// Admin pair accepted by [`app`].
pub const ADMIN_EMAIL: &str = "admin@agence.fr";
pub const ADMIN_PASSWORD: &str = "motdepasse";

/// The `/api` routes over `store`, wired the way `main` wires them.
pub fn app(
    store: ContentStore,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    use actix_web::web;
    use agency_site_backend::auth::gate::{CredentialVerifier, Credentials, StaticCredentials};
    use agency_site_backend::settings::{EmailSettings, EmailSettingsStore};

    let verifier: Arc<dyn CredentialVerifier> = Arc::new(StaticCredentials::new(Some(Credentials {
        email: ADMIN_EMAIL.to_string(),
        password: ADMIN_PASSWORD.to_string(),
    })));

    actix_web::App::new()
        .app_data(web::Data::new(store))
        .app_data(web::Data::new(verifier))
        .app_data(web::Data::new(EmailSettingsStore::new(EmailSettings::default())))
        .service(web::scope("/api").configure(agency_site_backend::handlers::init_routes))
}
