use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use agency_site_backend::auth::gate::{CredentialVerifier, StaticCredentials};
use agency_site_backend::config::AppConfig;
use agency_site_backend::content::{self, SeedOutcome};
use agency_site_backend::handlers;
use agency_site_backend::settings::EmailSettingsStore;
use agency_site_backend::store::ContentStore;
use dotenv::dotenv;
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {e}");
        io::Error::other(e)
    })?;

    let store = ContentStore::connect(&config.backend, config.store_timeout, config.run_migrations)
        .await
        .map_err(|e| {
            tracing::error!("Failed to open content store: {e}");
            io::Error::other(e)
        })?;

    if config.seed_on_startup {
        let store = store.clone();
        actix_web::rt::spawn(async move {
            for (table, outcome) in content::seed_all(&store).await {
                if let SeedOutcome::Failed = outcome {
                    tracing::warn!("{table} was not seeded; defaults will be served");
                }
            }
        });
    }

    if config.admin_credentials.is_none() {
        tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set; admin login is disabled");
    }

    let store_data = web::Data::new(store);
    let verifier: Arc<dyn CredentialVerifier> =
        Arc::new(StaticCredentials::new(config.admin_credentials.clone()));
    let verifier_data = web::Data::new(verifier);
    let settings_data = web::Data::new(EmailSettingsStore::new(config.email.clone()));
    let static_dir = config.static_dir.clone();

    let bind_addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
                actix_web::http::header::HeaderName::from_static("x-admin-email"),
                actix_web::http::header::HeaderName::from_static("x-admin-password"),
            ])
            .supports_credentials()
            .max_age(3600);

        let static_dir = static_dir.clone();
        App::new()
            .wrap(cors)
            .app_data(store_data.clone())
            .app_data(verifier_data.clone())
            .app_data(settings_data.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
            .configure(move |cfg| {
                if let Some(dir) = static_dir {
                    cfg.service(Files::new("/", dir).index_file("index.html"));
                }
            })
    })
    .bind(&bind_addr)?
    .run()
    .await
}
