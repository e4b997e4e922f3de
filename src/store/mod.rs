pub mod database;
pub mod memory;
pub mod postgrest;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::StoreBackend;
use crate::models::{pricing, projects, resources, services, testimonials};

pub use memory::MemoryTable;
pub use postgrest::{PostgrestClient, PostgrestTable};

/// Failure talking to the remote store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{table} responded with HTTP {status}: {body}")]
    Status {
        table: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("{table} returned rows that could not be decoded: {source}")]
    Decode {
        table: &'static str,
        source: serde_json::Error,
    },
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A raw row of one of the five content tables, as the store hands it back.
pub trait StoredRow: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Table name in the remote store.
    const TABLE: &'static str;

    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    /// Give the row a new identity, used when seeding default content.
    fn stamp(&mut self, id: String, created_at: DateTime<Utc>);
}

/// Generic select/insert/update/delete access to one remote table.
///
/// Only equality and ordering are needed; there are no joins and no
/// transactions spanning tables.
#[async_trait]
pub trait RemoteTable<R>: Send + Sync
where
    R: StoredRow,
{
    /// All rows, newest `created_at` first.
    async fn select_newest_first(&self) -> Result<Vec<R>, StoreError>;

    /// At most one row, in no particular order.
    async fn select_any(&self) -> Result<Option<R>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<R>, StoreError>;

    /// Insert rows as given and return what the store kept.
    async fn insert(&self, rows: Vec<R>) -> Result<Vec<R>, StoreError>;

    /// Overwrite the row with the same id. `None` when no such row exists.
    async fn update(&self, row: R) -> Result<Option<R>, StoreError>;

    /// Delete by id, returning the number of rows removed.
    async fn delete(&self, id: &str) -> Result<u64, StoreError>;
}

/// One handle per content table, all on the same backend.
#[derive(Clone)]
pub struct ContentStore {
    pub services: Arc<dyn RemoteTable<services::Model>>,
    pub projects: Arc<dyn RemoteTable<projects::Model>>,
    pub testimonials: Arc<dyn RemoteTable<testimonials::Model>>,
    pub resources: Arc<dyn RemoteTable<resources::Model>>,
    pub pricing: Arc<dyn RemoteTable<pricing::Model>>,
}

impl ContentStore {
    /// Tables served by the hosted REST interface.
    pub fn postgrest(client: PostgrestClient) -> Self {
        Self {
            services: Arc::new(PostgrestTable::new(client.clone())),
            projects: Arc::new(PostgrestTable::new(client.clone())),
            testimonials: Arc::new(PostgrestTable::new(client.clone())),
            resources: Arc::new(PostgrestTable::new(client.clone())),
            pricing: Arc::new(PostgrestTable::new(client)),
        }
    }

    /// Tables served by a direct Postgres connection.
    pub fn database(db: sea_orm::DatabaseConnection) -> Self {
        Self {
            services: Arc::new(db.clone()),
            projects: Arc::new(db.clone()),
            testimonials: Arc::new(db.clone()),
            resources: Arc::new(db.clone()),
            pricing: Arc::new(db),
        }
    }

    /// Empty in-process tables.
    pub fn memory() -> Self {
        Self {
            services: Arc::new(MemoryTable::default()),
            projects: Arc::new(MemoryTable::default()),
            testimonials: Arc::new(MemoryTable::default()),
            resources: Arc::new(MemoryTable::default()),
            pricing: Arc::new(MemoryTable::default()),
        }
    }

    /// Open the configured backend.
    pub async fn connect(
        backend: &StoreBackend,
        timeout: Option<std::time::Duration>,
        run_migrations: bool,
    ) -> Result<Self, StoreError> {
        match backend {
            StoreBackend::Postgrest { url, anon_key } => {
                let client = PostgrestClient::new(url, anon_key, timeout)?;
                tracing::info!("Using hosted REST store at {url}");
                Ok(Self::postgrest(client))
            }
            StoreBackend::Database { url } => {
                let db = crate::db::create_pool(url).await?;
                if run_migrations {
                    use migration::MigratorTrait;
                    migration::Migrator::up(&db, None).await?;
                    tracing::info!("Database migrations applied");
                }
                tracing::info!("Using Postgres store");
                Ok(Self::database(db))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; content is lost on restart");
                Ok(Self::memory())
            }
        }
    }
}
