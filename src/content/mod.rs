//! Fetch-with-fallback and seed-if-empty over the content tables.
//!
//! Public pages never see an empty list: when a table is empty or the store
//! cannot be reached, the fixed default content for that table is served
//! instead. The same defaults are what seeding writes into an empty table.

pub mod pricing;
pub mod projects;
pub mod resources;
pub mod services;
pub mod testimonials;

use chrono::{Duration, Utc};
use serde::Serialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::store::{ContentStore, RemoteTable, StoredRow};

/// Compare free-text labels (categories, type tags) ignoring case, accented
/// capitals included.
pub fn same_label(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Why defaults were served instead of stored rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The table had no rows.
    Empty,
    /// The store returned an error.
    Unreachable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Remote,
    Defaults(FallbackReason),
}

/// Which data a list response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Remote,
    Defaults,
}

/// Result of a fetch: never empty, newest first.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub outcome: Outcome,
}

impl<T> Fetched<T> {
    pub fn source(&self) -> Source {
        match self.outcome {
            Outcome::Remote => Source::Remote,
            Outcome::Defaults(_) => Source::Defaults,
        }
    }

    /// True when the store failed and the caller should tell the user.
    pub fn load_failed(&self) -> bool {
        self.outcome == Outcome::Defaults(FallbackReason::Unreachable)
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Read every row of a table, newest first, and normalize it.
///
/// Errors and empty tables both produce `defaults()` instead; nothing is
/// propagated to the caller.
pub async fn fetch_with_fallback<R, T, F>(table: &dyn RemoteTable<R>, defaults: F) -> Fetched<T>
where
    R: StoredRow,
    T: From<R>,
    F: FnOnce() -> Vec<R>,
{
    let (rows, outcome) = match table.select_newest_first().await {
        Ok(rows) if !rows.is_empty() => (rows, Outcome::Remote),
        Ok(_) => {
            warn!("No rows in {}, serving default content", R::TABLE);
            (defaults(), Outcome::Defaults(FallbackReason::Empty))
        }
        Err(e) => {
            error!("Failed to load {}: {e}; serving default content", R::TABLE);
            (defaults(), Outcome::Defaults(FallbackReason::Unreachable))
        }
    };

    Fetched {
        items: rows.into_iter().map(T::from).collect(),
        outcome,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table already had at least one row; nothing was written.
    AlreadySeeded,
    /// The table was empty and this many rows were inserted.
    Seeded(usize),
    /// The check or the insert failed; the error was logged.
    Failed,
}

/// Insert `rows` if, and only if, the table currently has no rows.
///
/// The check and the insert are two separate calls with nothing held between
/// them: two callers racing on an empty table can both insert.
pub async fn seed_if_empty<R: StoredRow>(table: &dyn RemoteTable<R>, rows: Vec<R>) -> SeedOutcome {
    match table.select_any().await {
        Ok(Some(_)) => {
            debug!("{} already has rows, skipping seed", R::TABLE);
            SeedOutcome::AlreadySeeded
        }
        Ok(None) => match table.insert(rows).await {
            Ok(inserted) => {
                info!("Seeded {} with {} default rows", R::TABLE, inserted.len());
                SeedOutcome::Seeded(inserted.len())
            }
            Err(e) => {
                error!("Failed to seed {}: {e}", R::TABLE);
                SeedOutcome::Failed
            }
        },
        Err(e) => {
            error!("Failed to check {} before seeding: {e}", R::TABLE);
            SeedOutcome::Failed
        }
    }
}

/// Turn default rows into rows fit for insertion: fresh ids, and creation
/// times one second apart so newest-first order matches the given order.
pub fn seed_rows<R: StoredRow>(defaults: Vec<R>) -> Vec<R> {
    let now = Utc::now();
    defaults
        .into_iter()
        .enumerate()
        .map(|(position, mut row)| {
            row.stamp(
                Uuid::new_v4().to_string(),
                now - Duration::seconds(position as i64),
            );
            row
        })
        .collect()
}

/// Seed every content table, concurrently.
pub async fn seed_all(store: &ContentStore) -> [(&'static str, SeedOutcome); 5] {
    let (services, projects, testimonials, resources, pricing) = futures_util::join!(
        services::seed_services(store.services.as_ref()),
        projects::seed_projects(store.projects.as_ref()),
        testimonials::seed_testimonials(store.testimonials.as_ref()),
        resources::seed_resources(store.resources.as_ref()),
        pricing::seed_pricing(store.pricing.as_ref()),
    );

    [
        ("services", services),
        ("projects", projects),
        ("testimonials", testimonials),
        ("resources", resources),
        ("pricing", pricing),
    ]
}
