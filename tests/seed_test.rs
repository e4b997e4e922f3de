//! Seed-if-empty, including the unguarded race between concurrent seeds.
//!
//! Run with: `cargo test --test seed_test`
mod common;

use agency_site_backend::content::services::{self, fetch_services, seed_services};
use agency_site_backend::content::testimonials::seed_testimonials;
use agency_site_backend::content::{Outcome, SeedOutcome, seed_all};
use agency_site_backend::models::services::Model as ServiceRow;
use agency_site_backend::store::{ContentStore, MemoryTable, RemoteTable};

use common::{Unreachable, service};

#[tokio::test]
async fn seeding_an_empty_table_inserts_every_default() {
    let table: MemoryTable<ServiceRow> = MemoryTable::default();

    let outcome = seed_services(&table).await;

    let defaults = services::default_rows();
    assert_eq!(outcome, SeedOutcome::Seeded(defaults.len()));
    assert_eq!(table.len().await, defaults.len());
}

#[tokio::test]
async fn seeded_rows_read_back_in_default_order_with_fresh_ids() {
    let table: MemoryTable<ServiceRow> = MemoryTable::default();
    seed_services(&table).await;

    let fetched = fetch_services(&table).await;
    assert_eq!(fetched.outcome, Outcome::Remote);

    let items = fetched.into_items();
    let titles: Vec<&str> = items.iter().map(|s| s.title.as_str()).collect();
    let expected: Vec<String> = services::default_rows().into_iter().map(|r| r.title).collect();
    assert_eq!(titles, expected);

    // Default ids are "1".."4"; stored rows get new ones.
    assert!(items.iter().all(|s| s.id.len() > 1));
}

#[tokio::test]
async fn seeding_twice_does_not_change_the_row_count() {
    let table: MemoryTable<ServiceRow> = MemoryTable::default();

    seed_services(&table).await;
    let after_first = table.len().await;

    let second = seed_services(&table).await;
    assert_eq!(second, SeedOutcome::AlreadySeeded);
    assert_eq!(table.len().await, after_first);
}

#[tokio::test]
async fn a_populated_table_is_left_alone() {
    let table = MemoryTable::with_rows(vec![service("mine", "Audit", 0)]);

    assert_eq!(seed_services(&table).await, SeedOutcome::AlreadySeeded);
    assert_eq!(table.len().await, 1);
}

#[tokio::test]
async fn concurrent_seeds_on_an_empty_table_both_insert() {
    // Both calls see the table empty before either one writes. Nothing
    // guards against this, so the defaults end up stored twice.
    let table: MemoryTable<ServiceRow> = MemoryTable::default();
    let defaults = services::default_rows().len();

    let (first, second) = tokio::join!(seed_services(&table), seed_services(&table));

    assert_eq!(first, SeedOutcome::Seeded(defaults));
    assert_eq!(second, SeedOutcome::Seeded(defaults));
    assert_eq!(table.len().await, defaults * 2);

    let rows = table.select_newest_first().await.unwrap();
    let mut ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), defaults * 2, "duplicates differ only by id");
}

#[tokio::test]
async fn an_unreachable_store_reports_failure_without_panicking() {
    let table: Unreachable<ServiceRow> = Unreachable::default();
    assert_eq!(seed_services(&table).await, SeedOutcome::Failed);

    let store = common::unreachable_store();
    assert_eq!(
        seed_testimonials(store.testimonials.as_ref()).await,
        SeedOutcome::Failed
    );
}

#[tokio::test]
async fn seed_all_fills_every_table_once() {
    let store = ContentStore::memory();

    let first = seed_all(&store).await;
    assert!(
        first
            .iter()
            .all(|(_, outcome)| matches!(outcome, SeedOutcome::Seeded(n) if *n > 0)),
        "{first:?}"
    );

    let second = seed_all(&store).await;
    assert!(
        second
            .iter()
            .all(|(_, outcome)| *outcome == SeedOutcome::AlreadySeeded)
    );

    let tables: Vec<&str> = second.iter().map(|(table, _)| *table).collect();
    assert_eq!(
        tables,
        ["services", "projects", "testimonials", "resources", "pricing"]
    );
}
