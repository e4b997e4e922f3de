//! Shared bodies for the admin CRUD handlers. Admin screens see the table as
//! it is: store errors are reported, never replaced by default content.

use actix_web::HttpResponse;
use serde::Serialize;

use crate::store::{RemoteTable, StoredRow};

fn not_found(label: &str, id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": format!("{label} {id} not found"),
    }))
}

fn store_error(action: &str, label: &str, e: impl std::fmt::Display) -> HttpResponse {
    tracing::error!("Failed to {action} {label}: {e}");
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": format!("Failed to {action} {label}: {e}"),
    }))
}

/// All rows, newest first.
pub async fn list<R, T>(table: &dyn RemoteTable<R>, label: &str) -> HttpResponse
where
    R: StoredRow,
    T: From<R> + Serialize,
{
    match table.select_newest_first().await {
        Ok(rows) => {
            let items: Vec<T> = rows.into_iter().map(T::from).collect();
            HttpResponse::Ok().json(items)
        }
        Err(e) => store_error("fetch", label, e),
    }
}

pub async fn get<R, T>(table: &dyn RemoteTable<R>, id: &str, label: &str) -> HttpResponse
where
    R: StoredRow,
    T: From<R> + Serialize,
{
    match table.find_by_id(id).await {
        Ok(Some(row)) => HttpResponse::Ok().json(T::from(row)),
        Ok(None) => not_found(label, id),
        Err(e) => store_error("fetch", label, e),
    }
}

pub async fn create<R, T>(table: &dyn RemoteTable<R>, row: R, label: &str) -> HttpResponse
where
    R: StoredRow,
    T: From<R> + Serialize,
{
    let id = row.id().to_string();
    match table.insert(vec![row]).await {
        Ok(mut inserted) if !inserted.is_empty() => {
            tracing::info!("Created {label} {id}");
            HttpResponse::Created().json(T::from(inserted.remove(0)))
        }
        Ok(_) => store_error("create", label, "store returned no row"),
        Err(e) => store_error("create", label, e),
    }
}

/// Read the row, apply `change`, write it back. Last write wins.
pub async fn update<R, T, F>(table: &dyn RemoteTable<R>, id: &str, change: F, label: &str) -> HttpResponse
where
    R: StoredRow,
    T: From<R> + Serialize,
    F: FnOnce(&mut R),
{
    let mut row = match table.find_by_id(id).await {
        Ok(Some(row)) => row,
        Ok(None) => return not_found(label, id),
        Err(e) => return store_error("fetch", label, e),
    };

    change(&mut row);

    match table.update(row).await {
        Ok(Some(updated)) => {
            tracing::info!("Updated {label} {id}");
            HttpResponse::Ok().json(T::from(updated))
        }
        Ok(None) => not_found(label, id),
        Err(e) => store_error("update", label, e),
    }
}

/// Permanent delete.
pub async fn delete<R>(table: &dyn RemoteTable<R>, id: &str, label: &str) -> HttpResponse
where
    R: StoredRow,
{
    match table.delete(id).await {
        Ok(removed) if removed > 0 => {
            tracing::info!("Deleted {label} {id}");
            HttpResponse::Ok().json(serde_json::json!({
                "message": format!("{label} {id} deleted"),
            }))
        }
        Ok(_) => not_found(label, id),
        Err(e) => store_error("delete", label, e),
    }
}
