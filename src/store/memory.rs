use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RemoteTable, StoreError, StoredRow};

/// In-process table for local development and tests.
///
/// Every call yields to the scheduler once before touching the rows, the way a
/// network round trip would, so interleavings between concurrent callers look
/// like they do against the hosted store.
pub struct MemoryTable<R> {
    rows: RwLock<Vec<R>>,
}

impl<R> Default for MemoryTable<R> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<R: StoredRow> MemoryTable<R> {
    pub fn with_rows(rows: Vec<R>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Number of rows currently held.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl<R: StoredRow> RemoteTable<R> for MemoryTable<R> {
    async fn select_newest_first(&self) -> Result<Vec<R>, StoreError> {
        tokio::task::yield_now().await;
        let mut rows = self.rows.read().await.clone();
        // Stable sort: rows sharing a timestamp keep insertion order.
        rows.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(rows)
    }

    async fn select_any(&self) -> Result<Option<R>, StoreError> {
        tokio::task::yield_now().await;
        Ok(self.rows.read().await.first().cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<R>, StoreError> {
        tokio::task::yield_now().await;
        Ok(self.rows.read().await.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, rows: Vec<R>) -> Result<Vec<R>, StoreError> {
        tokio::task::yield_now().await;
        self.rows.write().await.extend(rows.iter().cloned());
        Ok(rows)
    }

    async fn update(&self, row: R) -> Result<Option<R>, StoreError> {
        tokio::task::yield_now().await;
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|r| r.id() == row.id()) {
            Some(existing) => {
                *existing = row.clone();
                Ok(Some(row))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        tokio::task::yield_now().await;
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        Ok((before - rows.len()) as u64)
    }
}
