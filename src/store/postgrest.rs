use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::debug;

use super::{RemoteTable, StoreError, StoredRow};

/// Connection details for the hosted store's REST interface
/// (`{SUPABASE_URL}/rest/v1/{table}`).
#[derive(Clone)]
pub struct PostgrestClient {
    http: reqwest::Client,
    rest_url: String,
    anon_key: String,
}

impl PostgrestClient {
    pub fn new(
        project_url: &str,
        anon_key: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, StoreError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            rest_url: format!("{}/rest/v1", project_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
        })
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.rest_url)
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.http
            .request(method, self.table_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }
}

/// One table reached through [`PostgrestClient`].
pub struct PostgrestTable<R> {
    client: PostgrestClient,
    _row: PhantomData<fn() -> R>,
}

impl<R> PostgrestTable<R> {
    pub fn new(client: PostgrestClient) -> Self {
        Self {
            client,
            _row: PhantomData,
        }
    }
}

async fn read_rows<T: DeserializeOwned + Send>(
    table: &'static str,
    response: Response,
) -> Result<Vec<T>, StoreError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(StoreError::Status {
            table,
            status,
            body,
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|source| StoreError::Decode { table, source })
}

#[async_trait]
impl<R: StoredRow> RemoteTable<R> for PostgrestTable<R> {
    async fn select_newest_first(&self) -> Result<Vec<R>, StoreError> {
        debug!("Selecting all rows from {}", R::TABLE);
        let response = self
            .client
            .request(Method::GET, R::TABLE)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        read_rows(R::TABLE, response).await
    }

    async fn select_any(&self) -> Result<Option<R>, StoreError> {
        let response = self
            .client
            .request(Method::GET, R::TABLE)
            .query(&[("select", "*"), ("limit", "1")])
            .send()
            .await?;
        let rows: Vec<R> = read_rows(R::TABLE, response).await?;
        Ok(rows.into_iter().next())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<R>, StoreError> {
        let response = self
            .client
            .request(Method::GET, R::TABLE)
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))])
            .send()
            .await?;
        let rows: Vec<R> = read_rows(R::TABLE, response).await?;
        Ok(rows.into_iter().next())
    }

    async fn insert(&self, rows: Vec<R>) -> Result<Vec<R>, StoreError> {
        debug!("Inserting {} rows into {}", rows.len(), R::TABLE);
        let response = self
            .client
            .request(Method::POST, R::TABLE)
            .header("Prefer", "return=representation")
            .json(&rows)
            .send()
            .await?;
        read_rows(R::TABLE, response).await
    }

    async fn update(&self, row: R) -> Result<Option<R>, StoreError> {
        let response = self
            .client
            .request(Method::PATCH, R::TABLE)
            .query(&[("id", format!("eq.{}", row.id()))])
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;
        let rows: Vec<R> = read_rows(R::TABLE, response).await?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let response = self
            .client
            .request(Method::DELETE, R::TABLE)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .send()
            .await?;
        let removed: Vec<serde_json::Value> = read_rows(R::TABLE, response).await?;
        Ok(removed.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_strips_trailing_slash() {
        let client = PostgrestClient::new("https://abc.supabase.co/", "anon", None).unwrap();
        assert_eq!(
            client.table_url("services"),
            "https://abc.supabase.co/rest/v1/services"
        );
    }
}
