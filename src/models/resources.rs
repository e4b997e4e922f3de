use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::StoredRow;

/// SeaORM entity for the `resources` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resources")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    /// Free-text type tag (article, tutorial, download, ...).
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub downloadurl: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub readtime: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl StoredRow for Model {
    const TABLE: &'static str = "resources";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTimeUtc {
        self.created_at
    }

    fn stamp(&mut self, id: String, created_at: DateTimeUtc) {
        self.id = id;
        self.created_at = created_at;
        self.updated_at = None;
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResource {
    pub title: String,
    pub description: String,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub download_url: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub read_time: Option<String>,
}

impl CreateResource {
    pub fn into_row(self) -> Model {
        Model {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            description: Some(self.description),
            content: self.content,
            excerpt: self.excerpt,
            image: self.image,
            category: self.category,
            kind: self.kind,
            downloadurl: self.download_url,
            author: self.author,
            date: self.date,
            readtime: self.read_time,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResource {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub download_url: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub read_time: Option<String>,
}

impl UpdateResource {
    pub fn apply(self, row: &mut Model) {
        if let Some(title) = self.title {
            row.title = title;
        }
        if let Some(description) = self.description {
            row.description = Some(description);
        }
        if let Some(content) = self.content {
            row.content = Some(content);
        }
        if let Some(excerpt) = self.excerpt {
            row.excerpt = Some(excerpt);
        }
        if let Some(image) = self.image {
            row.image = Some(image);
        }
        if let Some(category) = self.category {
            row.category = Some(category);
        }
        if let Some(kind) = self.kind {
            row.kind = Some(kind);
        }
        if let Some(download_url) = self.download_url {
            row.downloadurl = Some(download_url);
        }
        if let Some(author) = self.author {
            row.author = Some(author);
        }
        if let Some(date) = self.date {
            row.date = Some(date);
        }
        if let Some(read_time) = self.read_time {
            row.readtime = Some(read_time);
        }
        row.updated_at = Some(chrono::Utc::now());
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceListQuery {
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
