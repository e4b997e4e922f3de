use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::StoredRow;

/// SeaORM entity for the `projects` table.
///
/// `category` is free text; nothing references another table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    pub client: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl StoredRow for Model {
    const TABLE: &'static str = "projects";

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
pub struct CreateProject {
    pub title: String,
    pub category: Option<String>,
    pub client: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
}

impl CreateProject {
    pub fn into_row(self) -> Model {
        Model {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            category: self.category,
            client: self.client,
            description: self.description,
            image: self.image,
            status: Some(self.status.unwrap_or_else(|| "published".to_string())),
            date: self.date,
            link: self.link,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub category: Option<String>,
    pub client: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
}

impl UpdateProject {
    pub fn apply(self, row: &mut Model) {
        if let Some(title) = self.title {
            row.title = title;
        }
        if let Some(category) = self.category {
            row.category = Some(category);
        }
        if let Some(client) = self.client {
            row.client = Some(client);
        }
        if let Some(description) = self.description {
            row.description = Some(description);
        }
        if let Some(image) = self.image {
            row.image = Some(image);
        }
        if let Some(status) = self.status {
            row.status = Some(status);
        }
        if let Some(date) = self.date {
            row.date = Some(date);
        }
        if let Some(link) = self.link {
            row.link = Some(link);
        }
        row.updated_at = Some(chrono::Utc::now());
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListQuery {
    pub category: Option<String>,
}
