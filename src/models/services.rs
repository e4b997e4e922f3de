use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::StoredRow;

/// SeaORM entity for the `services` table.
///
/// Columns are kept loose (mostly nullable, status as free text) because rows
/// written by other clients of the hosted store are not guaranteed to be
/// complete. `content::services` turns them into application values.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub icon: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub longdescription: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl StoredRow for Model {
    const TABLE: &'static str = "services";

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
pub struct CreateService {
    pub title: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
}

impl CreateService {
    /// Build a fresh storage row with a new id and the current timestamp.
    pub fn into_row(self) -> Model {
        Model {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            icon: self.icon,
            description: self.description,
            longdescription: self.long_description,
            image: self.image,
            status: Some(self.status.unwrap_or_else(|| "active".to_string())),
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
}

impl UpdateService {
    pub fn apply(self, row: &mut Model) {
        if let Some(title) = self.title {
            row.title = title;
        }
        if let Some(icon) = self.icon {
            row.icon = Some(icon);
        }
        if let Some(description) = self.description {
            row.description = Some(description);
        }
        if let Some(long_description) = self.long_description {
            row.longdescription = Some(long_description);
        }
        if let Some(image) = self.image {
            row.image = Some(image);
        }
        if let Some(status) = self.status {
            row.status = Some(status);
        }
        row.updated_at = Some(chrono::Utc::now());
    }
}
