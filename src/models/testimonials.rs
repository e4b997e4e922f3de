use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::StoredRow;

/// SeaORM entity for the `testimonials` table.
///
/// `rating` is expected to be 1-5 but nothing enforces it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub company: Option<String>,
    pub role: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub rating: Option<i32>,
    pub avatar: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl StoredRow for Model {
    const TABLE: &'static str = "testimonials";

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
pub struct CreateTestimonial {
    pub name: String,
    pub company: Option<String>,
    pub role: Option<String>,
    pub content: String,
    pub rating: Option<i32>,
    pub avatar: Option<String>,
}

impl CreateTestimonial {
    pub fn into_row(self) -> Model {
        Model {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            company: self.company,
            role: self.role,
            content: Some(self.content),
            rating: self.rating,
            avatar: self.avatar,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTestimonial {
    pub name: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i32>,
    pub avatar: Option<String>,
}

impl UpdateTestimonial {
    pub fn apply(self, row: &mut Model) {
        if let Some(name) = self.name {
            row.name = name;
        }
        if let Some(company) = self.company {
            row.company = Some(company);
        }
        if let Some(role) = self.role {
            row.role = Some(role);
        }
        if let Some(content) = self.content {
            row.content = Some(content);
        }
        if let Some(rating) = self.rating {
            row.rating = Some(rating);
        }
        if let Some(avatar) = self.avatar {
            row.avatar = Some(avatar);
        }
        row.updated_at = Some(chrono::Utc::now());
    }
}
