use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::StoredRow;

/// SeaORM entity for the `pricing` table.
///
/// `features` is a JSON array of strings; `price` carries no currency.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pricing")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub price: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub features: Option<Json>,
    pub popular: Option<bool>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl StoredRow for Model {
    const TABLE: &'static str = "pricing";

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
pub struct CreatePricingPlan {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

impl CreatePricingPlan {
    pub fn into_row(self) -> Model {
        Model {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            price: Some(self.price),
            description: self.description,
            features: Some(serde_json::json!(self.features)),
            popular: Some(self.popular),
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePricingPlan {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub popular: Option<bool>,
}

impl UpdatePricingPlan {
    pub fn apply(self, row: &mut Model) {
        if let Some(name) = self.name {
            row.name = name;
        }
        if let Some(price) = self.price {
            row.price = Some(price);
        }
        if let Some(description) = self.description {
            row.description = Some(description);
        }
        if let Some(features) = self.features {
            row.features = Some(serde_json::json!(features));
        }
        if let Some(popular) = self.popular {
            row.popular = Some(popular);
        }
        row.updated_at = Some(chrono::Utc::now());
    }
}
