use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Fetched, SeedOutcome, fetch_with_fallback, seed_if_empty, seed_rows};
use crate::models::pricing;
use crate::store::RemoteTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub features: Vec<String>,
    pub popular: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Feature list from the stored JSON. Accepts an array of strings or a
/// newline-separated string; anything else yields no features.
fn feature_list(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(feature) => Some(feature),
                _ => None,
            })
            .collect(),
        Some(Value::String(text)) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

impl From<pricing::Model> for PricingPlan {
    fn from(row: pricing::Model) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            features: feature_list(row.features),
            popular: row.popular.unwrap_or(false),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn row(
    id: &str,
    name: &str,
    price: f64,
    description: &str,
    features: &[&str],
    popular: bool,
) -> pricing::Model {
    pricing::Model {
        id: id.to_string(),
        name: name.to_string(),
        price: Some(price),
        description: Some(description.to_string()),
        features: Some(serde_json::json!(features)),
        popular: Some(popular),
        created_at: DateTime::UNIX_EPOCH,
        updated_at: None,
    }
}

/// Plans shown when the table is empty or unreachable.
pub fn default_rows() -> Vec<pricing::Model> {
    vec![
        row(
            "1",
            "Essentiel",
            990.0,
            "Pour lancer votre présence en ligne.",
            &["Site vitrine 5 pages", "Design responsive", "Formulaire de contact"],
            false,
        ),
        row(
            "2",
            "Professionnel",
            2490.0,
            "Pour les entreprises qui veulent grandir.",
            &[
                "Site jusqu'à 15 pages",
                "Blog intégré",
                "Optimisation SEO",
                "Support 3 mois",
            ],
            true,
        ),
        row(
            "3",
            "Sur mesure",
            4990.0,
            "Pour les projets ambitieux.",
            &[
                "Pages illimitées",
                "E-commerce",
                "Intégrations sur mesure",
                "Support 12 mois",
            ],
            false,
        ),
    ]
}

pub async fn fetch_pricing(table: &dyn RemoteTable<pricing::Model>) -> Fetched<PricingPlan> {
    fetch_with_fallback(table, default_rows).await
}

pub async fn seed_pricing(table: &dyn RemoteTable<pricing::Model>) -> SeedOutcome {
    seed_if_empty(table, seed_rows(default_rows())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_keep_order_and_skip_non_strings() {
        let plan = PricingPlan::from(pricing::Model {
            features: Some(serde_json::json!(["b", 3, "a", null])),
            ..default_rows().remove(0)
        });
        assert_eq!(plan.features, ["b", "a"]);
    }

    #[test]
    fn newline_separated_features_are_split() {
        let plan = PricingPlan::from(pricing::Model {
            features: Some(Value::String("Un\n\n Deux \n".into())),
            ..default_rows().remove(0)
        });
        assert_eq!(plan.features, ["Un", "Deux"]);
    }

    #[test]
    fn missing_values_are_zeroed() {
        let plan = PricingPlan::from(pricing::Model {
            price: None,
            features: None,
            popular: None,
            description: None,
            ..default_rows().remove(0)
        });
        assert_eq!(plan.price, 0.0);
        assert!(plan.features.is_empty());
        assert!(!plan.popular);
        assert_eq!(plan.description, "");
    }
}
