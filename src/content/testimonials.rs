use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Fetched, SeedOutcome, fetch_with_fallback, seed_if_empty, seed_rows};
use crate::models::testimonials;
use crate::store::RemoteTable;

/// Rating used when a stored row has none.
pub const DEFAULT_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub company: String,
    pub role: String,
    pub content: String,
    /// Not range-checked; whatever the store holds is served.
    pub rating: i32,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<testimonials::Model> for Testimonial {
    fn from(row: testimonials::Model) -> Self {
        Self {
            id: row.id,
            name: row.name,
            company: row.company.unwrap_or_default(),
            role: row.role.unwrap_or_default(),
            content: row.content.unwrap_or_default(),
            rating: row.rating.unwrap_or(DEFAULT_RATING),
            avatar: row.avatar.unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn row(id: &str, name: &str, company: &str, role: &str, content: &str) -> testimonials::Model {
    testimonials::Model {
        id: id.to_string(),
        name: name.to_string(),
        company: Some(company.to_string()),
        role: Some(role.to_string()),
        content: Some(content.to_string()),
        rating: Some(DEFAULT_RATING),
        avatar: None,
        created_at: DateTime::UNIX_EPOCH,
        updated_at: None,
    }
}

/// Testimonials shown when the table is empty or unreachable.
pub fn default_rows() -> Vec<testimonials::Model> {
    vec![
        row(
            "1",
            "Marie Dupont",
            "Maison Lumière",
            "Directrice Marketing",
            "Une équipe à l'écoute qui a transformé notre présence en ligne. Les ventes ont doublé en six mois.",
        ),
        row(
            "2",
            "Thomas Martin",
            "FitLife",
            "Fondateur",
            "Un travail remarquable du premier atelier jusqu'au lancement de l'application.",
        ),
        row(
            "3",
            "Sophie Bernard",
            "Café Nomade",
            "Gérante",
            "Notre nouvelle identité visuelle a séduit nos clients dès le premier jour.",
        ),
    ]
}

pub async fn fetch_testimonials(
    table: &dyn RemoteTable<testimonials::Model>,
) -> Fetched<Testimonial> {
    fetch_with_fallback(table, default_rows).await
}

pub async fn seed_testimonials(table: &dyn RemoteTable<testimonials::Model>) -> SeedOutcome {
    seed_if_empty(table, seed_rows(default_rows())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_rating_is_kept() {
        let testimonial = Testimonial::from(testimonials::Model {
            rating: Some(11),
            ..default_rows().remove(0)
        });
        assert_eq!(testimonial.rating, 11);
    }

    #[test]
    fn missing_rating_uses_default() {
        let testimonial = Testimonial::from(testimonials::Model {
            rating: None,
            company: None,
            ..default_rows().remove(0)
        });
        assert_eq!(testimonial.rating, DEFAULT_RATING);
        assert_eq!(testimonial.company, "");
    }
}
