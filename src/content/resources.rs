use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Fetched, SeedOutcome, fetch_with_fallback, same_label, seed_if_empty, seed_rows};
use crate::models::resources;
use crate::store::RemoteTable;

/// Length, in characters, of an excerpt derived from a description.
pub const EXCERPT_CHARS: usize = 150;

pub const DEFAULT_CATEGORY: &str = "Général";
pub const DEFAULT_KIND: &str = "article";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub excerpt: String,
    pub image: String,
    pub category: String,
    /// Free-text tag; drives presentation only.
    #[serde(rename = "type")]
    pub kind: String,
    pub download_url: String,
    pub author: String,
    pub date: String,
    pub read_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// First [`EXCERPT_CHARS`] characters of `description`, with an ellipsis
/// when something was cut.
pub fn derive_excerpt(description: &str) -> String {
    let description = description.trim();
    if description.chars().count() <= EXCERPT_CHARS {
        return description.to_string();
    }
    let cut: String = description.chars().take(EXCERPT_CHARS).collect();
    format!("{}...", cut.trim_end())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<resources::Model> for Resource {
    fn from(row: resources::Model) -> Self {
        let description = row.description.unwrap_or_default();
        let excerpt = non_blank(row.excerpt).unwrap_or_else(|| derive_excerpt(&description));

        Self {
            id: row.id,
            title: row.title,
            excerpt,
            description,
            content: row.content.unwrap_or_default(),
            image: row.image.unwrap_or_default(),
            category: non_blank(row.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            kind: non_blank(row.kind).unwrap_or_else(|| DEFAULT_KIND.to_string()),
            download_url: row.downloadurl.unwrap_or_default(),
            author: row.author.unwrap_or_default(),
            date: row.date.unwrap_or_default(),
            read_time: row.readtime.unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Keep resources matching the given category and/or type, ignoring case.
pub fn filter(resources: Vec<Resource>, category: Option<&str>, kind: Option<&str>) -> Vec<Resource> {
    resources
        .into_iter()
        .filter(|r| category.is_none_or(|c| same_label(&r.category, c)))
        .filter(|r| kind.is_none_or(|k| same_label(&r.kind, k)))
        .collect()
}

fn row(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    kind: &str,
    read_time: &str,
) -> resources::Model {
    resources::Model {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        content: None,
        excerpt: None,
        image: None,
        category: Some(category.to_string()),
        kind: Some(kind.to_string()),
        downloadurl: None,
        author: Some("L'équipe".to_string()),
        date: None,
        readtime: Some(read_time.to_string()),
        created_at: DateTime::UNIX_EPOCH,
        updated_at: None,
    }
}

/// Resources shown when the table is empty or unreachable.
pub fn default_rows() -> Vec<resources::Model> {
    vec![
        row(
            "1",
            "Les tendances du design web",
            "Découvrez les tendances qui façonnent le design web cette année : typographies expressives, micro-interactions, mode sombre et interfaces accessibles à tous.",
            "Design",
            "article",
            "5 min",
        ),
        row(
            "2",
            "Optimiser le référencement de votre site",
            "Un guide pas à pas pour améliorer la visibilité de votre site dans les moteurs de recherche.",
            "Marketing",
            "tutorial",
            "10 min",
        ),
        row(
            "3",
            "Checklist de lancement",
            "Tout ce qu'il faut vérifier avant de mettre un site en ligne.",
            "Développement",
            "download",
            "2 min",
        ),
    ]
}

pub async fn fetch_resources(table: &dyn RemoteTable<resources::Model>) -> Fetched<Resource> {
    fetch_with_fallback(table, default_rows).await
}

pub async fn find_resource(
    table: &dyn RemoteTable<resources::Model>,
    id: &str,
) -> Option<Resource> {
    fetch_resources(table)
        .await
        .into_items()
        .into_iter()
        .find(|r| r.id == id)
}

pub async fn seed_resources(table: &dyn RemoteTable<resources::Model>) -> SeedOutcome {
    seed_if_empty(table, seed_rows(default_rows())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_description_is_its_own_excerpt() {
        assert_eq!(derive_excerpt("  Court.  "), "Court.");
    }

    #[test]
    fn long_description_is_cut_on_char_boundary() {
        let description = "é".repeat(EXCERPT_CHARS + 20);
        let excerpt = derive_excerpt(&description);
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), EXCERPT_CHARS + 3);
    }

    #[test]
    fn stored_excerpt_wins_over_derived() {
        let resource = Resource::from(resources::Model {
            excerpt: Some("Résumé".into()),
            ..default_rows().remove(0)
        });
        assert_eq!(resource.excerpt, "Résumé");
    }

    #[test]
    fn blank_excerpt_category_and_type_are_defaulted() {
        let resource = Resource::from(resources::Model {
            excerpt: Some("   ".into()),
            category: None,
            kind: Some(String::new()),
            ..default_rows().remove(0)
        });
        assert!(resource.excerpt.starts_with("Découvrez les tendances"));
        assert!(resource.excerpt.ends_with("..."));
        assert_eq!(resource.category, DEFAULT_CATEGORY);
        assert_eq!(resource.kind, DEFAULT_KIND);
    }

    #[test]
    fn filter_by_category_and_type() {
        let all: Vec<Resource> = default_rows().into_iter().map(Resource::from).collect();
        assert_eq!(filter(all.clone(), Some("marketing"), None).len(), 1);
        assert_eq!(filter(all.clone(), None, Some("DOWNLOAD")).len(), 1);
        assert_eq!(filter(all.clone(), Some("Design"), Some("tutorial")).len(), 0);
        assert_eq!(filter(all, None, None).len(), 3);
    }

    #[test]
    fn accented_category_and_type_ignore_case() {
        let education = Resource::from(resources::Model {
            category: Some("Éducation".into()),
            kind: Some("Étude de cas".into()),
            ..default_rows().remove(0)
        });
        let all = vec![education];
        assert_eq!(filter(all.clone(), Some("éducation"), None).len(), 1);
        assert_eq!(filter(all.clone(), None, Some("étude de cas")).len(), 1);
        assert_eq!(filter(all, Some("EDUCATION"), None).len(), 0);
    }
}
