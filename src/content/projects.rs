use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Fetched, SeedOutcome, fetch_with_fallback, same_label, seed_if_empty, seed_rows};
use crate::models::projects;
use crate::store::RemoteTable;

/// Lifecycle of a project. Unknown stored values pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Published,
    Draft,
    Archived,
    Unrecognized(String),
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
            Self::Archived => "archived",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "published" => Self::Published,
            "draft" => Self::Draft,
            "archived" => Self::Archived,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub client: String,
    pub description: String,
    pub image: String,
    pub status: ProjectStatus,
    pub date: String,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<projects::Model> for Project {
    fn from(row: projects::Model) -> Self {
        Self {
            id: row.id,
            title: row.title,
            category: row.category.unwrap_or_default(),
            client: row.client.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            image: row.image.unwrap_or_default(),
            status: row
                .status
                .map(ProjectStatus::from)
                .unwrap_or(ProjectStatus::Published),
            date: row.date.unwrap_or_default(),
            link: row.link.unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// A project category and how many projects use it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Distinct non-empty categories, in first-seen order.
pub fn categories(projects: &[Project]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for project in projects.iter().filter(|p| !p.category.trim().is_empty()) {
        match counts
            .iter_mut()
            .find(|c| same_label(&c.name, &project.category))
        {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                name: project.category.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// Keep projects whose category matches, ignoring case.
pub fn filter_by_category(projects: Vec<Project>, category: &str) -> Vec<Project> {
    projects
        .into_iter()
        .filter(|p| same_label(&p.category, category))
        .collect()
}

fn row(
    id: &str,
    title: &str,
    category: &str,
    client: &str,
    description: &str,
    date: &str,
) -> projects::Model {
    projects::Model {
        id: id.to_string(),
        title: title.to_string(),
        category: Some(category.to_string()),
        client: Some(client.to_string()),
        description: Some(description.to_string()),
        image: None,
        status: Some("published".to_string()),
        date: Some(date.to_string()),
        link: None,
        created_at: DateTime::UNIX_EPOCH,
        updated_at: None,
    }
}

/// Projects shown when the table is empty or unreachable.
pub fn default_rows() -> Vec<projects::Model> {
    vec![
        row(
            "1",
            "Refonte E-commerce",
            "Web",
            "Maison Lumière",
            "Refonte complète d'une boutique en ligne de décoration.",
            "2024",
        ),
        row(
            "2",
            "Application Mobile Fitness",
            "Mobile",
            "FitLife",
            "Application de suivi d'entraînement et de nutrition.",
            "2024",
        ),
        row(
            "3",
            "Identité Visuelle",
            "Branding",
            "Café Nomade",
            "Création du logo et de la charte graphique d'une chaîne de cafés.",
            "2023",
        ),
    ]
}

pub async fn fetch_projects(table: &dyn RemoteTable<projects::Model>) -> Fetched<Project> {
    fetch_with_fallback(table, default_rows).await
}

pub async fn find_project(table: &dyn RemoteTable<projects::Model>, id: &str) -> Option<Project> {
    fetch_projects(table)
        .await
        .into_items()
        .into_iter()
        .find(|p| p.id == id)
}

pub async fn seed_projects(table: &dyn RemoteTable<projects::Model>) -> SeedOutcome {
    seed_if_empty(table, seed_rows(default_rows())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> Vec<Project> {
        default_rows().into_iter().map(Project::from).collect()
    }

    #[test]
    fn categories_count_in_first_seen_order() {
        let mut list = projects();
        let first = list[0].clone();
        list.push(Project {
            id: "4".into(),
            category: "web".into(),
            ..first.clone()
        });
        list.push(Project {
            id: "5".into(),
            category: String::new(),
            ..first.clone()
        });

        let counts = categories(&list);
        assert_eq!(
            counts,
            vec![
                CategoryCount {
                    name: "Web".into(),
                    count: 2
                },
                CategoryCount {
                    name: "Mobile".into(),
                    count: 1
                },
                CategoryCount {
                    name: "Branding".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn filter_ignores_case() {
        let filtered = filter_by_category(projects(), "branding");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Identité Visuelle");
    }

    #[test]
    fn accented_categories_match_and_group_across_case() {
        let first = projects().remove(0);
        let list = vec![
            Project {
                id: "a".into(),
                category: "Événementiel".into(),
                ..first.clone()
            },
            Project {
                id: "b".into(),
                category: "événementiel".into(),
                ..first.clone()
            },
        ];

        assert_eq!(filter_by_category(list.clone(), "événementiel").len(), 2);
        assert_eq!(filter_by_category(list.clone(), "ÉVÉNEMENTIEL").len(), 2);
        assert_eq!(
            categories(&list),
            vec![CategoryCount {
                name: "Événementiel".into(),
                count: 2
            }]
        );
    }

    #[test]
    fn missing_status_defaults_to_published() {
        let project = Project::from(projects::Model {
            status: None,
            category: None,
            ..default_rows().remove(0)
        });
        assert_eq!(project.status, ProjectStatus::Published);
        assert_eq!(project.category, "");
    }
}
