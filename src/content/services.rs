use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Fetched, SeedOutcome, fetch_with_fallback, seed_if_empty, seed_rows};
use crate::models::services;
use crate::store::RemoteTable;

/// Lifecycle of a service. Stored as free text.
///
/// Values outside the known set are carried as `Unrecognized` and written
/// back unchanged rather than rejected or replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceStatus {
    Active,
    Draft,
    Archived,
    Unrecognized(String),
}

impl ServiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::Archived => "archived",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for ServiceStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => Self::Active,
            "draft" => Self::Draft,
            "archived" => Self::Archived,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<ServiceStatus> for String {
    fn from(status: ServiceStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub status: ServiceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Every default for a stored service row lives here.
impl From<services::Model> for Service {
    fn from(row: services::Model) -> Self {
        Self {
            id: row.id,
            title: row.title,
            icon: row.icon.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            long_description: row.longdescription.unwrap_or_default(),
            image: row.image.unwrap_or_default(),
            status: row
                .status
                .map(ServiceStatus::from)
                .unwrap_or(ServiceStatus::Active),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn row(id: &str, title: &str, icon: &str, description: &str, long: &str) -> services::Model {
    services::Model {
        id: id.to_string(),
        title: title.to_string(),
        icon: Some(icon.to_string()),
        description: Some(description.to_string()),
        longdescription: Some(long.to_string()),
        image: None,
        status: Some("active".to_string()),
        created_at: DateTime::UNIX_EPOCH,
        updated_at: None,
    }
}

/// Services shown when the table is empty or unreachable.
pub fn default_rows() -> Vec<services::Model> {
    vec![
        row(
            "1",
            "Design Web",
            "palette",
            "Des sites modernes et responsives qui reflètent votre identité.",
            "Maquettes, prototypes interactifs et design systems pensés pour vos utilisateurs et adaptés à tous les écrans.",
        ),
        row(
            "2",
            "Développement",
            "code",
            "Des applications web performantes et sur mesure.",
            "Sites vitrines, plateformes e-commerce et applications métier, développés avec des technologies éprouvées.",
        ),
        row(
            "3",
            "Marketing Digital",
            "trending-up",
            "Des stratégies pour développer votre présence en ligne.",
            "Référencement, campagnes publicitaires et réseaux sociaux, pilotés par la donnée.",
        ),
        row(
            "4",
            "Branding",
            "pen-tool",
            "Une identité visuelle forte et cohérente.",
            "Logo, charte graphique et supports de communication pour une marque reconnaissable.",
        ),
    ]
}

pub async fn fetch_services(table: &dyn RemoteTable<services::Model>) -> Fetched<Service> {
    fetch_with_fallback(table, default_rows).await
}

/// Look a service up in what [`fetch_services`] would return, so default
/// services resolve too.
pub async fn find_service(table: &dyn RemoteTable<services::Model>, id: &str) -> Option<Service> {
    fetch_services(table)
        .await
        .into_items()
        .into_iter()
        .find(|s| s.id == id)
}

pub async fn seed_services(table: &dyn RemoteTable<services::Model>) -> SeedOutcome {
    seed_if_empty(table, seed_rows(default_rows())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(title: &str) -> services::Model {
        services::Model {
            id: "x".into(),
            title: title.into(),
            icon: None,
            description: None,
            longdescription: None,
            image: None,
            status: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn missing_fields_are_filled() {
        let service = Service::from(bare("Custom Service"));
        assert_eq!(service.title, "Custom Service");
        assert_eq!(service.icon, "");
        assert_eq!(service.long_description, "");
        assert_eq!(service.image, "");
        assert_eq!(service.status, ServiceStatus::Active);
    }

    #[test]
    fn unknown_status_is_passed_through() {
        let service = Service::from(services::Model {
            status: Some("published".into()),
            ..bare("Odd")
        });
        assert_eq!(
            service.status,
            ServiceStatus::Unrecognized("published".into())
        );
        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["status"], "published");
        assert_eq!(json["longDescription"], "");
    }

    #[test]
    fn defaults_have_stable_ids() {
        let ids: Vec<_> = default_rows().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }
}
