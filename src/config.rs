use std::path::PathBuf;
use std::time::Duration;

use crate::auth::gate::Credentials;
use crate::settings::{EmailSettings, check_recipient};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Where content rows live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// The hosted store's REST interface.
    Postgrest { url: String, anon_key: String },
    /// A Postgres database reached through SeaORM.
    Database { url: String },
    /// In-process tables, lost on restart.
    Memory,
}

/// Runtime configuration, read from the environment (and `.env`) at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: StoreBackend,
    pub store_timeout: Option<Duration>,
    pub run_migrations: bool,
    pub seed_on_startup: bool,
    pub admin_credentials: Option<Credentials>,
    pub email: EmailSettings,
    pub static_dir: Option<PathBuf>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup, so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match get("STORE_BACKEND").as_deref() {
            Some("postgrest") => postgrest_backend(&get)?,
            Some("database") => StoreBackend::Database {
                url: get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            },
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "STORE_BACKEND",
                    value: other.to_string(),
                });
            }
            None if get("SUPABASE_URL").is_some() => postgrest_backend(&get)?,
            None => match get("DATABASE_URL") {
                Some(url) => StoreBackend::Database { url },
                None => StoreBackend::Memory,
            },
        };

        let store_timeout = match get("STORE_TIMEOUT_SECS") {
            Some(v) => match parse::<u64>("STORE_TIMEOUT_SECS", &v)? {
                0 => {
                    return Err(ConfigError::Invalid {
                        key: "STORE_TIMEOUT_SECS",
                        value: v,
                    });
                }
                secs => Some(Duration::from_secs(secs)),
            },
            None => None,
        };

        let admin_credentials = match (get("ADMIN_EMAIL"), get("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(Credentials { email, password }),
            _ => None,
        };

        let defaults = EmailSettings::default();
        let recipient = match get("CONTACT_EMAIL") {
            Some(v) => {
                check_recipient(&v).map_err(|_| ConfigError::Invalid {
                    key: "CONTACT_EMAIL",
                    value: v.clone(),
                })?;
                v.trim().to_string()
            }
            None => defaults.recipient,
        };
        let email = EmailSettings {
            recipient,
            sender_name: get("CONTACT_SENDER_NAME").unwrap_or(defaults.sender_name),
            ..defaults
        };

        let port = match get("PORT") {
            Some(v) => parse("PORT", &v)?,
            None => 8080,
        };

        Ok(Self {
            backend,
            store_timeout,
            run_migrations: flag(&get, "RUN_MIGRATIONS", true)?,
            seed_on_startup: flag(&get, "SEED_ON_STARTUP", true)?,
            admin_credentials,
            email,
            static_dir: get("STATIC_DIR").map(PathBuf::from),
            port,
        })
    }
}

fn postgrest_backend<G>(get: &G) -> Result<StoreBackend, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let url = get("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?;
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(ConfigError::Invalid {
            key: "SUPABASE_URL",
            value: url,
        });
    }
    let anon_key = get("SUPABASE_ANON_KEY").ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;
    Ok(StoreBackend::Postgrest { url, anon_key })
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn flag<G>(get: &G, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(key).as_deref().map(str::trim) {
        None => Ok(default),
        Some("1" | "true" | "yes") => Ok(true),
        Some("0" | "false" | "no") => Ok(false),
        Some(other) => Err(ConfigError::Invalid {
            key,
            value: other.to_string(),
        }),
    }
}
