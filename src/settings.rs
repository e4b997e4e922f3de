use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Where contact-form messages go. Edited from the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSettings {
    pub recipient: String,
    pub sender_name: String,
    pub subject_prefix: String,
    pub notify_on_contact: bool,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            recipient: "contact@example.com".to_string(),
            sender_name: "Agence".to_string(),
            subject_prefix: "[Site]".to_string(),
            notify_on_contact: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailSettings {
    pub recipient: Option<String>,
    pub sender_name: Option<String>,
    pub subject_prefix: Option<String>,
    pub notify_on_contact: Option<bool>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("recipient {0:?} is not an email address")]
    InvalidRecipient(String),
    #[error("sender name cannot be empty")]
    EmptySenderName,
}

/// Loose address check: something on both sides of an `@`.
pub fn check_recipient(recipient: &str) -> Result<(), SettingsError> {
    let recipient = recipient.trim();
    if !recipient.contains('@') || recipient.starts_with('@') || recipient.ends_with('@') {
        return Err(SettingsError::InvalidRecipient(recipient.to_string()));
    }
    Ok(())
}

impl EmailSettings {
    /// Apply a partial update. Nothing changes if any field is invalid.
    pub fn apply(&mut self, update: UpdateEmailSettings) -> Result<(), SettingsError> {
        if let Some(recipient) = &update.recipient {
            check_recipient(recipient)?;
        }
        if update
            .sender_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(SettingsError::EmptySenderName);
        }

        if let Some(recipient) = update.recipient {
            self.recipient = recipient.trim().to_string();
        }
        if let Some(sender_name) = update.sender_name {
            self.sender_name = sender_name.trim().to_string();
        }
        if let Some(subject_prefix) = update.subject_prefix {
            self.subject_prefix = subject_prefix;
        }
        if let Some(notify) = update.notify_on_contact {
            self.notify_on_contact = notify;
        }
        Ok(())
    }
}

/// Process-wide email settings shared by the admin handlers.
pub struct EmailSettingsStore {
    inner: RwLock<EmailSettings>,
}

impl EmailSettingsStore {
    pub fn new(initial: EmailSettings) -> Self {
        Self {
            inner: RwLock::new(initial),
        }
    }

    pub async fn get(&self) -> EmailSettings {
        self.inner.read().await.clone()
    }

    pub async fn update(&self, update: UpdateEmailSettings) -> Result<EmailSettings, SettingsError> {
        let mut settings = self.inner.write().await;
        settings.apply(update)?;
        Ok(settings.clone())
    }
}
