//! App shortcut domain models.

use chrono::{DateTime, Utc};
use homedash_db::queries::apps::AppRow;
use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult};

/// A shortcut to another application or service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl App {
    /// Create an App from a database row.
    pub fn from_row(row: AppRow) -> DashResult<Self> {
        Ok(Self {
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
            id: row.id,
            name: row.name,
            url: row.url,
            icon: row.icon,
            is_pinned: row.is_pinned,
        })
    }
}

fn parse_timestamp(value: &str) -> DashResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DashError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Fields supplied when creating an app or replacing all of its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApp {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
}

impl NewApp {
    pub fn new(name: impl Into<String>, url: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon: icon.into(),
            is_pinned: None,
        }
    }

    /// Trim the text fields and reject blank names or urls.
    pub fn normalized(self) -> DashResult<Self> {
        Ok(Self {
            name: required("name", &self.name)?,
            url: required("url", &self.url)?,
            icon: self.icon.trim().to_string(),
            is_pinned: self.is_pinned,
        })
    }
}

/// A partial update. Absent fields keep their stored value, so `{ "isPinned": true }`
/// alone is a valid pin toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
}

impl AppUpdate {
    pub fn pinned(is_pinned: bool) -> Self {
        Self {
            is_pinned: Some(is_pinned),
            ..Self::default()
        }
    }

    /// Merge this update onto an existing app, validating the result.
    pub fn apply_to(&self, app: &App) -> DashResult<NewApp> {
        let merged = NewApp {
            name: self.name.clone().unwrap_or_else(|| app.name.clone()),
            url: self.url.clone().unwrap_or_else(|| app.url.clone()),
            icon: self.icon.clone().unwrap_or_else(|| app.icon.clone()),
            is_pinned: Some(self.is_pinned.unwrap_or(app.is_pinned)),
        };
        merged.normalized()
    }
}

impl From<NewApp> for AppUpdate {
    fn from(app: NewApp) -> Self {
        Self {
            name: Some(app.name),
            url: Some(app.url),
            icon: Some(app.icon),
            is_pinned: app.is_pinned,
        }
    }
}

fn required(field: &str, value: &str) -> DashResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DashError::validation(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}
