/// Farm data handed to the assistant by the host application
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_FARMER_NAME: &str = "Farmer";

/// A crop the farmer is growing. Read-only for the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecord {
    pub name: String,
    #[serde(default)]
    pub status: String,
    /// Kept as the host sent it; see [`CropRecord::planted_at`].
    #[serde(default)]
    pub planting_date: Option<String>,
}

impl CropRecord {
    pub fn new(name: &str, status: &str, planting_date: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            status: status.to_string(),
            planting_date: planting_date.map(str::to_string),
        }
    }

    /// Planting instant. Plain dates are taken as UTC midnight; RFC 3339
    /// timestamps are accepted as well. `None` when missing or unparsable.
    pub fn planted_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.planting_date.as_deref()?.trim();

        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
}

/// Everything the host passes in when it opens the chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmContext {
    #[serde(default = "default_farmer_name")]
    pub farmer_name: String,
    #[serde(default)]
    pub current_crops: Vec<CropRecord>,
    // carried for the host, the responder does not read it
    #[serde(default)]
    pub recent_activities: Vec<ActivityRecord>,
}

fn default_farmer_name() -> String {
    DEFAULT_FARMER_NAME.to_string()
}

impl Default for FarmContext {
    fn default() -> Self {
        Self {
            farmer_name: default_farmer_name(),
            current_crops: Vec::new(),
            recent_activities: Vec::new(),
        }
    }
}

impl FarmContext {
    pub fn from_json(json: &str) -> Result<Self> {
        let mut context: FarmContext =
            serde_json::from_str(json).context("invalid farm context JSON")?;
        if context.farmer_name.trim().is_empty() {
            context.farmer_name = default_farmer_name();
        }
        Ok(context)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read farm context {}", path.display()))?;
        let context = Self::from_json(&json)?;
        log::info!(
            "🌱 Farm context loaded: {} crop(s) for {}",
            context.current_crops.len(),
            context.farmer_name
        );
        Ok(context)
    }
}
