use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a maintenance record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    InProgress,
    Completed,
}

impl Default for MaintenanceStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaintenanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(format!("unknown maintenance status: {other}")),
        }
    }
}

/// Joined maintenance row as returned by the store.
///
/// `billboard_name` is `None` when the owning billboard could not be joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRow {
    pub id: i64,
    pub billboard_id: i64,
    pub billboard_name: Option<String>,
    pub reason: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: MaintenanceStatus,
    pub notes: Option<String>,
    pub cost: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Maintenance record as displayed on the screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: i64,
    pub billboard_id: i64,
    pub billboard_name: String,
    pub reason: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: MaintenanceStatus,
    pub notes: Option<String>,
    pub cost: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl MaintenanceRecord {
    /// Build a display record, substituting `unknown_name` for a missing join
    pub fn from_row(row: MaintenanceRow, unknown_name: &str) -> Self {
        Self {
            id: row.id,
            billboard_id: row.billboard_id,
            billboard_name: row
                .billboard_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| unknown_name.to_string()),
            reason: row.reason,
            start_date: row.start_date,
            end_date: row.end_date,
            status: row.status,
            notes: row.notes,
            cost: row.cost,
            created_at: row.created_at,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == MaintenanceStatus::InProgress
    }
}

/// Insert payload for a new maintenance record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMaintenance {
    pub billboard_id: i64,
    pub reason: String,
    pub notes: Option<String>,
    pub cost: Option<f64>,
    pub status: MaintenanceStatus,
    pub start_date: DateTime<Utc>,
}

/// Partial update payload.
///
/// `notes` and `cost` are always written (null clears them). An absent
/// `end_date` leaves the stored value alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceUpdate {
    pub reason: String,
    pub notes: Option<String>,
    pub cost: Option<f64>,
    pub status: MaintenanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

/// Response body for a created record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: Option<&str>) -> MaintenanceRow {
        MaintenanceRow {
            id: 7,
            billboard_id: 3,
            billboard_name: name.map(str::to_string),
            reason: "Light damage".to_string(),
            start_date: Utc::now(),
            end_date: None,
            status: MaintenanceStatus::InProgress,
            notes: None,
            cost: Some(150.5),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&MaintenanceStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let status: MaintenanceStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, MaintenanceStatus::Completed);
        assert_eq!("in_progress".parse::<MaintenanceStatus>(), Ok(MaintenanceStatus::InProgress));
        assert!("done".parse::<MaintenanceStatus>().is_err());
    }

    #[test]
    fn test_from_row_keeps_joined_name() {
        let record = MaintenanceRecord::from_row(row(Some("Gate A")), "unknown");
        assert_eq!(record.billboard_name, "Gate A");
        assert_eq!(record.id, 7);
        assert!(record.is_in_progress());
    }

    #[test]
    fn test_from_row_falls_back_to_placeholder() {
        let record = MaintenanceRecord::from_row(row(None), "unknown");
        assert_eq!(record.billboard_name, "unknown");
    }

    #[test]
    fn test_update_omits_missing_end_date() {
        let update = MaintenanceUpdate {
            reason: "Repaint".to_string(),
            notes: None,
            cost: None,
            status: MaintenanceStatus::InProgress,
            end_date: None,
        };
        let value = serde_json::to_value(&update).unwrap();
        assert!(value.get("end_date").is_none());
        assert!(value.get("notes").unwrap().is_null());
    }
}
