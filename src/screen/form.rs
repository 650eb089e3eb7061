use chrono::{DateTime, Utc};
use thiserror::Error;

use super::messages;
use crate::models::{MaintenanceRecord, MaintenanceStatus, MaintenanceUpdate, NewMaintenance};

/// Local validation failures. The message is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{}", messages::VALIDATION_REQUIRED)]
    MissingRequired,

    #[error("{}", messages::VALIDATION_BILLBOARD)]
    InvalidBillboard,

    #[error("{}", messages::VALIDATION_COST)]
    InvalidCost,
}

/// Form fields as entered in the add/edit dialogs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormData {
    pub billboard_id: String,
    pub reason: String,
    pub notes: String,
    pub cost: String,
    pub status: MaintenanceStatus,
}

impl FormData {
    pub fn from_record(record: &MaintenanceRecord) -> Self {
        Self {
            billboard_id: record.billboard_id.to_string(),
            reason: record.reason.clone(),
            notes: record.notes.clone().unwrap_or_default(),
            cost: record.cost.map(|cost| cost.to_string()).unwrap_or_default(),
            status: record.status,
        }
    }

    fn notes_value(&self) -> Option<String> {
        if self.notes.is_empty() {
            None
        } else {
            Some(self.notes.clone())
        }
    }

    /// Empty means no cost; anything else must be a non-negative number
    pub fn cost_value(&self) -> Result<Option<f64>, FormError> {
        let cost = self.cost.trim();
        if cost.is_empty() {
            return Ok(None);
        }
        match cost.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
            _ => Err(FormError::InvalidCost),
        }
    }

    /// Build the insert payload, stamping `start_date`
    pub fn to_new_maintenance(&self, start_date: DateTime<Utc>) -> Result<NewMaintenance, FormError> {
        let billboard_id = self.billboard_id.trim();
        if billboard_id.is_empty() || self.reason.trim().is_empty() {
            return Err(FormError::MissingRequired);
        }
        let billboard_id = billboard_id
            .parse::<i64>()
            .map_err(|_| FormError::InvalidBillboard)?;

        Ok(NewMaintenance {
            billboard_id,
            reason: self.reason.clone(),
            notes: self.notes_value(),
            cost: self.cost_value()?,
            status: self.status,
            start_date,
        })
    }

    /// Build the partial update for `original`.
    ///
    /// `end_date` is stamped with `now` only when the form completes a record
    /// that has no end date yet.
    pub fn to_update(
        &self,
        original: &MaintenanceRecord,
        now: DateTime<Utc>,
    ) -> Result<MaintenanceUpdate, FormError> {
        let completes = self.status == MaintenanceStatus::Completed && original.end_date.is_none();

        Ok(MaintenanceUpdate {
            reason: self.reason.clone(),
            notes: self.notes_value(),
            cost: self.cost_value()?,
            status: self.status,
            end_date: completes.then_some(now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(status: MaintenanceStatus, end_date: Option<DateTime<Utc>>) -> MaintenanceRecord {
        MaintenanceRecord {
            id: 5,
            billboard_id: 2,
            billboard_name: "Gate B".to_string(),
            reason: "Repaint".to_string(),
            start_date: Utc::now() - Duration::days(3),
            end_date,
            status,
            notes: Some("north face".to_string()),
            cost: Some(0.0),
            created_at: Utc::now() - Duration::days(3),
        }
    }

    fn filled() -> FormData {
        FormData {
            billboard_id: "3".to_string(),
            reason: "Light damage".to_string(),
            notes: String::new(),
            cost: "150.5".to_string(),
            status: MaintenanceStatus::InProgress,
        }
    }

    #[test]
    fn test_required_fields() {
        let now = Utc::now();
        let mut form = filled();
        form.reason = String::new();
        assert_eq!(form.to_new_maintenance(now), Err(FormError::MissingRequired));

        let mut form = filled();
        form.billboard_id = String::new();
        assert_eq!(form.to_new_maintenance(now), Err(FormError::MissingRequired));

        let mut form = filled();
        form.reason = "   ".to_string();
        assert_eq!(form.to_new_maintenance(now), Err(FormError::MissingRequired));
    }

    #[test]
    fn test_invalid_billboard_and_cost() {
        let now = Utc::now();
        let mut form = filled();
        form.billboard_id = "abc".to_string();
        assert_eq!(form.to_new_maintenance(now), Err(FormError::InvalidBillboard));

        for cost in ["-1", "abc", "NaN", "inf"] {
            let mut form = filled();
            form.cost = cost.to_string();
            assert_eq!(form.to_new_maintenance(now), Err(FormError::InvalidCost), "{cost}");
        }
    }

    #[test]
    fn test_new_maintenance_payload() {
        let now = Utc::now();
        let payload = filled().to_new_maintenance(now).unwrap();
        assert_eq!(payload.billboard_id, 3);
        assert_eq!(payload.cost, Some(150.5));
        assert_eq!(payload.notes, None);
        assert_eq!(payload.start_date, now);
        assert_eq!(payload.status, MaintenanceStatus::InProgress);
    }

    #[test]
    fn test_completion_stamps_end_date_once() {
        let now = Utc::now();
        let original = record(MaintenanceStatus::InProgress, None);
        let mut form = FormData::from_record(&original);
        form.status = MaintenanceStatus::Completed;
        assert_eq!(form.to_update(&original, now).unwrap().end_date, Some(now));

        let earlier = now - Duration::days(1);
        let done = record(MaintenanceStatus::Completed, Some(earlier));
        let form = FormData::from_record(&done);
        assert_eq!(form.to_update(&done, now).unwrap().end_date, None);
    }

    #[test]
    fn test_in_progress_update_has_no_end_date() {
        let original = record(MaintenanceStatus::InProgress, None);
        let form = FormData::from_record(&original);
        assert_eq!(form.to_update(&original, Utc::now()).unwrap().end_date, None);
    }

    #[test]
    fn test_from_record_keeps_zero_cost() {
        let form = FormData::from_record(&record(MaintenanceStatus::InProgress, None));
        assert_eq!(form.cost, "0");
        assert_eq!(form.notes, "north face");
        assert_eq!(form.billboard_id, "2");
    }
}
