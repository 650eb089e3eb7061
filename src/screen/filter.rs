use serde::Serialize;

use crate::models::{MaintenanceRecord, MaintenanceStatus};

/// Case-insensitive substring match on billboard name, reason and notes
pub fn matches_search(record: &MaintenanceRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    record.billboard_name.to_lowercase().contains(&needle)
        || record.reason.to_lowercase().contains(&needle)
        || record
            .notes
            .as_deref()
            .is_some_and(|notes| notes.to_lowercase().contains(&needle))
}

pub fn filter_records<'a>(records: &'a [MaintenanceRecord], query: &str) -> Vec<&'a MaintenanceRecord> {
    records
        .iter()
        .filter(|record| matches_search(record, query))
        .collect()
}

/// Counters shown above the records table
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    pub in_progress: usize,
    pub completed: usize,
    pub total_cost: f64,
}

impl Summary {
    pub fn from_records(records: &[MaintenanceRecord]) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            match record.status {
                MaintenanceStatus::InProgress => summary.in_progress += 1,
                MaintenanceStatus::Completed => summary.completed += 1,
            }
            if let Some(cost) = record.cost {
                summary.total_cost += cost;
            }
            summary
        })
    }
}
