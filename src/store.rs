use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Billboard, MaintenanceRow, MaintenanceUpdate, NewMaintenance},
};

/// Contract of the table store behind the maintenance screen.
///
/// Implemented directly over SQLite by [`crate::db::SqliteStore`] and over
/// the JSON API by [`crate::client::HttpStore`].
#[async_trait]
pub trait MaintenanceStore: Send + Sync {
    /// All maintenance rows joined with their billboard name, newest first
    async fn list_maintenance(&self) -> Result<Vec<MaintenanceRow>>;

    /// All billboards ordered by name
    async fn list_billboards(&self) -> Result<Vec<Billboard>>;

    /// Insert a record and return its server-assigned id
    async fn insert_maintenance(&self, record: NewMaintenance) -> Result<i64>;

    async fn update_maintenance(&self, id: i64, update: MaintenanceUpdate) -> Result<()>;

    async fn delete_maintenance(&self, id: i64) -> Result<()>;
}
