use async_trait::async_trait;
use chrono::Utc;

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::{Billboard, MaintenanceRow, MaintenanceUpdate, NewMaintenance},
    store::MaintenanceStore,
};

/// Maintenance store backed by the SQLite pool
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Create a new SqliteStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn map_write_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return AppError::BadRequest("billboard does not exist".into());
        }
        if db_err.is_check_violation() {
            return AppError::BadRequest(db_err.message().to_string());
        }
    }
    AppError::Database(err)
}

#[async_trait]
impl MaintenanceStore for SqliteStore {
    /// Get all maintenance rows with the owning billboard's name
    async fn list_maintenance(&self) -> Result<Vec<MaintenanceRow>> {
        let rows = sqlx::query_as::<_, MaintenanceRow>(
            r#"
            SELECT m.id, m.billboard_id, b.name AS billboard_name, m.reason,
                   m.start_date, m.end_date, m.status, m.notes, m.cost, m.created_at
            FROM maintenance m
            LEFT JOIN billboards b ON m.billboard_id = b.id
            ORDER BY m.created_at DESC, m.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    /// Get all billboards ordered by name
    async fn list_billboards(&self) -> Result<Vec<Billboard>> {
        let billboards =
            sqlx::query_as::<_, Billboard>("SELECT id, name FROM billboards ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(billboards)
    }

    /// Insert a new maintenance record
    async fn insert_maintenance(&self, record: NewMaintenance) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO maintenance (billboard_id, reason, notes, cost, status, start_date, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.billboard_id)
        .bind(&record.reason)
        .bind(&record.notes)
        .bind(record.cost)
        .bind(record.status)
        .bind(record.start_date)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(result.last_insert_rowid())
    }

    /// Apply a partial update. A stored end date is never replaced.
    async fn update_maintenance(&self, id: i64, update: MaintenanceUpdate) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE maintenance
            SET reason = ?, notes = ?, cost = ?, status = ?, end_date = COALESCE(end_date, ?)
            WHERE id = ?
            "#,
        )
        .bind(&update.reason)
        .bind(&update.notes)
        .bind(update.cost)
        .bind(update.status)
        .bind(update.end_date)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("maintenance record {id}")));
        }

        Ok(())
    }

    /// Delete a maintenance record by ID
    async fn delete_maintenance(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM maintenance WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("maintenance record {id}")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db_pool;
    use crate::models::MaintenanceStatus;
    use chrono::Duration;

    async fn setup_store() -> SqliteStore {
        let pool = init_db_pool("sqlite::memory:", 1).await.unwrap();
        sqlx::query("INSERT INTO billboards (id, name) VALUES (1, 'Gate B'), (2, 'Gate A')")
            .execute(&pool)
            .await
            .unwrap();
        SqliteStore::new(pool)
    }

    fn new_record(billboard_id: i64, reason: &str) -> NewMaintenance {
        NewMaintenance {
            billboard_id,
            reason: reason.to_string(),
            notes: None,
            cost: None,
            status: MaintenanceStatus::InProgress,
            start_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_billboards_ordered_by_name() {
        let store = setup_store().await;
        let names: Vec<String> = store
            .list_billboards()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Gate A", "Gate B"]);
    }

    #[tokio::test]
    async fn test_insert_and_list_newest_first() {
        let store = setup_store().await;
        let first = store.insert_maintenance(new_record(1, "Repaint")).await.unwrap();
        let second = store.insert_maintenance(new_record(2, "Light damage")).await.unwrap();

        let rows = store.list_maintenance().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, second);
        assert_eq!(rows[0].billboard_name.as_deref(), Some("Gate A"));
        assert_eq!(rows[1].id, first);
        assert_eq!(rows[1].status, MaintenanceStatus::InProgress);
        assert!(rows[1].end_date.is_none());
    }

    #[tokio::test]
    async fn test_insert_unknown_billboard_is_rejected() {
        let store = setup_store().await;
        let err = store.insert_maintenance(new_record(99, "Repaint")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_update_never_replaces_end_date() {
        let store = setup_store().await;
        let id = store.insert_maintenance(new_record(1, "Repaint")).await.unwrap();
        let first_end = Utc::now() - Duration::days(2);

        let mut update = MaintenanceUpdate {
            reason: "Repaint".to_string(),
            notes: Some("done".to_string()),
            cost: Some(20.0),
            status: MaintenanceStatus::Completed,
            end_date: Some(first_end),
        };
        store.update_maintenance(id, update.clone()).await.unwrap();

        update.end_date = Some(Utc::now());
        update.cost = None;
        store.update_maintenance(id, update).await.unwrap();

        let row = store.list_maintenance().await.unwrap().remove(0);
        assert_eq!(row.end_date, Some(first_end));
        assert_eq!(row.cost, None);
        assert_eq!(row.notes.as_deref(), Some("done"));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_record() {
        let store = setup_store().await;
        let update = MaintenanceUpdate {
            reason: "x".to_string(),
            notes: None,
            cost: None,
            status: MaintenanceStatus::InProgress,
            end_date: None,
        };
        assert!(matches!(
            store.update_maintenance(42, update).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_maintenance(42).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let store = setup_store().await;
        let id = store.insert_maintenance(new_record(1, "Repaint")).await.unwrap();
        store.delete_maintenance(id).await.unwrap();
        assert!(store.list_maintenance().await.unwrap().is_empty());
    }
}
