use anyhow::Result;
use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;
use std::time::Duration;

pub mod maintenance_store;

pub use maintenance_store::SqliteStore;

pub type DbPool = Pool<Sqlite>;

const SAMPLE_BILLBOARDS: &[&str] = &[
    "لوحة طريق المطار",
    "لوحة ميدان الشهداء",
    "لوحة الكورنيش",
    "لوحة جامعة طرابلس",
];

/// Initialize the database connection pool
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // Every connection to an in-memory database sees its own database
    let in_memory = database_url.contains(":memory:");
    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(if in_memory { 1 } else { max_connections.max(1) })
        .acquire_timeout(Duration::from_secs(3));
    if in_memory {
        pool_options = pool_options.idle_timeout(None).max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;

    setup_database(&pool).await?;

    Ok(pool)
}

/// Set up the database schema
pub async fn setup_database(pool: &DbPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS billboards (
            id INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS maintenance (
            id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            billboard_id INTEGER NOT NULL REFERENCES billboards(id),
            reason TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT,
            status TEXT NOT NULL CHECK (status IN ('in_progress', 'completed')),
            notes TEXT,
            cost REAL CHECK (cost IS NULL OR cost >= 0),
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_maintenance_created_at ON maintenance (created_at)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Insert the sample billboards if the table is empty
pub async fn seed_billboards(pool: &DbPool) -> Result<()> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM billboards")
        .fetch_one(pool)
        .await?;

    if count.0 == 0 {
        for name in SAMPLE_BILLBOARDS {
            sqlx::query("INSERT INTO billboards (name) VALUES (?)")
                .bind(*name)
                .execute(pool)
                .await?;
        }
        tracing::info!("Seeded {} sample billboards", SAMPLE_BILLBOARDS.len());
    }

    Ok(())
}
