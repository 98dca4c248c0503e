use crate::models::{CountsResponse, CounterKind, DayCount};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::{path::Path, str::FromStr, time::Duration};
use tracing::debug;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS counts (
    date TEXT PRIMARY KEY NOT NULL,
    palletsReceived INTEGER NOT NULL DEFAULT 0,
    palletsDelivered INTEGER NOT NULL DEFAULT 0
)
"#;

const ENSURE_ROW: &str =
    "INSERT OR IGNORE INTO counts (date, palletsReceived, palletsDelivered) VALUES (?, 0, 0)";

const SELECT_BY_DATE: &str =
    "SELECT date, palletsReceived, palletsDelivered FROM counts WHERE date = ?";

const SELECT_LATEST: &str =
    "SELECT date, palletsReceived, palletsDelivered FROM counts ORDER BY date DESC LIMIT 1";

/// One statement per counter; the column name is never built from request text.
fn increment_statement(kind: CounterKind) -> &'static str {
    match kind {
        CounterKind::PalletsReceived => {
            "UPDATE counts SET palletsReceived = palletsReceived + 1 WHERE date = ? RETURNING palletsReceived"
        }
        CounterKind::PalletsDelivered => {
            "UPDATE counts SET palletsDelivered = palletsDelivered + 1 WHERE date = ? RETURNING palletsDelivered"
        }
    }
}

/// Durable per-date counters backed by a single SQLite table.
#[derive(Clone, Debug)]
pub struct CountStore {
    pool: SqlitePool,
}

impl CountStore {
    /// Opens (creating if needed) the database file and applies the schema.
    pub async fn open(path: &Path) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::with_pool(pool).await
    }

    /// Private in-memory database. Must stay on one connection: each
    /// `:memory:` connection is a separate database.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Inserts a zeroed row for `date` unless one already exists.
    pub async fn ensure_row(&self, date: &str) -> Result<(), sqlx::Error> {
        let result = sqlx::query(ENSURE_ROW).bind(date).execute(&self.pool).await?;
        if result.rows_affected() > 0 {
            debug!(date, "created day row");
        }
        Ok(())
    }

    /// Adds one to `kind` for `date` and returns the new value, or 0 when the
    /// row does not exist.
    pub async fn increment(&self, date: &str, kind: CounterKind) -> Result<i64, sqlx::Error> {
        let updated: Option<i64> = sqlx::query_scalar(increment_statement(kind))
            .bind(date)
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated.unwrap_or(0))
    }

    pub async fn counts_for(&self, date: &str) -> Result<Option<DayCount>, sqlx::Error> {
        sqlx::query_as::<_, DayCount>(SELECT_BY_DATE)
            .bind(date)
            .fetch_optional(&self.pool)
            .await
    }

    /// The row with the greatest date, if any row exists.
    pub async fn latest(&self) -> Result<Option<DayCount>, sqlx::Error> {
        sqlx::query_as::<_, DayCount>(SELECT_LATEST).fetch_optional(&self.pool).await
    }

    /// Counters for `date`. No date, or no matching row, reads as zeros.
    pub async fn lookup(&self, date: Option<&str>) -> Result<CountsResponse, sqlx::Error> {
        let Some(date) = date else {
            return Ok(CountsResponse::default());
        };
        let row = self.counts_for(date).await?;
        Ok(row.map(CountsResponse::from).unwrap_or_default())
    }
}
