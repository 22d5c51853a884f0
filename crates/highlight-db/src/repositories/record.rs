//! PostgreSQL implementation of RecordStore

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info, instrument};

use highlight_core::entities::BoardRecord;
use highlight_core::traits::{RecordStore, RepoResult};
use highlight_core::value_objects::Snowflake;

use crate::models::BoardRecordModel;

use super::error::{map_db_error, validate_table_name};

/// PostgreSQL implementation of RecordStore
///
/// Each board owns one table; the table name is validated once at
/// construction and then spliced into every statement.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
    table: String,
}

impl std::fmt::Debug for PgRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgRecordStore")
            .field("table", &self.table)
            .finish()
    }
}

impl PgRecordStore {
    /// Create a new PgRecordStore backed by `table`
    pub fn new(pool: PgPool, table: impl Into<String>) -> RepoResult<Self> {
        let table = table.into();
        validate_table_name(&table)?;
        Ok(Self { pool, table })
    }

    /// Name of the backing table
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Create the backing table if it does not exist yet
    #[instrument(skip(self), fields(table = %self.table))]
    pub async fn ensure_schema(&self) -> RepoResult<()> {
        let sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                original_message_id BIGINT PRIMARY KEY,
                mirror_message_id BIGINT NOT NULL DEFAULT {},
                count BIGINT NOT NULL DEFAULT 0
            )
            "#,
            self.table,
            BoardRecord::SENTINEL
        );

        sqlx::query(&sql)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        info!(table = %self.table, "Board table ready");
        Ok(())
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    #[instrument(skip(self), fields(table = %self.table))]
    async fn insert_if_absent(&self, original_id: Snowflake) -> RepoResult<bool> {
        let sql = format!(
            r#"
            INSERT INTO {} (original_message_id, mirror_message_id, count)
            VALUES ($1, $2, 0)
            ON CONFLICT (original_message_id) DO NOTHING
            "#,
            self.table
        );

        let result = sqlx::query(&sql)
            .bind(original_id.into_inner())
            .bind(BoardRecord::SENTINEL)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        let inserted = result.rows_affected() == 1;
        debug!(message_id = %original_id, inserted, "Insert board record");
        Ok(inserted)
    }

    #[instrument(skip(self), fields(table = %self.table))]
    async fn get(&self, original_id: Snowflake) -> RepoResult<Option<BoardRecord>> {
        let sql = format!(
            r#"
            SELECT original_message_id, mirror_message_id, count
            FROM {}
            WHERE original_message_id = $1
            "#,
            self.table
        );

        let result = sqlx::query_as::<_, BoardRecordModel>(&sql)
            .bind(original_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(BoardRecord::from))
    }

    #[instrument(skip(self), fields(table = %self.table))]
    async fn set_mirror_id(
        &self,
        original_id: Snowflake,
        mirror_id: Option<Snowflake>,
    ) -> RepoResult<()> {
        let sql = format!(
            "UPDATE {} SET mirror_message_id = $1 WHERE original_message_id = $2",
            self.table
        );

        sqlx::query(&sql)
            .bind(BoardRecord::mirror_to_raw(mirror_id))
            .bind(original_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(table = %self.table))]
    async fn set_count(&self, original_id: Snowflake, count: i64) -> RepoResult<()> {
        let sql = format!(
            "UPDATE {} SET count = $1 WHERE original_message_id = $2",
            self.table
        );

        sqlx::query(&sql)
            .bind(count)
            .bind(original_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(table = %self.table))]
    async fn claim_mirror(&self, original_id: Snowflake, mirror_id: Snowflake) -> RepoResult<bool> {
        let sql = format!(
            r#"
            UPDATE {}
            SET mirror_message_id = $1
            WHERE original_message_id = $2 AND mirror_message_id <= 0
            "#,
            self.table
        );

        let result = sqlx::query(&sql)
            .bind(mirror_id.into_inner())
            .bind(original_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }
}
