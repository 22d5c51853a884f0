//! Board record database model

use sqlx::FromRow;

/// Database model for a board table row
#[derive(Debug, Clone, FromRow)]
pub struct BoardRecordModel {
    pub original_message_id: i64,
    pub mirror_message_id: i64,
    pub count: i64,
}
