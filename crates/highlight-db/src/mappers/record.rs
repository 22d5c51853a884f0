//! Board record model -> entity mapper

use highlight_core::entities::BoardRecord;
use highlight_core::value_objects::Snowflake;

use crate::models::BoardRecordModel;

/// Convert BoardRecordModel to BoardRecord entity
impl From<BoardRecordModel> for BoardRecord {
    fn from(model: BoardRecordModel) -> Self {
        BoardRecord {
            original_message_id: Snowflake::new(model.original_message_id),
            mirror_message_id: BoardRecord::mirror_from_raw(model.mirror_message_id),
            count: model.count,
        }
    }
}
