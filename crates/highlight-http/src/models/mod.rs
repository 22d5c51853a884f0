//! Wire models - serde structs mirroring the REST API's JSON

mod channel;
mod message;
mod outgoing;

pub use channel::{ChannelDto, OverwriteDto, RoleDto, ROLE_OVERWRITE};
pub use message::{
    AttachmentDto, EmbedAuthorDto, EmbedDto, EmbedFieldDto, EmojiDto, MessageDto, PollAnswerDto,
    PollDto, PollMediaDto, PollResultsDto, ReactionDto, SnapshotDto, SnapshotMessageDto, UserDto,
};
pub use outgoing::{AllowedMentionsDto, AttachmentSlotDto, CreatedMessageDto, MessagePayloadDto};
