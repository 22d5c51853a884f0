//! Poll entity - a poll attached to a message

use super::emoji::PartialEmoji;

/// Poll attached to a message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Poll {
    pub question: String,
    pub answers: Vec<PollAnswer>,
    pub allow_multiselect: bool,
    pub results_finalized: bool,
}

/// One selectable answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollAnswer {
    pub id: u32,
    pub text: String,
    pub emoji: Option<PartialEmoji>,
}

impl PollAnswer {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            emoji: None,
        }
    }
}
