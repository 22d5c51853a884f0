//! Outgoing message - what the engine asks the gateway to send or edit

use super::embed::Embed;

/// Message body to send or to replace an existing message with
///
/// Mentions inside `content` are rendered but never notify anyone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutgoingMessage {
    pub content: String,
    pub embeds: Vec<Embed>,
    pub attachments: Vec<OutgoingAttachment>,
}

impl OutgoingMessage {
    /// Check if files need to be uploaded with this message
    #[inline]
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Same body without files (edits never re-upload)
    #[must_use]
    pub fn without_attachments(mut self) -> Self {
        self.attachments.clear();
        self
    }
}

/// A file to upload, sourced from a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingAttachment {
    pub filename: String,
    pub url: String,
}
