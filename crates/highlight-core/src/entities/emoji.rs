//! Emoji reference used by reactions and poll answers

use crate::value_objects::Snowflake;

/// Partial emoji: a unicode emoji has only a name, a custom emoji also has an ID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartialEmoji {
    pub id: Option<Snowflake>,
    pub name: String,
    pub animated: bool,
}

impl PartialEmoji {
    /// Create a unicode emoji
    pub fn unicode(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            animated: false,
        }
    }

    /// Create a custom guild emoji
    pub fn custom(id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            animated: false,
        }
    }

    /// Check if this is a custom guild emoji
    #[inline]
    pub fn is_custom(&self) -> bool {
        self.id.is_some()
    }

    /// Check if this emoji carries the given name
    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}
