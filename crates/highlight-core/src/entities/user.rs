//! User entity - the author of a message

use crate::value_objects::Snowflake;

/// Base URL of the platform's media CDN
pub const CDN_BASE_URL: &str = "https://cdn.discordapp.com";

/// User entity as seen on a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
    pub bot: bool,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String) -> Self {
        Self {
            id,
            username,
            global_name: None,
            avatar: None,
            bot: false,
        }
    }

    /// Name shown in the client: the global display name, else the username
    pub fn display_name(&self) -> &str {
        self.global_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }

    /// Get avatar URL or default avatar URL
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => {
                let ext = if hash.starts_with("a_") { "gif" } else { "png" };
                format!("{CDN_BASE_URL}/avatars/{}/{hash}.{ext}", self.id)
            }
            None => format!(
                "{CDN_BASE_URL}/embed/avatars/{}.png",
                self.default_avatar_index()
            ),
        }
    }

    /// Default avatar index (0-5) for accounts without a discriminator
    fn default_avatar_index(&self) -> u64 {
        (self.id.as_u64() >> 22) % 6
    }

    /// Mention markup for this user
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}
