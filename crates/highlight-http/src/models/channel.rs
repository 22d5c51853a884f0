//! Channel and role wire models

use serde::Deserialize;

use highlight_core::value_objects::{Permissions, Snowflake};

/// Overwrite `type` value for role overwrites (members use 1)
pub const ROLE_OVERWRITE: u8 = 0;

/// `GET /channels/{id}` response
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelDto {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub parent_id: Option<Snowflake>,
    #[serde(default)]
    pub permission_overwrites: Vec<OverwriteDto>,
}

/// Channel permission overwrite
#[derive(Debug, Clone, Deserialize)]
pub struct OverwriteDto {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: u8,
    pub allow: Permissions,
    pub deny: Permissions,
}

/// Element of `GET /guilds/{id}/roles`
#[derive(Debug, Clone, Deserialize)]
pub struct RoleDto {
    pub id: Snowflake,
    #[serde(default)]
    pub name: String,
    pub permissions: Permissions,
}
