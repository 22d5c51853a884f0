//! Channel wire model -> entity mapper

use highlight_core::entities::{Channel, ChannelType};
use highlight_core::value_objects::{Permissions, Snowflake};

use crate::models::{ChannelDto, OverwriteDto, RoleDto, ROLE_OVERWRITE};

/// Effective permissions of the default role (`@everyone`) in a channel
///
/// The default role shares its id with the guild. Administrators bypass
/// overwrites; otherwise the channel's role overwrite for the default role is
/// applied on top of the role's guild-wide permissions.
pub fn everyone_permissions(
    guild_id: Snowflake,
    roles: &[RoleDto],
    overwrites: &[OverwriteDto],
) -> Permissions {
    let base = roles
        .iter()
        .find(|role| role.id == guild_id)
        .map_or_else(Permissions::empty, |role| role.permissions);

    if base.contains(Permissions::ADMINISTRATOR) {
        return Permissions::all();
    }

    overwrites
        .iter()
        .find(|overwrite| overwrite.kind == ROLE_OVERWRITE && overwrite.id == guild_id)
        .map_or(base, |overwrite| {
            base.apply_overwrite(overwrite.allow, overwrite.deny)
        })
}

/// Build a Channel entity from its wire model and resolved permissions
pub fn to_channel(dto: ChannelDto, everyone_permissions: Option<Permissions>) -> Channel {
    Channel {
        id: dto.id,
        guild_id: dto.guild_id,
        name: dto.name,
        channel_type: ChannelType::from(dto.kind),
        parent_id: dto.parent_id,
        everyone_permissions,
    }
}
