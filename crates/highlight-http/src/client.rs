//! REST implementation of ChannelGateway

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use highlight_core::entities::{
    Channel, ChannelType, Message, OutgoingMessage, ReactionCount, ReactionRef,
};
use highlight_core::error::GatewayError;
use highlight_core::traits::{ChannelGateway, GatewayResult};
use highlight_core::value_objects::Snowflake;

use crate::config::{RestConfig, USER_AGENT};
use crate::error::{check_status, map_transport_error};
use crate::mappers::{everyone_permissions, reaction_count, to_channel};
use crate::models::{ChannelDto, CreatedMessageDto, MessageDto, MessagePayloadDto, RoleDto};

/// ChannelGateway backed by the platform's REST API
///
/// Remembers which guild each channel belongs to, since message payloads
/// fetched over REST do not carry it.
#[derive(Clone)]
pub struct RestChannelGateway {
    http: Client,
    base_url: String,
    token: Option<String>,
    guild_ids: Arc<DashMap<Snowflake, Option<Snowflake>>>,
}

impl std::fmt::Debug for RestChannelGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestChannelGateway")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl RestChannelGateway {
    /// Create a new RestChannelGateway
    pub fn new(config: &RestConfig) -> GatewayResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(map_transport_error)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            guild_ids: Arc::new(DashMap::new()),
        })
    }

    /// Build an authorized API request
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{path}", self.base_url));
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, token),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &'static str,
        id: Snowflake,
    ) -> GatewayResult<T> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(map_transport_error)?;

        check_status(response, resource, id)
            .await?
            .json()
            .await
            .map_err(map_transport_error)
    }

    async fn fetch_channel_dto(&self, channel_id: Snowflake) -> GatewayResult<ChannelDto> {
        let dto: ChannelDto = self
            .get_json(&format!("/channels/{channel_id}"), "Channel", channel_id)
            .await?;
        self.guild_ids.insert(dto.id, dto.guild_id);
        Ok(dto)
    }

    async fn fetch_message_dto(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> GatewayResult<MessageDto> {
        self.get_json(
            &format!("/channels/{channel_id}/messages/{message_id}"),
            "Message",
            message_id,
        )
        .await
    }

    async fn guild_id_of(&self, channel_id: Snowflake) -> GatewayResult<Option<Snowflake>> {
        if let Some(cached) = self.guild_ids.get(&channel_id) {
            return Ok(*cached);
        }
        Ok(self.fetch_channel_dto(channel_id).await?.guild_id)
    }

    /// Download an attachment from its CDN URL (no API credentials attached)
    async fn download(&self, url: &str) -> GatewayResult<Vec<u8>> {
        let response = self.http.get(url).send().await.map_err(map_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Transport(format!(
                "attachment download returned {status}"
            )));
        }
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        Ok(bytes.to_vec())
    }

    async fn multipart_form(&self, message: &OutgoingMessage) -> GatewayResult<Form> {
        let payload = MessagePayloadDto::from_outgoing(message, true);
        let payload_json = serde_json::to_string(&payload)
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let mut form = Form::new().text("payload_json", payload_json);
        for (index, attachment) in message.attachments.iter().enumerate() {
            let bytes = self.download(&attachment.url).await?;
            let part = Part::bytes(bytes).file_name(attachment.filename.clone());
            form = form.part(format!("files[{index}]"), part);
        }
        Ok(form)
    }
}

#[async_trait]
impl ChannelGateway for RestChannelGateway {
    #[instrument(skip(self), fields(channel_id = %channel_id))]
    async fn fetch_channel(&self, channel_id: Snowflake) -> GatewayResult<Channel> {
        let dto = self.fetch_channel_dto(channel_id).await?;

        let Some(guild_id) = dto.guild_id else {
            return Ok(to_channel(dto, None));
        };

        // Threads inherit their parent's overwrites
        let channel_type = ChannelType::from(dto.kind);
        let overwrites = match dto.parent_id {
            Some(parent_id) if channel_type.is_thread() => {
                self.fetch_channel_dto(parent_id).await?.permission_overwrites
            }
            _ => dto.permission_overwrites.clone(),
        };

        let roles: Vec<RoleDto> = self
            .get_json(&format!("/guilds/{guild_id}/roles"), "Guild", guild_id)
            .await?;

        let everyone = everyone_permissions(guild_id, &roles, &overwrites);
        debug!(%guild_id, everyone = %everyone, "Resolved default role permissions");
        Ok(to_channel(dto, Some(everyone)))
    }

    #[instrument(skip(self), fields(channel_id = %channel_id, message_id = %message_id))]
    async fn fetch_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> GatewayResult<Message> {
        let dto = self.fetch_message_dto(channel_id, message_id).await?;
        let mut message = Message::from(dto);
        if message.guild_id.is_none() {
            message.guild_id = self.guild_id_of(channel_id).await?;
        }
        Ok(message)
    }

    #[instrument(skip(self, message), fields(channel_id = %channel_id, attachments = message.attachments.len()))]
    async fn send(
        &self,
        channel_id: Snowflake,
        message: &OutgoingMessage,
    ) -> GatewayResult<Snowflake> {
        let builder = self.request(Method::POST, &format!("/channels/{channel_id}/messages"));
        let builder = if message.has_attachments() {
            builder.multipart(self.multipart_form(message).await?)
        } else {
            builder.json(&MessagePayloadDto::from_outgoing(message, false))
        };

        let response = builder.send().await.map_err(map_transport_error)?;
        let created: CreatedMessageDto = check_status(response, "Channel", channel_id)
            .await?
            .json()
            .await
            .map_err(map_transport_error)?;

        debug!(mirror_id = %created.id, "Message sent");
        Ok(created.id)
    }

    #[instrument(skip(self, message), fields(channel_id = %channel_id, message_id = %message_id))]
    async fn edit(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        message: &OutgoingMessage,
    ) -> GatewayResult<()> {
        let response = self
            .request(
                Method::PATCH,
                &format!("/channels/{channel_id}/messages/{message_id}"),
            )
            .json(&MessagePayloadDto::from_outgoing(message, false))
            .send()
            .await
            .map_err(map_transport_error)?;

        check_status(response, "Message", message_id).await?;
        Ok(())
    }

    #[instrument(skip(self), fields(channel_id = %channel_id, message_id = %message_id))]
    async fn delete(&self, channel_id: Snowflake, message_id: Snowflake) -> GatewayResult<()> {
        let response = self
            .request(
                Method::DELETE,
                &format!("/channels/{channel_id}/messages/{message_id}"),
            )
            .send()
            .await
            .map_err(map_transport_error)?;

        match check_status(response, "Message", message_id).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => {
                debug!("Message already gone");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self), fields(message_id = %reaction.message_id, emoji = %reaction.emoji.name))]
    async fn fetch_reaction(&self, reaction: &ReactionRef) -> GatewayResult<ReactionCount> {
        let dto = self
            .fetch_message_dto(reaction.channel_id, reaction.message_id)
            .await?;
        let count = reaction_count(&dto.reactions, &reaction.emoji);
        Ok(ReactionCount::new(reaction.emoji.clone(), count))
    }
}
