//! HTTP status and transport error mapping

use reqwest::{Response, StatusCode};

use highlight_core::error::GatewayError;
use highlight_core::value_objects::Snowflake;

/// Pass successful responses through; 404 becomes `NotFound`, anything else `Transport`
pub(crate) async fn check_status(
    response: Response,
    resource: &'static str,
    id: Snowflake,
) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(GatewayError::NotFound { resource, id });
    }

    let url = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::Transport(format!("{url} returned {status}: {body}")))
}

/// Convert reqwest error to GatewayError
pub(crate) fn map_transport_error(e: reqwest::Error) -> GatewayError {
    GatewayError::Transport(e.to_string())
}
