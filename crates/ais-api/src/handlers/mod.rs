//! Request handlers, one module per resource.

pub mod category;
pub mod item;

use std::collections::HashMap;

use axum::http::{HeaderMap, header};
use serde_json::Value;
use uuid::Uuid;

use ais_core::{AppError, AppResult};
use ais_service::RequestContext;

use crate::state::AppState;

/// Build the per-request context from the path owner and query options.
pub(crate) fn request_context(
    state: &AppState,
    agent_id: Uuid,
    params: &HashMap<String, String>,
) -> RequestContext {
    let base = state.config.api.public_base_url.trim_end_matches('/');
    let mut ctx = RequestContext::new(agent_id, format!("{base}/api/inventory/{agent_id}"));
    ctx.depth = match params.get("depth").map(String::as_str) {
        Some("*") => state.config.api.max_depth,
        Some(raw) => raw
            .parse::<u32>()
            .unwrap_or(0)
            .min(state.config.api.max_depth),
        None => 0,
    };
    ctx.simulate = params.get("simulate").map(String::as_str) == Some("true");
    ctx
}

/// Decode a JSON request body, enforcing the content type.
pub(crate) fn decode_body(headers: &HeaderMap, body: &[u8]) -> AppResult<Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !content_type.starts_with("application/json") {
        return Err(AppError::unsupported_media("Unsupported media type"));
    }
    Ok(serde_json::from_slice(body)?)
}

/// Extract the category token from a MOVE/COPY `Destination` header.
///
/// The destination must be an absolute URL under this request's own
/// prefix, naming a `/category/{token}` resource.
pub(crate) fn destination_token(ctx: &RequestContext, headers: &HeaderMap) -> AppResult<String> {
    let raw = headers
        .get("Destination")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::bad_request("Bad request"))?;
    let rest = raw
        .strip_prefix(&ctx.base_url)
        .ok_or_else(|| AppError::not_found("Destination category not found"))?;
    let path = rest.split('?').next().unwrap_or("");
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    match (segments.next(), segments.next()) {
        (Some("category"), Some(token)) => Ok(token.to_string()),
        _ => Err(AppError::bad_request("Bad request")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RequestContext {
        RequestContext::new(
            Uuid::new_v4(),
            "http://localhost/api/inventory/agent".to_string(),
        )
    }

    #[test]
    fn test_destination_token_parses_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Destination",
            "http://localhost/api/inventory/agent/category/trash"
                .parse()
                .unwrap(),
        );
        assert_eq!(destination_token(&ctx(), &headers).unwrap(), "trash");
    }

    #[test]
    fn test_destination_outside_prefix_not_found() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Destination",
            "http://elsewhere/api/inventory/agent/category/trash"
                .parse()
                .unwrap(),
        );
        let err = destination_token(&ctx(), &headers).unwrap_err();
        assert_eq!(err.kind, ais_core::ErrorKind::NotFound);
    }

    #[test]
    fn test_destination_must_name_a_category() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Destination",
            "http://localhost/api/inventory/agent/item/abc"
                .parse()
                .unwrap(),
        );
        let err = destination_token(&ctx(), &headers).unwrap_err();
        assert_eq!(err.kind, ais_core::ErrorKind::BadRequest);
    }

    #[test]
    fn test_decode_body_content_type_enforced() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "text/plain".parse().unwrap());
        let err = decode_body(&headers, b"{}").unwrap_err();
        assert_eq!(err.kind, ais_core::ErrorKind::UnsupportedMedia);

        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        let err = decode_body(&headers, b"not json").unwrap_err();
        assert_eq!(err.kind, ais_core::ErrorKind::BadRequest);
        assert!(decode_body(&headers, b"{\"a\":1}").is_ok());
    }
}
