//! Category resource handlers with protocol method dispatch.

use std::collections::HashMap;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::Response;
use axum::response::IntoResponse;
use uuid::Uuid;

use ais_core::AppError;

use crate::error::ApiError;
use crate::state::AppState;

use super::{decode_body, destination_token, request_context};

/// ANY /category/{token} — GET, POST, PATCH, DELETE, MOVE, COPY.
pub async fn dispatch(
    State(state): State<AppState>,
    Path((agent_id, token)): Path<(Uuid, String)>,
    Query(params): Query<HashMap<String, String>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let ctx = request_context(&state, agent_id, &params);
    let response = match method.as_str() {
        "GET" => {
            let value = state.inventory.get_category(&ctx, &token, false).await?;
            (StatusCode::OK, Json(value)).into_response()
        }
        "POST" => {
            let payload = decode_body(&headers, &body)?;
            let value = state
                .inventory
                .create_in_category(&ctx, &token, payload)
                .await?;
            (StatusCode::CREATED, Json(value)).into_response()
        }
        "PATCH" => {
            let payload = decode_body(&headers, &body)?;
            let value = state
                .inventory
                .rename_category(&ctx, &token, payload)
                .await?;
            (StatusCode::OK, Json(value)).into_response()
        }
        "DELETE" => {
            let value = state.inventory.delete_category(&ctx, &token).await?;
            (StatusCode::OK, Json(value)).into_response()
        }
        "MOVE" => {
            let dest = destination_token(&ctx, &headers)?;
            let value = state.inventory.move_category(&ctx, &token, &dest).await?;
            (StatusCode::OK, Json(value)).into_response()
        }
        "COPY" => {
            let dest = destination_token(&ctx, &headers)?;
            let value = state.inventory.copy_category(&ctx, &token, &dest).await?;
            (StatusCode::CREATED, Json(value)).into_response()
        }
        _ => return Err(AppError::method_not_allowed("Method not allowed").into()),
    };
    Ok(response)
}

/// GET|DELETE /category/{token}/children.
pub async fn children(
    State(state): State<AppState>,
    Path((agent_id, token)): Path<(Uuid, String)>,
    Query(params): Query<HashMap<String, String>>,
    method: Method,
) -> Result<Response, ApiError> {
    let ctx = request_context(&state, agent_id, &params);
    let value = match method.as_str() {
        "GET" => state.inventory.get_category(&ctx, &token, false).await?,
        "DELETE" => state.inventory.purge_category(&ctx, &token).await?,
        _ => return Err(AppError::method_not_allowed("Method not allowed").into()),
    };
    Ok((StatusCode::OK, Json(value)).into_response())
}

/// GET|DELETE /category/{token}/items.
pub async fn items(
    State(state): State<AppState>,
    Path((agent_id, token)): Path<(Uuid, String)>,
    Query(params): Query<HashMap<String, String>>,
    method: Method,
) -> Result<Response, ApiError> {
    let ctx = request_context(&state, agent_id, &params);
    let value = match method.as_str() {
        "GET" => state.inventory.get_category_items(&ctx, &token).await?,
        "DELETE" => state.inventory.delete_category_items(&ctx, &token).await?,
        _ => return Err(AppError::method_not_allowed("Method not allowed").into()),
    };
    Ok((StatusCode::OK, Json(value)).into_response())
}

/// GET|PUT|DELETE /category/{token}/links.
pub async fn links(
    State(state): State<AppState>,
    Path((agent_id, token)): Path<(Uuid, String)>,
    Query(params): Query<HashMap<String, String>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let ctx = request_context(&state, agent_id, &params);
    let value = match method.as_str() {
        "GET" => state.inventory.get_category_links(&ctx, &token).await?,
        "PUT" => {
            let payload = decode_body(&headers, &body)?;
            state
                .inventory
                .replace_category_links(&ctx, &token, payload)
                .await?
        }
        "DELETE" => state.inventory.delete_category_links(&ctx, &token).await?,
        _ => return Err(AppError::method_not_allowed("Method not allowed").into()),
    };
    Ok((StatusCode::OK, Json(value)).into_response())
}

/// GET /category/{token}/categories — the categories-only walk.
pub async fn categories(
    State(state): State<AppState>,
    Path((agent_id, token)): Path<(Uuid, String)>,
    Query(params): Query<HashMap<String, String>>,
    method: Method,
) -> Result<Response, ApiError> {
    let ctx = request_context(&state, agent_id, &params);
    if method != Method::GET {
        return Err(AppError::method_not_allowed("Method not allowed").into());
    }
    let value = state.inventory.get_category(&ctx, &token, true).await?;
    Ok((StatusCode::OK, Json(value)).into_response())
}
