//! Item resource handlers with protocol method dispatch.

use std::collections::HashMap;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::IntoResponse;
use axum::response::Response;
use uuid::Uuid;

use ais_core::AppError;

use crate::error::ApiError;
use crate::state::AppState;

use super::{decode_body, destination_token, request_context};

/// ANY /item/{id} — GET, PATCH, DELETE, MOVE, COPY.
pub async fn dispatch(
    State(state): State<AppState>,
    Path((agent_id, id)): Path<(Uuid, Uuid)>,
    Query(params): Query<HashMap<String, String>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let ctx = request_context(&state, agent_id, &params);
    let response = match method.as_str() {
        "GET" => {
            let value = state.inventory.get_item(&ctx, id).await?;
            (StatusCode::OK, Json(value)).into_response()
        }
        "PATCH" => {
            let payload = decode_body(&headers, &body)?;
            let value = state.inventory.update_item(&ctx, id, payload).await?;
            (StatusCode::OK, Json(value)).into_response()
        }
        "DELETE" => {
            let value = state.inventory.delete_item(&ctx, id).await?;
            (StatusCode::OK, Json(value)).into_response()
        }
        "MOVE" => {
            let dest = destination_token(&ctx, &headers)?;
            let value = state.inventory.move_item(&ctx, id, &dest).await?;
            (StatusCode::OK, Json(value)).into_response()
        }
        "COPY" => {
            let dest = destination_token(&ctx, &headers)?;
            let value = state.inventory.copy_item(&ctx, id, &dest).await?;
            (StatusCode::CREATED, Json(value)).into_response()
        }
        _ => return Err(AppError::method_not_allowed("Method not allowed").into()),
    };
    Ok(response)
}
