use axum::{
    extract::{Path, State},
    Extension, Json,
};
use kef_core::Client;
use kef_store::{ClientPatch, NewClient};

use crate::middleware::RequestId;

use super::{map_store_error, ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) async fn list_clients(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<Client>>>, ApiError> {
    let clients = state
        .clients
        .list()
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: clients,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn create_client(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<NewClient>,
) -> Result<Json<ApiResponse<Client>>, ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "client name must not be empty",
        ));
    }

    let client = state
        .clients
        .create(body)
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: client,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Unknown ids are a silent no-op and respond with `data: null`.
pub(super) async fn update_client(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(client_id): Path<String>,
    Json(body): Json<ClientPatch>,
) -> Result<Json<ApiResponse<Option<Client>>>, ApiError> {
    let client = state
        .clients
        .update(&client_id, body)
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: client,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn delete_client(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(client_id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .clients
        .delete(&client_id)
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: (),
        meta: ResponseMeta::new(req_id.0),
    }))
}
