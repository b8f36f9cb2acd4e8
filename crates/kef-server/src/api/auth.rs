//! Login gate for the dashboard.
//!
//! Authentication is a single hardcoded credential pair; the session is the
//! serialized user record. The admin role only gates client mutation in the
//! UI, never in the discovery core.

use axum::{extract::State, Extension, Json};
use kef_core::{Role, User};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_store_error, ApiError, ApiResponse, AppState, ResponseMeta};

const ADMIN_EMAIL: &str = "FHM";
const ADMIN_PASSWORD: &str = "TechnicalSEO!";

#[derive(Debug, Deserialize)]
pub(super) struct LoginRequest {
    pub email: String,
    pub password: String,
}

fn authenticate(email: &str, password: &str) -> Option<User> {
    (email == ADMIN_EMAIL && password == ADMIN_PASSWORD).then(|| User {
        id: "1".to_string(),
        email: ADMIN_EMAIL.to_string(),
        name: ADMIN_EMAIL.to_string(),
        role: Role::Admin,
    })
}

pub(super) async fn login(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let Some(user) = authenticate(&body.email, &body.password) else {
        return Err(ApiError::new(
            req_id.0,
            "unauthorized",
            "invalid email or password",
        ));
    };

    state
        .sessions
        .save(&user)
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: user,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn logout(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .sessions
        .clear()
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: (),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn session(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Option<User>>>, ApiError> {
    let user = state
        .sessions
        .load()
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: user,
        meta: ResponseMeta::new(req_id.0),
    }))
}
