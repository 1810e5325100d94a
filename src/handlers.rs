//! HTTP handlers for the login and sheet-read routes.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::auth::jwt;
use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::members;
use crate::sheets::SheetStore;

/// Shared state: the process-lifetime sheet client plus configuration.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SheetStore>,
    pub config: Arc<AppConfig>,
}

/// Wire names are fixed by the existing client.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "mobileNmbr")]
    pub mobile_nmbr: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// POST /login
///
/// Verifies the submitted pair against the member range, records the login
/// in the receipt cell, and issues a session token. The receipt write comes
/// before token issuance: a login the audit trail missed is not granted.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let rows = state
        .store
        .get_values(&state.config.member_range)
        .await
        .map_err(ApiError::Upstream)?;

    if rows.is_empty() {
        return Err(ApiError::NoData("member range".to_string()));
    }

    if !members::verify(&rows, &payload.user_id, &payload.mobile_nmbr) {
        return Err(ApiError::InvalidCredentials);
    }

    state
        .store
        .update_values(
            &state.config.receipt_range,
            vec![vec![payload.user_id.clone()]],
        )
        .await
        .map_err(|e| {
            tracing::error!("Receipt write failed after successful match: {:?}", e);
            ApiError::Upstream(e)
        })?;

    let token =
        jwt::create_token(&state.config.jwt_secret, &payload.user_id).map_err(anyhow::Error::new)?;

    tracing::info!("Member {} logged in", payload.user_id);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

/// GET /sheets — verbatim passthrough of the configured read range.
pub async fn read_sheets(State(state): State<AppState>) -> ApiResult<Json<Vec<Vec<String>>>> {
    let rows = state
        .store
        .get_values(&state.config.read_range)
        .await
        .map_err(ApiError::Upstream)?;

    Ok(Json(rows))
}

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
