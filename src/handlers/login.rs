use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
}

/// POST /login - verify credentials against the usuario store and issue a JWT
pub async fn login_post(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let usuario = state
        .usuarios
        .get_by_email(&body.email)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::unauthorized("invalid credentials"))?;

    if auth::sha256_hex(&body.senha) != usuario.senha_sha256 {
        tracing::warn!(email = %body.email, "login rejected: bad password");
        return Err(ApiError::unauthorized("invalid credentials"));
    }

    let claims = Claims::new(usuario.email, usuario.cnpj_empresa);
    let token = auth::generate_jwt(claims).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        ApiError::internal_server_error("could not issue token")
    })?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
    }))
}
