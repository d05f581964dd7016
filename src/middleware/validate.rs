use axum::{extract::Request, middleware::Next, response::Response};
use url::form_urlencoded;

use crate::error::ApiError;

/// The one path whose query string is shape-checked before dispatch.
pub const INCIDENTES_PATH: &str = "/empresas/incidentes";

/// A filter query that names only part of a `tipo`/`valor` pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct MalformedRequestError {
    pub message: String,
}

impl MalformedRequestError {
    fn missing_parameter() -> Self {
        Self {
            message: "a required parameter was not provided".to_string(),
        }
    }
}

/// Guard for the incident listing URI, applied before any handler runs.
///
/// When the path is exactly [`INCIDENTES_PATH`] and the query carries at least
/// one parameter, both `tipo` and `valor` must be present. Presence is all that
/// is checked: empty-string values still count. An empty parameter set means
/// list-all and passes through, as does every other path.
pub fn validate_incidente_query(
    path: &str,
    query: Option<&str>,
) -> Result<(), MalformedRequestError> {
    if path != INCIDENTES_PATH {
        return Ok(());
    }

    let raw = match query {
        Some(q) if !q.is_empty() => q,
        _ => return Ok(()),
    };

    let mut has_tipo = false;
    let mut has_valor = false;
    let mut has_any = false;
    for (key, _) in form_urlencoded::parse(raw.as_bytes()) {
        has_any = true;
        match key.as_ref() {
            "tipo" => has_tipo = true,
            "valor" => has_valor = true,
            _ => {}
        }
    }

    if has_any && (!has_tipo || !has_valor) {
        return Err(MalformedRequestError::missing_parameter());
    }

    Ok(())
}

/// Axum layer over the empresa routes wrapping [`validate_incidente_query`].
/// Rejected requests never reach a handler and cause no side effects.
pub async fn validate_empresa_request(request: Request, next: Next) -> Result<Response, ApiError> {
    validate_incidente_query(request.uri().path(), request.uri().query())?;
    Ok(next.run(request).await)
}
