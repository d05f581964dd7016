use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::domain::{EmpresaDto, EmpresaFavoritaDto, Incidente, IncidenteUpdate, NovoIncidente};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct FiltroQuery {
    pub tipo: Option<String>,
    pub valor: Option<String>,
}

/// GET /empresas - list all companies
pub async fn empresas_get(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmpresaDto>>, ApiError> {
    let empresas = state.empresas.list().await?;
    Ok(Json(empresas))
}

/// GET /empresas/incidentes - list incidents, optionally filtered by
/// `tipo`/`valor`. The validation layer has already rejected half-specified
/// pairs, so either both parameters are here or neither is.
pub async fn incidentes_get(
    State(state): State<AppState>,
    Query(query): Query<FiltroQuery>,
) -> Result<Json<Vec<Incidente>>, ApiError> {
    let filtro = match (query.tipo, query.valor) {
        (Some(tipo), Some(valor)) => Some((tipo, valor)),
        _ => None,
    };

    let incidentes = state.incidentes.list(filtro).await?;
    Ok(Json(incidentes))
}

/// GET /empresas/favorita - summary of the designated favorite company
pub async fn favorita_get(
    State(state): State<AppState>,
) -> Result<Json<EmpresaFavoritaDto>, ApiError> {
    let favorita = state
        .empresas
        .favorita()
        .await?
        .ok_or_else(|| ApiError::not_found("no empresa designated as favorita"))?;
    Ok(Json(favorita))
}

/// POST /empresas/{cnpj} - register an incident against a company
pub async fn incidente_post(
    State(state): State<AppState>,
    Path(cnpj): Path<String>,
    Json(novo): Json<NovoIncidente>,
) -> Result<(StatusCode, Json<Incidente>), ApiError> {
    let incidente = state.incidentes.register(&cnpj, novo).await?;
    tracing::info!(
        id = incidente.id,
        cnpj = %incidente.cnpj_empresa,
        "incidente registered"
    );
    Ok((StatusCode::CREATED, Json(incidente)))
}

/// PUT /empresas/{id} - partial update of an incident
pub async fn incidente_put(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<IncidenteUpdate>,
) -> Result<Json<Incidente>, ApiError> {
    let incidente = state.incidentes.update(id, update).await?;
    tracing::info!(id = incidente.id, status = ?incidente.status, "incidente updated");
    Ok(Json(incidente))
}
