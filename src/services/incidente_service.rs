use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};

use crate::domain::{Incidente, IncidenteUpdate, NovoIncidente, Status};
use crate::store::{EmpresaStore, IncidenteStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum IncidenteError {
    #[error("no empresa with cnpj {0}")]
    EmpresaNotFound(String),
    #[error("no incidente with id {0}")]
    IncidenteNotFound(i64),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Incident registration, listing and update. Collaborator stores are passed
/// in explicitly rather than reached through any ambient state.
#[derive(Clone)]
pub struct IncidenteService {
    empresas: Arc<dyn EmpresaStore>,
    incidentes: Arc<dyn IncidenteStore>,
}

impl IncidenteService {
    pub fn new(empresas: Arc<dyn EmpresaStore>, incidentes: Arc<dyn IncidenteStore>) -> Self {
        Self {
            empresas,
            incidentes,
        }
    }

    /// List incidents, optionally filtered by a `tipo`/`valor` pair. The only
    /// filter kind currently understood is `cnpj`; results keep the store's
    /// insertion order. A complete pair of any other kind passes validation
    /// upstream and matches nothing here.
    pub async fn list(
        &self,
        filtro: Option<(String, String)>,
    ) -> Result<Vec<Incidente>, IncidenteError> {
        match filtro {
            None => Ok(self.incidentes.list().await?),
            Some((tipo, valor)) if tipo == "cnpj" => {
                Ok(self.incidentes.list_by_empresa(&valor).await?)
            }
            Some((tipo, _)) => {
                tracing::debug!(tipo = %tipo, "unknown filter kind, returning no matches");
                Ok(Vec::new())
            }
        }
    }

    /// Register a new incident against the empresa with the given cnpj.
    /// Status defaults to ABERTO and the creation timestamp to now when the
    /// payload omits them.
    pub async fn register(
        &self,
        cnpj: &str,
        novo: NovoIncidente,
    ) -> Result<Incidente, IncidenteError> {
        let empresa = self
            .empresas
            .get(cnpj)
            .await?
            .ok_or_else(|| IncidenteError::EmpresaNotFound(cnpj.to_string()))?;

        let now = Utc::now().naive_utc();
        let status = novo.status.unwrap_or(Status::Aberto);
        let incidente = Incidente {
            id: 0, // assigned by the store
            cnpj_empresa: empresa.cnpj,
            nivel_perigo: novo.nivel_perigo,
            comentario: novo.comentario,
            data: novo.data.unwrap_or(now),
            status,
            // An incident born resolved still upholds the resolution-date
            // invariant.
            data_resolucao: match status {
                Status::Resolvido => Some(now),
                Status::Aberto => None,
            },
        };

        Ok(self.incidentes.insert(incidente).await?)
    }

    /// Apply a partial update to an existing incident and persist the merged
    /// record.
    pub async fn update(
        &self,
        id: i64,
        update: IncidenteUpdate,
    ) -> Result<Incidente, IncidenteError> {
        let atual = self
            .incidentes
            .get(id)
            .await?
            .ok_or(IncidenteError::IncidenteNotFound(id))?;

        let merged = apply_update(atual, &update, Utc::now().naive_utc());
        Ok(self.incidentes.update(merged).await?)
    }
}

/// The update policy: fields present in the payload overwrite, absent fields
/// stay as they are. The resolution date follows the status it lands on:
///
/// - RESOLVIDO with an explicit `dataResolucao` takes the supplied value;
/// - RESOLVIDO without one is stamped `now`, unless a date is already set
///   (which keeps re-applying the same payload a no-op);
/// - ABERTO clears the resolution date, so reopening a resolved incident is
///   allowed and leaves no stale timestamp behind.
pub fn apply_update(
    mut incidente: Incidente,
    update: &IncidenteUpdate,
    now: NaiveDateTime,
) -> Incidente {
    if let Some(nivel) = update.nivel_perigo {
        incidente.nivel_perigo = nivel;
    }
    if let Some(comentario) = &update.comentario {
        incidente.comentario = comentario.clone();
    }
    if let Some(status) = update.status {
        incidente.status = status;
    }

    match incidente.status {
        Status::Resolvido => {
            if let Some(data) = update.data_resolucao {
                incidente.data_resolucao = Some(data);
            } else if incidente.data_resolucao.is_none() {
                incidente.data_resolucao = Some(now);
            }
        }
        Status::Aberto => {
            incidente.data_resolucao = None;
        }
    }

    incidente
}
