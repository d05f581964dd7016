use std::sync::Arc;

use crate::domain::{EmpresaDto, EmpresaFavoritaDto};
use crate::store::{EmpresaStore, IncidenteStore, StoreError};

/// Company listing and the favorita summary.
#[derive(Clone)]
pub struct EmpresaService {
    empresas: Arc<dyn EmpresaStore>,
    incidentes: Arc<dyn IncidenteStore>,
}

impl EmpresaService {
    pub fn new(empresas: Arc<dyn EmpresaStore>, incidentes: Arc<dyn IncidenteStore>) -> Self {
        Self {
            empresas,
            incidentes,
        }
    }

    pub async fn list(&self) -> Result<Vec<EmpresaDto>, StoreError> {
        let empresas = self.empresas.list().await?;
        Ok(empresas.into_iter().map(EmpresaDto::from).collect())
    }

    /// Reduced view of the designated favorite company: identity plus danger
    /// level and comment of its latest incident. `None` when no company is
    /// flagged.
    pub async fn favorita(&self) -> Result<Option<EmpresaFavoritaDto>, StoreError> {
        let Some(empresa) = self.empresas.favorita().await? else {
            return Ok(None);
        };

        let ultimo = self
            .incidentes
            .list_by_empresa(&empresa.cnpj)
            .await?
            .into_iter()
            .last();

        Ok(Some(EmpresaFavoritaDto {
            cnpj: empresa.cnpj,
            fantasia: empresa.fantasia,
            nivel_perigo: ultimo.as_ref().map(|i| i.nivel_perigo),
            comentario: ultimo.map(|i| i.comentario),
        }))
    }
}
