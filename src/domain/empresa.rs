use serde::{Deserialize, Serialize};

use super::NivelPerigo;

/// A registered company. The cnpj is immutable once the record exists;
/// companies are seeded at startup and have no CRUD surface of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empresa {
    pub cnpj: String,
    pub fantasia: String,
    pub favorita: bool,
}

/// Listing view of a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmpresaDto {
    pub cnpj: String,
    pub fantasia: String,
}

impl From<Empresa> for EmpresaDto {
    fn from(empresa: Empresa) -> Self {
        Self {
            cnpj: empresa.cnpj,
            fantasia: empresa.fantasia,
        }
    }
}

/// Reduced view of the designated favorite company: its identity plus the
/// danger level and comment of its most recent incident, when it has one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpresaFavoritaDto {
    pub cnpj: String,
    pub fantasia: String,
    pub nivel_perigo: Option<NivelPerigo>,
    pub comentario: Option<String>,
}
