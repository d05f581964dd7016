use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{data_format, data_format_opt};

/// Danger level reported for an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NivelPerigo {
    Safe,
    Warning,
    Danger,
}

/// Incident lifecycle status. Not a forward-only state machine: a resolved
/// incident may be reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Aberto,
    Resolvido,
}

/// An incident reported against a company. Holds only a weak reference to the
/// owning empresa via its cnpj.
///
/// Invariant: `data_resolucao` is `Some` if and only if `status` is
/// [`Status::Resolvido`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incidente {
    pub id: i64,
    pub cnpj_empresa: String,
    pub nivel_perigo: NivelPerigo,
    pub comentario: String,
    #[serde(with = "data_format")]
    pub data: NaiveDateTime,
    pub status: Status,
    #[serde(default, with = "data_format_opt")]
    pub data_resolucao: Option<NaiveDateTime>,
}

/// Registration payload for POST /empresas/{cnpj}. The id and owning cnpj come
/// from the store and the path, never from the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoIncidente {
    pub nivel_perigo: NivelPerigo,
    pub comentario: String,
    #[serde(default, with = "data_format_opt")]
    pub data: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: Option<Status>,
}

/// Partial-update payload for PUT /empresas/{id}. Fields present overwrite;
/// fields absent leave the stored incident untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidenteUpdate {
    #[serde(default)]
    pub nivel_perigo: Option<NivelPerigo>,
    #[serde(default)]
    pub comentario: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default, with = "data_format_opt")]
    pub data_resolucao: Option<NaiveDateTime>,
}
