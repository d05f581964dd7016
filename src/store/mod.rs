pub mod memory;

use async_trait::async_trait;

use crate::domain::{Empresa, Incidente, Usuario};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no incidente with id {0}")]
    IncidenteNotFound(i64),
    #[error("store lock poisoned")]
    Poisoned,
}

/// Read access to company records. Companies are seeded externally; the API
/// never creates or mutates them.
#[async_trait]
pub trait EmpresaStore: Send + Sync {
    /// All companies in insertion order.
    async fn list(&self) -> Result<Vec<Empresa>, StoreError>;

    /// Look up a company by its cnpj.
    async fn get(&self, cnpj: &str) -> Result<Option<Empresa>, StoreError>;

    /// The company flagged as favorita, if one is designated.
    async fn favorita(&self) -> Result<Option<Empresa>, StoreError>;
}

/// Persistence for incident records.
#[async_trait]
pub trait IncidenteStore: Send + Sync {
    /// All incidents in insertion order.
    async fn list(&self) -> Result<Vec<Incidente>, StoreError>;

    /// Incidents belonging to the company with the given cnpj, in insertion
    /// order.
    async fn list_by_empresa(&self, cnpj: &str) -> Result<Vec<Incidente>, StoreError>;

    /// Look up an incident by id.
    async fn get(&self, id: i64) -> Result<Option<Incidente>, StoreError>;

    /// Persist a new incident. The store assigns the id; whatever id the input
    /// carries is ignored. Returns the stored record.
    async fn insert(&self, incidente: Incidente) -> Result<Incidente, StoreError>;

    /// Replace the stored incident with the same id.
    async fn update(&self, incidente: Incidente) -> Result<Incidente, StoreError>;
}

/// Lookup for login accounts.
#[async_trait]
pub trait UsuarioStore: Send + Sync {
    async fn get_by_email(&self, email: &str) -> Result<Option<Usuario>, StoreError>;
}
