pub mod empresa_service;
pub mod incidente_service;

pub use empresa_service::EmpresaService;
pub use incidente_service::IncidenteService;
