pub mod empresas;
pub mod login;
