use serde::{Deserialize, Serialize};

/// A login account tied to one company. Passwords are stored as sha-256 hex
/// digests; the plaintext never leaves the login handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub email: String,
    pub senha_sha256: String,
    pub cnpj_empresa: String,
}
