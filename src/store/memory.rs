use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::auth;
use crate::domain::{Empresa, Incidente, NivelPerigo, Status, Usuario};

use super::{EmpresaStore, IncidenteStore, StoreError, UsuarioStore};

/// In-memory backing store. A single instance holds all three record types
/// behind one lock; handlers share it through `Arc`.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    empresas: Vec<Empresa>,
    incidentes: Vec<Incidente>,
    usuarios: Vec<Usuario>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new(empresas: Vec<Empresa>, incidentes: Vec<Incidente>, usuarios: Vec<Usuario>) -> Self {
        let next_id = incidentes.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner {
                empresas,
                incidentes,
                usuarios,
                next_id,
            }),
        }
    }

    /// Store preloaded with the reference fixture data: three companies,
    /// eight incidents, two login accounts.
    pub fn seeded() -> Self {
        let empresas = vec![
            empresa("05014725000152", "Texaco", false),
            empresa("03021302000134", "Tal Transportes", false),
            empresa("69855137000124", "Petrobras", true),
        ];

        let incidentes = vec![
            incidente(
                1,
                "05014725000152",
                NivelPerigo::Warning,
                "Curto-circuito no painel da doca 3",
                dt(2020, 11, 2, 8, 15, 0),
                Status::Aberto,
                None,
            ),
            incidente(
                2,
                "05014725000152",
                NivelPerigo::Safe,
                "Vistoria de rotina concluída sem ocorrências",
                dt(2020, 11, 10, 14, 30, 0),
                Status::Resolvido,
                Some(dt(2020, 11, 11, 9, 0, 0)),
            ),
            incidente(
                3,
                "05014725000152",
                NivelPerigo::Warning,
                "Vazamento de combustível contido na bomba 2",
                dt(2020, 11, 18, 10, 45, 0),
                Status::Aberto,
                None,
            ),
            incidente(
                4,
                "05014725000152",
                NivelPerigo::Danger,
                "Superaquecimento no tanque de armazenamento 7",
                dt(2020, 11, 25, 16, 20, 0),
                Status::Resolvido,
                Some(dt(2020, 11, 26, 8, 0, 0)),
            ),
            incidente(
                5,
                "05014725000152",
                NivelPerigo::Safe,
                "Treinamento da brigada encerrado",
                dt(2020, 12, 1, 11, 0, 0),
                Status::Aberto,
                None,
            ),
            incidente(
                6,
                "03021302000134",
                NivelPerigo::Warning,
                "Vazamento de óleo no setor 4",
                dt(2020, 12, 5, 9, 30, 0),
                Status::Aberto,
                None,
            ),
            incidente(
                7,
                "03021302000134",
                NivelPerigo::Danger,
                "Container rachado no pier 76",
                dt(2020, 12, 10, 15, 10, 0),
                Status::Aberto,
                None,
            ),
            incidente(
                8,
                "69855137000124",
                NivelPerigo::Danger,
                "Foco de incendio!!!",
                dt(2020, 12, 15, 18, 45, 0),
                Status::Aberto,
                None,
            ),
        ];

        let usuarios = vec![
            usuario("zecantor@texaco.com", "senha", "05014725000152"),
            usuario("pattyr@tal.br", "senha", "03021302000134"),
        ];

        Self::new(empresas, incidentes, usuarios)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl EmpresaStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Empresa>, StoreError> {
        Ok(self.read()?.empresas.clone())
    }

    async fn get(&self, cnpj: &str) -> Result<Option<Empresa>, StoreError> {
        Ok(self.read()?.empresas.iter().find(|e| e.cnpj == cnpj).cloned())
    }

    async fn favorita(&self) -> Result<Option<Empresa>, StoreError> {
        Ok(self.read()?.empresas.iter().find(|e| e.favorita).cloned())
    }
}

#[async_trait]
impl IncidenteStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Incidente>, StoreError> {
        Ok(self.read()?.incidentes.clone())
    }

    async fn list_by_empresa(&self, cnpj: &str) -> Result<Vec<Incidente>, StoreError> {
        Ok(self
            .read()?
            .incidentes
            .iter()
            .filter(|i| i.cnpj_empresa == cnpj)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Incidente>, StoreError> {
        Ok(self.read()?.incidentes.iter().find(|i| i.id == id).cloned())
    }

    async fn insert(&self, mut incidente: Incidente) -> Result<Incidente, StoreError> {
        let mut inner = self.write()?;
        incidente.id = inner.next_id;
        inner.next_id += 1;
        inner.incidentes.push(incidente.clone());
        Ok(incidente)
    }

    async fn update(&self, incidente: Incidente) -> Result<Incidente, StoreError> {
        let mut inner = self.write()?;
        let slot = inner
            .incidentes
            .iter_mut()
            .find(|i| i.id == incidente.id)
            .ok_or(StoreError::IncidenteNotFound(incidente.id))?;
        *slot = incidente.clone();
        Ok(incidente)
    }
}

#[async_trait]
impl UsuarioStore for MemoryStore {
    async fn get_by_email(&self, email: &str) -> Result<Option<Usuario>, StoreError> {
        Ok(self
            .read()?
            .usuarios
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

fn empresa(cnpj: &str, fantasia: &str, favorita: bool) -> Empresa {
    Empresa {
        cnpj: cnpj.to_string(),
        fantasia: fantasia.to_string(),
        favorita,
    }
}

#[allow(clippy::too_many_arguments)]
fn incidente(
    id: i64,
    cnpj: &str,
    nivel_perigo: NivelPerigo,
    comentario: &str,
    data: NaiveDateTime,
    status: Status,
    data_resolucao: Option<NaiveDateTime>,
) -> Incidente {
    Incidente {
        id,
        cnpj_empresa: cnpj.to_string(),
        nivel_perigo,
        comentario: comentario.to_string(),
        data,
        status,
        data_resolucao,
    }
}

fn usuario(email: &str, senha: &str, cnpj: &str) -> Usuario {
    Usuario {
        email: email.to_string(),
        senha_sha256: auth::sha256_hex(senha),
        cnpj_empresa: cnpj.to_string(),
    }
}

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    // Seed constants only; the literals are known-valid.
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .expect("valid seed timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_matches_fixture_shape() {
        let store = MemoryStore::seeded();

        let empresas = EmpresaStore::list(&store).await.unwrap();
        assert_eq!(empresas.len(), 3);
        assert_eq!(empresas[0].cnpj, "05014725000152");
        assert_eq!(empresas[2].cnpj, "69855137000124");

        let incidentes = IncidenteStore::list(&store).await.unwrap();
        assert_eq!(incidentes.len(), 8);
        assert_eq!(incidentes[0].cnpj_empresa, "05014725000152");
        assert_eq!(incidentes[5].cnpj_empresa, "03021302000134");
    }

    #[tokio::test]
    async fn favorita_is_petrobras() {
        let store = MemoryStore::seeded();
        let favorita = store.favorita().await.unwrap().unwrap();
        assert_eq!(favorita.cnpj, "69855137000124");
        assert_eq!(favorita.fantasia, "Petrobras");
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = MemoryStore::seeded();
        let novo = incidente(
            0,
            "05014725000152",
            NivelPerigo::Danger,
            "Explosão de tubulação no setor 5",
            dt(2020, 12, 26, 19, 2, 37),
            Status::Aberto,
            None,
        );

        let stored = store.insert(novo).await.unwrap();
        assert_eq!(stored.id, 9);

        let incidentes = IncidenteStore::list(&store).await.unwrap();
        assert_eq!(incidentes.len(), 9);
    }

    #[tokio::test]
    async fn list_by_empresa_preserves_insertion_order() {
        let store = MemoryStore::seeded();
        let tal = store.list_by_empresa("03021302000134").await.unwrap();
        assert_eq!(tal.len(), 2);
        assert_eq!(tal[0].comentario, "Vazamento de óleo no setor 4");
        assert_eq!(tal[1].comentario, "Container rachado no pier 76");
    }

    #[tokio::test]
    async fn update_unknown_id_errors() {
        let store = MemoryStore::seeded();
        let missing = incidente(
            99,
            "05014725000152",
            NivelPerigo::Safe,
            "não existe",
            dt(2020, 1, 1, 0, 0, 0),
            Status::Aberto,
            None,
        );
        let err = store.update(missing).await.unwrap_err();
        assert!(matches!(err, StoreError::IncidenteNotFound(99)));
    }
}
