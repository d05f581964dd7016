pub mod empresa;
pub mod incidente;
pub mod usuario;

pub use empresa::{Empresa, EmpresaDto, EmpresaFavoritaDto};
pub use incidente::{Incidente, IncidenteUpdate, NivelPerigo, NovoIncidente, Status};
pub use usuario::Usuario;

/// Wire format for all timestamps: `YYYY/MM/DD HH:MM:SS`.
pub const DATA_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Serde adapter for required `NaiveDateTime` fields in the wire format.
pub mod data_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::DATA_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(DATA_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, DATA_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional timestamp fields. Absent and `null` both map to
/// `None`; combine with `#[serde(default)]` so missing keys deserialize.
pub mod data_format_opt {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::DATA_FORMAT;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format(DATA_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => NaiveDateTime::parse_from_str(&raw, DATA_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
