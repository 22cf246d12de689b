//! Proveniência de objetos do Podio: quem criou (ByLine) e por onde (Via)

use serde::{Deserialize, Serialize};

use super::{File, Time};

/// Autor de um objeto do Podio (usuário ou app)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ByLine {
    pub id: i64,

    /// "user", "app", ...
    #[serde(rename = "type", deserialize_with = "crate::types::wire::null_as_default")]
    pub type_: String,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<File>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_on: Option<Time>,

    /// Obsoleto na API, mantido porque ainda aparece nos payloads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<i64>,
}

/// Origem (cliente/integração) que criou o objeto
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Via {
    pub id: i64,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub display: bool,
}
