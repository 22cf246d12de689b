//! Contatos (usuários do Podio ou contatos de space)

use serde::{Deserialize, Serialize};

use super::{File, Time};

/// Representa um contato do Podio
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<i64>,

    /// "user" ou "space"
    #[serde(rename = "type", deserialize_with = "crate::types::wire::null_as_default")]
    pub type_: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<File>,

    pub profile_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub link: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<i64>,

    /// Pode vir como `null` ou como a string `"null"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_on: Option<Time>,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Vec<String>>,
}
