//! Metadados de links embutidos (campo "embed")

use serde::{Deserialize, Serialize};

/// Representa um embed do Podio (link resolvido pelo servidor)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Embed {
    #[serde(rename = "embed_id")]
    pub id: i64,

    /// "link", "image", "video", "rich", ...
    #[serde(rename = "type", deserialize_with = "crate::types::wire::null_as_default")]
    pub type_: String,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub title: String,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub description: String,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub embed_html: String,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub url: String,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub original_url: String,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub resolved_url: String,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub hostname: String,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub embed_height: i64,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub embed_width: i64,
}
