//! Arquivos anexados (items, imagens de contatos, campos image/embed)

use serde::{Deserialize, Serialize};

/// Representa um arquivo hospedado no Podio
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    /// ID do arquivo
    #[serde(rename = "file_id")]
    pub id: i64,

    /// Nome do arquivo
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub name: String,

    /// URL do arquivo
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub link: String,

    /// Tamanho em bytes
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub size: i64,

    /// MIME type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Serviço que hospeda o arquivo ("podio", "google", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub perma_link: Option<String>,
}
