//! Tipos de erro para o crate podio

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Erros de decodificação de items do Podio
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Documento não tem o formato de um item (JSON inválido, `item_id` ausente, ...)
    #[error("malformed item envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),

    /// Payload de um campo não corresponde ao schema do seu tipo
    #[error("field type '{type_tag}' does not match schema {schema}: {reason}")]
    SchemaMismatch {
        type_tag: String,
        schema: &'static str,
        fragment: JsonValue,
        reason: String,
    },

    /// Tipo de campo desconhecido (apenas em modo estrito)
    #[error("unknown field type '{type_tag}'")]
    UnknownFieldType { type_tag: String },

    /// Timestamp fora do layout "YYYY-MM-DD HH:MM:SS" e diferente de "null"
    #[error("invalid Podio timestamp '{input}': {reason}")]
    TimeFormat {
        input: String,
        reason: String,
        /// Erro do chrono, quando o texto passou na checagem de layout
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// Items aninhados (campos "app") além da profundidade permitida
    #[error("nested item depth exceeds limit of {max_depth}")]
    RecursionLimit { max_depth: usize },
}

impl DecodeError {
    pub(crate) fn schema_mismatch(
        type_tag: &str,
        schema: &'static str,
        fragment: JsonValue,
        reason: impl Into<String>,
    ) -> Self {
        Self::SchemaMismatch {
            type_tag: type_tag.to_string(),
            schema,
            fragment,
            reason: reason.into(),
        }
    }

    /// Tipo de campo associado ao erro, quando houver
    pub fn type_tag(&self) -> Option<&str> {
        match self {
            Self::SchemaMismatch { type_tag, .. } | Self::UnknownFieldType { type_tag } => {
                Some(type_tag)
            }
            _ => None,
        }
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, DecodeError>;
