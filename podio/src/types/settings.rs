//! `config.settings` de cada tipo de campo
//!
//! Apenas alguns tipos possuem configuração própria (ver tabela em
//! [`FieldType::schema`](super::FieldType::schema)). Todas as structs aceitam
//! chaves ausentes ou `null`, usando o valor default.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::{App, CategoryOption};

/// Settings de `text`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    /// "plain", "html", "plain_text"
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub format: String,

    /// "small" (uma linha) ou "large"
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub size: String,
}

/// Settings de `number`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberSettings {
    /// Casas decimais exibidas
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub decimals: i64,
}

/// Settings de `money`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneySettings {
    /// Moedas permitidas (códigos ISO)
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub allowed_currencies: Vec<String>,
}

/// Settings de `date`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateSettings {
    /// Mostrar no calendário
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub calendar: bool,

    /// Data final: "enabled", "disabled" ou "required"
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub end: String,

    /// Horário: "enabled", "disabled" ou "required"
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub time: String,
}

impl DateSettings {
    pub fn end_enabled(&self) -> bool {
        self.end != "disabled" && !self.end.is_empty()
    }

    pub fn time_enabled(&self) -> bool {
        self.time != "disabled" && !self.time.is_empty()
    }
}

/// Settings de `category`: lista completa de opções
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySettings {
    /// Permite selecionar várias opções
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub multiple: bool,

    /// "inline", "list", "dropdown"
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub display: String,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub options: Vec<CategoryOption>,
}

impl CategorySettings {
    /// Busca a opção pelo ID numérico
    pub fn option(&self, id: i64) -> Option<&CategoryOption> {
        self.options.iter().find(|option| option.id == id)
    }
}

/// App que pode ser referenciado por um campo `app`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferencedApp {
    pub app_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<App>,
}

/// Settings de `app`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub multiple: bool,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub referenced_apps: Vec<ReferencedApp>,
}

impl AppSettings {
    pub fn allows_app(&self, app_id: i64) -> bool {
        self.referenced_apps.iter().any(|app| app.app_id == app_id)
    }
}

/// Settings de `contact`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    /// "space_users", "all_users", "space_contacts", "space_users_and_contacts"
    #[serde(rename = "type", deserialize_with = "crate::types::wire::null_as_default")]
    pub type_: String,
}

/// Settings de `location`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationSettings {
    /// Endereço dividido em partes (rua, cidade, ...)
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub structured: bool,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub has_map: bool,
}

/// Settings de `duration`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationSettings {
    /// Unidades exibidas: "days", "hours", "minutes", "seconds"
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub fields: Vec<String>,
}

/// Resposta possível de um campo `question`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionOption {
    pub id: i64,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Settings de `question`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionSettings {
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub multiple: bool,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub options: Vec<QuestionOption>,
}

/// Settings de `tel` (legado)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TelSettings {
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub possible_types: Vec<String>,
}

/// Settings de `phone`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneSettings {
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub possible_types: Vec<String>,

    /// "tel", "callto", "skype", ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_link_scheme: Option<String>,
}

/// Settings de `email`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub possible_types: Vec<String>,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub include_in_cc: bool,
}

/// Settings de `calculation`
///
/// O cliente só guarda o script/expressão; o cálculo é feito no servidor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationSettings {
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub script: String,

    /// Árvore da expressão, formato interno da plataforma
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<JsonValue>,

    /// "number", "date", "text"
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub return_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<i64>,

    /// Para retorno "date": "enabled"/"disabled"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}
