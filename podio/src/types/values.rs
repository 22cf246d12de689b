//! Elementos de `values` de cada tipo de campo
//!
//! Cada tipo de campo do Podio tem um formato próprio para os elementos de
//! `values`. O tipo do elemento é determinado apenas pela tag `type` do campo
//! (ver [`FieldType`](super::FieldType)).
//!
//! ⚠️ IMPORTANTE: `number` e `money` chegam como STRING decimal (`"6513.5100"`)
//! e são convertidos para `f64`; na serialização voltam a ser string.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::{Contact, Embed, File, Item, Time};

// ==================== TEXT ====================

/// Campo `text`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub value: String,
}

// ==================== NÚMEROS ====================

/// Campo `number` (decimal transmitido como string)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberValue {
    #[serde(
        deserialize_with = "crate::types::wire::decimal",
        serialize_with = "crate::types::wire::decimal_as_string"
    )]
    pub value: f64,
}

/// Campo `money`: valor decimal + código ISO da moeda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyValue {
    #[serde(
        deserialize_with = "crate::types::wire::decimal",
        serialize_with = "crate::types::wire::decimal_as_string"
    )]
    pub value: f64,

    pub currency: String,
}

// Campos cujo valor é um inteiro puro: `{"value": 42}`
macro_rules! integer_value {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
            pub struct $name {
                pub value: i64,
            }
        )+
    };
}

integer_value!(
    /// Campo `member` (ID do membro)
    MemberValue,
    /// Campo `progress` (0 a 100)
    ProgressValue,
    /// Campo `video` (ID do vídeo)
    VideoValue,
    /// Campo `duration` (segundos)
    DurationValue,
    /// Campo `question` (ID da resposta)
    QuestionValue,
);

// ==================== DATA ====================

/// Campo `date`: intervalo início/fim; sem `end` = intervalo aberto
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Time>,

    // Partes separadas que a API também envia (data e hora locais do app)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl DateValue {
    /// Intervalo sem fim definido
    pub fn is_open_ended(&self) -> bool {
        self.end.map_or(true, |end| end.is_null())
    }
}

// ==================== SELEÇÃO ====================

/// Opção de um campo `category`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryOption {
    /// "active" ou "deleted"
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub status: String,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub text: String,

    pub id: i64,

    /// Cor em hex sem `#` (e.g. "DCEBD8")
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub color: String,
}

/// Campo `category`: a opção selecionada
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub value: CategoryOption,
}

// ==================== RELACIONAMENTOS ====================

/// Campo `app`: referência a outro item (decodificado recursivamente)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppValue {
    pub value: Item,
}

/// Campo `contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactValue {
    pub value: Contact,
}

// ==================== ARQUIVOS ====================

/// Campo `image`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageValue {
    pub value: File,
}

/// Campo `embed`: metadados do link + arquivo de preview (quando houver)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedValue {
    pub embed: Embed,

    #[serde(default)]
    pub file: Option<File>,
}

// ==================== LOCALIZAÇÃO ====================

/// Campo `location`
///
/// ⚠️ `lat`/`lng` chegam ora como número, ora como string; ambos viram `f64`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationValue {
    /// Endereço como digitado
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub value: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(
        deserialize_with = "crate::types::wire::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub lat: Option<f64>,

    #[serde(
        deserialize_with = "crate::types::wire::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub lng: Option<f64>,
}

// ==================== CONTATO DIRETO ====================

/// Campo `tel` (legado): o valor já veio como inteiro, hoje vem como string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelValue {
    #[serde(deserialize_with = "crate::types::wire::text_or_number")]
    pub value: String,

    /// "work", "home", "mobile", ...
    #[serde(rename = "type", default, deserialize_with = "crate::types::wire::null_as_default")]
    pub type_: String,
}

/// Campo `phone`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneValue {
    #[serde(deserialize_with = "crate::types::wire::text_or_number")]
    pub value: String,

    /// "mobile", "work", "home", "main", "work_fax", "private_fax", "other"
    #[serde(rename = "type", default, deserialize_with = "crate::types::wire::null_as_default")]
    pub type_: String,
}

/// Campo `email`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailValue {
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub value: String,

    /// "work", "home", "other"
    #[serde(rename = "type", default, deserialize_with = "crate::types::wire::null_as_default")]
    pub type_: String,
}

// ==================== CALCULADO ====================

/// Campo `calculation`: resultado atual calculado pelo servidor
///
/// O script nunca é reavaliado no cliente. Resultados numéricos/texto vêm em
/// `value`; resultados de data vêm em `start`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<JsonValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Time>,
}

impl CalculationValue {
    /// Resultado numérico (aceita número ou string decimal)
    pub fn as_f64(&self) -> Option<f64> {
        match self.value.as_ref()? {
            JsonValue::Number(n) => n.as_f64(),
            JsonValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Resultado textual
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_ref()?.as_str()
    }
}
