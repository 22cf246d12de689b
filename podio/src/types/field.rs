//! Campos de um item
//!
//! Um [`Field`] guarda metadados (ID, external_id, label, config) e um
//! [`FieldData`]: a variante tipada escolhida pela tag `type`, com os valores
//! e, para os tipos que têm, os settings.

use serde::ser::{Error as _, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value as JsonValue;

use super::settings::*;
use super::values::*;
use super::FieldType;

/// Metadados de `config` (exceto `settings`, que vai para [`FieldData`])
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub required: bool,

    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub hidden: bool,

    /// Oculto na tela de criação/edição
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub hidden_create_view_edit: bool,

    /// Versão/posição da configuração do campo no app
    #[serde(deserialize_with = "crate::types::wire::null_as_default")]
    pub delta: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Campo de tipo desconhecido, preservado sem interpretação
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueField {
    pub type_tag: String,
    pub values: JsonValue,
    pub settings: Option<JsonValue>,
}

/// Valores (e settings) tipados de um campo
#[derive(Debug, Clone, PartialEq)]
pub enum FieldData {
    Text {
        values: Vec<TextValue>,
        settings: Option<TextSettings>,
    },
    Number {
        values: Vec<NumberValue>,
        settings: Option<NumberSettings>,
    },
    Money {
        values: Vec<MoneyValue>,
        settings: Option<MoneySettings>,
    },
    Date {
        values: Vec<DateValue>,
        settings: Option<DateSettings>,
    },
    Category {
        values: Vec<CategoryValue>,
        settings: Option<CategorySettings>,
    },
    App {
        values: Vec<AppValue>,
        settings: Option<AppSettings>,
    },
    Contact {
        values: Vec<ContactValue>,
        settings: Option<ContactSettings>,
    },
    Image {
        values: Vec<ImageValue>,
    },
    Member {
        values: Vec<MemberValue>,
    },
    Progress {
        values: Vec<ProgressValue>,
    },
    Location {
        values: Vec<LocationValue>,
        settings: Option<LocationSettings>,
    },
    Video {
        values: Vec<VideoValue>,
    },
    Duration {
        values: Vec<DurationValue>,
        settings: Option<DurationSettings>,
    },
    Embed {
        values: Vec<EmbedValue>,
    },
    Question {
        values: Vec<QuestionValue>,
        settings: Option<QuestionSettings>,
    },
    Tel {
        values: Vec<TelValue>,
        settings: Option<TelSettings>,
    },
    Calculation {
        values: Vec<CalculationValue>,
        settings: Option<CalculationSettings>,
    },
    Phone {
        values: Vec<PhoneValue>,
        settings: Option<PhoneSettings>,
    },
    Email {
        values: Vec<EmailValue>,
        settings: Option<EmailSettings>,
    },
    /// Tag fora da tabela (modo leniente)
    Unknown(OpaqueField),
}

fn encode<V: Serialize, S: Serialize>(
    values: &[V],
    settings: Option<&S>,
) -> serde_json::Result<(JsonValue, Option<JsonValue>)> {
    Ok((
        serde_json::to_value(values)?,
        settings.map(serde_json::to_value).transpose()?,
    ))
}

fn encode_values<V: Serialize>(values: &[V]) -> serde_json::Result<(JsonValue, Option<JsonValue>)> {
    Ok((serde_json::to_value(values)?, None))
}

impl FieldData {
    /// Tipo conhecido da variante; `None` para [`FieldData::Unknown`]
    pub fn field_type(&self) -> Option<FieldType> {
        let field_type = match self {
            FieldData::Text { .. } => FieldType::Text,
            FieldData::Number { .. } => FieldType::Number,
            FieldData::Money { .. } => FieldType::Money,
            FieldData::Date { .. } => FieldType::Date,
            FieldData::Category { .. } => FieldType::Category,
            FieldData::App { .. } => FieldType::App,
            FieldData::Contact { .. } => FieldType::Contact,
            FieldData::Image { .. } => FieldType::Image,
            FieldData::Member { .. } => FieldType::Member,
            FieldData::Progress { .. } => FieldType::Progress,
            FieldData::Location { .. } => FieldType::Location,
            FieldData::Video { .. } => FieldType::Video,
            FieldData::Duration { .. } => FieldType::Duration,
            FieldData::Embed { .. } => FieldType::Embed,
            FieldData::Question { .. } => FieldType::Question,
            FieldData::Tel { .. } => FieldType::Tel,
            FieldData::Calculation { .. } => FieldType::Calculation,
            FieldData::Phone { .. } => FieldType::Phone,
            FieldData::Email { .. } => FieldType::Email,
            FieldData::Unknown(_) => return None,
        };
        Some(field_type)
    }

    /// Tag `type` como veio da API
    pub fn type_tag(&self) -> &str {
        match self {
            FieldData::Unknown(opaque) => &opaque.type_tag,
            known => known.field_type().map_or("", |t| t.as_str()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, FieldData::Unknown(_))
    }

    /// Reconstrói os fragmentos `values` e `config.settings` no formato da API
    pub fn to_json(&self) -> serde_json::Result<(JsonValue, Option<JsonValue>)> {
        match self {
            FieldData::Text { values, settings } => encode(values, settings.as_ref()),
            FieldData::Number { values, settings } => encode(values, settings.as_ref()),
            FieldData::Money { values, settings } => encode(values, settings.as_ref()),
            FieldData::Date { values, settings } => encode(values, settings.as_ref()),
            FieldData::Category { values, settings } => encode(values, settings.as_ref()),
            FieldData::App { values, settings } => encode(values, settings.as_ref()),
            FieldData::Contact { values, settings } => encode(values, settings.as_ref()),
            FieldData::Image { values } => encode_values(values),
            FieldData::Member { values } => encode_values(values),
            FieldData::Progress { values } => encode_values(values),
            FieldData::Location { values, settings } => encode(values, settings.as_ref()),
            FieldData::Video { values } => encode_values(values),
            FieldData::Duration { values, settings } => encode(values, settings.as_ref()),
            FieldData::Embed { values } => encode_values(values),
            FieldData::Question { values, settings } => encode(values, settings.as_ref()),
            FieldData::Tel { values, settings } => encode(values, settings.as_ref()),
            FieldData::Calculation { values, settings } => encode(values, settings.as_ref()),
            FieldData::Phone { values, settings } => encode(values, settings.as_ref()),
            FieldData::Email { values, settings } => encode(values, settings.as_ref()),
            FieldData::Unknown(opaque) => Ok((opaque.values.clone(), opaque.settings.clone())),
        }
    }
}

/// Campo de um item (imutável após a decodificação)
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub(crate) id: i64,
    pub(crate) external_id: String,
    pub(crate) label: String,
    pub(crate) config: FieldConfig,
    pub(crate) data: FieldData,
}

impl Field {
    /// `field_id` numérico
    pub fn id(&self) -> i64 {
        self.id
    }

    /// ID legível definido no app (e.g. "titulo", "valor-total")
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn data(&self) -> &FieldData {
        &self.data
    }

    pub fn field_type(&self) -> Option<FieldType> {
        self.data.field_type()
    }

    pub fn type_tag(&self) -> &str {
        self.data.type_tag()
    }

    /// Consome o campo devolvendo os dados tipados
    pub fn into_data(self) -> FieldData {
        self.data
    }
}

#[derive(Serialize)]
struct ConfigOut<'a> {
    settings: Option<JsonValue>,
    #[serde(flatten)]
    meta: &'a FieldConfig,
}

impl Serialize for Field {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let (values, settings) = self.data.to_json().map_err(S::Error::custom)?;

        let mut state = serializer.serialize_struct("Field", 6)?;
        state.serialize_field("field_id", &self.id)?;
        state.serialize_field("external_id", &self.external_id)?;
        state.serialize_field("type", self.type_tag())?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field(
            "config",
            &ConfigOut {
                settings,
                meta: &self.config,
            },
        )?;
        state.serialize_field("values", &values)?;
        state.end()
    }
}
