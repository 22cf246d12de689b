//! Tipos de campo do Podio e a tabela de variantes
//!
//! A tag `type` de cada campo escolhe o schema dos elementos de `values` e,
//! quando existe, o schema de `config.settings`. A tabela é o `match`
//! exaustivo em [`FieldType::schema`]: um tipo novo não compila sem entrada.

use serde::{Deserialize, Serialize};

/// Tipos de campo conhecidos (19 tags emitidas pela API)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Money,
    Date,
    Category,
    /// Referência a items de outro app
    App,
    Contact,
    Image,
    Member,
    Progress,
    Location,
    Video,
    Duration,
    Embed,
    Question,
    /// Telefone (variante legada)
    Tel,
    Calculation,
    Phone,
    Email,
}

/// Entrada da tabela de variantes: nome dos schemas de valor e de settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSchema {
    pub value_schema: &'static str,
    pub settings_schema: Option<&'static str>,
}

impl VariantSchema {
    const fn new(value_schema: &'static str, settings_schema: Option<&'static str>) -> Self {
        Self {
            value_schema,
            settings_schema,
        }
    }
}

impl FieldType {
    /// Todos os tipos conhecidos, na ordem da documentação da API
    pub const ALL: [FieldType; 19] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Money,
        FieldType::Date,
        FieldType::Category,
        FieldType::App,
        FieldType::Contact,
        FieldType::Image,
        FieldType::Member,
        FieldType::Progress,
        FieldType::Location,
        FieldType::Video,
        FieldType::Duration,
        FieldType::Embed,
        FieldType::Question,
        FieldType::Tel,
        FieldType::Calculation,
        FieldType::Phone,
        FieldType::Email,
    ];

    /// Busca o tipo pela tag da API; `None` para tags desconhecidas
    pub fn from_tag(tag: &str) -> Option<Self> {
        let field_type = match tag {
            "text" => FieldType::Text,
            "number" => FieldType::Number,
            "money" => FieldType::Money,
            "date" => FieldType::Date,
            "category" => FieldType::Category,
            "app" => FieldType::App,
            "contact" => FieldType::Contact,
            "image" => FieldType::Image,
            "member" => FieldType::Member,
            "progress" => FieldType::Progress,
            "location" => FieldType::Location,
            "video" => FieldType::Video,
            "duration" => FieldType::Duration,
            "embed" => FieldType::Embed,
            "question" => FieldType::Question,
            "tel" => FieldType::Tel,
            "calculation" => FieldType::Calculation,
            "phone" => FieldType::Phone,
            "email" => FieldType::Email,
            _ => return None,
        };
        Some(field_type)
    }

    /// Tag usada pela API
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Money => "money",
            FieldType::Date => "date",
            FieldType::Category => "category",
            FieldType::App => "app",
            FieldType::Contact => "contact",
            FieldType::Image => "image",
            FieldType::Member => "member",
            FieldType::Progress => "progress",
            FieldType::Location => "location",
            FieldType::Video => "video",
            FieldType::Duration => "duration",
            FieldType::Embed => "embed",
            FieldType::Question => "question",
            FieldType::Tel => "tel",
            FieldType::Calculation => "calculation",
            FieldType::Phone => "phone",
            FieldType::Email => "email",
        }
    }

    /// Tabela de variantes: schema do valor e (opcional) schema de settings
    pub fn schema(&self) -> VariantSchema {
        match self {
            FieldType::Text => VariantSchema::new("TextValue", Some("TextSettings")),
            FieldType::Number => VariantSchema::new("NumberValue", Some("NumberSettings")),
            FieldType::Money => VariantSchema::new("MoneyValue", Some("MoneySettings")),
            FieldType::Date => VariantSchema::new("DateValue", Some("DateSettings")),
            FieldType::Category => VariantSchema::new("CategoryValue", Some("CategorySettings")),
            FieldType::App => VariantSchema::new("AppValue", Some("AppSettings")),
            FieldType::Contact => VariantSchema::new("ContactValue", Some("ContactSettings")),
            FieldType::Image => VariantSchema::new("ImageValue", None),
            FieldType::Member => VariantSchema::new("MemberValue", None),
            FieldType::Progress => VariantSchema::new("ProgressValue", None),
            FieldType::Location => VariantSchema::new("LocationValue", Some("LocationSettings")),
            FieldType::Video => VariantSchema::new("VideoValue", None),
            FieldType::Duration => VariantSchema::new("DurationValue", Some("DurationSettings")),
            FieldType::Embed => VariantSchema::new("EmbedValue", None),
            FieldType::Question => VariantSchema::new("QuestionValue", Some("QuestionSettings")),
            FieldType::Tel => VariantSchema::new("TelValue", Some("TelSettings")),
            FieldType::Calculation => {
                VariantSchema::new("CalculationValue", Some("CalculationSettings"))
            }
            FieldType::Phone => VariantSchema::new("PhoneValue", Some("PhoneSettings")),
            FieldType::Email => VariantSchema::new("EmailValue", Some("EmailSettings")),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
