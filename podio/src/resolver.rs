//! Resolução de variantes: tag `type` + fragmentos crus → [`FieldData`]
//!
//! Fluxo para cada campo:
//! 1. Busca a tag na tabela ([`FieldType::from_tag`])
//! 2. Decodifica `values` como lista do schema de valor da variante
//! 3. Decodifica `config.settings` quando a variante declara settings
//! 4. Tag desconhecida: erro (modo estrito) ou [`OpaqueField`] (modo leniente)
//!
//! Campos `app` embutem items completos, então este módulo e o
//! [`decoder`](crate::decoder) são mutuamente recursivos.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::decoder::{ItemDecoder, UnknownFieldPolicy};
use crate::error::{DecodeError, Result};
use crate::types::{
    AppValue, CategorySettings, CategoryValue, FieldData, FieldType, OpaqueField, VariantSchema,
};

/// Decodifica `values` como `Vec<T>`; `null` = lista vazia
fn values<T: DeserializeOwned>(
    type_tag: &str,
    schema: VariantSchema,
    raw: &JsonValue,
) -> Result<Vec<T>> {
    if raw.is_null() {
        return Ok(Vec::new());
    }

    Vec::<T>::deserialize(raw).map_err(|e| {
        DecodeError::schema_mismatch(type_tag, schema.value_schema, raw.clone(), e.to_string())
    })
}

/// Decodifica `settings` como `T`; `null` = sem settings
fn settings<T: DeserializeOwned>(
    type_tag: &str,
    schema: VariantSchema,
    raw: &JsonValue,
) -> Result<Option<T>> {
    let Some(settings_schema) = schema.settings_schema else {
        return Ok(None);
    };
    if raw.is_null() {
        return Ok(None);
    }

    T::deserialize(raw).map(Some).map_err(|e| {
        DecodeError::schema_mismatch(type_tag, settings_schema, raw.clone(), e.to_string())
    })
}

#[derive(Deserialize)]
struct RawAppValue {
    value: JsonValue,
}

/// Items referenciados: cada `value` passa de novo pelo decoder de items
fn app_values(
    decoder: &ItemDecoder,
    depth: usize,
    type_tag: &str,
    schema: VariantSchema,
    raw: &JsonValue,
) -> Result<Vec<AppValue>> {
    let raw_values: Vec<RawAppValue> = values(type_tag, schema, raw)?;

    raw_values
        .into_iter()
        .map(|raw_value| {
            decoder
                .decode_nested(raw_value.value, depth + 1, type_tag, schema.value_schema)
                .map(|value| AppValue { value })
        })
        .collect()
}

/// Toda opção selecionada precisa existir em `settings.options`
///
/// `raw` é o fragmento `values` original; o elemento ofensor vai no erro.
fn check_category_options(
    type_tag: &str,
    schema: VariantSchema,
    values: &[CategoryValue],
    settings: Option<&CategorySettings>,
    raw: &JsonValue,
) -> Result<()> {
    let Some(settings) = settings else {
        return Ok(());
    };

    for (index, selected) in values.iter().enumerate() {
        if settings.option(selected.value.id).is_none() {
            let fragment = raw.get(index).cloned().unwrap_or_else(|| raw.clone());
            return Err(DecodeError::schema_mismatch(
                type_tag,
                schema.value_schema,
                fragment,
                format!(
                    "option id {} is not present in settings.options",
                    selected.value.id
                ),
            ));
        }
    }

    Ok(())
}

/// Resolve um campo; `depth` é a profundidade do item que contém o campo
pub(crate) fn resolve(
    decoder: &ItemDecoder,
    depth: usize,
    type_tag: &str,
    raw_values: JsonValue,
    raw_settings: JsonValue,
) -> Result<FieldData> {
    let Some(field_type) = FieldType::from_tag(type_tag) else {
        return match decoder.options().unknown_types {
            UnknownFieldPolicy::Strict => Err(DecodeError::UnknownFieldType {
                type_tag: type_tag.to_string(),
            }),
            UnknownFieldPolicy::Lenient => Ok(FieldData::Unknown(OpaqueField {
                type_tag: type_tag.to_string(),
                values: raw_values,
                settings: (!raw_settings.is_null()).then_some(raw_settings),
            })),
        };
    };

    let schema = field_type.schema();
    let tag = type_tag;

    let data = match field_type {
        FieldType::Text => FieldData::Text {
            values: values(tag, schema, &raw_values)?,
            settings: settings(tag, schema, &raw_settings)?,
        },
        FieldType::Number => FieldData::Number {
            values: values(tag, schema, &raw_values)?,
            settings: settings(tag, schema, &raw_settings)?,
        },
        FieldType::Money => FieldData::Money {
            values: values(tag, schema, &raw_values)?,
            settings: settings(tag, schema, &raw_settings)?,
        },
        FieldType::Date => FieldData::Date {
            values: values(tag, schema, &raw_values)?,
            settings: settings(tag, schema, &raw_settings)?,
        },
        FieldType::Category => {
            let values: Vec<CategoryValue> = values(tag, schema, &raw_values)?;
            let settings: Option<CategorySettings> = settings(tag, schema, &raw_settings)?;
            check_category_options(tag, schema, &values, settings.as_ref(), &raw_values)?;
            FieldData::Category { values, settings }
        }
        FieldType::App => FieldData::App {
            values: app_values(decoder, depth, tag, schema, &raw_values)?,
            settings: settings(tag, schema, &raw_settings)?,
        },
        FieldType::Contact => FieldData::Contact {
            values: values(tag, schema, &raw_values)?,
            settings: settings(tag, schema, &raw_settings)?,
        },
        FieldType::Image => FieldData::Image {
            values: values(tag, schema, &raw_values)?,
        },
        FieldType::Member => FieldData::Member {
            values: values(tag, schema, &raw_values)?,
        },
        FieldType::Progress => FieldData::Progress {
            values: values(tag, schema, &raw_values)?,
        },
        FieldType::Location => FieldData::Location {
            values: values(tag, schema, &raw_values)?,
            settings: settings(tag, schema, &raw_settings)?,
        },
        FieldType::Video => FieldData::Video {
            values: values(tag, schema, &raw_values)?,
        },
        FieldType::Duration => FieldData::Duration {
            values: values(tag, schema, &raw_values)?,
            settings: settings(tag, schema, &raw_settings)?,
        },
        FieldType::Embed => FieldData::Embed {
            values: values(tag, schema, &raw_values)?,
        },
        FieldType::Question => FieldData::Question {
            values: values(tag, schema, &raw_values)?,
            settings: settings(tag, schema, &raw_settings)?,
        },
        FieldType::Tel => FieldData::Tel {
            values: values(tag, schema, &raw_values)?,
            settings: settings(tag, schema, &raw_settings)?,
        },
        FieldType::Calculation => FieldData::Calculation {
            values: values(tag, schema, &raw_values)?,
            settings: settings(tag, schema, &raw_settings)?,
        },
        FieldType::Phone => FieldData::Phone {
            values: values(tag, schema, &raw_values)?,
            settings: settings(tag, schema, &raw_settings)?,
        },
        FieldType::Email => FieldData::Email {
            values: values(tag, schema, &raw_values)?,
            settings: settings(tag, schema, &raw_settings)?,
        },
    };

    Ok(data)
}
