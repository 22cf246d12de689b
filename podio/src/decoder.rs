//! Decodificador de items
//!
//! Lê o envelope do item (ID, título, arquivos, proveniência) de uma vez e
//! delega cada campo ao [`resolver`](crate::resolver), na ordem do documento.
//! Os fragmentos crus de cada campo são consumidos durante a resolução; nada
//! do documento original fica retido no [`Item`].
//!
//! ## Política de erros
//!
//! - [`ItemDecoder::decode_item`]: o primeiro campo com erro aborta o item inteiro
//! - [`ItemDecoder::decode_item_partial`]: erros de campo são coletados em
//!   [`PartialItem::errors`] e o campo é omitido (nunca substituído por default)
//! - Erros de envelope sempre abortam ([`DecodeError::MalformedEnvelope`])

use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::error::{DecodeError, Result};
use crate::resolver;
use crate::types::{App, ByLine, Field, FieldConfig, FieldData, File, Item, ItemList, Time, Via};

/// Profundidade padrão de items aninhados via campos `app`
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// O que fazer com tags de tipo fora da tabela
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFieldPolicy {
    /// Falha com [`DecodeError::UnknownFieldType`] (útil em testes para detectar mudanças na API)
    Strict,
    /// Mantém o payload opaco em [`FieldData::Unknown`]
    #[default]
    Lenient,
}

/// Opções do decodificador
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub unknown_types: UnknownFieldPolicy,
    /// Limite de items aninhados (o item raiz tem profundidade 0)
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            unknown_types: UnknownFieldPolicy::Lenient,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Opções com tags desconhecidas tratadas como erro
    pub fn strict() -> Self {
        Self {
            unknown_types: UnknownFieldPolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

// ==================== FORMATO CRU ====================

#[derive(Deserialize)]
struct RawFieldConfig {
    #[serde(default)]
    settings: JsonValue,

    #[serde(flatten)]
    meta: FieldConfig,
}

impl Default for RawFieldConfig {
    fn default() -> Self {
        Self {
            settings: JsonValue::Null,
            meta: FieldConfig::default(),
        }
    }
}

#[derive(Deserialize)]
struct RawField {
    field_id: i64,

    #[serde(default, deserialize_with = "crate::types::wire::null_as_default")]
    external_id: String,

    #[serde(rename = "type")]
    type_tag: String,

    #[serde(default, deserialize_with = "crate::types::wire::null_as_default")]
    label: String,

    #[serde(default)]
    values: JsonValue,

    #[serde(default, deserialize_with = "crate::types::wire::null_as_default")]
    config: RawFieldConfig,
}

#[derive(Deserialize)]
struct RawItem {
    item_id: i64,

    #[serde(default)]
    app_item_id: Option<i64>,

    #[serde(default)]
    app_item_id_formatted: Option<String>,

    #[serde(default, deserialize_with = "crate::types::wire::null_as_default")]
    title: String,

    #[serde(default)]
    link: Option<String>,

    #[serde(default)]
    app: Option<App>,

    #[serde(default, deserialize_with = "crate::types::wire::null_as_default")]
    revision: i64,

    #[serde(default)]
    created_on: Option<Time>,

    #[serde(default)]
    created_by: Option<ByLine>,

    #[serde(default)]
    created_via: Option<Via>,

    #[serde(default, deserialize_with = "crate::types::wire::null_as_default")]
    files: Vec<File>,

    #[serde(default, deserialize_with = "crate::types::wire::null_as_default")]
    fields: Vec<RawField>,
}

impl RawItem {
    /// Separa o envelope dos campos crus
    fn into_parts(self) -> (Item, Vec<RawField>) {
        let item = Item {
            id: self.item_id,
            app_item_id: self.app_item_id,
            app_item_id_formatted: self.app_item_id_formatted,
            title: self.title,
            link: self.link,
            app: self.app,
            revision: self.revision,
            created_on: self.created_on,
            created_by: self.created_by,
            created_via: self.created_via,
            files: self.files,
            fields: Vec::new(),
        };
        (item, self.fields)
    }
}

#[derive(Deserialize)]
struct RawItemList {
    #[serde(default, deserialize_with = "crate::types::wire::null_as_default")]
    filtered: u64,

    #[serde(default, deserialize_with = "crate::types::wire::null_as_default")]
    total: u64,

    #[serde(default, deserialize_with = "crate::types::wire::null_as_default")]
    items: Vec<JsonValue>,
}

// ==================== RESULTADO PARCIAL ====================

/// Erro de um campo no modo parcial
#[derive(Debug, Error)]
#[error("field #{position} '{external_id}' (field_id {field_id}): {error}")]
pub struct FieldError {
    /// Posição do campo no documento original
    pub position: usize,
    pub field_id: i64,
    pub external_id: String,
    #[source]
    pub error: DecodeError,
}

/// Item decodificado com os campos que falharam removidos
#[derive(Debug)]
pub struct PartialItem {
    pub item: Item,
    pub errors: Vec<FieldError>,
}

impl PartialItem {
    /// Nenhum campo falhou
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

// ==================== DECODER ====================

/// Decodificador de items do Podio
///
/// Sem estado mutável: pode ser compartilhado entre threads livremente.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemDecoder {
    options: DecodeOptions,
}

impl ItemDecoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodifica um item; o primeiro erro de campo aborta
    pub fn decode_item(&self, json: &str) -> Result<Item> {
        let raw: RawItem = serde_json::from_str(json).map_err(DecodeError::MalformedEnvelope)?;
        self.build_item(raw, 0)
    }

    /// Igual a [`decode_item`](Self::decode_item), a partir de um `serde_json::Value`
    pub fn decode_item_value(&self, value: JsonValue) -> Result<Item> {
        let raw: RawItem = serde_json::from_value(value).map_err(DecodeError::MalformedEnvelope)?;
        self.build_item(raw, 0)
    }

    /// Decodifica um item coletando erros de campo em vez de abortar
    pub fn decode_item_partial(&self, json: &str) -> Result<PartialItem> {
        let raw: RawItem = serde_json::from_str(json).map_err(DecodeError::MalformedEnvelope)?;
        let (mut item, raw_fields) = raw.into_parts();

        let mut errors = Vec::new();
        for (position, raw_field) in raw_fields.into_iter().enumerate() {
            let field_id = raw_field.field_id;
            let external_id = raw_field.external_id.clone();

            match self.resolve_field(raw_field, 0) {
                Ok(field) => item.fields.push(field),
                Err(error) => {
                    tracing::warn!(
                        "⚠️ Campo {} ('{}') do item {} ignorado: {}",
                        field_id,
                        external_id,
                        item.id,
                        error
                    );
                    errors.push(FieldError {
                        position,
                        field_id,
                        external_id,
                        error,
                    });
                }
            }
        }

        Ok(PartialItem { item, errors })
    }

    /// Decodifica o resultado do endpoint de filtro (`filtered`, `total`, `items`)
    pub fn decode_item_list(&self, json: &str) -> Result<ItemList> {
        let raw: RawItemList =
            serde_json::from_str(json).map_err(DecodeError::MalformedEnvelope)?;

        let items = raw
            .items
            .into_iter()
            .map(|value| self.decode_item_value(value))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "Lista decodificada: {} items (filtered {}, total {})",
            items.len(),
            raw.filtered,
            raw.total
        );

        Ok(ItemList {
            filtered: raw.filtered,
            total: raw.total,
            items,
        })
    }

    /// Resolve um campo isolado (tag + `values` + `config.settings`)
    pub fn resolve(
        &self,
        type_tag: &str,
        raw_values: JsonValue,
        raw_settings: JsonValue,
    ) -> Result<FieldData> {
        resolver::resolve(self, 0, type_tag, raw_values, raw_settings)
    }

    /// Item referenciado por um campo `app`
    ///
    /// Um envelope inválido aqui é erro do campo que o contém, não do item raiz.
    pub(crate) fn decode_nested(
        &self,
        value: JsonValue,
        depth: usize,
        type_tag: &str,
        schema: &'static str,
    ) -> Result<Item> {
        if depth > self.options.max_depth {
            return Err(DecodeError::RecursionLimit {
                max_depth: self.options.max_depth,
            });
        }

        let raw = match RawItem::deserialize(&value) {
            Ok(raw) => raw,
            Err(e) => {
                return Err(DecodeError::schema_mismatch(
                    type_tag,
                    schema,
                    value,
                    e.to_string(),
                ))
            }
        };

        self.build_item(raw, depth)
    }

    fn build_item(&self, raw: RawItem, depth: usize) -> Result<Item> {
        let (mut item, raw_fields) = raw.into_parts();
        item.fields = raw_fields
            .into_iter()
            .map(|raw_field| self.resolve_field(raw_field, depth))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "Item {} decodificado ({} campos, profundidade {})",
            item.id,
            item.fields.len(),
            depth
        );

        Ok(item)
    }

    fn resolve_field(&self, raw: RawField, depth: usize) -> Result<Field> {
        let RawField {
            field_id,
            external_id,
            type_tag,
            label,
            values,
            config,
        } = raw;

        let data = resolver::resolve(self, depth, &type_tag, values, config.settings)?;

        if data.is_unknown() {
            tracing::warn!(
                "⚠️ Tipo de campo desconhecido '{}' (field_id {}), payload mantido opaco",
                type_tag,
                field_id
            );
        }

        Ok(Field {
            id: field_id,
            external_id,
            label,
            config: config.meta,
            data,
        })
    }
}

/// Decodifica um item com as opções padrão (leniente, aborta no primeiro erro)
pub fn decode_item(json: &str) -> Result<Item> {
    ItemDecoder::default().decode_item(json)
}

/// Decodifica uma lista de items com as opções padrão
pub fn decode_item_list(json: &str) -> Result<ItemList> {
    ItemDecoder::default().decode_item_list(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const FIXTURE: &str = include_str!("../fixtures/item_225607452.json");

    fn time(text: &str) -> Option<Time> {
        Some(Time::parse(text).unwrap())
    }

    #[test]
    fn test_fixture_envelope() {
        let item = decode_item(FIXTURE).unwrap();

        assert_eq!(item.id(), 225607452);
        assert_eq!(item.app_item_id(), Some(1));
        assert_eq!(item.formatted_app_item_id(), Some("1"));
        assert_eq!(item.title(), "Title");
        assert_eq!(item.revision(), 3);
        assert_eq!(item.created_on(), time("2014-12-11 13:40:35"));
        assert_eq!(item.app().map(|app| app.id), Some(10362911));

        let created_by = item.created_by().unwrap();
        assert_eq!(created_by.name, "Brian Stengaard");
        assert_eq!(created_by.type_, "user");
        assert_eq!(created_by.last_seen_on, time("2014-12-10 15:26:35"));
        assert_eq!(item.created_via().map(|via| via.name.as_str()), Some("Podio"));

        assert_eq!(item.files().len(), 1);
        assert_eq!(item.files()[0].name, "report.pdf");
        assert_eq!(item.files()[0].size, 52841);
    }

    #[test]
    fn test_fixture_field_values_and_settings() {
        let item = decode_item(FIXTURE).unwrap();
        let fields = item.fields();
        assert_eq!(fields.len(), 8);

        assert_eq!(
            fields[0].data(),
            &FieldData::Text {
                values: vec![TextValue {
                    value: "Title".to_string()
                }],
                settings: Some(TextSettings {
                    format: "plain".to_string(),
                    size: "small".to_string(),
                }),
            }
        );
        assert_eq!(fields[0].external_id(), "title");
        assert!(fields[0].config().required);

        let option = |text: &str, id: i64| CategoryOption {
            status: "active".to_string(),
            text: text.to_string(),
            id,
            color: "DCEBD8".to_string(),
        };
        assert_eq!(
            fields[1].data(),
            &FieldData::Category {
                values: vec![CategoryValue {
                    value: option("B", 2)
                }],
                settings: Some(CategorySettings {
                    multiple: false,
                    display: "inline".to_string(),
                    options: vec![option("A", 1), option("B", 2), option("C", 3)],
                }),
            }
        );

        match fields[2].data() {
            FieldData::Date { values, settings } => {
                assert_eq!(values[0].start, time("2014-12-11 22:00:00"));
                assert!(values[0].is_open_ended());
                assert_eq!(
                    settings,
                    &Some(DateSettings {
                        calendar: true,
                        end: "enabled".to_string(),
                        time: "enabled".to_string(),
                    })
                );
            }
            other => panic!("Expected Date variant, got {:?}", other),
        }

        match fields[3].data() {
            FieldData::Contact { values, settings } => {
                let contact = &values[0].value;
                assert_eq!(contact.user_id, Some(2468975));
                assert_eq!(contact.profile_id, 140798621);
                assert_eq!(contact.name, "Brian Stengaard");
                assert_eq!(contact.image.as_ref().map(|f| f.id), Some(125807791));
                assert_eq!(contact.last_seen_on, time("2014-12-10 15:26:35"));
                assert_eq!(settings.as_ref().map(|s| s.type_.as_str()), Some("space_users"));
            }
            other => panic!("Expected Contact variant, got {:?}", other),
        }

        assert_eq!(
            fields[4].data(),
            &FieldData::Number {
                values: vec![NumberValue { value: 6513.51 }],
                settings: Some(NumberSettings { decimals: 0 }),
            }
        );

        assert_eq!(
            fields[5].data(),
            &FieldData::Money {
                values: vec![MoneyValue {
                    value: 541.987,
                    currency: "EUR".to_string()
                }],
                settings: Some(MoneySettings {
                    allowed_currencies: vec!["USD".to_string(), "EUR".to_string()],
                }),
            }
        );

        match fields[6].data() {
            FieldData::Embed { values } => {
                assert_eq!(values[0].embed.id, 55017316);
                assert_eq!(values[0].embed.hostname, "google.com");
                assert_eq!(values[0].embed.embed_html, "");
                assert!(values[0].file.is_none());
            }
            other => panic!("Expected Embed variant, got {:?}", other),
        }

        match fields[7].data() {
            FieldData::App { values, settings } => {
                let nested = &values[0].value;
                assert_eq!(nested.id(), 1);
                assert_eq!(nested.title(), "Referenced");
                assert_eq!(nested.fields().len(), 1);
                assert_eq!(nested.fields()[0].type_tag(), "progress");
                assert!(settings.as_ref().unwrap().allows_app(10362912));
            }
            other => panic!("Expected App variant, got {:?}", other),
        }
    }

    #[test]
    fn test_re_encoded_item_decodes_to_equal_item() {
        let item = decode_item(FIXTURE).unwrap();
        let encoded = serde_json::to_value(&item).unwrap();
        let again = ItemDecoder::default().decode_item_value(encoded).unwrap();
        assert_eq!(again, item);
    }

    #[test]
    fn test_field_order_is_preserved_for_all_variants() {
        let mut types = FieldType::ALL.to_vec();
        // permutação determinística: intercala fim e começo
        let mut permuted = Vec::new();
        while !types.is_empty() {
            permuted.push(types.remove(types.len() - 1));
            if !types.is_empty() {
                permuted.push(types.remove(0));
            }
        }

        let fields: Vec<JsonValue> = permuted
            .iter()
            .enumerate()
            .map(|(i, field_type)| {
                json!({
                    "field_id": 100 + i,
                    "external_id": format!("f-{}", i),
                    "type": field_type.as_str(),
                    "label": field_type.as_str(),
                    "values": crate::resolver::tests::minimal_values(*field_type),
                })
            })
            .collect();
        let document = json!({"item_id": 5, "title": "Todos", "fields": fields}).to_string();

        let item = ItemDecoder::new(DecodeOptions::strict())
            .decode_item(&document)
            .unwrap();
        let decoded: Vec<FieldType> = item.fields().iter().filter_map(|f| f.field_type()).collect();
        assert_eq!(decoded, permuted);

        let ids: Vec<i64> = item.fields().iter().map(|f| f.id()).collect();
        let expected: Vec<i64> = (100..100 + permuted.len() as i64).collect();
        assert_eq!(ids, expected);
    }

    fn document_with_unknown_field() -> String {
        json!({
            "item_id": 42,
            "title": "Drift",
            "fields": [
                {"field_id": 1, "external_id": "a", "type": "text", "label": "A",
                 "values": [{"value": "x"}]},
                {"field_id": 2, "external_id": "b", "type": "frobnicate", "label": "B",
                 "config": {"settings": {"mode": 3}}, "values": [{"value": {"k": "v"}}]},
                {"field_id": 3, "external_id": "c", "type": "progress", "label": "C",
                 "values": [{"value": 10}]}
            ]
        })
        .to_string()
    }

    #[test]
    fn test_unknown_type_strict_mode_fails() {
        let result =
            ItemDecoder::new(DecodeOptions::strict()).decode_item(&document_with_unknown_field());
        match result {
            Err(DecodeError::UnknownFieldType { type_tag }) => assert_eq!(type_tag, "frobnicate"),
            other => panic!("Expected UnknownFieldType, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_lenient_mode_round_trips() {
        let item = decode_item(&document_with_unknown_field()).unwrap();
        assert_eq!(item.fields().len(), 3);

        let opaque = &item.fields()[1];
        assert_eq!(opaque.type_tag(), "frobnicate");
        assert_eq!(opaque.field_type(), None);

        let encoded = serde_json::to_value(opaque).unwrap();
        assert_eq!(encoded["values"], json!([{"value": {"k": "v"}}]));
        assert_eq!(encoded["config"]["settings"], json!({"mode": 3}));

        let again = ItemDecoder::default()
            .decode_item_value(serde_json::to_value(&item).unwrap())
            .unwrap();
        assert_eq!(again, item);
    }

    fn document_with_bad_field() -> String {
        json!({
            "item_id": 7,
            "fields": [
                {"field_id": 1, "external_id": "ok-1", "type": "text", "label": "A",
                 "values": [{"value": "x"}]},
                {"field_id": 2, "external_id": "bad", "type": "number", "label": "B",
                 "values": [{"value": "12,5"}]},
                {"field_id": 3, "external_id": "ok-2", "type": "duration", "label": "C",
                 "values": [{"value": 60}]}
            ]
        })
        .to_string()
    }

    #[test]
    fn test_bad_field_aborts_whole_item_by_default() {
        match decode_item(&document_with_bad_field()) {
            Err(DecodeError::SchemaMismatch {
                type_tag,
                schema,
                fragment,
                ..
            }) => {
                assert_eq!(type_tag, "number");
                assert_eq!(schema, "NumberValue");
                assert_eq!(fragment, json!([{"value": "12,5"}]));
            }
            other => panic!("Expected SchemaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_mode_collects_errors_and_omits_field() {
        let partial = ItemDecoder::default()
            .decode_item_partial(&document_with_bad_field())
            .unwrap();

        assert!(!partial.is_complete());
        assert_eq!(partial.errors.len(), 1);
        assert_eq!(partial.errors[0].position, 1);
        assert_eq!(partial.errors[0].field_id, 2);
        assert_eq!(partial.errors[0].external_id, "bad");
        assert!(matches!(partial.errors[0].error, DecodeError::SchemaMismatch { .. }));

        let ids: Vec<&str> = partial.item.fields().iter().map(|f| f.external_id()).collect();
        assert_eq!(ids, vec!["ok-1", "ok-2"]);
        assert!(partial.item.field(2).is_none());
    }

    #[test]
    fn test_partial_mode_on_clean_item_is_complete() {
        let partial = ItemDecoder::default().decode_item_partial(FIXTURE).unwrap();
        assert!(partial.is_complete());
        assert_eq!(partial.item, decode_item(FIXTURE).unwrap());
    }

    #[test]
    fn test_malformed_envelope() {
        assert!(matches!(
            decode_item(r#"{"title": "sem id"}"#),
            Err(DecodeError::MalformedEnvelope(_))
        ));
        assert!(matches!(
            decode_item("not json"),
            Err(DecodeError::MalformedEnvelope(_))
        ));
        assert!(matches!(
            decode_item(r#"{"item_id": 1, "fields": [{"field_id": 1}]}"#),
            Err(DecodeError::MalformedEnvelope(_))
        ));
        // timestamp inválido no envelope
        match decode_item(r#"{"item_id": 1, "created_on": "11/12/2014"}"#) {
            Err(DecodeError::MalformedEnvelope(e)) => assert!(e.to_string().contains("11/12/2014")),
            other => panic!("Expected MalformedEnvelope, got {:?}", other),
        }
    }

    #[test]
    fn test_null_time_string_in_envelope() {
        let item = decode_item(r#"{"item_id": 1, "created_on": "null"}"#).unwrap();
        assert_eq!(item.created_on(), Some(Time::NULL));
    }

    #[test]
    fn test_nested_app_envelope_error_is_field_error() {
        let document = json!({
            "item_id": 1,
            "fields": [
                {"field_id": 9, "type": "app", "label": "Ref",
                 "values": [{"value": {"title": "no id"}}]}
            ]
        })
        .to_string();
        match decode_item(&document) {
            Err(DecodeError::SchemaMismatch { type_tag, fragment, .. }) => {
                assert_eq!(type_tag, "app");
                assert_eq!(fragment, json!({"title": "no id"}));
            }
            other => panic!("Expected SchemaMismatch, got {:?}", other),
        }
    }

    fn nested_chain(levels: usize) -> JsonValue {
        let mut item = json!({"item_id": levels});
        for level in (0..levels).rev() {
            item = json!({
                "item_id": level,
                "fields": [
                    {"field_id": 1, "type": "app", "label": "Ref", "values": [{"value": item}]}
                ]
            });
        }
        item
    }

    #[test]
    fn test_recursion_depth_is_bounded() {
        let decoder = ItemDecoder::new(DecodeOptions::default().with_max_depth(3));

        assert!(decoder.decode_item_value(nested_chain(3)).is_ok());
        match decoder.decode_item_value(nested_chain(4)) {
            Err(DecodeError::RecursionLimit { max_depth }) => assert_eq!(max_depth, 3),
            other => panic!("Expected RecursionLimit, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_item_list() {
        let document = json!({
            "filtered": 2,
            "total": 10,
            "items": [{"item_id": 1, "title": "A"}, {"item_id": 2, "title": "B", "fields": null}]
        })
        .to_string();

        let list = decode_item_list(&document).unwrap();
        assert_eq!(list.filtered, 2);
        assert_eq!(list.total, 10);
        let titles: Vec<&str> = list.items.iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_decoder_is_shareable_across_threads() {
        let decoder = ItemDecoder::default();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || decoder.decode_item(FIXTURE).map(|i| i.id())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 225607452);
        }
    }
}
