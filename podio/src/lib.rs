//! Decodificador tipado de items do Podio
//!
//! Um item do Podio traz uma lista heterogênea de campos: o formato de `values`
//! e de `config.settings` depende da tag `type` de cada campo. Este crate
//! transforma o JSON de um item (já obtido pela camada HTTP) em um [`Item`]
//! fortemente tipado, onde cada campo é um [`FieldData`] com a variante correta.
//!
//! # Fluxo
//!
//! 1. [`ItemDecoder`] lê o envelope (ID, título, arquivos, proveniência)
//! 2. Cada campo é resolvido pela tabela de variantes ([`FieldType`])
//! 3. Campos `app` embutem items completos, decodificados recursivamente
//! 4. Datas passam pelo codec [`Time`] (`YYYY-MM-DD HH:MM:SS`, UTC, ou `"null"`)
//!
//! # Exemplo Básico
//!
//! ```rust
//! use podio::{DecodeOptions, FieldData, ItemDecoder};
//!
//! let json = r#"{
//!     "item_id": 1,
//!     "title": "Pedido",
//!     "fields": [
//!         {"field_id": 10, "external_id": "total", "type": "money", "label": "Total",
//!          "values": [{"value": "541.9870", "currency": "EUR"}]}
//!     ]
//! }"#;
//!
//! let item = ItemDecoder::new(DecodeOptions::strict()).decode_item(json)?;
//! match item.field_by_external_id("total").map(|f| f.data()) {
//!     Some(FieldData::Money { values, .. }) => assert_eq!(values[0].currency, "EUR"),
//!     other => panic!("campo inesperado: {:?}", other),
//! }
//! # Ok::<(), podio::DecodeError>(())
//! ```
//!
//! ## Tipos desconhecidos
//!
//! Por padrão o decodificador é leniente: uma tag fora da tabela vira
//! [`FieldData::Unknown`] com o payload intacto. Com [`DecodeOptions::strict`]
//! a mesma tag gera [`DecodeError::UnknownFieldType`].

// Módulos públicos
pub mod decoder;
pub mod error;
pub mod types;

mod resolver;

// Re-exports principais
pub use decoder::{
    decode_item, decode_item_list, DecodeOptions, FieldError, ItemDecoder, PartialItem,
    UnknownFieldPolicy, DEFAULT_MAX_DEPTH,
};
pub use error::{DecodeError, Result};

// Re-exports de types para conveniência
pub use types::{Field, FieldConfig, FieldData, FieldType, Item, ItemList, OpaqueField, Time};
