//! Tipos do Podio
//!
//! Este módulo contém as estruturas de dados type-safe de um item do Podio:
//!
//! - **Item**: envelope (ID, título, arquivos, proveniência) + campos
//! - **Field / FieldData**: campo com valores tipados pela tag `type`
//! - **FieldType**: tabela de variantes (19 tipos conhecidos)
//! - **Time**: formato de data do Podio
//!
//! ## ⚠️ Notas Importantes
//!
//! - **Timestamps**: texto `YYYY-MM-DD HH:MM:SS`, sempre UTC, e às vezes a string `"null"`
//! - **number/money**: decimais transmitidos como STRING
//! - **location**: `lat`/`lng` podem vir como número ou string
//! - **tel**: valor legado pode vir como inteiro

pub mod app;
pub mod byline;
pub mod contact;
pub mod embed;
pub mod field;
pub mod field_type;
pub mod file;
pub mod item;
pub mod settings;
pub mod time;
pub mod values;
pub(crate) mod wire;

// Re-exports principais para facilitar uso
pub use app::App;
pub use byline::{ByLine, Via};
pub use contact::Contact;
pub use embed::Embed;
pub use field::{Field, FieldConfig, FieldData, OpaqueField};
pub use field_type::{FieldType, VariantSchema};
pub use file::File;
pub use item::{Item, ItemList};
pub use settings::*;
pub use time::Time;
pub use values::*;
