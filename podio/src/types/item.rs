//! Item do Podio (registro de um app)
//!
//! Um item é construído uma vez pelo [`ItemDecoder`](crate::ItemDecoder) e não
//! tem caminho de mutação: os campos são expostos apenas por referência.

use serde::Serialize;

use super::{App, ByLine, Field, FieldType, File, Time, Via};

/// Item decodificado
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    // ==================== IDENTIFICAÇÃO ====================
    #[serde(rename = "item_id")]
    pub(crate) id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) app_item_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) app_item_id_formatted: Option<String>,

    pub(crate) title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) app: Option<App>,

    // ==================== PROVENIÊNCIA ====================
    /// Contador de revisões
    pub(crate) revision: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) created_on: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) created_by: Option<ByLine>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) created_via: Option<Via>,

    // ==================== CONTEÚDO ====================
    pub(crate) files: Vec<File>,

    /// Na mesma ordem em que vieram no documento
    pub(crate) fields: Vec<Field>,
}

impl Item {
    /// `item_id` atribuído pela plataforma
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Número sequencial do item dentro do app
    pub fn app_item_id(&self) -> Option<i64> {
        self.app_item_id
    }

    pub fn formatted_app_item_id(&self) -> Option<&str> {
        self.app_item_id_formatted.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn app(&self) -> Option<&App> {
        self.app.as_ref()
    }

    pub fn revision(&self) -> i64 {
        self.revision
    }

    pub fn created_on(&self) -> Option<Time> {
        self.created_on
    }

    pub fn created_by(&self) -> Option<&ByLine> {
        self.created_by.as_ref()
    }

    pub fn created_via(&self) -> Option<&Via> {
        self.created_via.as_ref()
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Busca campo pelo `field_id`
    pub fn field(&self, field_id: i64) -> Option<&Field> {
        self.fields.iter().find(|field| field.id() == field_id)
    }

    /// Busca campo pelo `external_id`
    pub fn field_by_external_id(&self, external_id: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.external_id() == external_id)
    }

    /// Campos de um tipo específico, na ordem do documento
    pub fn fields_of_type(&self, field_type: FieldType) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(move |field| field.field_type() == Some(field_type))
    }
}

/// Resultado do endpoint de filtro de items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemList {
    /// Quantidade de items que passaram no filtro
    pub filtered: u64,

    /// Total de items no app
    pub total: u64,

    pub items: Vec<Item>,
}
