//! Resumo do app ao qual um item pertence

use serde::{Deserialize, Serialize};

/// App do Podio (visão "micro", como vem embutida no item)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    #[serde(rename = "app_id")]
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// "active", "inactive", "deleted"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Nome singular dos items do app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
