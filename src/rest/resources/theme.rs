//! Theme resource.
//!
//! Themes have no count endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::ListOptions;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// Where a theme is used.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ThemeRole {
    /// The published theme.
    Main,
    Unpublished,
    Demo,
    Development,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ThemeRole>,
    /// Archive to create the theme from. Only accepted on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previewable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_store_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Theme {
    type FindParams = ThemeFindParams;
    type AllParams = ThemeListParams;
    type CountParams = ();

    const NAME: &'static str = "Theme";
    const KEY: &'static str = "theme";
    const PLURAL: &'static str = "themes";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::standard(ResourceOperation::Find, &["id"], "themes/{id}"),
        ResourcePath::standard(ResourceOperation::All, &[], "themes"),
        ResourcePath::standard(ResourceOperation::Create, &[], "themes"),
        ResourcePath::standard(ResourceOperation::Update, &["id"], "themes/{id}"),
        ResourcePath::standard(ResourceOperation::Delete, &["id"], "themes/{id}"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ThemeFindParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for listing themes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ThemeListParams {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ThemeRole>,
}

impl From<ListOptions> for ThemeListParams {
    fn from(list: ListOptions) -> Self {
        Self { list, role: None }
    }
}
