//! URL redirect resource.

use serde::{Deserialize, Serialize};

use crate::clients::ListOptions;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A redirect from an old storefront path to a new location.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Redirect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// The old path, e.g. `/ipod`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// A path or a full URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl RestResource for Redirect {
    type FindParams = RedirectFindParams;
    type AllParams = RedirectListParams;
    type CountParams = RedirectCountParams;

    const NAME: &'static str = "Redirect";
    const KEY: &'static str = "redirect";
    const PLURAL: &'static str = "redirects";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::standard(ResourceOperation::Find, &["id"], "redirects/{id}"),
        ResourcePath::standard(ResourceOperation::All, &[], "redirects"),
        ResourcePath::standard(ResourceOperation::Count, &[], "redirects/count"),
        ResourcePath::standard(ResourceOperation::Create, &[], "redirects"),
        ResourcePath::standard(ResourceOperation::Update, &["id"], "redirects/{id}"),
        ResourcePath::standard(ResourceOperation::Delete, &["id"], "redirects/{id}"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RedirectFindParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for listing redirects.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RedirectListParams {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl From<ListOptions> for RedirectListParams {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RedirectCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}
