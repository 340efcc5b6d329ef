use crate::Pagination;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A saved UI view over some object (experiments list, logs, dataset, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub id: String,
    pub object_type: String,
    pub object_id: String,
    pub name: String,
    #[serde(default)]
    pub view_type: Option<String>,
    #[serde(default)]
    pub view_data: Option<Value>,
    #[serde(default)]
    pub options: Option<Value>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

/// Object a view is attached to. Views are only addressable together with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewScope {
    pub object_type: String,
    pub object_id: String,
}

impl ViewScope {
    pub fn new(object_type: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            object_id: object_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateViewRequest {
    pub object_type: String,
    pub object_id: String,
    pub view_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// `object_type` and `object_id` are filled in from the [`ViewScope`] passed
/// to the update call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateViewRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListViewsOptions {
    pub pagination: Pagination,
    pub scope: ViewScope,
    pub ids: Vec<String>,
    pub view_name: Option<String>,
    pub view_type: Option<String>,
}
