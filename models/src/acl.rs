use crate::Pagination;

use serde::{Deserialize, Serialize};

/// Grants either a permission or a role on one object to one user or group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acl {
    pub id: String,
    pub object_type: String,
    pub object_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub permission: Option<String>,
    #[serde(default)]
    pub restrict_object_type: Option<String>,
    #[serde(default)]
    pub role_id: Option<String>,
    #[serde(default, rename = "_object_org_id")]
    pub object_org_id: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAclRequest {
    pub object_type: String,
    pub object_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_object_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
}

/// The server requires both `object_type` and `object_id` for ACL listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAclsOptions {
    pub pagination: Pagination,
    pub object_type: String,
    pub object_id: String,
    pub ids: Vec<String>,
}
