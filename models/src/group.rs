use crate::Pagination;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub org_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub member_users: Vec<String>,
    #[serde(default)]
    pub member_groups: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateGroupRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub member_users: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub member_groups: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
}

/// Membership changes are expressed as deltas, not full replacement lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add_member_users: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remove_member_users: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add_member_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remove_member_groups: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListGroupsOptions {
    pub pagination: Pagination,
    pub ids: Vec<String>,
    pub group_name: Option<String>,
    pub org_name: Option<String>,
}
