use crate::Pagination;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPermission {
    pub permission: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrict_object_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
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
    pub member_permissions: Vec<MemberPermission>,
    #[serde(default)]
    pub member_roles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub member_permissions: Vec<MemberPermission>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub member_roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add_member_permissions: Vec<MemberPermission>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remove_member_permissions: Vec<MemberPermission>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add_member_roles: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remove_member_roles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRolesOptions {
    pub pagination: Pagination,
    pub ids: Vec<String>,
    pub role_name: Option<String>,
    pub org_name: Option<String>,
}
