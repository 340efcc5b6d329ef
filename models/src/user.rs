use crate::Pagination;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
}

/// Name and email filters are multi-valued and rendered as repeated keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUsersOptions {
    pub pagination: Pagination,
    pub ids: Vec<String>,
    pub given_name: Vec<String>,
    pub family_name: Vec<String>,
    pub email: Vec<String>,
    pub org_name: Option<String>,
}
