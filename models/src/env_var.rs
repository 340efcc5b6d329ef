use crate::Pagination;

use serde::{Deserialize, Serialize};

/// Environment variable scoped to an organization, project or function.
///
/// The value is write-only; the server never returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub id: String,
    pub object_type: String,
    pub object_id: String,
    pub name: String,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub used: Option<String>,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateEnvVarRequest {
    pub object_type: String,
    pub object_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateEnvVarRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl std::fmt::Debug for CreateEnvVarRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateEnvVarRequest")
            .field("object_type", &self.object_type)
            .field("object_id", &self.object_id)
            .field("name", &self.name)
            .field("value", &self.value.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl std::fmt::Debug for UpdateEnvVarRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateEnvVarRequest")
            .field("name", &self.name)
            .field("value", &self.value.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEnvVarsOptions {
    pub pagination: Pagination,
    pub ids: Vec<String>,
    pub object_type: Option<String>,
    pub object_id: Option<String>,
    pub env_var_name: Option<String>,
}
