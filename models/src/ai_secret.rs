use crate::Pagination;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Provider credential stored server-side. Only `preview_secret` is ever read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSecret {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub org_id: Option<String>,
    #[serde(default, rename = "type")]
    pub secret_type: Option<String>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default)]
    pub preview_secret: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Default, PartialEq, Serialize)]
pub struct CreateAiSecretRequest {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub secret_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
}

#[derive(Clone, Default, PartialEq, Serialize)]
pub struct UpdateAiSecretRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub secret_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl std::fmt::Debug for CreateAiSecretRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAiSecretRequest")
            .field("name", &self.name)
            .field("secret_type", &self.secret_type)
            .field("metadata", &self.metadata)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("org_name", &self.org_name)
            .finish()
    }
}

impl std::fmt::Debug for UpdateAiSecretRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateAiSecretRequest")
            .field("name", &self.name)
            .field("secret_type", &self.secret_type)
            .field("metadata", &self.metadata)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAiSecretsOptions {
    pub pagination: Pagination,
    pub ids: Vec<String>,
    pub ai_secret_name: Option<String>,
    /// Multi-valued: one repeated `ai_secret_type` key per entry.
    pub ai_secret_type: Vec<String>,
    pub org_name: Option<String>,
}
