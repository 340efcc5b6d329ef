use crate::client::{Client, NO_BODY};
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::query::{QueryParams, ToQuery, collection_path, item_path, with_query};

use models::ai_secret::{
    AiSecret, CreateAiSecretRequest, ListAiSecretsOptions, UpdateAiSecretRequest,
};
use models::{ListResponse, ResourceKind};

use reqwest::Method;

const KIND: ResourceKind = ResourceKind::AiSecret;

impl ToQuery for ListAiSecretsOptions {
    fn write_query(&self, query: &mut QueryParams) {
        query
            .append_pagination(&self.pagination)
            .append_all("ids", &self.ids)
            .append_opt("ai_secret_name", self.ai_secret_name.as_deref())
            .append_all("ai_secret_type", &self.ai_secret_type);
    }
}

impl Client {
    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn create_ai_secret(
        &self,
        ctx: &RequestContext,
        request: &CreateAiSecretRequest,
    ) -> Result<AiSecret, ClientError> {
        let body = CreateAiSecretRequest {
            org_name: self.org_name_or_default(request.org_name.as_deref()),
            ..request.clone()
        };
        self.execute(ctx, Method::POST, &collection_path(KIND), Some(&body))
            .await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn get_ai_secret(
        &self,
        ctx: &RequestContext,
        id: &str,
    ) -> Result<AiSecret, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn update_ai_secret(
        &self,
        ctx: &RequestContext,
        id: &str,
        request: &UpdateAiSecretRequest,
    ) -> Result<AiSecret, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::PATCH, &path, Some(request)).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn delete_ai_secret(&self, ctx: &RequestContext, id: &str) -> Result<(), ClientError> {
        let path = item_path(KIND, id)?;
        self.execute_no_content(ctx, Method::DELETE, &path, NO_BODY)
            .await
    }

    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn list_ai_secrets(
        &self,
        ctx: &RequestContext,
        options: &ListAiSecretsOptions,
    ) -> Result<ListResponse<AiSecret>, ClientError> {
        let query = self.org_scoped_query(options, options.org_name.as_deref());
        let path = with_query(collection_path(KIND), &query);
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }
}
