use crate::client::{Client, NO_BODY};
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::query::{QueryParams, ToQuery, collection_path, item_path, with_query};

use models::api_key::{ApiKey, CreateApiKeyRequest, CreatedApiKey, ListApiKeysOptions};
use models::{ListResponse, ResourceKind};

use reqwest::Method;

const KIND: ResourceKind = ResourceKind::ApiKey;

impl ToQuery for ListApiKeysOptions {
    fn write_query(&self, query: &mut QueryParams) {
        query
            .append_pagination(&self.pagination)
            .append_all("ids", &self.ids)
            .append_opt("api_key_name", self.api_key_name.as_deref());
    }
}

// API keys are immutable server-side: there is no update operation.
impl Client {
    /// Create a key. The returned [`CreatedApiKey::key`] is the only time the
    /// full secret is ever visible.
    ///
    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn create_api_key(
        &self,
        ctx: &RequestContext,
        request: &CreateApiKeyRequest,
    ) -> Result<CreatedApiKey, ClientError> {
        let body = CreateApiKeyRequest {
            org_name: self.org_name_or_default(request.org_name.as_deref()),
            ..request.clone()
        };
        self.execute(ctx, Method::POST, &collection_path(KIND), Some(&body))
            .await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn get_api_key(&self, ctx: &RequestContext, id: &str) -> Result<ApiKey, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn delete_api_key(&self, ctx: &RequestContext, id: &str) -> Result<(), ClientError> {
        let path = item_path(KIND, id)?;
        self.execute_no_content(ctx, Method::DELETE, &path, NO_BODY)
            .await
    }

    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn list_api_keys(
        &self,
        ctx: &RequestContext,
        options: &ListApiKeysOptions,
    ) -> Result<ListResponse<ApiKey>, ClientError> {
        let query = self.org_scoped_query(options, options.org_name.as_deref());
        let path = with_query(collection_path(KIND), &query);
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }
}
