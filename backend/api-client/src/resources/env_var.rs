use crate::client::{Client, NO_BODY};
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::query::{QueryParams, ToQuery, collection_path, item_path, require_id, with_query};

use models::env_var::{CreateEnvVarRequest, EnvVar, ListEnvVarsOptions, UpdateEnvVarRequest};
use models::{ListResponse, ResourceKind};

use reqwest::Method;

const KIND: ResourceKind = ResourceKind::EnvVar;

impl ToQuery for ListEnvVarsOptions {
    fn write_query(&self, query: &mut QueryParams) {
        query
            .append_pagination(&self.pagination)
            .append_all("ids", &self.ids)
            .append_opt("object_type", self.object_type.as_deref())
            .append_opt("object_id", self.object_id.as_deref())
            .append_opt("env_var_name", self.env_var_name.as_deref());
    }
}

impl Client {
    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `object_id`, otherwise any
    /// pipeline error.
    pub async fn create_env_var(
        &self,
        ctx: &RequestContext,
        request: &CreateEnvVarRequest,
    ) -> Result<EnvVar, ClientError> {
        require_id(KIND, &request.object_id)?;
        self.execute(ctx, Method::POST, &collection_path(KIND), Some(request))
            .await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn get_env_var(&self, ctx: &RequestContext, id: &str) -> Result<EnvVar, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn update_env_var(
        &self,
        ctx: &RequestContext,
        id: &str,
        request: &UpdateEnvVarRequest,
    ) -> Result<EnvVar, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::PATCH, &path, Some(request)).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn delete_env_var(&self, ctx: &RequestContext, id: &str) -> Result<(), ClientError> {
        let path = item_path(KIND, id)?;
        self.execute_no_content(ctx, Method::DELETE, &path, NO_BODY)
            .await
    }

    /// Environment variables are scoped by object, not organization, so no
    /// default `org_name` is applied.
    ///
    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn list_env_vars(
        &self,
        ctx: &RequestContext,
        options: &ListEnvVarsOptions,
    ) -> Result<ListResponse<EnvVar>, ClientError> {
        let path = with_query(collection_path(KIND), &options.to_query());
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }
}
