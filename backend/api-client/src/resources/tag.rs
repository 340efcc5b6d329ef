use crate::client::{Client, NO_BODY};
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::query::{QueryParams, ToQuery, collection_path, item_path, require_id, with_query};

use models::tag::{CreateTagRequest, ListTagsOptions, Tag, UpdateTagRequest};
use models::{ListResponse, ResourceKind};

use reqwest::Method;

const KIND: ResourceKind = ResourceKind::Tag;

impl ToQuery for ListTagsOptions {
    fn write_query(&self, query: &mut QueryParams) {
        query
            .append_pagination(&self.pagination)
            .append_all("ids", &self.ids)
            .append_opt("project_tag_name", self.project_tag_name.as_deref())
            .append_opt("project_id", self.project_id.as_deref())
            .append_opt("project_name", self.project_name.as_deref());
    }
}

impl Client {
    /// # Errors
    /// [`ClientError::EmptyIdentifier`] (project) for a blank project ID,
    /// otherwise any pipeline error.
    pub async fn create_tag(
        &self,
        ctx: &RequestContext,
        request: &CreateTagRequest,
    ) -> Result<Tag, ClientError> {
        require_id(ResourceKind::Project, &request.project_id)?;
        self.execute(ctx, Method::POST, &collection_path(KIND), Some(request))
            .await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn get_tag(&self, ctx: &RequestContext, id: &str) -> Result<Tag, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn update_tag(
        &self,
        ctx: &RequestContext,
        id: &str,
        request: &UpdateTagRequest,
    ) -> Result<Tag, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::PATCH, &path, Some(request)).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn delete_tag(&self, ctx: &RequestContext, id: &str) -> Result<(), ClientError> {
        let path = item_path(KIND, id)?;
        self.execute_no_content(ctx, Method::DELETE, &path, NO_BODY)
            .await
    }

    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn list_tags(
        &self,
        ctx: &RequestContext,
        options: &ListTagsOptions,
    ) -> Result<ListResponse<Tag>, ClientError> {
        let query = self.org_scoped_query(options, options.org_name.as_deref());
        let path = with_query(collection_path(KIND), &query);
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }
}
