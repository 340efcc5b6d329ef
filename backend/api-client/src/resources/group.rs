use crate::client::{Client, NO_BODY};
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::query::{QueryParams, ToQuery, collection_path, item_path, with_query};

use models::group::{CreateGroupRequest, Group, ListGroupsOptions, UpdateGroupRequest};
use models::{ListResponse, ResourceKind};

use reqwest::Method;

const KIND: ResourceKind = ResourceKind::Group;

impl ToQuery for ListGroupsOptions {
    fn write_query(&self, query: &mut QueryParams) {
        query
            .append_pagination(&self.pagination)
            .append_all("ids", &self.ids)
            .append_opt("group_name", self.group_name.as_deref());
    }
}

impl Client {
    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn create_group(
        &self,
        ctx: &RequestContext,
        request: &CreateGroupRequest,
    ) -> Result<Group, ClientError> {
        let body = CreateGroupRequest {
            org_name: self.org_name_or_default(request.org_name.as_deref()),
            ..request.clone()
        };
        self.execute(ctx, Method::POST, &collection_path(KIND), Some(&body))
            .await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn get_group(&self, ctx: &RequestContext, id: &str) -> Result<Group, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }

    /// Apply name/description changes and membership deltas.
    ///
    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn update_group(
        &self,
        ctx: &RequestContext,
        id: &str,
        request: &UpdateGroupRequest,
    ) -> Result<Group, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::PATCH, &path, Some(request)).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn delete_group(&self, ctx: &RequestContext, id: &str) -> Result<(), ClientError> {
        let path = item_path(KIND, id)?;
        self.execute_no_content(ctx, Method::DELETE, &path, NO_BODY)
            .await
    }

    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn list_groups(
        &self,
        ctx: &RequestContext,
        options: &ListGroupsOptions,
    ) -> Result<ListResponse<Group>, ClientError> {
        let query = self.org_scoped_query(options, options.org_name.as_deref());
        let path = with_query(collection_path(KIND), &query);
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }
}
