use crate::client::{Client, NO_BODY};
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::query::{QueryParams, ToQuery, collection_path, item_path, with_query};

use models::role::{CreateRoleRequest, ListRolesOptions, Role, UpdateRoleRequest};
use models::{ListResponse, ResourceKind};

use reqwest::Method;

const KIND: ResourceKind = ResourceKind::Role;

impl ToQuery for ListRolesOptions {
    fn write_query(&self, query: &mut QueryParams) {
        query
            .append_pagination(&self.pagination)
            .append_all("ids", &self.ids)
            .append_opt("role_name", self.role_name.as_deref());
    }
}

impl Client {
    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn create_role(
        &self,
        ctx: &RequestContext,
        request: &CreateRoleRequest,
    ) -> Result<Role, ClientError> {
        let body = CreateRoleRequest {
            org_name: self.org_name_or_default(request.org_name.as_deref()),
            ..request.clone()
        };
        self.execute(ctx, Method::POST, &collection_path(KIND), Some(&body))
            .await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn get_role(&self, ctx: &RequestContext, id: &str) -> Result<Role, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }

    /// Apply name/description changes plus permission and member-role deltas.
    ///
    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn update_role(
        &self,
        ctx: &RequestContext,
        id: &str,
        request: &UpdateRoleRequest,
    ) -> Result<Role, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::PATCH, &path, Some(request)).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn delete_role(&self, ctx: &RequestContext, id: &str) -> Result<(), ClientError> {
        let path = item_path(KIND, id)?;
        self.execute_no_content(ctx, Method::DELETE, &path, NO_BODY)
            .await
    }

    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn list_roles(
        &self,
        ctx: &RequestContext,
        options: &ListRolesOptions,
    ) -> Result<ListResponse<Role>, ClientError> {
        let query = self.org_scoped_query(options, options.org_name.as_deref());
        let path = with_query(collection_path(KIND), &query);
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }
}
