//! Views are only addressable together with the object they belong to, so
//! every item operation carries a [`ViewScope`]: as query parameters on read,
//! in the JSON body on update and delete.

use crate::client::{Client, NO_BODY};
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::query::{QueryParams, ToQuery, collection_path, item_path, require_id, with_query};

use models::view::{CreateViewRequest, ListViewsOptions, UpdateViewRequest, View, ViewScope};
use models::{ListResponse, ResourceKind};

use reqwest::Method;
use serde::Serialize;

const KIND: ResourceKind = ResourceKind::View;

impl ToQuery for ViewScope {
    fn write_query(&self, query: &mut QueryParams) {
        query
            .append("object_type", self.object_type.as_str())
            .append("object_id", self.object_id.as_str());
    }
}

impl ToQuery for ListViewsOptions {
    fn write_query(&self, query: &mut QueryParams) {
        self.scope.write_query(query);
        query
            .append_pagination(&self.pagination)
            .append_all("ids", &self.ids)
            .append_opt("view_name", self.view_name.as_deref())
            .append_opt("view_type", self.view_type.as_deref());
    }
}

#[derive(Serialize)]
struct ScopedUpdate<'a> {
    #[serde(flatten)]
    scope: &'a ViewScope,
    #[serde(flatten)]
    changes: &'a UpdateViewRequest,
}

#[track_caller]
fn require_scope(scope: &ViewScope) -> Result<(), ClientError> {
    require_id(KIND, &scope.object_id)
}

impl Client {
    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `object_id`, otherwise any
    /// pipeline error.
    pub async fn create_view(
        &self,
        ctx: &RequestContext,
        request: &CreateViewRequest,
    ) -> Result<View, ClientError> {
        require_id(KIND, &request.object_id)?;
        self.execute(ctx, Method::POST, &collection_path(KIND), Some(request))
            .await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id` or `object_id`,
    /// otherwise any pipeline error.
    pub async fn get_view(
        &self,
        ctx: &RequestContext,
        id: &str,
        scope: &ViewScope,
    ) -> Result<View, ClientError> {
        require_scope(scope)?;
        let path = with_query(item_path(KIND, id)?, &scope.to_query());
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id` or `object_id`,
    /// otherwise any pipeline error.
    pub async fn update_view(
        &self,
        ctx: &RequestContext,
        id: &str,
        scope: &ViewScope,
        request: &UpdateViewRequest,
    ) -> Result<View, ClientError> {
        require_scope(scope)?;
        let path = item_path(KIND, id)?;
        let body = ScopedUpdate {
            scope,
            changes: request,
        };
        self.execute(ctx, Method::PATCH, &path, Some(&body)).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id` or `object_id`,
    /// otherwise any pipeline error.
    pub async fn delete_view(
        &self,
        ctx: &RequestContext,
        id: &str,
        scope: &ViewScope,
    ) -> Result<(), ClientError> {
        require_scope(scope)?;
        let path = item_path(KIND, id)?;
        self.execute_no_content(ctx, Method::DELETE, &path, Some(scope))
            .await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `object_id`, otherwise any
    /// pipeline error.
    pub async fn list_views(
        &self,
        ctx: &RequestContext,
        options: &ListViewsOptions,
    ) -> Result<ListResponse<View>, ClientError> {
        require_scope(&options.scope)?;
        let path = with_query(collection_path(KIND), &options.to_query());
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }
}
