use crate::client::{Client, NO_BODY};
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::query::{QueryParams, ToQuery, collection_path, item_path, with_query};

use models::project::{
    CreateProjectRequest, ListProjectsOptions, Project, UpdateProjectRequest,
};
use models::{ListResponse, ResourceKind};

use reqwest::Method;

const KIND: ResourceKind = ResourceKind::Project;

impl ToQuery for ListProjectsOptions {
    fn write_query(&self, query: &mut QueryParams) {
        query
            .append_pagination(&self.pagination)
            .append_all("ids", &self.ids)
            .append_opt("project_name", self.project_name.as_deref());
    }
}

impl Client {
    /// Create a project, in the default organization unless the request names one.
    ///
    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn create_project(
        &self,
        ctx: &RequestContext,
        request: &CreateProjectRequest,
    ) -> Result<Project, ClientError> {
        let body = CreateProjectRequest {
            org_name: self.org_name_or_default(request.org_name.as_deref()),
            ..request.clone()
        };
        self.execute(ctx, Method::POST, &collection_path(KIND), Some(&body))
            .await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn get_project(&self, ctx: &RequestContext, id: &str) -> Result<Project, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn update_project(
        &self,
        ctx: &RequestContext,
        id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<Project, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::PATCH, &path, Some(request)).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn delete_project(&self, ctx: &RequestContext, id: &str) -> Result<(), ClientError> {
        let path = item_path(KIND, id)?;
        self.execute_no_content(ctx, Method::DELETE, &path, NO_BODY)
            .await
    }

    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn list_projects(
        &self,
        ctx: &RequestContext,
        options: &ListProjectsOptions,
    ) -> Result<ListResponse<Project>, ClientError> {
        let query = self.org_scoped_query(options, options.org_name.as_deref());
        let path = with_query(collection_path(KIND), &query);
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }
}
