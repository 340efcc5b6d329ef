use crate::client::{Client, NO_BODY};
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::query::{QueryParams, ToQuery, collection_path, item_path, require_id, with_query};

use models::experiment::{
    CreateExperimentRequest, Experiment, ListExperimentsOptions, UpdateExperimentRequest,
};
use models::{ListResponse, ResourceKind};

use reqwest::Method;

const KIND: ResourceKind = ResourceKind::Experiment;

impl ToQuery for ListExperimentsOptions {
    fn write_query(&self, query: &mut QueryParams) {
        query
            .append_pagination(&self.pagination)
            .append_all("ids", &self.ids)
            .append_opt("experiment_name", self.experiment_name.as_deref())
            .append_opt("project_id", self.project_id.as_deref())
            .append_opt("project_name", self.project_name.as_deref());
    }
}

impl Client {
    /// Create an experiment inside `request.project_id`. With `ensure_new`
    /// the server picks a fresh name instead of returning an existing one.
    ///
    /// # Errors
    /// [`ClientError::EmptyIdentifier`] (project) for a blank project ID,
    /// otherwise any pipeline error.
    pub async fn create_experiment(
        &self,
        ctx: &RequestContext,
        request: &CreateExperimentRequest,
    ) -> Result<Experiment, ClientError> {
        require_id(ResourceKind::Project, &request.project_id)?;
        self.execute(ctx, Method::POST, &collection_path(KIND), Some(request))
            .await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn get_experiment(&self, ctx: &RequestContext, id: &str) -> Result<Experiment, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn update_experiment(
        &self,
        ctx: &RequestContext,
        id: &str,
        request: &UpdateExperimentRequest,
    ) -> Result<Experiment, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::PATCH, &path, Some(request)).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn delete_experiment(&self, ctx: &RequestContext, id: &str) -> Result<(), ClientError> {
        let path = item_path(KIND, id)?;
        self.execute_no_content(ctx, Method::DELETE, &path, NO_BODY)
            .await
    }

    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn list_experiments(
        &self,
        ctx: &RequestContext,
        options: &ListExperimentsOptions,
    ) -> Result<ListResponse<Experiment>, ClientError> {
        let query = self.org_scoped_query(options, options.org_name.as_deref());
        let path = with_query(collection_path(KIND), &query);
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }
}
