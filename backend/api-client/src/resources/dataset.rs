use crate::client::{Client, NO_BODY};
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::query::{QueryParams, ToQuery, collection_path, item_path, require_id, with_query};

use models::dataset::{
    CreateDatasetRequest, Dataset, ListDatasetsOptions, UpdateDatasetRequest,
};
use models::{ListResponse, ResourceKind};

use reqwest::Method;

const KIND: ResourceKind = ResourceKind::Dataset;

impl ToQuery for ListDatasetsOptions {
    fn write_query(&self, query: &mut QueryParams) {
        query
            .append_pagination(&self.pagination)
            .append_all("ids", &self.ids)
            .append_opt("dataset_name", self.dataset_name.as_deref())
            .append_opt("project_id", self.project_id.as_deref())
            .append_opt("project_name", self.project_name.as_deref());
    }
}

impl Client {
    /// Create a dataset inside `request.project_id`.
    ///
    /// # Errors
    /// [`ClientError::EmptyIdentifier`] (project) for a blank project ID,
    /// otherwise any pipeline error.
    pub async fn create_dataset(
        &self,
        ctx: &RequestContext,
        request: &CreateDatasetRequest,
    ) -> Result<Dataset, ClientError> {
        require_id(ResourceKind::Project, &request.project_id)?;
        self.execute(ctx, Method::POST, &collection_path(KIND), Some(request))
            .await
    }

    /// Fetch one dataset by ID.
    ///
    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`; [`ClientError::Api`]
    /// with status 404 when the dataset does not exist.
    pub async fn get_dataset(&self, ctx: &RequestContext, id: &str) -> Result<Dataset, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn update_dataset(
        &self,
        ctx: &RequestContext,
        id: &str,
        request: &UpdateDatasetRequest,
    ) -> Result<Dataset, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::PATCH, &path, Some(request)).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn delete_dataset(&self, ctx: &RequestContext, id: &str) -> Result<(), ClientError> {
        let path = item_path(KIND, id)?;
        self.execute_no_content(ctx, Method::DELETE, &path, NO_BODY)
            .await
    }

    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn list_datasets(
        &self,
        ctx: &RequestContext,
        options: &ListDatasetsOptions,
    ) -> Result<ListResponse<Dataset>, ClientError> {
        let query = self.org_scoped_query(options, options.org_name.as_deref());
        let path = with_query(collection_path(KIND), &query);
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }
}
