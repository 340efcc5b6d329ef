use crate::client::{Client, NO_BODY};
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::query::{QueryParams, ToQuery, collection_path, item_path, with_query};

use models::organization::{ListOrganizationsOptions, Organization, UpdateOrganizationRequest};
use models::{ListResponse, ResourceKind};

use reqwest::Method;

const KIND: ResourceKind = ResourceKind::Organization;

impl ToQuery for ListOrganizationsOptions {
    fn write_query(&self, query: &mut QueryParams) {
        query
            .append_pagination(&self.pagination)
            .append_all("ids", &self.ids)
            .append_opt("org_name", self.org_name.as_deref());
    }
}

// Organizations cannot be created or deleted through the API.
impl Client {
    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn get_organization(
        &self,
        ctx: &RequestContext,
        id: &str,
    ) -> Result<Organization, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn update_organization(
        &self,
        ctx: &RequestContext,
        id: &str,
        request: &UpdateOrganizationRequest,
    ) -> Result<Organization, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::PATCH, &path, Some(request)).await
    }

    /// Lists every organization the key can see. The default organization is
    /// deliberately not applied as a filter here.
    ///
    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn list_organizations(
        &self,
        ctx: &RequestContext,
        options: &ListOrganizationsOptions,
    ) -> Result<ListResponse<Organization>, ClientError> {
        let path = with_query(collection_path(KIND), &options.to_query());
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }
}
