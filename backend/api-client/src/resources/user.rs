use crate::client::{Client, NO_BODY};
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::query::{QueryParams, ToQuery, collection_path, item_path, with_query};

use models::user::{ListUsersOptions, User};
use models::{ListResponse, ResourceKind};

use reqwest::Method;

const KIND: ResourceKind = ResourceKind::User;

impl ToQuery for ListUsersOptions {
    fn write_query(&self, query: &mut QueryParams) {
        query
            .append_pagination(&self.pagination)
            .append_all("ids", &self.ids)
            .append_all("given_name", &self.given_name)
            .append_all("family_name", &self.family_name)
            .append_all("email", &self.email);
    }
}

// Users are provisioned outside the API, so they are read-only here.
impl Client {
    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn get_user(&self, ctx: &RequestContext, id: &str) -> Result<User, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }

    /// # Errors
    /// Any [`ClientError`] from the request pipeline.
    pub async fn list_users(
        &self,
        ctx: &RequestContext,
        options: &ListUsersOptions,
    ) -> Result<ListResponse<User>, ClientError> {
        let query = self.org_scoped_query(options, options.org_name.as_deref());
        let path = with_query(collection_path(KIND), &query);
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }
}
