use crate::client::{Client, NO_BODY};
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::query::{QueryParams, ToQuery, collection_path, item_path, require_id, with_query};

use models::acl::{Acl, CreateAclRequest, ListAclsOptions};
use models::{ListResponse, ResourceKind};

use reqwest::Method;

const KIND: ResourceKind = ResourceKind::Acl;

impl ToQuery for ListAclsOptions {
    fn write_query(&self, query: &mut QueryParams) {
        query
            .append_pagination(&self.pagination)
            .append_all("ids", &self.ids)
            .append("object_type", self.object_type.as_str())
            .append("object_id", self.object_id.as_str());
    }
}

// ACL entries are immutable: change one by deleting it and creating another.
impl Client {
    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `object_id`, otherwise any
    /// pipeline error.
    pub async fn create_acl(
        &self,
        ctx: &RequestContext,
        request: &CreateAclRequest,
    ) -> Result<Acl, ClientError> {
        require_id(KIND, &request.object_id)?;
        self.execute(ctx, Method::POST, &collection_path(KIND), Some(request))
            .await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn get_acl(&self, ctx: &RequestContext, id: &str) -> Result<Acl, ClientError> {
        let path = item_path(KIND, id)?;
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }

    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `id`, otherwise any pipeline error.
    pub async fn delete_acl(&self, ctx: &RequestContext, id: &str) -> Result<(), ClientError> {
        let path = item_path(KIND, id)?;
        self.execute_no_content(ctx, Method::DELETE, &path, NO_BODY)
            .await
    }

    /// List the ACL entries on one object.
    ///
    /// # Errors
    /// [`ClientError::EmptyIdentifier`] for a blank `object_id`, otherwise any
    /// pipeline error.
    pub async fn list_acls(
        &self,
        ctx: &RequestContext,
        options: &ListAclsOptions,
    ) -> Result<ListResponse<Acl>, ClientError> {
        require_id(KIND, &options.object_id)?;
        let path = with_query(collection_path(KIND), &options.to_query());
        self.execute(ctx, Method::GET, &path, NO_BODY).await
    }
}
