//! Resource operations.
//!
//! Each submodule adds `create_*`/`get_*`/`update_*`/`delete_*`/`list_*`
//! methods to [`Client`] for one resource type. They only build a path and
//! query string and hand off to [`Client::execute`]; all transport, error
//! and decoding behaviour lives in the pipeline.

mod acl;
mod ai_secret;
mod api_key;
mod dataset;
mod env_var;
mod experiment;
mod group;
mod organization;
mod project;
mod role;
mod tag;
mod user;
mod view;

use crate::client::Client;
use crate::query::{QueryParams, ToQuery};

const ORG_NAME_PARAM: &str = "org_name";

impl Client {
    /// Render list options, adding the default organization when the caller
    /// did not name one.
    pub(crate) fn org_scoped_query<O: ToQuery>(
        &self,
        options: &O,
        org_name: Option<&str>,
    ) -> QueryParams {
        let mut query = options.to_query();
        if let Some(org_name) = self.org_name_or_default(org_name) {
            query.append(ORG_NAME_PARAM, org_name);
        }
        query
    }
}
