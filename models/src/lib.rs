//! Resource models for the platform REST API.
//!
//! This crate contains pure data structures: the resources returned by the
//! API, the request bodies sent to it, and the option structs that list
//! operations turn into query strings. No I/O and no validation live here -
//! the `api-client` crate does both.
//!
//! ## Architecture
//!
//! - **common**: shared leaf utilities (error locations, redaction)
//! - **models** (this crate): pure data structures
//! - **api-client**: transport, request pipeline and resource operations

pub mod acl;
pub mod ai_secret;
pub mod api_key;
pub mod dataset;
pub mod env_var;
pub mod experiment;
pub mod group;
pub mod organization;
pub mod pagination;
pub mod project;
pub mod resource_kind;
pub mod role;
pub mod tag;
pub mod user;
pub mod view;


pub use pagination::Pagination;
pub use resource_kind::ResourceKind;

/// Envelope every list endpoint returns.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub objects: Vec<T>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
        }
    }
}
