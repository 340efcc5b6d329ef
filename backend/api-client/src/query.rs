//! Canonical query-string encoding and resource path building.
//!
//! Every resource operation builds its path through this module, so there is
//! exactly one place where identifiers are escaped and one place where query
//! strings are rendered.

use crate::error::ClientError;

use models::{Pagination, ResourceKind};

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Ordered multi-map of query parameters.
///
/// Keys render in lexicographic order; values of a repeated key render in
/// insertion order as separate `key=value` pairs. The same input therefore
/// always produces the same string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one value for `key`.
    pub fn append(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.params
            .entry(key.to_string())
            .or_default()
            .push(value.into());
        self
    }

    /// Append `value` if it is set and non-empty.
    pub fn append_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.append(key, value);
        }
        self
    }

    /// Append every non-empty entry of a multi-valued filter as a repeated key.
    pub fn append_all(&mut self, key: &str, values: &[String]) -> &mut Self {
        for value in values.iter().filter(|v| !v.is_empty()) {
            self.append(key, value.as_str());
        }
        self
    }

    pub fn append_pagination(&mut self, pagination: &Pagination) -> &mut Self {
        if let Some(limit) = pagination.limit {
            self.append("limit", limit.to_string());
        }
        self.append_opt("starting_after", pagination.starting_after.as_deref())
            .append_opt("ending_before", pagination.ending_before.as_deref())
            .append_opt("cursor", pagination.cursor.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Render as `application/x-www-form-urlencoded` without the leading `?`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.params {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

/// Options structs that render into a query string.
pub trait ToQuery {
    fn write_query(&self, query: &mut QueryParams);

    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        self.write_query(&mut query);
        query
    }
}

/// Reject empty or whitespace-only identifiers before any path is built.
#[track_caller]
pub fn require_id(resource: ResourceKind, id: &str) -> Result<(), ClientError> {
    if id.trim().is_empty() {
        return Err(ClientError::empty_identifier(resource));
    }
    Ok(())
}

/// Collection path, e.g. `/v1/dataset`.
pub fn collection_path(resource: ResourceKind) -> String {
    resource.base_path().to_string()
}

/// Item path with the identifier percent-escaped as a single segment,
/// e.g. `/v1/dataset/ds%2F1`.
#[track_caller]
pub fn item_path(resource: ResourceKind, id: &str) -> Result<String, ClientError> {
    require_id(resource, id)?;
    Ok(format!("{}/{}", resource.base_path(), urlencoding::encode(id)))
}

/// Attach a rendered query to `path` (no `?` when the query is empty).
pub fn with_query(path: String, query: &QueryParams) -> String {
    if query.is_empty() {
        path
    } else {
        format!("{path}?{}", query.encode())
    }
}
