use std::fmt;

/// Every resource type the API client exposes operations for.
///
/// Used to build base paths and to say which resource an identifier guard
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Project,
    Dataset,
    Experiment,
    Group,
    Role,
    ApiKey,
    Acl,
    Tag,
    User,
    Organization,
    EnvVar,
    AiSecret,
    View,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 13] = [
        ResourceKind::Project,
        ResourceKind::Dataset,
        ResourceKind::Experiment,
        ResourceKind::Group,
        ResourceKind::Role,
        ResourceKind::ApiKey,
        ResourceKind::Acl,
        ResourceKind::Tag,
        ResourceKind::User,
        ResourceKind::Organization,
        ResourceKind::EnvVar,
        ResourceKind::AiSecret,
        ResourceKind::View,
    ];

    /// Collection path under the versioned prefix, e.g. `/v1/project`.
    pub const fn base_path(self) -> &'static str {
        match self {
            ResourceKind::Project => "/v1/project",
            ResourceKind::Dataset => "/v1/dataset",
            ResourceKind::Experiment => "/v1/experiment",
            ResourceKind::Group => "/v1/group",
            ResourceKind::Role => "/v1/role",
            ResourceKind::ApiKey => "/v1/api_key",
            ResourceKind::Acl => "/v1/acl",
            ResourceKind::Tag => "/v1/project_tag",
            ResourceKind::User => "/v1/user",
            ResourceKind::Organization => "/v1/organization",
            ResourceKind::EnvVar => "/v1/env_var",
            ResourceKind::AiSecret => "/v1/ai_secret",
            ResourceKind::View => "/v1/view",
        }
    }

    /// Human readable name used in error messages.
    pub const fn label(self) -> &'static str {
        match self {
            ResourceKind::Project => "project",
            ResourceKind::Dataset => "dataset",
            ResourceKind::Experiment => "experiment",
            ResourceKind::Group => "group",
            ResourceKind::Role => "role",
            ResourceKind::ApiKey => "API key",
            ResourceKind::Acl => "ACL",
            ResourceKind::Tag => "tag",
            ResourceKind::User => "user",
            ResourceKind::Organization => "organization",
            ResourceKind::EnvVar => "environment variable",
            ResourceKind::AiSecret => "AI secret",
            ResourceKind::View => "view",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
