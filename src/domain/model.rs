use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the router entry that renders a package page.
pub const PACKAGE_ROUTE_NAME: &str = "package";

/// Segment separating the package name from the requested version.
pub const VERSION_MARKER: &str = "v";

/// Ordered path segments captured by the router's catch-all `package` parameter.
pub type PathSegments = Vec<String>;

/// A package name plus the version asked for in the URL, if any.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageIdentity {
    pub package_name: String,
    pub requested_version: Option<String>,
}

impl PackageIdentity {
    pub fn new(package_name: impl Into<String>, requested_version: Option<String>) -> Self {
        Self {
            package_name: package_name.into(),
            requested_version,
        }
    }

    pub fn unversioned(package_name: impl Into<String>) -> Self {
        Self::new(package_name, None)
    }

    /// `@scope/name` style names. Purely syntactic.
    pub fn is_scoped(&self) -> bool {
        self.package_name.starts_with('@') && self.package_name.contains('/')
    }

    /// The scope without its `@`, for scoped names.
    pub fn scope(&self) -> Option<&str> {
        if !self.is_scoped() {
            return None;
        }
        self.package_name[1..].split('/').next()
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.requested_version {
            Some(version) => write!(f, "{}@{}", self.package_name, version),
            None => f.write_str(&self.package_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    pub package: PathSegments,
}

/// Navigation target handed to the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub params: RouteParams,
}

impl Route {
    pub fn package(segments: PathSegments) -> Self {
        Self {
            name: PACKAGE_ROUTE_NAME.to_string(),
            params: RouteParams { package: segments },
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.params.package
    }

    /// Renders the route as a URL path. Segments are emitted verbatim.
    pub fn to_path(&self) -> String {
        format!("/{}", self.params.package.join("/"))
    }
}
