use crate::domain::model::{Route, VERSION_MARKER};

/// Builds the `package` route for a package name and optional version.
///
/// `@nuxt/kit` + `1.0.0` becomes `["@nuxt", "kit", "v", "1.0.0"]`. The name is
/// trusted as given; empty pieces are dropped and an empty version counts as none.
pub fn build_route(package_name: &str, version: Option<&str>) -> Route {
    let version = version.filter(|v| !v.is_empty());

    let segments = package_name
        .split('/')
        .chain(version.map(|_| VERSION_MARKER))
        .chain(version)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();

    Route::package(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(route: &Route) -> Vec<&str> {
        route.segments().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_unscoped_without_version() {
        let route = build_route("nuxt", None);
        assert_eq!(route.name, "package");
        assert_eq!(segments(&route), ["nuxt"]);
    }

    #[test]
    fn test_unscoped_with_version() {
        let route = build_route("nuxt", Some("4.2.0"));
        assert_eq!(segments(&route), ["nuxt", "v", "4.2.0"]);
    }

    #[test]
    fn test_scoped_keeps_at_sign() {
        let route = build_route("@nuxt/kit", Some("1.0.0"));
        assert_eq!(segments(&route), ["@nuxt", "kit", "v", "1.0.0"]);
        assert_eq!(route.to_path(), "/@nuxt/kit/v/1.0.0");
    }

    #[test]
    fn test_empty_version_is_ignored() {
        assert_eq!(segments(&build_route("@nuxt/kit", Some(""))), ["@nuxt", "kit"]);
    }

    #[test]
    fn test_malformed_name_still_builds() {
        assert_eq!(segments(&build_route("a//b/", None)), ["a", "b"]);
        assert!(build_route("", None).segments().is_empty());
    }

    #[test]
    fn test_version_is_single_segment() {
        // a slash inside the version is not split
        assert_eq!(segments(&build_route("x", Some("1/2"))), ["x", "v", "1/2"]);
    }
}
