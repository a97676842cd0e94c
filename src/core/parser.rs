use crate::domain::model::{PackageIdentity, VERSION_MARKER};
use regex::Regex;
use std::sync::LazyLock;

// `name@version` or `@scope/name@version` on the whole joined path.
static FUSED_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(@[^/]+/[^/]+|[^/]+)@([^/]+)$").expect("fused version pattern compiles")
});

/// Recovers the package identity from the router's `package` segments.
///
/// Resolution order:
///
/// 1. the first `v` segment that has something after it splits name from version
/// 2. otherwise a fused `@version` suffix on the joined path (`axios@1.13.3`)
/// 3. otherwise the joined path is the name and no version was requested
///
/// Never fails: unexpected input degrades to a best-effort name (possibly empty).
pub fn parse_segments<S: AsRef<str>>(segments: &[S]) -> PackageIdentity {
    let parts: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();

    if let Some(marker) = parts.iter().position(|part| *part == VERSION_MARKER) {
        if marker + 1 < parts.len() {
            let identity = PackageIdentity::new(
                parts[..marker].join("/"),
                Some(parts[marker + 1..].join("/")),
            );
            tracing::trace!(%identity, "resolved by version marker");
            return identity;
        }
    }

    let full_path = parts.join("/");

    if let Some(caps) = FUSED_VERSION.captures(&full_path) {
        let identity = PackageIdentity::new(&caps[1], Some(caps[2].to_string()));
        tracing::trace!(%identity, "resolved by fused version suffix");
        return identity;
    }

    tracing::trace!(package = %full_path, "no version requested");
    PackageIdentity::unversioned(full_path)
}
