use crate::core::segments::segments_from_location;
use crate::domain::model::{PathSegments, Route, PACKAGE_ROUTE_NAME};
use crate::domain::ports::{Navigator, RouteSource};
use crate::utils::error::{Result, RouteError};
use tokio::sync::watch;

/// In-process router holding the current `package` segments.
#[derive(Debug)]
pub struct MemoryRouter {
    current: watch::Sender<PathSegments>,
}

impl MemoryRouter {
    pub fn new() -> Self {
        Self::with_segments(PathSegments::new())
    }

    pub fn with_segments(segments: PathSegments) -> Self {
        let (current, _) = watch::channel(segments);
        Self { current }
    }

    pub fn current_segments(&self) -> PathSegments {
        self.current.borrow().clone()
    }

    /// Publishes `segments`. Subscribers are only woken when the value changes.
    fn publish(&self, segments: PathSegments) -> bool {
        let changed = self.current.send_if_modified(|current| {
            if *current == segments {
                return false;
            }
            *current = segments;
            true
        });
        if changed {
            tracing::debug!(segments = ?self.current.borrow(), "route changed");
        }
        changed
    }

    /// Navigates to a bare path or absolute URL.
    pub fn navigate_to(&self, location: &str) -> Result<()> {
        let segments = segments_from_location(location)?;
        self.publish(segments);
        Ok(())
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteSource for MemoryRouter {
    fn subscribe(&self) -> watch::Receiver<PathSegments> {
        self.current.subscribe()
    }
}

impl Navigator for MemoryRouter {
    fn navigate(&self, route: &Route) -> Result<()> {
        if route.name != PACKAGE_ROUTE_NAME {
            return Err(RouteError::UnknownRoute {
                name: route.name.clone(),
            });
        }
        self.publish(route.params.package.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::build_route;
    use crate::domain::model::RouteParams;

    #[test]
    fn test_navigate_publishes_segments() {
        let router = MemoryRouter::new();
        router.navigate(&build_route("@nuxt/kit", Some("1.0.0"))).unwrap();
        assert_eq!(router.current_segments(), vec!["@nuxt", "kit", "v", "1.0.0"]);
    }

    #[test]
    fn test_rejects_foreign_route() {
        let router = MemoryRouter::new();
        let route = Route {
            name: "search".to_string(),
            params: RouteParams {
                package: vec!["nuxt".to_string()],
            },
        };
        assert!(matches!(
            router.navigate(&route),
            Err(RouteError::UnknownRoute { name }) if name == "search"
        ));
        assert!(router.current_segments().is_empty());
    }

    #[test]
    fn test_same_segments_do_not_notify() {
        let router = MemoryRouter::with_segments(vec!["nuxt".to_string()]);
        let mut rx = router.subscribe();
        rx.borrow_and_update();

        router.navigate_to("/nuxt").unwrap();
        assert!(!rx.has_changed().unwrap());

        router.navigate_to("/nuxt/v/4.2.0").unwrap();
        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn test_navigate_to_invalid_url() {
        let router = MemoryRouter::new();
        assert!(matches!(
            router.navigate_to("https://[::1"),
            Err(RouteError::UrlError(_))
        ));
    }
}
