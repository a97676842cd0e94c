use crate::domain::model::{PathSegments, Route};
use crate::utils::error::Result;
use tokio::sync::watch;

/// Supplies the live segment sequence of the current navigation.
pub trait RouteSource: Send + Sync {
    fn subscribe(&self) -> watch::Receiver<PathSegments>;
}

/// Performs navigation to a route built by `get_package_route`.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &Route) -> Result<()>;
}
