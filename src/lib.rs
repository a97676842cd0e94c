pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::MemoryRouter;
pub use crate::core::binding::{use_package_route, Derived, PackageRoute, PackageRouteBinding};
pub use crate::core::builder::build_route as get_package_route;
pub use crate::core::parser::parse_segments;
pub use crate::core::segments::{segments_from_location, segments_from_path, segments_from_url};
pub use domain::model::{PackageIdentity, PathSegments, Route, RouteParams};
pub use utils::error::{Result, RouteError};
