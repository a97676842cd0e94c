pub mod binding;
pub mod builder;
pub mod parser;
pub mod segments;

pub use crate::domain::model::{PackageIdentity, PathSegments, Route};
pub use crate::domain::ports::{Navigator, RouteSource};
pub use crate::utils::error::Result;
