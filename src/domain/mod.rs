// Domain layer: value types and the ports the routing collaborator must provide.

pub mod model;
pub mod ports;
