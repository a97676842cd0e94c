// Adapters layer: concrete implementations of the routing ports.

pub mod memory_router;

pub use memory_router::MemoryRouter;
