pub mod container;
pub mod controller;
pub mod router;
pub mod server;

pub use container::{Container, ContainerConfig, DEFAULT_AUDIT_LOG, DEFAULT_BIND_ADDR};
pub use router::Router;
pub use server::build_app;
