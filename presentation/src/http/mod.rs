//! Callable HTTP endpoint

pub mod callable;
pub mod server;

pub use callable::CallableResponse;
pub use server::{ANALYZE_ROUTE, CallableServer, HEALTH_ROUTE, serve};
