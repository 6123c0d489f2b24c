pub mod handlers;
pub mod session;
pub mod tracing;
