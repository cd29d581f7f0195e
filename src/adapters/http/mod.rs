//! HTTP adapters - REST API implementations.

pub mod server;
pub mod spoilage;

// Re-export key types for convenience
pub use server::{app_state, router, StartupError};
pub use spoilage::{spoilage_router, SpoilageAppState};
