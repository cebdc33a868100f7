// src/lib.rs
//! Furnish
//!
//! Placement-and-interaction core for point-and-tap furniture apps:
//! surface-pose tracking, mode-gated tap handling (Add / Delete / Move),
//! and placed-object bookkeeping, driven through narrow traits the host
//! AR runtime and renderer implement.

pub mod input;
pub mod interaction;
pub mod placement;
pub mod scene;
pub mod session;
pub mod ui;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use session::{PlacementSession, SessionBuilder, SessionError};

/// Starts a session builder with default settings
pub fn builder() -> SessionBuilder {
    SessionBuilder::new()
}
