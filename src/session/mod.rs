//! Storefront Session Module
//!
//! This module contains the per-user storefront state, including:
//! - Domain models (Session, Intent, Notice, StorefrontView)
//! - The intent reducer
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod reducer;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Intent, Notice, Session, StorefrontView};
pub use reducer::{reduce, Transition};
pub use state::{AppState, Dispatch, SharedState};
