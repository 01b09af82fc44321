//! Shared types for the buyer-portal insights workspace
//!
//! Common types used across multiple crates: wire models for the
//! storefront order API, derived analytics structures, the unified
//! error system, and small utility functions.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
