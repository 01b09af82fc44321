//! Data models
//!
//! Shared between the portal client and the insights engine.
//! Wire types use camelCase serde renames to match the storefront API;
//! derived analytics types are plain snake_case.

pub mod insights;
pub mod line_item;
pub mod order;
pub mod status;

// Re-exports
pub use insights::*;
pub use line_item::*;
pub use order::*;
pub use status::*;
