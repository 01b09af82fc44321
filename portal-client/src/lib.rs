//! Portal Client - HTTP client for the storefront order API
//!
//! Provides the order list and order detail fetchers consumed by the
//! insights engine, plus normalization of the provider's order detail
//! document into the shared line-item model.

pub mod config;
pub mod convert;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod orders;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use fetcher::{OrderDetailFetcher, OrderFetcher};
pub use http::HttpClient;

// Re-export shared wire types for convenience
pub use shared::models::{OrderConnection, OrderDetail, OrderListParams, OrderNode};
