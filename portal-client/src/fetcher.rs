//! Fetcher traits
//!
//! The insights engine depends on these seams rather than on the HTTP
//! client directly, so tests can inject in-memory fetchers.

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::models::{OrderConnection, OrderDetail, OrderListParams};

/// Fetches pages of orders for a date range
#[async_trait]
pub trait OrderFetcher: Send + Sync {
    async fn fetch_orders(&self, params: &OrderListParams) -> ClientResult<OrderConnection>;
}

/// Fetches the normalized detail document for a single order
#[async_trait]
pub trait OrderDetailFetcher: Send + Sync {
    async fn fetch_order_detail(&self, order_id: i64) -> ClientResult<OrderDetail>;
}

#[async_trait]
impl OrderFetcher for HttpClient {
    async fn fetch_orders(&self, params: &OrderListParams) -> ClientResult<OrderConnection> {
        self.orders(params).await
    }
}

#[async_trait]
impl OrderDetailFetcher for HttpClient {
    async fn fetch_order_detail(&self, order_id: i64) -> ClientResult<OrderDetail> {
        self.order_detail(order_id).await
    }
}
