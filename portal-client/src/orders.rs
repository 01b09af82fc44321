//! Order API calls

use crate::convert::{self, RawOrderDetail};
use crate::{ClientResult, HttpClient};
use shared::models::{OrderConnection, OrderDetail, OrderListParams};

impl HttpClient {
    // ========== Orders API ==========

    /// Fetch a page of orders for a date range
    pub async fn orders(&self, params: &OrderListParams) -> ClientResult<OrderConnection> {
        self.post::<OrderConnection, _>("api/orders/search", params)
            .await
    }

    /// Fetch the full detail document for one order and normalize it
    pub async fn order_detail(&self, order_id: i64) -> ClientResult<OrderDetail> {
        let raw: RawOrderDetail = self.get(&format!("api/orders/{}", order_id)).await?;
        Ok(convert::normalize_order_detail(order_id, raw))
    }
}
