//! Order wire model (storefront order list API)

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One order as returned by the order list endpoint (`edges[].node`)
///
/// The upstream API is loose about field types: `orderId` and
/// `createdAt` may arrive as numbers or numeric strings, and
/// `totalIncTax` is a decimal string. Numeric fields use a tolerant
/// deserializer that yields `None` for malformed values so a single bad
/// record never fails the whole page; `totalIncTax` is kept raw and
/// parsed at aggregation time for the same reason.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderNode {
    #[serde(deserialize_with = "de_opt_i64")]
    pub order_id: Option<i64>,
    /// Creation time in epoch seconds (UTC)
    #[serde(deserialize_with = "de_opt_i64")]
    pub created_at: Option<i64>,
    /// Total including tax, raw decimal string
    #[serde(deserialize_with = "de_opt_string")]
    pub total_inc_tax: Option<String>,
    /// Status code (display name resolved via the status lookup)
    pub status: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl OrderNode {
    /// Trimmed "First Last" purchaser name, empty when both parts are missing
    pub fn purchaser_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    /// Parse the raw total into a finite f64, `None` when missing or malformed
    pub fn parsed_total(&self) -> Option<f64> {
        self.total_inc_tax
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }
}

/// Connection edge wrapper
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderEdge {
    #[serde(default)]
    pub node: Option<OrderNode>,
}

/// Paginated order list response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderConnection {
    pub edges: Vec<OrderEdge>,
    pub total_count: i64,
}

impl OrderConnection {
    /// Flatten edges into the contained order nodes, dropping empty edges
    pub fn into_nodes(self) -> Vec<OrderNode> {
        self.edges.into_iter().filter_map(|e| e.node).collect()
    }
}

/// Query parameters for the order list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListParams {
    pub begin_date_at: String,
    pub end_date_at: String,
    /// Page size
    pub first: i64,
    pub offset: i64,
    pub order_by: String,
    pub is_desc: bool,
    /// Company scope filter (B2B accounts only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_ids: Option<Vec<i64>>,
}

impl OrderListParams {
    /// Create params for a date range, sorted by creation time descending
    pub fn new(begin_date_at: impl Into<String>, end_date_at: impl Into<String>) -> Self {
        Self {
            begin_date_at: begin_date_at.into(),
            end_date_at: end_date_at.into(),
            first: 30,
            offset: 0,
            order_by: "createdAt".to_string(),
            is_desc: true,
            company_ids: None,
        }
    }

    /// Set page size and offset
    pub fn with_page(mut self, first: i64, offset: i64) -> Self {
        self.first = first;
        self.offset = offset;
        self
    }

    /// Restrict to the given companies
    pub fn with_company_ids(mut self, company_ids: Vec<i64>) -> Self {
        self.company_ids = Some(company_ids);
        self
    }
}

/// Accept an i64 that may arrive as a JSON number or a numeric string;
/// anything else becomes `None`
fn de_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }))
}

/// Accept a string that may arrive as a JSON string or a number
fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}
