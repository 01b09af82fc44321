//! Order aggregation pipeline
//!
//! Pure transformations from a fetched order list into chart-ready
//! shapes. Each aggregator makes a single forward pass over its input
//! and only sorts/slices the buckets after the pass completes; none of
//! them mutates the input or shares state with another.

pub mod employee;
pub mod monthly;
pub mod products;
pub mod status;
pub mod summary;

pub use employee::{TOP_EMPLOYEES, aggregate_employees};
pub use monthly::aggregate_monthly;
pub use products::{
    DETAIL_SAMPLE_LIMIT, PRODUCT_SCAN_PAGE_SIZE, TOP_PRODUCTS, ProductMode, aggregate_products,
    merge_line_items,
};
pub use status::aggregate_status;
pub use summary::summarize_spend;
