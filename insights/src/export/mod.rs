//! CSV export

pub mod csv;

pub use csv::{export_orders, export_purchased_items, orders_csv, purchased_items_csv};
