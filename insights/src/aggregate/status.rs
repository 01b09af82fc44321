//! Status Distribution Aggregation

use shared::models::{DEFAULT_STATUS_COLOR, OrderNode, StatusBucket, StatusLookup};

/// Count orders per status code and resolve display metadata
///
/// Orders with a missing or empty status are skipped. Buckets are
/// sorted by count descending; ties keep the order in which the status
/// was first seen in the input. Codes the lookup does not know keep the
/// raw code as their label and get the default gray.
pub fn aggregate_status(orders: &[OrderNode], lookup: &dyn StatusLookup) -> Vec<StatusBucket> {
    let mut counts: Vec<(String, i64)> = Vec::new();

    for order in orders {
        let Some(status) = order.status.as_deref().filter(|s| !s.is_empty()) else {
            continue;
        };
        match counts.iter_mut().find(|(code, _)| code.as_str() == status) {
            Some((_, count)) => *count += 1,
            None => counts.push((status.to_string(), 1)),
        }
    }

    let mut buckets: Vec<StatusBucket> = counts
        .into_iter()
        .map(|(code, count)| {
            let meta = lookup.resolve(&code);
            StatusBucket {
                display_label: meta
                    .as_ref()
                    .map(|m| m.name.clone())
                    .unwrap_or_else(|| code.clone()),
                color: meta
                    .map(|m| m.color)
                    .unwrap_or_else(|| DEFAULT_STATUS_COLOR.to_string()),
                status_code: code,
                count,
            }
        })
        .collect();

    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
}
