use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{SystemTime, UNIX_EPOCH};

pub(crate) fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

pub(crate) fn count_items<K, I>(items: I) -> HashMap<K, usize>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Sort counts descending, ties broken by key ascending, and keep `limit`.
pub(crate) fn rank<K: Ord>(counts: HashMap<K, usize>, limit: usize) -> Vec<(K, usize)> {
    let mut rows: Vec<(K, usize)> = counts.into_iter().collect();
    rows.sort_by(|a, b| match b.1.cmp(&a.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        other => other,
    });
    rows.truncate(limit);
    rows
}
