use std::collections::BTreeMap;

use vmap_entities::category::Category;

/// Picks the most recent snapshot (last entry) of the statistics document
/// and maps its counts by category key.
pub fn latest_category_counts(snapshots: &[BTreeMap<String, u64>]) -> Vec<(Category, u64)> {
    let Some(latest) = snapshots.last() else {
        return Vec::new();
    };
    latest
        .iter()
        .map(|(key, count)| (Category::from(key.as_str()), *count))
        .collect()
}
