//! Deduplication of member lists (e.g. saved tag groups).

use std::collections::BTreeSet;

/// Keeps the first of each group of lists with equal members.
///
/// With `ignore_order`, members are compared after sorting, so `[a, b]` and
/// `[b, a]` are duplicates. Surviving lists keep their original order.
/// Lists are compared member by member, so `["a,b"]` and `["a", "b"]`
/// stay distinct.
pub fn deduplicate_lists<T>(lists: &[Vec<T>], ignore_order: bool) -> Vec<Vec<T>>
where
    T: Ord + Clone,
{
    let mut seen: BTreeSet<Vec<T>> = BTreeSet::new();
    let mut out = Vec::new();
    for list in lists {
        let mut key = list.clone();
        if ignore_order {
            key.sort();
        }
        if seen.insert(key) {
            out.push(list.clone());
        }
    }
    out
}
