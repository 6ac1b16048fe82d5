use std::collections::BTreeMap;

/// Group items by a computed key.
///
/// Groups come out in key order and each group keeps the input order of its
/// items, so callers get deterministic output from unordered catalog rows.
pub fn group_by<T, K, I, F>(items: I, key: F) -> BTreeMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_key_preserving_item_order() {
        let groups = group_by([1, 2, 3, 4, 5], |value| value % 2);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&0], vec![2, 4]);
        assert_eq!(groups[&1], vec![1, 3, 5]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups = group_by(Vec::<&str>::new(), |value| value.len());
        assert!(groups.is_empty());
    }

    #[test]
    fn keys_come_out_sorted() {
        let groups = group_by(["orders", "accounts", "users"], |name| name.to_string());
        let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["accounts", "orders", "users"]);
    }
}
