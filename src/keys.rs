use alloc::vec::Vec;

/// Returns the keys of a string-keyed map, sorted in ascending byte order.
///
/// Accepts anything that iterates as `(key, value)` pairs, so both owned maps and references to
/// maps work.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use index_deque::sorted_keys;
///
/// let map: HashMap<_, _> = [("b", 1), ("a", 2), ("c", 3)].into_iter().collect();
/// assert_eq!(sorted_keys(&map), [&"a", &"b", &"c"]);
/// ```
pub fn sorted_keys<M, K, V>(map: M) -> Vec<K>
where
    M: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
{
    let mut keys: Vec<K> = map.into_iter().map(|(key, _)| key).collect();
    keys.sort_unstable_by(|a, b| a.as_ref().cmp(b.as_ref()));
    keys
}
