use std::cmp::Ordering;

/// total order on the keys, NaN is equal to itself and larger than everything else
fn compare_keys(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// takes pairs of (index, key) and returns the indices ordered by ascending key
/// the sort is stable, pairs with equal keys keep the order in which they were given
pub fn sorted_indices<I: Copy>(pairs: &[(I, f64)]) -> Vec<I> {
    let mut pairs = pairs.to_vec();
    pairs.sort_by(|a, b| compare_keys(a.1, b.1));
    pairs.into_iter().map(|(index, _)| index).collect()
}
