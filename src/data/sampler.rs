// ---------------------------------------------------------------------------
// Distribution sampler: evenly spaced order statistics
// ---------------------------------------------------------------------------

/// Number of cards shown in the compact post list.
pub const DEFAULT_SAMPLE_COUNT: usize = 10;

/// Reduce `items` to `count` representatives spread across the score ranks.
///
/// * `count == 0` yields nothing.
/// * When there are no more than `count` items they are returned as-is, in
///   their original order (no sorting in this branch).
/// * Otherwise the items are stably sorted by `score` and the elements at
///   `round(i * (n - 1) / (count - 1))` for `i in 0..count` are picked, so
///   the lowest and highest scored items are always included. Indices may
///   repeat.
/// * `count == 1` picks the lowest scored item.
///
/// Deterministic; no randomness involved.
pub fn distributed_sample<T, F>(items: &[T], count: usize, score: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    if count == 0 {
        return Vec::new();
    }
    if items.len() <= count {
        return items.to_vec();
    }

    let mut sorted = items.to_vec();
    // `sort_by` is stable: ties keep their dataset order.
    sorted.sort_by(|a, b| score(a).total_cmp(&score(b)));

    if count == 1 {
        sorted.truncate(1);
        return sorted;
    }

    let step = (sorted.len() - 1) as f64 / (count - 1) as f64;
    (0..count)
        .map(|i| {
            let index = (i as f64 * step).round() as usize;
            sorted[index.min(sorted.len() - 1)].clone()
        })
        .collect()
}
