//! Bounded subsampling for display paths.
//!
//! Views never render more than a fixed number of rows; these helpers take a
//! positional subsample without copying the records.

/// First `limit` items of a slice.
pub fn head<T>(items: &[T], limit: usize) -> &[T] {
    &items[..items.len().min(limit)]
}

/// Up to `limit` items taken at evenly spaced positions across the slice.
///
/// The first item is always included when the slice is non-empty; order is
/// preserved.
pub fn evenly_spaced<T>(items: &[T], limit: usize) -> Vec<&T> {
    if items.is_empty() || limit == 0 {
        return Vec::new();
    }
    if items.len() <= limit {
        return items.iter().collect();
    }

    let step = items.len() as f64 / limit as f64;
    (0..limit)
        .map(|i| &items[(i as f64 * step) as usize])
        .collect()
}
