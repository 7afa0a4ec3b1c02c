use std::ops::Range;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Splits `0..len` into contiguous ranges of at most `chunk_size` indices.
///
/// A `chunk_size` of zero is treated as one.
pub(crate) fn partition(len: usize, chunk_size: usize) -> Vec<Range<usize>> {
    let chunk_size = chunk_size.max(1);
    (0..len)
        .step_by(chunk_size)
        .map(|start| start..(start + chunk_size).min(len))
        .collect()
}

/// Runs `task` once per range of `partition(len, chunk_size)` and concatenates
/// the outputs in range order.
///
/// Ranges may run concurrently; the merge is the only synchronization point.
/// If several ranges fail, the error of the lowest range is returned, so the
/// outcome does not depend on scheduling.
pub(crate) fn map_ranges<T, E, F>(len: usize, chunk_size: usize, task: F) -> Result<Vec<T>, E>
where
    T: Send,
    E: Send,
    F: Fn(Range<usize>) -> Result<Vec<T>, E> + Sync + Send,
{
    let ranges = partition(len, chunk_size);

    #[cfg(not(feature = "parallel"))]
    let shards: Vec<Result<Vec<T>, E>> = ranges.into_iter().map(&task).collect();

    #[cfg(feature = "parallel")]
    let shards: Vec<Result<Vec<T>, E>> = ranges.into_par_iter().map(&task).collect();

    let mut merged = Vec::with_capacity(len);
    for shard in shards {
        merged.extend(shard?);
    }
    Ok(merged)
}
