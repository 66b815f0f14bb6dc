//! Iteration split for the simulator runner. Each batch gets its own seed,
//! so results depend on the batch count but not on the thread count.

/// Batch sizes for `iterations` samples over at most `batches` batches.
/// Sizes differ by at most one, earlier batches taking the remainder, and no
/// batch is empty.
///
/// ```
/// # use fleethub_core::parallel::split_iterations;
/// assert_eq!(split_iterations(10, 3), vec![4, 3, 3]);
/// ```
pub fn split_iterations(iterations: u32, batches: usize) -> Vec<u32> {
    if iterations == 0 || batches == 0 {
        return Vec::new();
    }
    let count = u32::try_from(batches).unwrap_or(u32::MAX).min(iterations);
    let base = iterations / count;
    let remainder = iterations % count;
    (0..count)
        .map(|index| base + u32::from(index < remainder))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_sum_to_the_request() {
        for (iterations, batches) in [(100, 4), (10_001, 16), (7, 7)] {
            let sizes = split_iterations(iterations, batches);
            assert_eq!(sizes.iter().sum::<u32>(), iterations);
            assert_eq!(sizes.len(), batches);
        }
    }

    #[test]
    fn small_runs_use_fewer_batches() {
        assert_eq!(split_iterations(3, 16), vec![1, 1, 1]);
    }

    #[test]
    fn nothing_to_split() {
        assert!(split_iterations(0, 4).is_empty());
        assert!(split_iterations(10, 0).is_empty());
    }
}
