//! Splitting a trial count into independent batches

/// Split `trials` into at most `batches` contiguous `[start, end)` ranges
///
/// Sizes differ by at most one, with the larger ranges first. Never returns
/// an empty range.
pub fn batch_ranges(trials: usize, batches: usize) -> Vec<(usize, usize)> {
    if trials == 0 || batches == 0 {
        return Vec::new();
    }
    let batches = batches.min(trials);
    let base = trials / batches;
    let extra = trials % batches;

    let mut start = 0;
    (0..batches)
        .map(|i| {
            let end = start + base + usize::from(i < extra);
            let range = (start, end);
            start = end;
            range
        })
        .collect()
}
