/// Partitions `arr[left..=right]` in place around the value at `pivot_index`.
///
/// The pivot is parked at `right`, every element strictly less than it is moved
/// to the front of the range, and the pivot is swapped into the slot after them.
/// Returns that final pivot position `p`:
/// - every element of `arr[left..p]` is `< pivot`
/// - every element of `arr[p..=right]` is `>= pivot`, with `arr[p] == pivot`
///
/// Elements equal to the pivot all end up on the right side. Only swaps are
/// performed, so the range is permuted and nothing is allocated.
///
/// # Panics
/// If `left > right`, `right >= arr.len()`, or `pivot_index` is outside `left..=right`.
///
/// # Complexity
/// * Time: `right - left` comparisons, at most `right - left + 1` swaps
/// * Space: O(1)
pub fn partition<T: Ord>(arr: &mut [T], left: usize, right: usize, pivot_index: usize) -> usize {
    assert!(left <= right && right < arr.len(), "range is out of bounds");
    assert!(
        (left..=right).contains(&pivot_index),
        "pivot index is outside the range"
    );

    arr.swap(pivot_index, right);
    let mut store = left;
    for i in left..right {
        if arr[i] < arr[right] {
            arr.swap(store, i);
            store += 1;
        }
    }
    arr.swap(right, store);
    store
}
