use rand::Rng;

use crate::cs::error::Result;
use crate::cs::select::{check_rank, partition};

/// Returns the k-th smallest element (zero-based) of `arr` using quickselect
/// with a uniformly random pivot drawn from `rng`.
///
/// `arr` is permuted in place. The active range shrinks in a loop rather than
/// by recursion, so stack usage stays constant even when the pivots are poor.
///
/// # Errors
/// `Error::RankOutOfRange` if `k >= arr.len()`, which includes every `k` for an empty slice.
///
/// # Complexity
/// * Time: expected O(n), worst case O(n^2). Inputs with many equal values
///   degrade towards the worst case because equal elements all land right of the pivot.
/// * Space: O(1)
pub fn randomized_select<T, R>(arr: &mut [T], k: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    check_rank(arr.len(), k)?;

    let mut left = 0;
    let mut right = arr.len() - 1;
    loop {
        if left == right {
            return Ok(arr[left].clone());
        }
        let pivot_index = rng.gen_range(left..=right);
        let pivot_index = partition(arr, left, right, pivot_index);
        if k == pivot_index {
            return Ok(arr[pivot_index].clone());
        } else if k < pivot_index {
            right = pivot_index - 1;
        } else {
            left = pivot_index + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::error::Error;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_randomized_select() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut arr = [7, 1, 3, 4, 6, 2, 5];
        let kth = randomized_select(&mut arr, 3, &mut rng).unwrap(); // 0-indexed: 4th smallest element
        let mut sorted = arr;
        sorted.sort();
        assert_eq!(kth, sorted[3]);
        assert_eq!(kth, 4);
    }

    #[test]
    fn test_every_rank() {
        let data = [7, 1, 9, 3, 5, 2, 4, 8, 6];
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for kth in 0..data.len() {
            let mut arr = data;
            assert_eq!(randomized_select(&mut arr, kth, &mut rng).unwrap(), kth as i32 + 1);
        }
    }

    #[test]
    fn test_leaves_a_permutation() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let original: Vec<i64> = (0..500).map(|_| rng.gen_range(-50..50)).collect();
        let mut arr = original.clone();
        let value = randomized_select(&mut arr, 123, &mut rng).unwrap();

        let mut expected = original;
        expected.sort();
        assert_eq!(value, expected[123]);
        // the selected value sits at its sorted position
        assert_eq!(arr[123], value);
        arr.sort();
        assert_eq!(arr, expected);
    }

    #[test]
    fn test_same_seed_same_permutation() {
        let data: Vec<u32> = (0..200).rev().collect();
        let mut a = data.clone();
        let mut b = data;
        randomized_select(&mut a, 50, &mut ChaCha20Rng::seed_from_u64(5)).unwrap();
        randomized_select(&mut b, 50, &mut ChaCha20Rng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_element() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(randomized_select(&mut [11], 0, &mut rng), Ok(11));
    }

    #[test]
    fn test_rank_out_of_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let mut arr = [3, 1, 2];
        assert_eq!(
            randomized_select(&mut arr, 3, &mut rng),
            Err(Error::RankOutOfRange { k: 3, len: 3 })
        );
        let mut empty: [i32; 0] = [];
        assert_eq!(
            randomized_select(&mut empty, 0, &mut rng),
            Err(Error::RankOutOfRange { k: 0, len: 0 })
        );
    }

    #[test]
    fn test_all_equal_terminates() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut arr = vec![8u8; 5_000];
        assert_eq!(randomized_select(&mut arr, 2_500, &mut rng), Ok(8));
        assert_eq!(randomized_select(&mut arr, 4_999, &mut rng), Ok(8));
    }

    #[test]
    fn test_strings() {
        let mut rng = ChaCha20Rng::seed_from_u64(17);
        let mut words = vec!["pear", "apple", "fig", "kiwi", "date"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        assert_eq!(
            randomized_select(&mut words, 1, &mut rng).unwrap(),
            "date".to_string()
        );
    }
}
