//! Order-statistic selection.
//!
//! Two ways of finding the k-th smallest element (zero-based) of an unordered
//! slice without sorting all of it:
//! - [`randomized_select`]: quickselect with a uniformly random pivot, expected O(n)
//! - [`deterministic_select`]: median-of-medians (BFPRT), worst-case O(n)
//!
//! Both are built on the same in-place [`partition`] step and both permute the
//! slice they are given. The [`harness`] module times them against each other.
//!
//! # Examples
//!
//! ```rust
//! use orderstat::select::{deterministic_select, randomized_select};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let data = vec![7, 1, 9, 3, 5, 2, 4, 8, 6];
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//!
//! assert_eq!(randomized_select(&mut data.clone(), 4, &mut rng).unwrap(), 5);
//! assert_eq!(deterministic_select(&mut data.clone(), 4).unwrap(), 5);
//! ```

use crate::cs::error::{Error, Result};

pub mod deterministic_select;
pub mod harness;
pub mod partition;
pub mod randomized_select;

pub use deterministic_select::{deterministic_select, median_of_five};
pub use harness::{
    benchmark, generate_input, time_once, BenchmarkConfig, BenchmarkRecord, InputShape,
};
pub use partition::partition;
pub use randomized_select::randomized_select;

/// Checks that `k` addresses an element of a collection of length `len`.
pub fn check_rank(len: usize, k: usize) -> Result<()> {
    if k < len {
        Ok(())
    } else {
        Err(Error::RankOutOfRange { k, len })
    }
}

/// Rank of the given percentile in a collection of `n` elements,
/// `floor(percentile * (n - 1))`.
///
/// The percentile is expected in `[0, 1]`; the result is clamped to `n - 1`.
pub fn percentile_rank(n: usize, percentile: f64) -> usize {
    let last = n.saturating_sub(1);
    let rank = (percentile * last as f64).floor();
    if rank <= 0.0 {
        0
    } else {
        (rank as usize).min(last)
    }
}
