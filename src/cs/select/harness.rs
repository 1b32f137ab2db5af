//! Timing harness for the two selection algorithms.
//!
//! For every `(size, shape)` pair the harness generates a fresh input per
//! trial, hands an independent copy to each algorithm, and averages the
//! wall-clock time of each call over all trials. Records come back in
//! `sizes x shapes` order; printing them is left to the caller.
//!
//! # Examples
//!
//! ```rust
//! use orderstat::select::harness::{BenchmarkConfig, InputShape};
//!
//! let records = BenchmarkConfig::default()
//!     .with_sizes([1_000])
//!     .with_shapes(["random", "dupes"])
//!     .with_trials(2)
//!     .with_seed(7)
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].shape, InputShape::Dupes);
//! ```

use std::fmt;
use std::hint::black_box;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::debug;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cs::error::{Error, Result};
use crate::cs::select::{deterministic_select, percentile_rank, randomized_select};

/// Shape of a generated benchmark input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputShape {
    /// `n` distinct values sampled without replacement from `0..10n`.
    Random,
    /// `0, 1, ..., n - 1`.
    Sorted,
    /// `n, n - 1, ..., 1`.
    Reverse,
    /// `n` values drawn with repetition from `0..=max(n / 10, 1)`.
    Dupes,
}

impl InputShape {
    pub const ALL: [InputShape; 4] = [
        InputShape::Random,
        InputShape::Sorted,
        InputShape::Reverse,
        InputShape::Dupes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InputShape::Random => "random",
            InputShape::Sorted => "sorted",
            InputShape::Reverse => "reverse",
            InputShape::Dupes => "dupes",
        }
    }

    /// Generates an input of length `n` with this shape.
    pub fn generate<R: Rng + ?Sized>(self, n: usize, rng: &mut R) -> Vec<i64> {
        if n == 0 {
            return Vec::new();
        }
        match self {
            InputShape::Random => index::sample(rng, n.saturating_mul(10), n)
                .into_iter()
                .map(|v| v as i64)
                .collect(),
            InputShape::Sorted => (0..n as i64).collect(),
            InputShape::Reverse => (1..=n as i64).rev().collect(),
            InputShape::Dupes => {
                let max = (n / 10).max(1) as i64;
                (0..n).map(|_| rng.gen_range(0..=max)).collect()
            }
        }
    }
}

impl fmt::Display for InputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for InputShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        InputShape::ALL
            .into_iter()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| Error::invalid_configuration(format!("unknown input shape `{}`", s)))
    }
}

/// Generates an input of length `n` for the shape named `shape`.
///
/// # Errors
/// `Error::InvalidConfiguration` if `shape` is not one of
/// `random`, `sorted`, `reverse`, `dupes`.
pub fn generate_input<R: Rng + ?Sized>(n: usize, shape: &str, rng: &mut R) -> Result<Vec<i64>> {
    let shape: InputShape = shape.parse()?;
    Ok(shape.generate(n, rng))
}

/// Wall-clock time of a single call to `f`.
pub fn time_once<O, F: FnOnce() -> O>(f: F) -> Duration {
    let start = Instant::now();
    black_box(f());
    start.elapsed()
}

/// Mean timings of both algorithms for one `(size, shape)` configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkRecord {
    pub size: usize,
    pub shape: InputShape,
    pub randomized: Duration,
    pub deterministic: Duration,
}

impl BenchmarkRecord {
    /// How many times slower the deterministic algorithm ran, or `None` when
    /// the randomized time is too small to measure.
    pub fn ratio(&self) -> Option<f64> {
        if self.randomized.is_zero() {
            None
        } else {
            Some(self.deterministic.as_secs_f64() / self.randomized.as_secs_f64())
        }
    }
}

/// Times both algorithms on every `(size, shape)` pair, averaging over `trials`
/// runs, and selects the element at `percentile` of each input.
///
/// All parameters are validated before anything is generated or timed.
///
/// # Errors
/// `Error::InvalidConfiguration` for an unknown shape name, a zero size, a
/// trial count of zero or above `u32::MAX`, or a percentile outside `[0, 1]`.
pub fn benchmark<R, S>(
    sizes: &[usize],
    shapes: &[S],
    trials: usize,
    percentile: f64,
    rng: &mut R,
) -> Result<Vec<BenchmarkRecord>>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let shapes = shapes
        .iter()
        .map(|s| s.as_ref().parse())
        .collect::<Result<Vec<InputShape>>>()?;
    if trials == 0 {
        return Err(Error::invalid_configuration("trial count must be positive"));
    }
    let divisor = u32::try_from(trials)
        .map_err(|_| Error::invalid_configuration(format!("trial count {} is too large", trials)))?;
    if !(0.0..=1.0).contains(&percentile) {
        return Err(Error::invalid_configuration(format!(
            "percentile {} is outside [0, 1]",
            percentile
        )));
    }
    if sizes.contains(&0) {
        return Err(Error::invalid_configuration("input sizes must be positive"));
    }

    let mut records = Vec::with_capacity(sizes.len() * shapes.len());
    for &n in sizes {
        let k = percentile_rank(n, percentile);
        for &shape in &shapes {
            debug!("benchmarking n={} shape={} k={} trials={}", n, shape, k, trials);

            let mut randomized = Duration::ZERO;
            let mut deterministic = Duration::ZERO;
            for _ in 0..trials {
                let mut a = shape.generate(n, rng);
                let mut b = a.clone();
                randomized += time_once(|| randomized_select(&mut a, k, rng));
                deterministic += time_once(|| deterministic_select(&mut b, k));
            }

            let record = BenchmarkRecord {
                size: n,
                shape,
                randomized: randomized / divisor,
                deterministic: deterministic / divisor,
            };
            debug!(
                "n={} shape={} randomized={:?} deterministic={:?}",
                n, shape, record.randomized, record.deterministic
            );
            records.push(record);
        }
    }
    Ok(records)
}

/// Parameters of a benchmark run.
///
/// The defaults compare sizes 10_000, 50_000 and 100_000 on all four shapes,
/// three trials each, selecting the median.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    pub sizes: Vec<usize>,
    pub shapes: Vec<String>,
    pub trials: usize,
    pub percentile: f64,
    /// Seed for input generation and pivot choice; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10_000, 50_000, 100_000],
            shapes: InputShape::ALL.iter().map(|s| s.name().to_string()).collect(),
            trials: 3,
            percentile: 0.5,
            seed: None,
        }
    }
}

impl BenchmarkConfig {
    pub fn with_sizes<I: IntoIterator<Item = usize>>(mut self, sizes: I) -> Self {
        self.sizes = sizes.into_iter().collect();
        self
    }

    pub fn with_shapes<I, S>(mut self, shapes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shapes = shapes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_percentile(mut self, percentile: f64) -> Self {
        self.percentile = percentile;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn run(&self) -> Result<Vec<BenchmarkRecord>> {
        let mut rng = match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        benchmark(
            &self.sizes,
            &self.shapes,
            self.trials,
            self.percentile,
            &mut rng,
        )
    }
}
