use alloc::string::ToString;

use crate::{Result, RollingError};

/// Delta Degrees of Freedom, subtracted from the window size to form the
/// divisor of variance, standard deviation and covariance.
///
/// A `Ddof` at or above the window size leaves no degrees of freedom; the
/// affected windows come out missing rather than failing the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ddof(usize);

impl Ddof {
    /// Population statistics, divisor `W`
    pub const POPULATION: Self = Self(0);
    /// Sample statistics with Bessel's correction, divisor `W - 1`
    pub const SAMPLE: Self = Self(1);

    /// Creates a new `Ddof`
    pub const fn new(ddof: usize) -> Self {
        Self(ddof)
    }

    /// Returns the raw value
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the divisor `n - ddof`, or `None` if it is not positive
    #[inline]
    pub const fn divisor(self, n: usize) -> Option<usize> {
        match n.checked_sub(self.0) {
            Some(0) | None => None,
            d => d,
        }
    }
}

impl TryFrom<i64> for Ddof {
    type Error = RollingError;

    fn try_from(ddof: i64) -> Result<Self> {
        usize::try_from(ddof)
            .map(Self)
            .map_err(|_| RollingError::InvalidParameter {
                name: "ddof",
                value: ddof.to_string(),
                expected: "a non-negative integer",
            })
    }
}

/// A quantile fraction, validated to lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Quantile(f64);

impl Quantile {
    /// The median
    pub const MEDIAN: Self = Self(0.5);

    /// Validates a quantile fraction
    ///
    /// # Arguments
    ///
    /// * `q` - The fraction, in `[0, 1]`
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The quantile, or `InvalidParameter` if `q` is outside `[0, 1]` or NaN
    pub fn new(q: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&q) {
            Ok(Self(q))
        } else {
            Err(RollingError::InvalidParameter {
                name: "q",
                value: q.to_string(),
                expected: "a fraction in [0, 1]",
            })
        }
    }

    /// Returns the fraction
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Quantile {
    type Error = RollingError;

    fn try_from(q: f64) -> Result<Self> {
        Self::new(q)
    }
}

/// Options for rolling kurtosis.
///
/// The defaults, `bias: false, fisher: false`, give the bias-corrected Pearson
/// kurtosis, the same as `scipy.stats.kurtosis(w, bias=False, fisher=False)`
/// applied per window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KurtosisOptions {
    /// Skip the small-sample bias correction
    pub bias: bool,
    /// Report excess kurtosis, subtracting 3
    pub fisher: bool,
}

impl KurtosisOptions {
    /// Creates a new set of kurtosis options
    pub const fn new(bias: bool, fisher: bool) -> Self {
        Self { bias, fisher }
    }

    /// Sets the bias flag
    pub const fn with_bias(mut self, bias: bool) -> Self {
        self.bias = bias;
        self
    }

    /// Sets the Fisher flag
    pub const fn with_fisher(mut self, fisher: bool) -> Self {
        self.fisher = fisher;
        self
    }
}
