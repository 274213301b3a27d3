use num_traits::Float;

use crate::{
    Kbn,
    helper::{is_negligible_spread, kbn_sum},
};

/// Central moments of a single window, computed in two passes.
///
/// The first pass takes the mean; the second accumulates powers of the
/// deviations from it with Kahan-Babuska-Neumaier summation. This avoids the
/// cancellation that raw power sums suffer when the values are large relative
/// to their spread.
///
/// All moments are biased, i.e. divided by the window size `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralMoments<T> {
    /// Number of observations
    n: usize,
    /// Mean
    mean: T,
    /// Second central moment
    m2: T,
    /// Third central moment
    m3: T,
    /// Fourth central moment
    m4: T,
}

impl<T: Float + Default> CentralMoments<T> {
    /// Computes the central moments of a window
    ///
    /// # Arguments
    ///
    /// * `xs` - The window, free of NaN
    ///
    /// # Returns
    ///
    /// * `Option<Self>` - The moments, or `None` if the window is empty
    pub fn new(xs: &[T]) -> Option<Self> {
        if xs.is_empty() {
            return None;
        }
        let n = T::from(xs.len())?;

        let mean = kbn_sum(xs) / n;

        let mut m2 = Kbn::<T>::default();
        let mut m3 = Kbn::<T>::default();
        let mut m4 = Kbn::<T>::default();
        for &x in xs {
            let d = x - mean;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
            m4 += d2 * d2;
        }

        Some(Self {
            n: xs.len(),
            mean,
            m2: m2.total() / n,
            m3: m3.total() / n,
            m4: m4.total() / n,
        })
    }

    /// Returns the number of observations
    pub const fn count(&self) -> usize {
        self.n
    }

    /// Returns the mean
    pub const fn mean(&self) -> T {
        self.mean
    }

    /// Returns the biased second central moment
    pub const fn m2(&self) -> T {
        self.m2
    }

    /// Returns the biased third central moment
    pub const fn m3(&self) -> T {
        self.m3
    }

    /// Returns the biased fourth central moment
    pub const fn m4(&self) -> T {
        self.m4
    }

    /// Returns `true` when the spread is indistinguishable from zero at the
    /// precision of `T`, relative to the mean
    fn is_degenerate(&self) -> bool {
        is_negligible_spread(self.m2, self.mean)
    }

    /// Returns the skewness
    ///
    /// Computes `g1 = m3 / m2^1.5`. With `bias == false`, applies the
    /// adjusted Fisher-Pearson correction `sqrt(n (n - 1)) / (n - 2)`.
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The skewness, or `None` if the window has zero spread,
    ///   or if the correction is requested with fewer than 3 observations
    pub fn skew(&self, bias: bool) -> Option<T> {
        if self.is_degenerate() {
            return None;
        }
        let g1 = self.m3 / self.m2.powf(T::from(1.5)?);

        if bias {
            return Some(g1);
        }
        if self.n < 3 {
            return None;
        }
        let n = T::from(self.n)?;
        let _2 = T::from(2.0)?;
        let correction = (n * (n - T::one())).sqrt() / (n - _2);
        Some(correction * g1)
    }

    /// Returns the kurtosis
    ///
    /// Computes the Pearson kurtosis `m4 / m2^2`. With `bias == false`,
    /// applies the small-sample correction
    /// `((n^2 - 1) m4 / m2^2 - 3 (n - 1)^2) / ((n - 2)(n - 3)) + 3`.
    /// With `fisher == true`, 3 is subtracted to give excess kurtosis.
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The kurtosis, or `None` if the window has zero spread,
    ///   or if the correction is requested with fewer than 4 observations
    pub fn kurt(&self, bias: bool, fisher: bool) -> Option<T> {
        if self.is_degenerate() {
            return None;
        }
        let _2 = T::from(2.0)?;
        let _3 = T::from(3.0)?;

        let mut kurt = self.m4 / self.m2.powi(2);
        if !bias {
            if self.n < 4 {
                return None;
            }
            let n = T::from(self.n)?;
            let _1 = T::one();
            let numerator = (n * n - _1) * kurt - _3 * (n - _1) * (n - _1);
            kurt = numerator / ((n - _2) * (n - _3)) + _3;
        }

        if fisher { Some(kurt - _3) } else { Some(kurt) }
    }
}
