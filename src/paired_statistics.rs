use num_traits::Float;

use crate::{
    Ddof, Kbn, Result, RollingError,
    helper::{is_negligible_spread, kbn_sum},
};

/// Statistics over a pair of aligned windows.
///
/// `PairedStatistics<T>` computes measures of joint variability such as
/// covariance and correlation. Both windows have the same length; element `i`
/// of `x` is paired with element `i` of `y`.
#[derive(Debug, Clone, Copy)]
pub struct PairedStatistics<'a, T> {
    /// First window
    x: &'a [T],
    /// Second window
    y: &'a [T],
}

/// Sums of cross products of deviations from the means
struct CoMoments<T> {
    n: T,
    mean_x: T,
    mean_y: T,
    sxx: T,
    syy: T,
    sxy: T,
}

impl<'a, T: Float + Default> PairedStatistics<'a, T> {
    /// Creates a new `PairedStatistics` over two aligned windows.
    ///
    /// # Arguments
    ///
    /// * `x` - The first window, NaN-free
    /// * `y` - The second window, NaN-free
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The statistics object, or `LengthMismatch` if the windows differ in length
    pub fn new(x: &'a [T], y: &'a [T]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(RollingError::length_mismatch(x.len(), y.len()));
        }
        Ok(Self { x, y })
    }

    /// Returns the number of pairs
    pub fn len(&self) -> usize {
        self.x.len()
    }

    fn co_moments(&self) -> Option<CoMoments<T>> {
        let n = T::from(self.x.len())?;
        if self.x.is_empty() {
            return None;
        }
        let mean_x = kbn_sum(self.x) / n;
        let mean_y = kbn_sum(self.y) / n;

        let mut sxx = Kbn::<T>::default();
        let mut syy = Kbn::<T>::default();
        let mut sxy = Kbn::<T>::default();
        for (&x, &y) in self.x.iter().zip(self.y) {
            let dx = x - mean_x;
            let dy = y - mean_y;
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }

        Some(CoMoments {
            n,
            mean_x,
            mean_y,
            sxx: sxx.total(),
            syy: syy.total(),
            sxy: sxy.total(),
        })
    }

    /// Returns the covariance of the paired values, `sum((x - x̄)(y - ȳ)) / (n - ddof)`
    ///
    /// # Arguments
    ///
    /// * `ddof` - Delta Degrees of Freedom
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The covariance, or `None` if `ddof >= n`
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayflux::{Ddof, PairedStatistics};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let x = [2.0_f64, 4.0, 6.0];
    /// let y = [1.0, 3.0, 2.0];
    /// let stats = PairedStatistics::new(&x, &y).unwrap();
    /// assert_approx_eq!(stats.cov(Ddof::POPULATION).unwrap(), 0.6667, 0.0001);
    /// assert_approx_eq!(stats.cov(Ddof::SAMPLE).unwrap(), 1.0);
    /// ```
    pub fn cov(&self, ddof: Ddof) -> Option<T> {
        let divisor = T::from(ddof.divisor(self.len())?)?;
        Some(self.co_moments()?.sxy / divisor)
    }

    /// Returns the Pearson correlation coefficient of the paired values
    ///
    /// Equal to `cov(ddof) / (stddev_x(ddof) * stddev_y(ddof))`, evaluated as
    /// `cov / sqrt(var_x * var_y)` so that perfectly linear pairs give exactly
    /// `±1`. The `ddof` divisor cancels, but still decides whether the result
    /// is defined.
    ///
    /// # Arguments
    ///
    /// * `ddof` - Delta Degrees of Freedom
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The correlation, or `None` if `ddof >= n` or either window has
    ///   zero variance, judged at the precision of `T` relative to its mean
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayflux::{Ddof, PairedStatistics};
    ///
    /// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let y = [5.0, 4.0, 3.0, 2.0, 1.0];
    /// let stats = PairedStatistics::new(&x, &y).unwrap();
    /// assert_eq!(stats.corr(Ddof::POPULATION), Some(-1.0));
    /// ```
    pub fn corr(&self, ddof: Ddof) -> Option<T> {
        let divisor = T::from(ddof.divisor(self.len())?)?;
        let m = self.co_moments()?;
        let flat_x = is_negligible_spread(m.sxx / m.n, m.mean_x);
        let flat_y = is_negligible_spread(m.syy / m.n, m.mean_y);
        if flat_x || flat_y {
            return None;
        }

        let var_x = m.sxx / divisor;
        let var_y = m.syy / divisor;
        Some((m.sxy / divisor) / (var_x * var_y).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    fn rolling<F>(inputs: &[(f64, f64)], period: usize, f: F) -> Vec<f64>
    where
        F: Fn(&PairedStatistics<'_, f64>) -> Option<f64>,
    {
        let (x, y): (Vec<f64>, Vec<f64>) = inputs.iter().copied().unzip();
        x.windows(period)
            .zip(y.windows(period))
            .filter_map(|(wx, wy)| PairedStatistics::new(wx, wy).ok().as_ref().and_then(&f))
            .collect()
    }

    #[test]
    fn cov_works() {
        let inputs = [(2.0, 1.0), (4.0, 3.0), (6.0, 2.0), (8.0, 5.0), (10.0, 7.0)];

        let results = rolling(&inputs, 3, |s| s.cov(Ddof::POPULATION));
        let expected: [f64; 3] = [0.6667, 1.3333, 3.3333];
        assert_eq!(results.len(), expected.len());
        for (i, e) in expected.iter().enumerate() {
            assert_approx_eq!(e, results[i], 0.0001);
        }

        let results = rolling(&inputs, 3, |s| s.cov(Ddof::SAMPLE));
        let expected: [f64; 3] = [1.0, 2.0, 5.0];
        for (i, e) in expected.iter().enumerate() {
            assert_approx_eq!(e, results[i], 1e-12);
        }
    }

    #[test]
    fn corr_works() {
        let inputs = [
            (0.496714, 0.115991),
            (-0.138264, -0.329650),
            (0.647689, 0.574363),
            (1.523030, 0.109481),
            (-0.234153, -1.026366),
            (-0.234137, -0.445040),
            (1.579213, 0.599033),
            (0.767435, 0.694328),
            (-0.469474, -0.782644),
            (0.542560, -0.326360),
        ];

        let results = rolling(&inputs, 3, |s| s.corr(Ddof::POPULATION));
        let expected: [f64; 8] = [
            0.939464, 0.458316, 0.691218, 0.859137, 0.935658, 0.858379, 0.895148, 0.842302,
        ];
        assert_eq!(results.len(), expected.len());
        for (i, e) in expected.iter().enumerate() {
            assert_approx_eq!(e, results[i], 0.0001);
        }

        // ddof cancels out of the ratio
        let sample = rolling(&inputs, 3, |s| s.corr(Ddof::SAMPLE));
        for (p, s) in results.iter().zip(&sample) {
            assert_approx_eq!(p, s, 1e-12);
        }
    }

    #[test]
    fn corr_is_symmetric() {
        let x = [0.3, -1.2, 2.5, 0.7, 1.9];
        let y = [1.1, 0.4, -0.8, 2.2, 0.0];
        let xy = PairedStatistics::new(&x, &y).unwrap().corr(Ddof::POPULATION);
        let yx = PairedStatistics::new(&y, &x).unwrap().corr(Ddof::POPULATION);
        assert_eq!(xy, yx);
    }

    #[test]
    fn perfect_linear_relationship() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [5.0, 4.0, 3.0, 2.0, 1.0];
        let stats = PairedStatistics::new(&x, &y).unwrap();
        assert_eq!(stats.corr(Ddof::POPULATION), Some(-1.0));
        assert_eq!(stats.cov(Ddof::POPULATION), Some(-2.0));
        let stats = PairedStatistics::new(&x, &x).unwrap();
        assert_eq!(stats.corr(Ddof::SAMPLE), Some(1.0));
    }

    #[test]
    fn near_constant_window_has_no_correlation() {
        // 0.1 is inexact, so the deviations from the mean are not exactly zero
        let flat = [0.1, 0.1, 0.1];
        let y = [1.0, 2.0, 4.0];
        let stats = PairedStatistics::new(&flat, &y).unwrap();
        assert!(stats.corr(Ddof::POPULATION).is_none());
        assert!(PairedStatistics::new(&y, &flat).unwrap().corr(Ddof::SAMPLE).is_none());

        let x = [0.1, 0.1, 0.7];
        let stats = PairedStatistics::new(&x, &y).unwrap();
        assert!(stats.corr(Ddof::POPULATION).is_some());
    }

    #[test]
    fn undefined_cases() {
        let x = [1.0, 2.0, 3.0];
        let flat = [4.0, 4.0, 4.0];
        let stats = PairedStatistics::new(&x, &flat).unwrap();
        assert_eq!(stats.cov(Ddof::POPULATION), Some(0.0));
        assert!(stats.corr(Ddof::POPULATION).is_none());

        let stats = PairedStatistics::new(&x, &x).unwrap();
        assert!(stats.cov(Ddof::new(3)).is_none());
        assert!(stats.corr(Ddof::new(3)).is_none());

        assert_eq!(
            PairedStatistics::new(&x, &x[..2]).unwrap_err(),
            RollingError::length_mismatch(3, 2)
        );
    }
}
