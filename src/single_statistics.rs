use num_traits::Float;

use crate::{
    CentralMoments, Ddof, Kbn, KurtosisOptions, Quantile,
    helper::{kbn_sum, median_from_sorted_slice, quantile_from_sorted_slice, sort_floats},
};

/// Statistics over the values of a single window.
///
/// The window is borrowed mutably because order statistics (median,
/// quantile) sort it in place. The rolling engine hands each window to this
/// type as a scratch copy, never as a view of the source series.
///
/// All methods return `None` where the statistic is undefined for the window:
/// an empty window, `ddof` at or above the window size, or a window without
/// spread for the shape statistics.
#[derive(Debug)]
pub struct SingleStatistics<'a, T> {
    /// Window values, NaN-free
    buf: &'a mut [T],
}

impl<'a, T: Float + Default> SingleStatistics<'a, T> {
    /// Creates a new `SingleStatistics` over a window.
    ///
    /// # Arguments
    ///
    /// * `buf` - The window values, which must not contain NaN
    ///
    /// # Returns
    ///
    /// * `Self` - The statistics object
    pub fn new(buf: &'a mut [T]) -> Self {
        Self { buf }
    }

    /// Returns the number of values in the window
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    fn len_t(&self) -> Option<T> {
        if self.buf.is_empty() {
            None
        } else {
            T::from(self.buf.len())
        }
    }

    /// Returns the sum of the window, accumulated left to right with
    /// Kahan-Babuska-Neumaier compensation
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayflux::SingleStatistics;
    ///
    /// let mut w = [1.0, 2.0, 3.0];
    /// assert_eq!(SingleStatistics::new(&mut w).sum(), Some(6.0));
    /// ```
    pub fn sum(&self) -> Option<T> {
        if self.buf.is_empty() {
            return None;
        }
        Some(kbn_sum(self.buf))
    }

    /// Returns the product of the window, multiplied left to right
    pub fn prod(&self) -> Option<T> {
        self.buf.iter().copied().reduce(|acc, x| acc * x)
    }

    /// Returns the arithmetic mean of the window
    pub fn mean(&self) -> Option<T> {
        Some(self.sum()? / self.len_t()?)
    }

    /// Returns the minimum of the window
    pub fn min(&self) -> Option<T> {
        self.buf.iter().copied().reduce(T::min)
    }

    /// Returns the maximum of the window
    pub fn max(&self) -> Option<T> {
        self.buf.iter().copied().reduce(T::max)
    }

    /// Returns the variance of the window with divisor `n - ddof`
    ///
    /// Uses the two-pass formula: the mean first, then the compensated sum
    /// of squared deviations from it.
    ///
    /// # Arguments
    ///
    /// * `ddof` - Delta Degrees of Freedom
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The variance, or `None` if `ddof >= n`
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayflux::{Ddof, SingleStatistics};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let mut w = [2.0_f64, 4.0, 4.0, 4.0, 5.0];
    /// let stats = SingleStatistics::new(&mut w);
    /// assert_approx_eq!(stats.variance(Ddof::SAMPLE).unwrap(), 1.2);
    /// assert_approx_eq!(stats.variance(Ddof::POPULATION).unwrap(), 0.96);
    /// assert!(stats.variance(Ddof::new(5)).is_none());
    /// ```
    pub fn variance(&self, ddof: Ddof) -> Option<T> {
        let divisor = T::from(ddof.divisor(self.buf.len())?)?;
        let mean = self.mean()?;

        let mut ss = Kbn::<T>::default();
        for &x in self.buf.iter() {
            let d = x - mean;
            ss += d * d;
        }
        Some(ss.total() / divisor)
    }

    /// Returns the standard deviation of the window, the square root of
    /// [`variance`](Self::variance)
    pub fn stddev(&self, ddof: Ddof) -> Option<T> {
        self.variance(ddof).map(T::sqrt)
    }

    /// Returns the central moments of the window
    pub fn moments(&self) -> Option<CentralMoments<T>> {
        CentralMoments::new(self.buf)
    }

    /// Returns the skewness of the window
    ///
    /// # Arguments
    ///
    /// * `bias` - When `false`, apply the small-sample correction, undefined below 3 values
    pub fn skew(&self, bias: bool) -> Option<T> {
        self.moments()?.skew(bias)
    }

    /// Returns the kurtosis of the window
    ///
    /// # Arguments
    ///
    /// * `options` - Bias correction and Fisher (excess) flags
    pub fn kurt(&self, options: KurtosisOptions) -> Option<T> {
        self.moments()?.kurt(options.bias, options.fisher)
    }

    /// Returns the median of the window, sorting it in place
    ///
    /// For an even number of values this is the mean of the two middle
    /// values.
    pub fn median(&mut self) -> Option<T> {
        median_from_sorted_slice(sort_floats(self.buf))
    }

    /// Returns the `q`-quantile of the window, sorting it in place
    ///
    /// The quantile sits at position `q * (n - 1)` of the sorted window and
    /// is linearly interpolated between its neighbours.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayflux::{Quantile, SingleStatistics};
    ///
    /// let mut w = [4.0, 1.0, 3.0, 2.0];
    /// let q = Quantile::new(0.25).unwrap();
    /// assert_eq!(SingleStatistics::new(&mut w).quantile(q), Some(1.75));
    /// ```
    pub fn quantile(&mut self, q: Quantile) -> Option<T> {
        quantile_from_sorted_slice(sort_floats(self.buf), q.get())
    }
}
