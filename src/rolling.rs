use num_traits::Float;

use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    Ddof, KurtosisOptions, PairedStatistics, Quantile, Result, RollingError, Series,
    SingleStatistics, Value, Windows,
};

/// Rolling window operations bound to a parent [`Series`].
///
/// Obtained from [`Series::rolling`]. Every statistic produces a new series
/// of the same length as the parent. Output `i` summarizes the window ending
/// at input `i`, so the first `window - 1` outputs are missing. When the
/// window is longer than the series, the whole output is missing.
///
/// A window containing a missing input produces a missing output. So does a
/// window where the statistic is undefined, e.g. a `ddof` that leaves no
/// degrees of freedom or a skewness over a constant window. Neither case
/// aborts the call.
///
/// # Examples
///
/// ```
/// use arrayflux::{Value, arrayflux};
/// use Value::{Missing, Present};
///
/// let s = arrayflux([1.0, 2.0, 3.0, 4.0, 5.0]);
/// let rolling = s.rolling(3).unwrap();
///
/// let sum = rolling.sum();
/// let expected = [Missing, Missing, Present(6.0), Present(9.0), Present(12.0)];
/// assert!(sum.eq_missing(&expected.into_iter().collect()));
///
/// let min = rolling.min();
/// assert_eq!(min.slice(2..), Some(arrayflux([1.0, 2.0, 3.0])));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rolling<'a, T> {
    /// The series the windows are drawn from
    parent: &'a Series<T>,
    /// Windows over the parent
    windows: Windows<'a, Value<T>>,
}

impl<'a, T> Rolling<'a, T>
where
    T: Float + Default + Send + Sync,
{
    /// Creates a new `Rolling` over `parent` with the specified window size.
    ///
    /// # Arguments
    ///
    /// * `parent` - The series to roll over
    /// * `window` - The window size
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The rolling handle, or `InvalidWindow` if `window` is 0
    pub fn new(parent: &'a Series<T>, window: usize) -> Result<Self> {
        let windows = Windows::new(parent.as_slice(), window)?;
        if windows.is_empty() {
            log::debug!(
                "rolling window {window} exceeds series length {}, output is all missing",
                parent.len()
            );
        } else {
            log::debug!(
                "rolling window {window} over {} values, {} windows",
                parent.len(),
                windows.len()
            );
        }
        Ok(Self { parent, windows })
    }

    /// Returns the window size
    pub const fn window(&self) -> usize {
        self.windows.size()
    }

    /// Returns the parent series
    pub const fn parent(&self) -> &'a Series<T> {
        self.parent
    }

    /// Returns the windows over the parent series
    pub const fn windows(&self) -> Windows<'a, Value<T>> {
        self.windows
    }

    /// Returns the number of complete windows, `max(0, N - W + 1)`
    pub const fn len(&self) -> usize {
        self.windows.len()
    }

    /// Returns `true` if the window is longer than the parent series
    pub const fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Rolling arithmetic mean
    pub fn mean(&self) -> Series<T> {
        self.evaluate("mean", |w| SingleStatistics::new(w).mean())
    }

    /// Rolling standard deviation with divisor `W - ddof`.
    ///
    /// Pass `1` for the sample standard deviation (the usual default), `0`
    /// for the population one.
    ///
    /// # Returns
    ///
    /// * `Result<Series<T>>` - The rolling standard deviation, or `InvalidParameter` if `ddof` is negative
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayflux::arrayflux;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let s = arrayflux([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    /// let std = s.rolling(5).unwrap().std(1).unwrap();
    /// assert!(std[3].is_missing());
    /// assert_approx_eq!(std[4].unwrap_or(f64::NAN), 1.2_f64.sqrt());
    ///
    /// // no degrees of freedom left
    /// let std = s.rolling(5).unwrap().std(5).unwrap();
    /// assert!(std.iter().all(|v| v.is_missing()));
    /// ```
    pub fn std(&self, ddof: i64) -> Result<Series<T>> {
        let ddof = Ddof::try_from(ddof)?;
        Ok(self.evaluate("std", move |w| SingleStatistics::new(w).stddev(ddof)))
    }

    /// Rolling variance with divisor `W - ddof`.
    ///
    /// # Returns
    ///
    /// * `Result<Series<T>>` - The rolling variance, or `InvalidParameter` if `ddof` is negative
    pub fn var(&self, ddof: i64) -> Result<Series<T>> {
        let ddof = Ddof::try_from(ddof)?;
        Ok(self.evaluate("var", move |w| SingleStatistics::new(w).variance(ddof)))
    }

    /// Rolling minimum
    pub fn min(&self) -> Series<T> {
        self.evaluate("min", |w| SingleStatistics::new(w).min())
    }

    /// Rolling maximum
    pub fn max(&self) -> Series<T> {
        self.evaluate("max", |w| SingleStatistics::new(w).max())
    }

    /// Rolling median
    pub fn median(&self) -> Series<T> {
        self.evaluate("median", |w| SingleStatistics::new(w).median())
    }

    /// Rolling sum
    pub fn sum(&self) -> Series<T> {
        self.evaluate("sum", |w| SingleStatistics::new(w).sum())
    }

    /// Rolling product
    pub fn prod(&self) -> Series<T> {
        self.evaluate("prod", |w| SingleStatistics::new(w).prod())
    }

    /// Rolling `q`-quantile, linearly interpolated between order statistics.
    ///
    /// # Returns
    ///
    /// * `Result<Series<T>>` - The rolling quantile, or `InvalidParameter` if `q` is outside `[0, 1]`
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayflux::{RollingError, arrayflux};
    ///
    /// let s = arrayflux([1.0, 5.0, 2.0, 8.0]);
    /// let q = s.rolling(4).unwrap().quantile(0.25).unwrap();
    /// assert_eq!(q[3], 1.75);
    ///
    /// assert!(matches!(
    ///     s.rolling(4).unwrap().quantile(1.5),
    ///     Err(RollingError::InvalidParameter { name: "q", .. })
    /// ));
    /// ```
    pub fn quantile(&self, q: f64) -> Result<Series<T>> {
        let q = Quantile::new(q)?;
        Ok(self.evaluate("quantile", move |w| SingleStatistics::new(w).quantile(q)))
    }

    /// Rolling skewness.
    ///
    /// With `bias == true` (the usual default) this is the biased estimator
    /// `m3 / m2^1.5`. With `bias == false` the small-sample correction is
    /// applied, which needs at least 3 values per window.
    pub fn skew(&self, bias: bool) -> Series<T> {
        self.evaluate("skew", move |w| SingleStatistics::new(w).skew(bias))
    }

    /// Rolling kurtosis.
    ///
    /// `KurtosisOptions::default()` gives the bias-corrected Pearson
    /// kurtosis, which needs at least 4 values per window.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayflux::{KurtosisOptions, arrayflux};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let s = arrayflux([25.4, 26.2, 26.0, 26.1, 25.8]);
    /// let excess = s.rolling(4).unwrap().kurt(KurtosisOptions::new(false, true));
    /// assert_approx_eq!(excess[3].unwrap_or(f64::NAN), 3.0144, 0.0001);
    /// ```
    pub fn kurt(&self, options: KurtosisOptions) -> Series<T> {
        self.evaluate("kurt", move |w| SingleStatistics::new(w).kurt(options))
    }

    /// Rolling covariance with `other`, divisor `W - ddof`.
    ///
    /// `other` is windowed with this handle's window size. Pass `0` for the
    /// population covariance (the usual default), `1` for the unbiased one.
    ///
    /// # Returns
    ///
    /// * `Result<Series<T>>` - The rolling covariance, `LengthMismatch` if the
    ///   series differ in length, or `InvalidParameter` if `ddof` is negative
    pub fn cov(&self, other: &Series<T>, ddof: i64) -> Result<Series<T>> {
        let other = self.align(other)?;
        let ddof = Ddof::try_from(ddof)?;
        Ok(self.evaluate_paired("cov", other, move |x, y| {
            PairedStatistics::new(x, y).ok()?.cov(ddof)
        }))
    }

    /// Rolling Pearson correlation with `other`.
    ///
    /// Both series are windowed with this handle's window size. A window
    /// where either side has zero variance, or where `ddof` leaves no degrees
    /// of freedom, is missing.
    ///
    /// # Returns
    ///
    /// * `Result<Series<T>>` - The rolling correlation, `LengthMismatch` if the
    ///   series differ in length, or `InvalidParameter` if `ddof` is negative
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayflux::arrayflux;
    ///
    /// let x = arrayflux([1.0, 2.0, 3.0, 4.0, 5.0]);
    /// let y = arrayflux([5.0, 4.0, 3.0, 2.0, 1.0]);
    /// let corr = x.rolling(5).unwrap().corr(&y, 0).unwrap();
    /// assert_eq!(corr[4], -1.0);
    ///
    /// assert!(x.rolling(5).unwrap().corr(&arrayflux([1.0, 2.0]), 0).is_err());
    /// ```
    pub fn corr(&self, other: &Series<T>, ddof: i64) -> Result<Series<T>> {
        let other = self.align(other)?;
        let ddof = Ddof::try_from(ddof)?;
        Ok(self.evaluate_paired("corr", other, move |x, y| {
            PairedStatistics::new(x, y).ok()?.corr(ddof)
        }))
    }

    /// Applies `f` to every complete window.
    ///
    /// `f` sees the window values in order. Windows holding a missing value
    /// are skipped and reported missing, as is a `NaN` returned by `f`.
    ///
    /// ```
    /// use arrayflux::arrayflux;
    ///
    /// let s = arrayflux([1.0, 2.0, 3.0, 4.0]);
    /// let range = s.rolling(2).unwrap().apply(|w| w[1] - w[0]);
    /// assert_eq!(range.slice(1..), Some(arrayflux([1.0, 1.0, 1.0])));
    /// ```
    pub fn apply<F>(&self, f: F) -> Series<T>
    where
        F: Fn(&[T]) -> T + Sync,
    {
        self.evaluate("apply", |w| Some(f(w)))
    }

    fn align<'b>(&self, other: &'b Series<T>) -> Result<Windows<'b, Value<T>>> {
        if other.len() != self.parent.len() {
            return Err(RollingError::length_mismatch(
                self.parent.len(),
                other.len(),
            ));
        }
        Windows::new(other.as_slice(), self.window())
    }

    /// Allocates the output, `lead` missing markers followed by one slot per
    /// window, and lets `fill` write the slots. This is the only place output
    /// positions are tied to windows.
    fn padded<F>(&self, fill: F) -> Series<T>
    where
        F: FnOnce(&mut [Value<T>]),
    {
        let mut out = vec![Value::Missing; self.parent.len()];
        fill(&mut out[self.windows.lead()..]);
        Series::from_values(out)
    }

    fn evaluate<F>(&self, name: &'static str, f: F) -> Series<T>
    where
        F: Fn(&mut [T]) -> Option<T> + Sync,
    {
        log::trace!(
            "rolling {name}: {} windows of {}",
            self.windows.len(),
            self.windows.size()
        );
        let windows = self.windows;
        self.padded(|slots| fill(slots, windows, &f))
    }

    fn evaluate_paired<F>(
        &self,
        name: &'static str,
        other: Windows<'_, Value<T>>,
        f: F,
    ) -> Series<T>
    where
        F: Fn(&[T], &[T]) -> Option<T> + Sync,
    {
        log::trace!(
            "rolling {name}: {} window pairs of {}",
            self.windows.len(),
            self.windows.size()
        );
        let windows = self.windows;
        self.padded(|slots| fill_paired(slots, windows, other, &f))
    }
}

/// Copies a window into `scratch`, or returns `None` if it holds a missing value
#[inline]
fn gather<'s, T: Copy>(window: &[Value<T>], scratch: &'s mut Vec<T>) -> Option<&'s mut [T]> {
    scratch.clear();
    for v in window {
        scratch.push(v.present()?);
    }
    Some(scratch.as_mut_slice())
}

#[inline]
fn eval_single<T, F>(window: &[Value<T>], scratch: &mut Vec<T>, f: &F) -> Value<T>
where
    T: Float,
    F: Fn(&mut [T]) -> Option<T>,
{
    gather(window, scratch).and_then(f).into()
}

#[inline]
fn eval_paired<T, F>(
    (wx, wy): (&[Value<T>], &[Value<T>]),
    (sx, sy): &mut (Vec<T>, Vec<T>),
    f: &F,
) -> Value<T>
where
    T: Float,
    F: Fn(&[T], &[T]) -> Option<T>,
{
    let pair = gather(wx, sx).zip(gather(wy, sy));
    pair.and_then(|(x, y)| f(x, y)).into()
}

#[cfg(not(feature = "parallel"))]
fn fill<T, F>(slots: &mut [Value<T>], windows: Windows<'_, Value<T>>, f: &F)
where
    T: Float,
    F: Fn(&mut [T]) -> Option<T>,
{
    let mut scratch = Vec::with_capacity(windows.size());
    for (slot, window) in slots.iter_mut().zip(windows) {
        *slot = eval_single(window, &mut scratch, f);
    }
}

#[cfg(feature = "parallel")]
fn fill<T, F>(slots: &mut [Value<T>], windows: Windows<'_, Value<T>>, f: &F)
where
    T: Float + Default + Send + Sync,
    F: Fn(&mut [T]) -> Option<T> + Sync,
{
    let size = windows.size();
    slots.par_iter_mut().zip(windows.par_iter()).for_each_init(
        || Vec::with_capacity(size),
        |scratch, (slot, window)| *slot = eval_single(window, scratch, f),
    );
}

#[cfg(not(feature = "parallel"))]
fn fill_paired<T, F>(
    slots: &mut [Value<T>],
    xs: Windows<'_, Value<T>>,
    ys: Windows<'_, Value<T>>,
    f: &F,
) where
    T: Float,
    F: Fn(&[T], &[T]) -> Option<T>,
{
    let mut scratch = (
        Vec::with_capacity(xs.size()),
        Vec::with_capacity(ys.size()),
    );
    for (slot, pair) in slots.iter_mut().zip(xs.into_iter().zip(ys)) {
        *slot = eval_paired(pair, &mut scratch, f);
    }
}

#[cfg(feature = "parallel")]
fn fill_paired<T, F>(
    slots: &mut [Value<T>],
    xs: Windows<'_, Value<T>>,
    ys: Windows<'_, Value<T>>,
    f: &F,
) where
    T: Float + Default + Send + Sync,
    F: Fn(&[T], &[T]) -> Option<T> + Sync,
{
    let size = xs.size();
    slots
        .par_iter_mut()
        .zip(xs.par_iter().zip(ys.par_iter()))
        .for_each_init(
            || (Vec::with_capacity(size), Vec::with_capacity(size)),
            |scratch, (slot, pair)| *slot = eval_paired(pair, scratch, f),
        );
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::arrayflux;
    use Value::{Missing, Present};

    fn series(values: &[Value<f64>]) -> Series<f64> {
        values.iter().copied().collect()
    }

    fn present(s: &Series<f64>) -> Vec<f64> {
        s.iter().filter_map(|v| v.present()).collect()
    }

    #[test]
    fn zero_window_is_rejected() {
        let s = arrayflux([1.0, 2.0]);
        assert_eq!(
            s.rolling(0).unwrap_err(),
            RollingError::InvalidWindow(0)
        );
    }

    #[test]
    fn handle_exposes_window_geometry() {
        let s = arrayflux([1.0, 2.0, 3.0, 4.0, 5.0]);
        let r = s.rolling(3).unwrap();
        assert_eq!(r.window(), 3);
        assert_eq!(r.len(), 3);
        assert!(!r.is_empty());
        assert_eq!(r.parent().len(), 5);
        assert_eq!(r.windows().lead(), 2);
    }

    #[test]
    fn outputs_are_left_padded() {
        let s = arrayflux([1.0, 2.0, 3.0, 4.0, 5.0]);
        let r = s.rolling(3).unwrap();

        let expected = |a, b, c| series(&[Missing, Missing, Present(a), Present(b), Present(c)]);
        assert!(r.mean().eq_missing(&expected(2.0, 3.0, 4.0)));
        assert!(r.sum().eq_missing(&expected(6.0, 9.0, 12.0)));
        assert!(r.min().eq_missing(&expected(1.0, 2.0, 3.0)));
        assert!(r.max().eq_missing(&expected(3.0, 4.0, 5.0)));
        assert!(r.median().eq_missing(&expected(2.0, 3.0, 4.0)));
        assert!(r.prod().eq_missing(&expected(6.0, 24.0, 60.0)));
        assert!(r.var(1).unwrap().eq_missing(&expected(1.0, 1.0, 1.0)));
        assert!(r.std(1).unwrap().eq_missing(&expected(1.0, 1.0, 1.0)));
        assert!(r.quantile(1.0).unwrap().eq_missing(&expected(3.0, 4.0, 5.0)));
    }

    #[test]
    fn oversized_window_is_all_missing() {
        let s = arrayflux([1.0, 2.0]);
        let r = s.rolling(3).unwrap();
        assert!(r.is_empty());
        for out in [r.mean(), r.sum(), r.std(1).unwrap(), r.skew(true)] {
            assert!(out.eq_missing(&Series::missing(2)));
        }
        assert!(r.cov(&s, 0).unwrap().eq_missing(&Series::missing(2)));
    }

    #[test]
    fn missing_input_poisons_its_windows() {
        let s = series(&[
            Present(1.0),
            Present(2.0),
            Missing,
            Present(4.0),
            Present(5.0),
            Present(6.0),
        ]);
        let mean = s.rolling(2).unwrap().mean();
        assert!(mean.eq_missing(&series(&[
            Missing,
            Present(1.5),
            Missing,
            Missing,
            Present(4.5),
            Present(5.5),
        ])));
    }

    #[test]
    fn ddof_at_window_size_is_missing() {
        let s = arrayflux([1.0, 2.0, 3.0, 4.0]);
        let r = s.rolling(2).unwrap();
        assert!(r.var(2).unwrap().eq_missing(&Series::missing(4)));
        assert!(r.std(3).unwrap().eq_missing(&Series::missing(4)));
        assert!(r.cov(&s, 2).unwrap().eq_missing(&Series::missing(4)));
        assert!(r.corr(&s, 2).unwrap().eq_missing(&Series::missing(4)));
    }

    #[test]
    fn invalid_parameters_are_errors() {
        let s = arrayflux([1.0, 2.0, 3.0]);
        let r = s.rolling(2).unwrap();
        assert!(matches!(
            r.std(-1),
            Err(RollingError::InvalidParameter { name: "ddof", .. })
        ));
        assert!(matches!(
            r.cov(&s, -2),
            Err(RollingError::InvalidParameter { name: "ddof", .. })
        ));
        assert!(matches!(
            r.quantile(-0.1),
            Err(RollingError::InvalidParameter { name: "q", .. })
        ));
    }

    #[test]
    fn bivariate_length_mismatch() {
        let x = arrayflux([1.0, 2.0, 3.0]);
        let y = arrayflux([1.0, 2.0]);
        let r = x.rolling(2).unwrap();
        assert_eq!(r.cov(&y, 0), Err(RollingError::length_mismatch(3, 2)));
        assert_eq!(r.corr(&y, 0), Err(RollingError::length_mismatch(3, 2)));
        // the mismatch wins over a bad ddof
        assert_eq!(r.corr(&y, -1), Err(RollingError::length_mismatch(3, 2)));
    }

    #[test]
    fn shape_statistics() {
        let s = arrayflux([25.4, 26.2, 26.0, 26.1, 25.8, 25.9, 26.3, 26.2, 26.5]);
        let r = s.rolling(4).unwrap();

        let skew = r.skew(false);
        assert!(skew[2].is_missing());
        let expected: [f64; 6] = [-1.6964, -0.7528, 0.0000, 0.4816, 0.0000, -0.5600];
        for (e, v) in expected.iter().zip(present(&skew)) {
            assert_approx_eq!(e, v, 0.0001);
        }

        let kurt = r.kurt(KurtosisOptions::default());
        let expected: [f64; 6] = [6.0144, 3.3429, 1.8, 1.3005, -1.3391, 3.928];
        let values = present(&kurt);
        assert_eq!(values.len(), expected.len());
        for (e, v) in expected.iter().zip(values) {
            assert_approx_eq!(e, v, 0.0001);
        }

        // unbiased skew needs three values per window
        let short = s.rolling(2).unwrap();
        assert!(short.skew(false).eq_missing(&Series::missing(9)));
        assert_eq!(present(&short.skew(true)).len(), 8);
        let kurt = s.rolling(3).unwrap().kurt(KurtosisOptions::default());
        assert!(kurt.eq_missing(&Series::missing(9)));
    }

    #[test]
    fn constant_windows_have_no_shape_or_correlation() {
        let s = arrayflux([3.0, 3.0, 3.0, 3.0, 1.0]);
        let r = s.rolling(4).unwrap();
        assert!(r.skew(true)[3].is_missing());
        assert!(r.kurt(KurtosisOptions::new(true, true))[3].is_missing());
        assert!(r.skew(true)[4].is_present());

        let other = arrayflux([1.0, 2.0, 3.0, 4.0, 5.0]);
        let corr = r.corr(&other, 0).unwrap();
        assert!(corr[3].is_missing());
        assert!(corr[4].is_present());
        assert_eq!(r.cov(&other, 0).unwrap()[3], 0.0);
    }

    #[test]
    fn infinite_inputs_stay_present() {
        let s = arrayflux([1.0, f64::INFINITY, 2.0, f64::NEG_INFINITY]);
        let r = s.rolling(3).unwrap();
        assert_eq!(r.sum()[2], f64::INFINITY);
        assert_eq!(r.mean()[2], f64::INFINITY);
        assert_eq!(r.max()[2], f64::INFINITY);
        assert_eq!(r.prod()[2], f64::INFINITY);
        assert_eq!(r.median()[2], 2.0);

        // inf + -inf has no value
        assert!(r.sum()[3].is_missing());
        assert!(r.mean()[3].is_missing());
        assert_eq!(r.min()[3], f64::NEG_INFINITY);
    }

    #[test]
    fn near_constant_windows_match_across_statistics() {
        let x = arrayflux([0.1, 0.1, 0.1, 0.7, 0.7, 0.7]);
        let y = arrayflux([1.0, 2.0, 4.0, 1.0, 2.0, 4.0]);
        let r = x.rolling(3).unwrap();

        let corr = r.corr(&y, 0).unwrap();
        let skew = r.skew(true);
        for i in [2, 5] {
            assert!(corr[i].is_missing());
            assert!(skew[i].is_missing());
        }
        assert_approx_eq!(corr[3].unwrap_or(f64::NAN), -0.7559289460184544, 1e-12);
        assert_approx_eq!(corr[4].unwrap_or(f64::NAN), -0.9449111825230679, 1e-12);

        let flipped = y.rolling(3).unwrap().corr(&x, 0).unwrap();
        assert!(corr.eq_missing(&flipped));
    }

    #[test]
    fn correlation_of_opposite_series() {
        let x = arrayflux([1.0, 2.0, 3.0, 4.0, 5.0]);
        let y = arrayflux([5.0, 4.0, 3.0, 2.0, 1.0]);
        let corr = x.rolling(5).unwrap().corr(&y, 0).unwrap();
        assert!(corr.eq_missing(&series(&[Missing, Missing, Missing, Missing, Present(-1.0)])));

        let yx = y.rolling(5).unwrap().corr(&x, 0).unwrap();
        assert!(corr.eq_missing(&yx));
    }

    #[test]
    fn apply_custom_reduction() {
        let s = arrayflux([1.0, 2.0, 3.0, 4.0]);
        let r = s.rolling(2).unwrap();
        let prod = r.apply(|w| w.iter().product());
        assert!(prod.eq_missing(&r.prod()));

        let nan = r.apply(|_| f64::NAN);
        assert!(nan.eq_missing(&Series::missing(4)));
    }

    #[test]
    fn results_can_be_rolled_again() {
        let s = arrayflux([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let mean = s.rolling(2).unwrap().mean();
        let max_of_mean = mean.rolling(2).unwrap().max();
        assert!(max_of_mean.eq_missing(&series(&[
            Missing,
            Missing,
            Present(2.5),
            Present(3.5),
            Present(4.5),
            Present(5.5),
        ])));
    }
}
