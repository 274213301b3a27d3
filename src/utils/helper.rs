use num_traits::Float;

use core::cmp::Ordering;

use crate::Kbn;

/// Returns the median from a sorted slice
///
/// # Arguments
///
/// * `ss` - The sorted slice
///
/// # Returns
///
/// * `Option<T>` - The median, or `None` if the slice is empty
#[inline]
pub fn median_from_sorted_slice<T: Float>(ss: &[T]) -> Option<T> {
    let len = ss.len();
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    let _2 = T::one() + T::one();
    if len % 2 == 0 {
        Some((ss[mid - 1] + ss[mid]) / _2)
    } else {
        Some(ss[mid])
    }
}

/// Returns the quantile from a sorted slice, interpolating linearly between
/// the two closest order statistics
///
/// # Arguments
///
/// * `ss` - The sorted slice
/// * `q` - The quantile to calculate, in `[0, 1]`
///
/// # Returns
///
/// * `Option<T>` - The quantile, or `None` if the slice is empty
#[inline]
pub fn quantile_from_sorted_slice<T: Float>(ss: &[T], q: f64) -> Option<T> {
    let last = ss.len().checked_sub(1)?;
    let pos = q * last as f64;
    let lower_index = (pos.floor() as usize).min(last);
    let upper_index = (pos.ceil() as usize).min(last);

    if lower_index == upper_index {
        Some(ss[lower_index])
    } else {
        let weight = T::from(pos - lower_index as f64)?;
        Some(lerp(ss[lower_index], ss[upper_index], weight))
    }
}

/// Linear interpolation between `a` and `b`, evaluated from the closer end
/// so that `t = 1` returns `b` exactly
#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    let diff = b - a;
    let half = T::one() / (T::one() + T::one());
    if t >= half {
        b - diff * (T::one() - t)
    } else {
        a + diff * t
    }
}

/// Sorts a NaN-free slice in ascending order
#[inline]
pub fn sort_floats<T: Float>(buf: &mut [T]) -> &[T] {
    buf.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    buf
}

/// Compensated sum of a slice
///
/// Once the running sum leaves the finite range the compensation term is
/// `inf - inf`, so the plain sum is returned instead: `inf` for one-signed
/// infinities, `NaN` when both signs meet.
#[inline]
pub fn kbn_sum<T: Float + Default>(xs: &[T]) -> T {
    let mut sum = Kbn::<T>::default();
    let mut naive = T::zero();
    for &x in xs {
        sum += x;
        naive = naive + x;
    }
    if naive.is_finite() {
        sum.total()
    } else {
        naive
    }
}

/// Returns the decimal resolution of `T`: `1e-15` for `f64`, `1e-6` for `f32`
///
/// Variances at or below `(resolution * mean)^2` are treated as zero when
/// standardizing moments.
#[inline]
pub fn resolution<T: Float>() -> Option<T> {
    let digits = (-T::epsilon().log10()).floor();
    Some(T::from(10.0)?.powf(-digits))
}

/// Returns `true` when a biased variance `m2` is indistinguishable from zero
/// at the precision of `T`, relative to the `mean` of the same values
#[inline]
pub fn is_negligible_spread<T: Float>(m2: T, mean: T) -> bool {
    match resolution::<T>() {
        Some(res) => {
            let floor = res * mean;
            m2 <= floor * floor
        }
        None => true,
    }
}
