use num_traits::Float;

use alloc::vec::Vec;

use core::{
    ops::{Add, Bound, Div, Index, Mul, RangeBounds, Sub},
    slice,
};

use crate::{Result, Rolling, RollingError, Value};

/// A fixed-length, one-dimensional sequence of floating-point values with
/// explicit missing markers.
///
/// `Series` is the container rolling statistics read from and write to:
/// every statistic of [`Rolling`] returns a new `Series` of the same length
/// as its parent, so results can be combined arithmetically or rolled again.
///
/// Construction maps `NaN` to [`Value::Missing`], so a present value is never
/// `NaN`.
///
/// ```
/// use arrayflux::{Series, Value};
///
/// let s: Series<f64> = [1.0, f64::NAN, 3.0].into_iter().collect();
/// assert_eq!(s.len(), 3);
/// assert!(s[1].is_missing());
///
/// let doubled = &s * 2.0;
/// let expected = [Value::Present(2.0), Value::Missing, Value::Present(6.0)];
/// assert!(doubled.eq_missing(&expected.into_iter().collect()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series<T> {
    values: Vec<Value<T>>,
}

/// Wraps any finite sequence of floats in a [`Series`].
///
/// ```
/// use arrayflux::arrayflux;
///
/// let s = arrayflux([1.0, 2.0, 3.0]);
/// assert_eq!(s.len(), 3);
/// ```
pub fn arrayflux<T, I>(values: I) -> Series<T>
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect()
}

impl<T> Series<T> {
    /// Returns the number of entries, present or missing
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the entries as a slice
    pub fn as_slice(&self) -> &[Value<T>] {
        &self.values
    }

    /// Returns an iterator over the entries
    pub fn iter(&self) -> slice::Iter<'_, Value<T>> {
        self.values.iter()
    }

    /// Consumes the series, returning its entries
    pub fn into_vec(self) -> Vec<Value<T>> {
        self.values
    }

    /// Missing-aware equality: equal lengths, and every pair of entries is
    /// either both missing or both present and equal.
    pub fn eq_missing(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self.len() == other.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.eq_missing(b))
    }
}

impl<T: Float> Series<T> {
    /// Builds a series from entries, mapping present `NaN` to missing
    pub fn from_values(mut values: Vec<Value<T>>) -> Self {
        for v in values.iter_mut() {
            *v = v.and_then(Value::from_float);
        }
        Self { values }
    }

    /// Builds a series of `len` missing markers
    pub fn missing(len: usize) -> Self {
        Self {
            values: vec![Value::Missing; len],
        }
    }

    /// Returns the entry at `index`, or `None` if out of bounds
    pub fn get(&self, index: usize) -> Option<Value<T>> {
        self.values.get(index).copied()
    }

    /// Returns a copy of the entries within `range`, or `None` if the range
    /// is out of bounds
    ///
    /// ```
    /// use arrayflux::arrayflux;
    ///
    /// let s = arrayflux([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(s.slice(1..3), Some(arrayflux([2.0, 3.0])));
    /// assert_eq!(s.slice(3..9), None);
    /// ```
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Option<Self> {
        let bounds: (Bound<usize>, Bound<usize>) =
            (range.start_bound().cloned(), range.end_bound().cloned());
        self.values.get(bounds).map(|values| Self {
            values: values.to_vec(),
        })
    }

    /// Lowers the series to plain floats, `NaN` marking missing entries
    pub fn to_floats(&self) -> Vec<T> {
        self.values.iter().map(|v| v.to_float()).collect()
    }

    /// Missing-aware approximate equality, the counterpart of
    /// `allclose(a, b, equal_nan=True)`
    ///
    /// # Arguments
    ///
    /// * `other` - The series to compare against
    /// * `tol` - Absolute tolerance between present values
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        self.len() == other.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.approx_eq(b, tol))
    }

    /// Applies `f` to every entry
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(Value<T>) -> Value<T>,
    {
        self.values.iter().map(|&v| f(v)).collect()
    }

    /// Combines two series entry by entry
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The combined series, or `LengthMismatch` if the lengths differ
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(Value<T>, Value<T>) -> Value<T>,
    {
        if self.len() != other.len() {
            return Err(RollingError::length_mismatch(self.len(), other.len()));
        }
        Ok(self
            .values
            .iter()
            .zip(&other.values)
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    /// Binds a rolling window of `window` entries to this series
    ///
    /// # Returns
    ///
    /// * `Result<Rolling<'_, T>>` - The rolling handle, or `InvalidWindow` if `window` is 0
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayflux::arrayflux;
    ///
    /// let s = arrayflux([1.0, 2.0, 3.0, 4.0, 5.0]);
    /// let mean = s.rolling(3).unwrap().mean();
    /// assert!(mean[0].is_missing());
    /// assert!(mean[1].is_missing());
    /// assert_eq!(mean.slice(2..), Some(arrayflux([2.0, 3.0, 4.0])));
    /// ```
    pub fn rolling(&self, window: usize) -> Result<Rolling<'_, T>>
    where
        T: Default + Send + Sync,
    {
        Rolling::new(self, window)
    }
}

impl<T> Index<usize> for Series<T> {
    type Output = Value<T>;

    fn index(&self, index: usize) -> &Value<T> {
        &self.values[index]
    }
}

impl<T: Float> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Value::from_float).collect(),
        }
    }
}

impl<T: Float> FromIterator<Value<T>> for Series<T> {
    fn from_iter<I: IntoIterator<Item = Value<T>>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|v| v.and_then(Value::from_float))
                .collect(),
        }
    }
}

impl<T: Float> From<Vec<T>> for Series<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Float> From<&[T]> for Series<T> {
    fn from(values: &[T]) -> Self {
        values.iter().copied().collect()
    }
}

impl<T> IntoIterator for Series<T> {
    type Item = Value<T>;
    type IntoIter = alloc::vec::IntoIter<Value<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Series<T> {
    type Item = &'a Value<T>;
    type IntoIter = slice::Iter<'a, Value<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

macro_rules! impl_series_op {
    ($trait:ident, $method:ident) => {
        /// Elementwise operation between two series.
        ///
        /// # Panics
        ///
        /// Panics if the series differ in length; use [`Series::zip_with`]
        /// for a fallible variant.
        impl<T: Float> $trait<&Series<T>> for &Series<T> {
            type Output = Series<T>;

            fn $method(self, rhs: &Series<T>) -> Series<T> {
                assert_eq!(self.len(), rhs.len(), "series length mismatch");
                self.values
                    .iter()
                    .zip(&rhs.values)
                    .map(|(&a, &b)| a.$method(b))
                    .collect()
            }
        }

        impl<T: Float> $trait<Series<T>> for Series<T> {
            type Output = Series<T>;

            fn $method(self, rhs: Series<T>) -> Series<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Float> $trait<T> for &Series<T> {
            type Output = Series<T>;

            fn $method(self, rhs: T) -> Series<T> {
                self.map(|v| v.$method(rhs))
            }
        }

        impl<T: Float> $trait<T> for Series<T> {
            type Output = Series<T>;

            fn $method(self, rhs: T) -> Series<T> {
                (&self).$method(rhs)
            }
        }
    };
}

impl_series_op!(Add, add);
impl_series_op!(Sub, sub);
impl_series_op!(Mul, mul);
impl_series_op!(Div, div);
