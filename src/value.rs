use num_traits::Float;

use core::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// A single entry of a [`Series`](crate::Series): either an observation or a
/// missing marker.
///
/// Missing markers come out of every rolling statistic for the warm-up prefix
/// of the output and for windows where the statistic is undefined. They
/// propagate through arithmetic: any operation with a missing operand is
/// missing.
///
/// Ordinary equality never holds for a missing marker, not even against
/// another missing marker, the same way `NaN != NaN`. Use
/// [`Value::eq_missing`] when two missing markers should compare equal.
///
/// A present value is never `NaN`; [`Value::from_float`] and all arithmetic
/// normalize `NaN` to [`Value::Missing`].
///
/// ```
/// use arrayflux::Value;
///
/// let a: Value<f64> = Value::Missing;
/// assert!(a != Value::Missing);
/// assert!(a.eq_missing(&Value::Missing));
/// assert!((a + Value::Present(1.0)).is_missing());
/// assert!(Value::from_float(f64::NAN).is_missing());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub enum Value<T> {
    /// No value is defined at this position
    #[default]
    Missing,
    /// An observed or computed value
    Present(T),
}

impl<T: Float> Value<T> {
    /// Wraps a float, mapping `NaN` to [`Value::Missing`]
    #[inline]
    pub fn from_float(value: T) -> Self {
        if value.is_nan() {
            Self::Missing
        } else {
            Self::Present(value)
        }
    }

    /// Lowers the value back to a float, with `NaN` standing in for a missing marker
    #[inline]
    pub fn to_float(self) -> T {
        match self {
            Self::Present(v) => v,
            Self::Missing => T::nan(),
        }
    }

    /// Missing-aware approximate equality.
    ///
    /// Two missing markers are equal, a missing marker never equals a present
    /// value, and two present values are equal when they differ by at most
    /// `tol`.
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        match (self, other) {
            (Self::Missing, Self::Missing) => true,
            (Self::Present(a), Self::Present(b)) => a == b || (*a - *b).abs() <= tol,
            _ => false,
        }
    }
}

impl<T> Value<T> {
    /// Returns `true` if this is a missing marker
    #[inline]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns `true` if a value is present
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Converts into an `Option`, `None` for a missing marker
    #[inline]
    pub fn present(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Missing => None,
        }
    }

    /// Returns the present value or `default`
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.present().unwrap_or(default)
    }

    /// Maps a present value, keeping a missing marker as is
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Value<U> {
        match self {
            Self::Present(v) => Value::Present(f(v)),
            Self::Missing => Value::Missing,
        }
    }

    /// Chains a computation that may itself produce a missing marker
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Value<U>) -> Value<U> {
        match self {
            Self::Present(v) => f(v),
            Self::Missing => Value::Missing,
        }
    }

    /// Missing-aware equality: two missing markers compare equal.
    ///
    /// # Returns
    ///
    /// * `bool` - `true` if both are missing, or both are present and equal
    pub fn eq_missing(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        match (self, other) {
            (Self::Missing, Self::Missing) => true,
            (Self::Present(a), Self::Present(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: PartialEq> PartialEq for Value<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Present(a), Self::Present(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: PartialEq> PartialEq<T> for Value<T> {
    fn eq(&self, other: &T) -> bool {
        match self {
            Self::Present(a) => a == other,
            Self::Missing => false,
        }
    }
}

impl<T: Float> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Self::from_float(value)
    }
}

impl<T: Float> From<Option<T>> for Value<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Self::from_float)
    }
}

impl<T> From<Value<T>> for Option<T> {
    fn from(value: Value<T>) -> Self {
        value.present()
    }
}

impl<T: fmt::Display> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(v) => v.fmt(f),
            Self::Missing => f.write_str("missing"),
        }
    }
}

macro_rules! impl_value_op {
    ($trait:ident, $method:ident) => {
        impl<T: Float> $trait for Value<T> {
            type Output = Value<T>;

            #[inline]
            fn $method(self, rhs: Value<T>) -> Value<T> {
                match (self, rhs) {
                    (Value::Present(a), Value::Present(b)) => Value::from_float(a.$method(b)),
                    _ => Value::Missing,
                }
            }
        }

        impl<T: Float> $trait<T> for Value<T> {
            type Output = Value<T>;

            #[inline]
            fn $method(self, rhs: T) -> Value<T> {
                self.$method(Value::from_float(rhs))
            }
        }
    };
}

impl_value_op!(Add, add);
impl_value_op!(Sub, sub);
impl_value_op!(Mul, mul);
impl_value_op!(Div, div);

impl<T: Float> Neg for Value<T> {
    type Output = Value<T>;

    fn neg(self) -> Value<T> {
        self.map(|v| -v)
    }
}
