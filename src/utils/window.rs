use crate::{Result, RollingError};

use core::slice;

/// The set of overlapping windows over a slice.
///
/// For a slice of length `N` and window size `W` there are `N - W + 1`
/// windows, window `i` covering `[i, i + W)`. When `W > N` the set is empty.
/// Windows borrow from the source slice, nothing is copied.
#[derive(Debug, Clone, Copy)]
pub struct Windows<'a, T> {
    /// Source slice
    data: &'a [T],
    /// Window size, always > 0
    size: usize,
}

impl<'a, T> Windows<'a, T> {
    /// Builds the window set, returns Error if `size` is 0
    ///
    /// # Arguments
    ///
    /// * `data` - The source slice
    /// * `size` - The window size
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The window set, or `InvalidWindow` if `size` is 0
    pub fn new(data: &'a [T], size: usize) -> Result<Self> {
        if size == 0 {
            return Err(RollingError::InvalidWindow(size));
        }
        Ok(Self { data, size })
    }

    /// Returns the window size
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the length of the source slice
    pub const fn source_len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of windows, `max(0, N - W + 1)`
    pub const fn len(&self) -> usize {
        if self.size > self.data.len() {
            0
        } else {
            self.data.len() - self.size + 1
        }
    }

    /// Returns `true` if the window size exceeds the source length
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of leading output positions that have no window,
    /// `W - 1`, or `N` when there are no windows at all.
    pub const fn lead(&self) -> usize {
        self.data.len() - self.len()
    }

    /// Returns the `i`-th window
    pub fn get(&self, i: usize) -> Option<&'a [T]> {
        self.data.get(i..i.checked_add(self.size)?)
    }

    /// Returns an iterator over the windows in order
    pub fn iter(&self) -> slice::Windows<'a, T> {
        self.data.windows(self.size)
    }

    /// Returns a parallel iterator over the windows in order
    #[cfg(feature = "parallel")]
    pub fn par_iter(&self) -> rayon::slice::Windows<'a, T>
    where
        T: Sync,
    {
        use rayon::slice::ParallelSlice;

        self.data.par_windows(self.size)
    }
}

impl<'a, T> IntoIterator for Windows<'a, T> {
    type Item = &'a [T];
    type IntoIter = slice::Windows<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
