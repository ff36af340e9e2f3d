use std::fmt;

use thiserror::Error;

use super::model::{Column, MetricTable, SmoothedColumn, SmoothedTable};

// ---------------------------------------------------------------------------
// WindowSize – validated moving-average window
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowSizeError {
    #[error("window size {0} is outside {min}..={max}", min = WindowSize::MIN, max = WindowSize::MAX)]
    OutOfRange(usize),
}

/// Number of trailing samples averaged per row, always within
/// [`WindowSize::MIN`]..=[`WindowSize::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowSize(usize);

impl WindowSize {
    pub const MIN: usize = 1;
    pub const MAX: usize = 100;
    pub const DEFAULT: usize = 10;

    pub fn new(size: usize) -> Result<Self, WindowSizeError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(WindowSize(size))
        } else {
            Err(WindowSizeError::OutOfRange(size))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        WindowSize(Self::DEFAULT)
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = WindowSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        WindowSize::new(size)
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Rolling mean
// ---------------------------------------------------------------------------

/// Trailing mean over `window` samples.
///
/// Row `i` averages `values[i + 1 - window..=i]`; the first `window - 1`
/// rows have no full window and are `None`. Each window is summed left to
/// right so the result does not depend on earlier rows.
pub fn rolling_mean(values: &[f64], window: WindowSize) -> SmoothedColumn {
    let w = window.get();
    (0..values.len())
        .map(|i| {
            if i + 1 < w {
                return None;
            }
            let sum: f64 = values[i + 1 - w..=i].iter().sum();
            Some(sum / w as f64)
        })
        .collect()
}

/// Smooth every column of `table` with the same window.
pub fn smooth(table: &MetricTable, window: WindowSize) -> SmoothedTable {
    let columns = Column::ALL.map(|col| rolling_mean(&table.column(col), window));
    SmoothedTable::new(window, columns)
}
