//! Domain-specific parameter types for intensity transforms

use std::fmt;

/// Rescale parameters for converting stored sample indices to real units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RescaleParams {
    pub slope: f64,
    pub intercept: f64,
}

impl RescaleParams {
    #[must_use]
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    #[must_use]
    pub const fn default() -> Self {
        Self {
            slope: 1.0,
            intercept: 0.0,
        }
    }

    #[inline(always)]
    #[must_use]
    // Hot path: called for every table slot during construction
    pub fn apply(&self, index: usize) -> f64 {
        (index as f64).mul_add(self.slope, self.intercept)
    }
}

impl fmt::Display for RescaleParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slope={slope}, intercept={intercept}",
            slope = self.slope,
            intercept = self.intercept
        )
    }
}

/// Window center and width selecting the value-of-interest range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLevel {
    pub center: f64,
    pub width: f64,
}

impl WindowLevel {
    #[must_use]
    pub fn new(center: f64, width: f64) -> Self {
        Self { center, width }
    }

    /// Lower bound of the windowed range
    #[inline]
    #[must_use]
    pub fn min(&self) -> f64 {
        self.center - self.width / 2.0
    }

    /// Upper bound of the windowed range
    #[inline]
    #[must_use]
    pub fn max(&self) -> f64 {
        self.center + self.width / 2.0
    }
}

impl fmt::Display for WindowLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "center={center}, width={width}",
            center = self.center,
            width = self.width
        )
    }
}
