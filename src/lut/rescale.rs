//! Rescale lookup table
//!
//! Maps every raw sample index to its linearly rescaled value
//! (`index * slope + intercept`), per acquisition-device calibration.

use crate::types::RescaleParams;

/// Default table depth, covering 12-bit sample data
pub const DEFAULT_DEPTH: usize = 4096;

/// Dense table of linearly rescaled sample values
///
/// The table is a pure function of `(slope, intercept, depth)` and is
/// immutable once built; when the rescale parameters change, callers build
/// a new table (and rebuild any window table fed by it).
#[derive(Debug, Clone, PartialEq)]
pub struct RescaleLut {
    params: RescaleParams,
    values: Vec<f32>,
}

impl RescaleLut {
    /// Build the table for the given parameters and sample depth
    #[must_use]
    pub fn new(params: RescaleParams, depth: usize) -> Self {
        let values = (0..depth).map(|i| params.apply(i) as f32).collect();
        Self { params, values }
    }

    /// Identity table (slope 1, intercept 0) at the default depth
    #[must_use]
    pub fn identity() -> Self {
        Self::new(RescaleParams::default(), DEFAULT_DEPTH)
    }

    #[inline(always)]
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.params.slope
    }

    #[inline(always)]
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.params.intercept
    }

    #[inline(always)]
    #[must_use]
    pub fn params(&self) -> RescaleParams {
        self.params
    }

    /// Rescaled value at the given sample index
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `[0, len)`. Callers are expected to
    /// stay within the sample depth the table was built for.
    #[inline(always)]
    #[must_use]
    pub fn value(&self, index: usize) -> f32 {
        self.values[index]
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for RescaleLut {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_table_passes_values_through() {
        let lut = RescaleLut::identity();

        assert_eq!(lut.len(), DEFAULT_DEPTH);
        assert_eq!(lut.slope(), 1.0);
        assert_eq!(lut.intercept(), 0.0);

        // value(i) == i for the identity parameters
        assert_eq!(lut.value(0), 0.0);
        assert_eq!(lut.value(100), 100.0);
        assert_eq!(lut.value(4095), 4095.0);
    }

    #[test]
    fn test_affine_invariant_holds_for_every_slot() {
        let params = RescaleParams::new(2.0, -1024.0);
        let lut = RescaleLut::new(params, 4096);

        for i in (0..lut.len()).step_by(97) {
            assert_relative_eq!(
                lut.value(i),
                (i as f32) * 2.0 - 1024.0,
                max_relative = 1e-6
            );
        }
        assert_eq!(lut.value(0), -1024.0);
        assert_eq!(lut.value(1024), 1024.0);
    }

    #[test]
    fn test_fractional_slope_and_intercept() {
        let lut = RescaleLut::new(RescaleParams::new(0.5, 10.25), 256);

        assert_eq!(lut.len(), 256);
        assert_relative_eq!(lut.value(0), 10.25);
        assert_relative_eq!(lut.value(1), 10.75);
        assert_relative_eq!(lut.value(255), 137.75);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_index_panics() {
        let lut = RescaleLut::new(RescaleParams::default(), 16);
        let _ = lut.value(16);
    }
}
