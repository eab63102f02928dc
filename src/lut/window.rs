//! Window/level lookup table
//!
//! Maps raw sample indices to clamped 8-bit display intensities using the
//! DICOM VOI LUT windowing formula: the rescaled value range
//! `[center - width/2, center + width/2]` is stretched onto `[0, 255]` and
//! values outside it saturate at the extremes.

use std::sync::Arc;

use super::error::LutError;
use super::rescale::RescaleLut;
use crate::types::WindowLevel;

/// Dense table of windowed 8-bit display values
///
/// The table shares its feeding [`RescaleLut`]; the rescale table is
/// immutable post-construction, so sharing one across several window tables
/// is safe. Replacing the rescale parameters means building a new
/// `WindowLut`. Changing center/width is a full rebuild via
/// [`set_center_and_width`](WindowLut::set_center_and_width); there is no
/// incremental update.
#[derive(Debug, Clone)]
pub struct WindowLut {
    rescale: Arc<RescaleLut>,
    signed: bool,
    level: Option<WindowLevel>,
    values: Vec<u8>,
}

impl WindowLut {
    /// Allocate a zero-initialised table over the rescale table's domain
    #[must_use]
    pub fn new(rescale: Arc<RescaleLut>, signed: bool) -> Self {
        let values = vec![0u8; rescale.len()];
        Self {
            rescale,
            signed,
            level: None,
            values,
        }
    }

    /// Store the window level and rebuild the whole table
    ///
    /// Parameters are validated before any storage is touched: on error the
    /// previous table contents and window level remain in place.
    pub fn set_center_and_width(&mut self, center: f64, width: f64) -> Result<(), LutError> {
        // width of 1 divides by zero below; smaller widths invert the ramp
        if width <= 1.0 {
            return Err(LutError::InvalidWindowWidth { width });
        }

        self.level = Some(WindowLevel::new(center, width));

        // pre-calculate loop values; signed tables are zero-centered, so
        // fold the half-depth shift into the center term
        let size = self.values.len();
        let center0 = if self.signed {
            center - 0.5 + size as f64 / 2.0
        } else {
            center - 0.5
        };
        let width0 = width - 1.0;

        for (i, slot) in self.values.iter_mut().enumerate() {
            // DICOM VOI LUT: y = ((x - (c - 0.5)) / (w - 1) + 0.5) * (ymax - ymin) + ymin
            let disp = ((f64::from(self.rescale.value(i)) - center0) / width0 + 0.5) * 255.0;
            // truncate toward zero, then clamp to the displayable range
            *slot = (disp as i32).clamp(0, 255) as u8;
        }

        Ok(())
    }

    /// Display value for the given raw sample offset
    ///
    /// Signed tables store samples zero-centered in two halves, so the
    /// offset is shifted by half the depth before indexing.
    ///
    /// # Panics
    ///
    /// Panics if the shifted offset falls outside `[0, len)`.
    #[inline]
    #[must_use]
    pub fn value(&self, offset: i32) -> u8 {
        let shift = if self.signed {
            (self.values.len() / 2) as i32
        } else {
            0
        };
        self.values[(offset + shift) as usize]
    }

    /// The full table, one display value per raw sample index
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn center(&self) -> Option<f64> {
        self.level.map(|level| level.center)
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> Option<f64> {
        self.level.map(|level| level.width)
    }

    #[inline]
    #[must_use]
    pub fn level(&self) -> Option<WindowLevel> {
        self.level
    }

    #[inline]
    #[must_use]
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    #[inline]
    #[must_use]
    pub fn rescale(&self) -> &RescaleLut {
        &self.rescale
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
