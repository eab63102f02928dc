//! Composed raw sample to RGB lookup
//!
//! Chains the rescale table, the window table and a palette into the single
//! lookup the rendering collaborator consumes:
//! `rgb = palette[window[rescale index]]`.

use std::sync::Arc;

use anyhow::{Context, Result};
use image::{ImageBuffer, RgbImage};

use crate::lut::{LutError, RescaleLut, WindowLut};
use crate::palette::ColorMap;

/// Width of the preview strip, one column per display index
const PREVIEW_COLS: u32 = 256;

/// Full intensity pipeline for one image/viewport
///
/// Owns its window table (each viewport windows independently); the rescale
/// table behind it may be shared with other pipelines. The palette is a
/// process-wide constant selected by [`ColorMap`].
#[derive(Debug, Clone)]
pub struct DisplayPipeline {
    window: WindowLut,
    color_map: ColorMap,
}

impl DisplayPipeline {
    /// Build a pipeline over the given rescale table
    ///
    /// The window table starts zeroed; call
    /// [`set_center_and_width`](DisplayPipeline::set_center_and_width)
    /// before the first lookup.
    #[must_use]
    pub fn new(rescale: Arc<RescaleLut>, signed: bool, color_map: ColorMap) -> Self {
        Self {
            window: WindowLut::new(rescale, signed),
            color_map,
        }
    }

    /// Rebuild the window table for a new center/width
    pub fn set_center_and_width(&mut self, center: f64, width: f64) -> Result<(), LutError> {
        self.window.set_center_and_width(center, width)
    }

    /// Swap the palette; no table rebuild is needed
    pub fn set_color_map(&mut self, color_map: ColorMap) {
        self.color_map = color_map;
    }

    #[inline]
    #[must_use]
    pub fn color_map(&self) -> ColorMap {
        self.color_map
    }

    #[inline]
    #[must_use]
    pub fn window(&self) -> &WindowLut {
        &self.window
    }

    /// RGB triplet for a raw sample value
    ///
    /// Deterministic and side-effect-free; panics only on offsets outside
    /// the table domain (caller contract, as for [`WindowLut::value`]).
    #[inline]
    #[must_use]
    pub fn rgb(&self, raw: i32) -> [u8; 3] {
        self.color_map.table().rgb(self.window.value(raw))
    }

    /// Render the windowed ramp through the palette as a 256-column strip
    ///
    /// Columns sweep the raw sample domain in order (signed domains sweep
    /// from the most negative sample). Useful as a quick visual check of a
    /// window/palette combination.
    pub fn preview_strip(&self, height: u32) -> Result<RgbImage> {
        let depth = self.window.len();
        let half = (depth / 2) as i32;

        let row: Vec<u8> = (0..PREVIEW_COLS)
            .flat_map(|x| {
                let index = x as usize * depth / PREVIEW_COLS as usize;
                let raw = if self.window.is_signed() {
                    index as i32 - half
                } else {
                    index as i32
                };
                self.rgb(raw)
            })
            .collect();

        let mut pixels = Vec::with_capacity(row.len() * height as usize);
        for _ in 0..height {
            pixels.extend_from_slice(&row);
        }

        let strip: RgbImage = ImageBuffer::from_raw(PREVIEW_COLS, height, pixels)
            .context("Failed to create RGB preview buffer")?;

        Ok(strip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use crate::types::RescaleParams;

    fn pipeline(color_map: ColorMap) -> DisplayPipeline {
        let rescale = Arc::new(RescaleLut::new(RescaleParams::default(), 4096));
        DisplayPipeline::new(rescale, false, color_map)
    }

    #[test]
    fn test_composed_lookup_matches_window_then_palette() {
        let mut p = pipeline(ColorMap::Plain);
        p.set_center_and_width(100.0, 200.0).unwrap();

        // plain palette: RGB equals the windowed display value
        let display = p.window().value(100);
        assert_eq!(p.rgb(100), [display, display, display]);
        assert_eq!(p.rgb(0), [0, 0, 0]);
        assert_eq!(p.rgb(4095), [255, 255, 255]);
    }

    #[test]
    fn test_palette_swap_keeps_window_table() {
        let mut p = pipeline(ColorMap::Plain);
        p.set_center_and_width(100.0, 200.0).unwrap();
        let before: Vec<u8> = p.window().values().to_vec();

        p.set_color_map(ColorMap::InvPlain);

        assert_eq!(p.color_map(), ColorMap::InvPlain);
        assert_eq!(p.window().values(), before.as_slice());
        // saturated high input now maps to black
        assert_eq!(p.rgb(4095), [0, 0, 0]);
    }

    #[test]
    fn test_hot_pipeline_colors_saturated_input() {
        let mut p = pipeline(ColorMap::Hot);
        p.set_center_and_width(100.0, 200.0).unwrap();

        // below the window: display 0 -> black
        assert_eq!(p.rgb(0), [0, 0, 0]);
        // above the window: display 255 -> white in the hot ramp
        assert_eq!(p.rgb(4095), [255, 255, 255]);
    }

    #[test]
    fn test_signed_pipeline_accepts_negative_samples() {
        let rescale = Arc::new(RescaleLut::new(RescaleParams::default(), 4096));
        let mut p = DisplayPipeline::new(rescale, true, ColorMap::Plain);
        p.set_center_and_width(0.0, 1000.0).unwrap();

        // the negative half saturates toward black, the positive toward white
        assert_eq!(p.rgb(-2048), [0, 0, 0]);
        assert_eq!(p.rgb(2047), [255, 255, 255]);
    }

    #[test]
    fn test_preview_strip_sweeps_palette() {
        let mut p = pipeline(ColorMap::Rainbow);
        // window matching the full domain so the strip sweeps every index
        p.set_center_and_width(2048.0, 4096.0).unwrap();

        let strip = p.preview_strip(8).unwrap();
        assert_eq!(strip.width(), 256);
        assert_eq!(strip.height(), 8);

        // first column is the bottom of the rainbow ramp
        let rainbow = &*palette::RAINBOW;
        assert_eq!(strip.get_pixel(0, 0).0, rainbow.rgb(0));
        // all rows are identical
        assert_eq!(strip.get_pixel(128, 0), strip.get_pixel(128, 7));
    }
}
