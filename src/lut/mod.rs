//! Lookup tables for the rescale and window/level intensity transforms
//!
//! This module provides the two chained tables of the display pipeline:
//! a [`RescaleLut`] mapping raw sample indices to linearly rescaled values,
//! and a [`WindowLut`] mapping raw sample indices to clamped 8-bit display
//! intensities per the DICOM VOI LUT formula.

mod error;
mod rescale;
mod window;

// Re-export public API
pub use error::LutError;
pub use rescale::{DEFAULT_DEPTH, RescaleLut};
pub use window::WindowLut;
