pub mod cli;
pub mod lut;
pub mod palette;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use lut::{DEFAULT_DEPTH, LutError, RescaleLut, WindowLut};
pub use palette::{ColorMap, Palette};
pub use pipeline::DisplayPipeline;
pub use types::{RescaleParams, WindowLevel};
