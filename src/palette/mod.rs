//! Color palette tables for pseudo-color display
//!
//! A palette maps an 8-bit display index to an RGB triplet through three
//! precomputed channel tables. The built-in palettes are process-wide
//! immutable constants, initialised on first use and safe to share
//! read-only across threads.

mod builder;
mod rainbow;

// Re-export the generator toolkit
pub use builder::{
    RANGE_MAX, build_lut, id, inv_id, max, max_first_third, max_second_third, max_third_third,
    to_max_first_third, to_max_second_third, to_max_third_third, zero,
};

use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use thiserror::Error;

/// One color channel: an intensity per display index
pub type PaletteChannel = [u8; RANGE_MAX];

/// Three channel tables keyed by display index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub red: PaletteChannel,
    pub green: PaletteChannel,
    pub blue: PaletteChannel,
}

impl Palette {
    #[must_use]
    pub fn new(red: PaletteChannel, green: PaletteChannel, blue: PaletteChannel) -> Self {
        Self { red, green, blue }
    }

    /// RGB triplet for the given display index
    ///
    /// The `u8` index makes out-of-range lookups unrepresentable; the
    /// window table already guarantees in-range output.
    #[inline]
    #[must_use]
    pub fn rgb(&self, index: u8) -> [u8; 3] {
        let i = usize::from(index);
        [self.red[i], self.green[i], self.blue[i]]
    }
}

/// Pass-through grayscale
pub static PLAIN: LazyLock<Palette> =
    LazyLock::new(|| Palette::new(build_lut(id), build_lut(id), build_lut(id)));

/// Inverted grayscale
pub static INV_PLAIN: LazyLock<Palette> =
    LazyLock::new(|| Palette::new(build_lut(inv_id), build_lut(inv_id), build_lut(inv_id)));

/// Rainbow ramp, carried as literal data
pub static RAINBOW: LazyLock<Palette> =
    LazyLock::new(|| Palette::new(rainbow::RED, rainbow::GREEN, rainbow::BLUE));

/// Thermal ramp: red, then green, then blue saturate in turn
pub static HOT: LazyLock<Palette> = LazyLock::new(|| {
    Palette::new(
        build_lut(to_max_first_third),
        build_lut(to_max_second_third),
        build_lut(to_max_third_third),
    )
});

/// Diagnostic pure-red ramp
pub static TEST: LazyLock<Palette> =
    LazyLock::new(|| Palette::new(build_lut(id), build_lut(zero), build_lut(zero)));

/// Palette name not in the built-in set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown colormap {0:?} (expected plain, invPlain, rainbow, hot or test)")]
pub struct UnknownColorMap(String);

/// The fixed set of built-in palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    Plain,
    InvPlain,
    Rainbow,
    Hot,
    Test,
}

impl FromStr for ColorMap {
    type Err = UnknownColorMap;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "plain" => Ok(Self::Plain),
            "invPlain" => Ok(Self::InvPlain),
            "rainbow" => Ok(Self::Rainbow),
            "hot" => Ok(Self::Hot),
            "test" => Ok(Self::Test),
            other => Err(UnknownColorMap(other.to_string())),
        }
    }
}

impl ColorMap {
    /// The shared channel tables backing this colormap
    #[inline]
    #[must_use]
    pub fn table(&self) -> &'static Palette {
        match self {
            Self::Plain => &PLAIN,
            Self::InvPlain => &INV_PLAIN,
            Self::Rainbow => &RAINBOW,
            Self::Hot => &HOT,
            Self::Test => &TEST,
        }
    }
}

impl Display for ColorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::InvPlain => write!(f, "invPlain"),
            Self::Rainbow => write!(f, "rainbow"),
            Self::Hot => write!(f, "hot"),
            Self::Test => write!(f, "test"),
        }
    }
}
