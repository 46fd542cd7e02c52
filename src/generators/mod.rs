//! The six placeholder assets and the routines that paint them

/// Burgundy and gold background textures
pub mod background;
/// Paper grain noise texture
pub mod grain;
/// Corner arcs and dot clusters
pub mod ornament;
/// Translucent tape strip
pub mod ribbon;
/// Circular stamp mark
pub mod stamp;

use crate::io::configuration::{
    BACKGROUND_SIZE, CORNER_CANVAS_SIZE, FLORAL_BACKGROUND_FILE, FLORAL_CORNERS_FILE,
    GOLD_BACKGROUND_FILE, GRAIN_FILE, GRAIN_HEIGHT, GRAIN_WIDTH, STAMP_FILE, STAMP_SIZE,
    TAPE_FILE, TAPE_HEIGHT, TAPE_WIDTH,
};
use clap::ValueEnum;
use image::{ColorType, DynamicImage};

/// One of the fixed placeholder images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Asset {
    /// Burgundy background with a gold wash and scattered blooms
    FloralBackground,
    /// Gold background with a burgundy wash and dark blooms
    GoldBackground,
    /// Transparent overlay with arcs in each corner
    FloralCorners,
    /// Translucent ribbon strip
    Tape,
    /// Circular stamp with lettering
    Stamp,
    /// Uncorrelated greyscale noise
    Grain,
}

impl Asset {
    /// Every asset in generation order
    pub const ALL: [Self; 6] = [
        Self::FloralBackground,
        Self::GoldBackground,
        Self::FloralCorners,
        Self::Tape,
        Self::Stamp,
        Self::Grain,
    ];

    /// File name written inside the output directory
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::FloralBackground => FLORAL_BACKGROUND_FILE,
            Self::GoldBackground => GOLD_BACKGROUND_FILE,
            Self::FloralCorners => FLORAL_CORNERS_FILE,
            Self::Tape => TAPE_FILE,
            Self::Stamp => STAMP_FILE,
            Self::Grain => GRAIN_FILE,
        }
    }

    /// Canvas size as (width, height)
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::FloralBackground | Self::GoldBackground => (BACKGROUND_SIZE, BACKGROUND_SIZE),
            Self::FloralCorners => (CORNER_CANVAS_SIZE, CORNER_CANVAS_SIZE),
            Self::Tape => (TAPE_WIDTH, TAPE_HEIGHT),
            Self::Stamp => (STAMP_SIZE, STAMP_SIZE),
            Self::Grain => (GRAIN_WIDTH, GRAIN_HEIGHT),
        }
    }

    /// Channel layout of the rendered image
    ///
    /// Backgrounds are opaque RGB so they can be stored as JPEG; everything
    /// else carries an alpha channel.
    pub const fn color_type(self) -> ColorType {
        match self {
            Self::FloralBackground | Self::GoldBackground => ColorType::Rgb8,
            _ => ColorType::Rgba8,
        }
    }

    /// Paint the asset into a fresh canvas
    pub fn render(self) -> DynamicImage {
        match self {
            Self::FloralBackground => DynamicImage::ImageRgb8(background::floral_background()),
            Self::GoldBackground => DynamicImage::ImageRgb8(background::gold_background()),
            Self::FloralCorners => DynamicImage::ImageRgba8(ornament::floral_corners()),
            Self::Tape => DynamicImage::ImageRgba8(ribbon::tape()),
            Self::Stamp => DynamicImage::ImageRgba8(stamp::stamp()),
            Self::Grain => DynamicImage::ImageRgba8(grain::grain()),
        }
    }
}
