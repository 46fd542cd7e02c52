//! Burgundy garden palette shared by every asset

/// Deep wine red used for the main background and the stamp
pub const BURGUNDY: [u8; 3] = [90, 16, 37];
/// Warm metallic gold used for ornaments, tape, and washes
pub const GOLD: [u8; 3] = [185, 139, 46];
/// Shadow tone scattered over both backgrounds
pub const DARK_BURGUNDY: [u8; 3] = [60, 10, 25];
/// Pale gold used for the tape body
pub const LIGHT_GOLD: [u8; 3] = [220, 190, 120];

/// A palette color paired with the opacity it is drawn at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    /// Color channels
    pub rgb: [u8; 3],
    /// Opacity, 0 transparent through 255 opaque
    pub alpha: u8,
}

impl Paint {
    /// Pair a color with an opacity
    pub const fn new(rgb: [u8; 3], alpha: u8) -> Self {
        Self { rgb, alpha }
    }

    /// Fully opaque paint
    pub const fn solid(rgb: [u8; 3]) -> Self {
        Self { rgb, alpha: u8::MAX }
    }
}
