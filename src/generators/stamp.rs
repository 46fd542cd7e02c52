//! Circular stamp mark: two rings, lettering, and compass ticks

use crate::io::configuration::{
    STAMP_ALPHA, STAMP_INNER_RING, STAMP_OUTER_RING, STAMP_SIZE, STAMP_TEXT, STAMP_TEXT_OFFSET,
    STAMP_TEXT_SCALE, STAMP_TICK_ANGLES, STAMP_TICK_RADII, STAMP_TICK_WIDTH,
};
use crate::render::palette::{BURGUNDY, Paint};
use crate::render::shapes::{draw_line, stroke_ellipse};
use crate::render::text::draw_text;
use image::RgbaImage;

/// A short radial mark from `inner` to `outer`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Endpoint nearer the centre
    pub inner: (i32, i32),
    /// Endpoint farther from the centre
    pub outer: (i32, i32),
}

/// Point at `radius` from `center` along `degrees`, rounded to the pixel grid
pub fn polar_point(center: i32, radius: f64, degrees: f64) -> (i32, i32) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (
        center + (radius * cos).round() as i32,
        center + (radius * sin).round() as i32,
    )
}

/// Compass ticks around `center` at the fixed angles
pub fn compass_ticks(center: i32) -> [Tick; 4] {
    let (inner, outer) = STAMP_TICK_RADII;
    STAMP_TICK_ANGLES.map(|angle| Tick {
        inner: polar_point(center, inner, angle),
        outer: polar_point(center, outer, angle),
    })
}

/// Square box inset by `inset` on every side
pub const fn inset_box(size: i32, inset: i32) -> [i32; 4] {
    [inset, inset, size - inset, size - inset]
}

/// Stamp artwork on a transparent square
pub fn stamp() -> RgbaImage {
    let mut canvas = RgbaImage::new(STAMP_SIZE, STAMP_SIZE);
    let size = i32::try_from(STAMP_SIZE).unwrap_or(i32::MAX);
    let ink = Paint::new(BURGUNDY, STAMP_ALPHA);

    for (inset, width) in [STAMP_OUTER_RING, STAMP_INNER_RING] {
        stroke_ellipse(&mut canvas, inset_box(size, inset), width, ink);
    }

    let center = size / 2;
    draw_text(
        &mut canvas,
        (center - STAMP_TEXT_OFFSET.0, center - STAMP_TEXT_OFFSET.1),
        STAMP_TEXT,
        STAMP_TEXT_SCALE,
        ink,
    );

    for tick in compass_ticks(center) {
        draw_line(&mut canvas, tick.inner, tick.outer, STAMP_TICK_WIDTH, ink);
    }
    canvas
}
