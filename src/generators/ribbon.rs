//! Translucent tape strip with fibre lines and solid edges

use crate::io::configuration::{
    TAPE_BODY_ALPHA, TAPE_BORDER_DEPTH, TAPE_HEIGHT, TAPE_LINE_SPACING, TAPE_LINE_STRONG_ALPHA,
    TAPE_LINE_WEAK_ALPHA, TAPE_WIDTH,
};
use crate::render::palette::{GOLD, LIGHT_GOLD, Paint};
use crate::render::shapes::{draw_line, fill_rect};
use image::RgbaImage;

/// Alpha of the texture line at column `x`
///
/// Every other line is stronger, giving a two-tone weave.
pub const fn line_alpha(x: u32) -> u8 {
    if x % (TAPE_LINE_SPACING * 2) == 0 {
        TAPE_LINE_STRONG_ALPHA
    } else {
        TAPE_LINE_WEAK_ALPHA
    }
}

/// Tape body, vertical texture lines, then opaque top and bottom borders
pub fn tape() -> RgbaImage {
    let mut canvas = RgbaImage::new(TAPE_WIDTH, TAPE_HEIGHT);
    let right = i32::try_from(TAPE_WIDTH).unwrap_or(i32::MAX);
    let bottom = i32::try_from(TAPE_HEIGHT).unwrap_or(i32::MAX);

    fill_rect(
        &mut canvas,
        [0, 0, right, bottom],
        Paint::new(LIGHT_GOLD, TAPE_BODY_ALPHA),
    );

    for x in (0..TAPE_WIDTH).step_by(TAPE_LINE_SPACING as usize) {
        let column = i32::try_from(x).unwrap_or(i32::MAX);
        draw_line(
            &mut canvas,
            (column, 0),
            (column, bottom),
            1,
            Paint::new(GOLD, line_alpha(x)),
        );
    }

    let edge = Paint::solid(GOLD);
    fill_rect(&mut canvas, [0, 0, right, TAPE_BORDER_DEPTH], edge);
    fill_rect(
        &mut canvas,
        [0, bottom - TAPE_BORDER_DEPTH, right, bottom],
        edge,
    );
    canvas
}
