//! Paper grain: independent per-pixel grey noise around a fixed baseline

use crate::io::configuration::{GRAIN_AMPLITUDE, GRAIN_BASELINE, GRAIN_HEIGHT, GRAIN_SEED, GRAIN_WIDTH};
use crate::render::random::SeededRandom;
use image::{Rgba, RgbaImage};
use ndarray::Array2;

/// Grey levels indexed by (`row`, `col`)
///
/// Samples are drawn in row-major order, so the same seed always lays out the
/// same field.
pub fn noise_field(
    rows: usize,
    cols: usize,
    baseline: i32,
    amplitude: i32,
    random: &mut SeededRandom,
) -> Array2<u8> {
    Array2::from_shape_fn((rows, cols), |_| {
        let value = baseline + random.int_inclusive(-amplitude, amplitude);
        value.clamp(0, i32::from(u8::MAX)) as u8
    })
}

/// Opaque greyscale image from a noise field
pub fn field_to_image(field: &Array2<u8>) -> RgbaImage {
    let (rows, cols) = field.dim();
    RgbaImage::from_fn(cols as u32, rows as u32, |x, y| {
        let level = field
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or_default();
        Rgba([level, level, level, u8::MAX])
    })
}

/// Grain texture at the configured size and seed
pub fn grain() -> RgbaImage {
    let mut random = SeededRandom::new(GRAIN_SEED);
    let field = noise_field(
        GRAIN_HEIGHT as usize,
        GRAIN_WIDTH as usize,
        GRAIN_BASELINE,
        GRAIN_AMPLITUDE,
        &mut random,
    );
    field_to_image(&field)
}
