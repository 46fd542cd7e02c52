//! Opaque background textures: a vertical wash plus scattered soft blooms

use crate::io::configuration::{
    BACKGROUND_BLUR_SIGMA, BACKGROUND_SIZE, FLORAL_BACKGROUND_SEED, FLORAL_BLOOM_ALPHA,
    FLORAL_BLOOM_COUNT, FLORAL_BLOOM_RADIUS, FLORAL_WASH_ALPHA, GOLD_BACKGROUND_SEED,
    GOLD_BLOOM_ALPHA, GOLD_BLOOM_COUNT, GOLD_BLOOM_RADIUS, GOLD_WASH_ALPHA,
};
use crate::render::filter::gaussian_blur;
use crate::render::palette::{BURGUNDY, DARK_BURGUNDY, GOLD, Paint};
use crate::render::random::SeededRandom;
use crate::render::shapes::{fill_ellipse, fill_rect};
use image::{Rgb, RgbImage};

/// Direction the wash fades toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    /// Strongest at the top row, vanishing at the bottom
    Downward,
    /// Vanishing at the top row, strongest at the bottom
    Upward,
}

/// Wash alpha for row `y` of a canvas `height` rows tall
pub fn wash_alpha(y: u32, height: u32, peak: f64, fade: Fade) -> u8 {
    if height == 0 {
        return 0;
    }
    let progress = f64::from(y) / f64::from(height);
    let strength = match fade {
        Fade::Downward => 1.0 - progress,
        Fade::Upward => progress,
    };
    (peak * strength).floor().clamp(0.0, 255.0) as u8
}

/// Overlay one translucent band per row
///
/// Each band covers its own row and the next, so consecutive bands overlap by
/// one row as they build up the gradient.
pub fn apply_wash(canvas: &mut RgbImage, color: [u8; 3], peak: f64, fade: Fade) {
    let (width, height) = canvas.dimensions();
    let right = i32::try_from(width).unwrap_or(i32::MAX);
    for y in 0..height {
        let alpha = wash_alpha(y, height, peak, fade);
        if alpha == 0 {
            continue;
        }
        let top = i32::try_from(y).unwrap_or(i32::MAX);
        fill_rect(canvas, [0, top, right, top + 1], Paint::new(color, alpha));
    }
}

/// Parameters for a field of randomly placed circular blooms
#[derive(Debug, Clone, Copy)]
pub struct BloomField {
    /// Number of blooms
    pub count: usize,
    /// Inclusive radius range
    pub radius: (i32, i32),
    /// Inclusive alpha range
    pub alpha: (u8, u8),
    /// Color used when the coin toss lands high
    pub primary: [u8; 3],
    /// Color used otherwise; `None` skips the coin toss entirely
    pub secondary: Option<[u8; 3]>,
}

/// Scatter blooms whose centres may sit anywhere from edge to edge inclusive
pub fn scatter_blooms(canvas: &mut RgbImage, field: &BloomField, random: &mut SeededRandom) {
    let (width, height) = canvas.dimensions();
    let max_x = i32::try_from(width).unwrap_or(i32::MAX);
    let max_y = i32::try_from(height).unwrap_or(i32::MAX);

    for _ in 0..field.count {
        let x = random.int_inclusive(0, max_x);
        let y = random.int_inclusive(0, max_y);
        let radius = random.int_inclusive(field.radius.0, field.radius.1);
        let alpha = random.byte_inclusive(field.alpha.0, field.alpha.1);
        let color = match field.secondary {
            Some(secondary) => {
                if random.unit() > 0.5 {
                    field.primary
                } else {
                    secondary
                }
            }
            None => field.primary,
        };
        fill_ellipse(
            canvas,
            [x - radius, y - radius, x + radius, y + radius],
            Paint::new(color, alpha),
        );
    }
}

/// Burgundy base, gold wash fading downward, mixed blooms, softened
pub fn floral_background() -> RgbImage {
    let mut canvas = RgbImage::from_pixel(BACKGROUND_SIZE, BACKGROUND_SIZE, Rgb(BURGUNDY));
    apply_wash(&mut canvas, GOLD, FLORAL_WASH_ALPHA, Fade::Downward);

    let mut random = SeededRandom::new(FLORAL_BACKGROUND_SEED);
    let field = BloomField {
        count: FLORAL_BLOOM_COUNT,
        radius: FLORAL_BLOOM_RADIUS,
        alpha: FLORAL_BLOOM_ALPHA,
        primary: DARK_BURGUNDY,
        secondary: Some(GOLD),
    };
    scatter_blooms(&mut canvas, &field, &mut random);

    gaussian_blur(&canvas, BACKGROUND_BLUR_SIGMA)
}

/// Gold base, burgundy wash growing downward, dark blooms, softened
pub fn gold_background() -> RgbImage {
    let mut canvas = RgbImage::from_pixel(BACKGROUND_SIZE, BACKGROUND_SIZE, Rgb(GOLD));
    apply_wash(&mut canvas, BURGUNDY, GOLD_WASH_ALPHA, Fade::Upward);

    let mut random = SeededRandom::new(GOLD_BACKGROUND_SEED);
    let field = BloomField {
        count: GOLD_BLOOM_COUNT,
        radius: GOLD_BLOOM_RADIUS,
        alpha: GOLD_BLOOM_ALPHA,
        primary: DARK_BURGUNDY,
        secondary: None,
    };
    scatter_blooms(&mut canvas, &field, &mut random);

    gaussian_blur(&canvas, BACKGROUND_BLUR_SIGMA)
}
