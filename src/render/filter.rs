//! Post-processing filters applied to finished canvases

use image::{ImageBuffer, Pixel, imageops};

/// Gaussian blur with standard deviation `sigma`
///
/// Returns a new buffer of the same pixel format and size.
pub fn gaussian_blur<P>(canvas: &ImageBuffer<P, Vec<u8>>, sigma: f32) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    if sigma <= 0.0 {
        return canvas.clone();
    }
    imageops::blur(canvas, sigma)
}
