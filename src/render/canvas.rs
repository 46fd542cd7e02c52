//! Per-pixel compositing of translucent paint onto opaque and transparent canvases
//!
//! Opaque canvases mix the paint toward the existing color by its alpha.
//! Transparent canvases use source-over compositing so repeated strokes build
//! up coverage the same way layered ink does.

use crate::render::palette::Paint;
use image::{ImageBuffer, Pixel, Rgb, Rgba};
use num_traits::Float;

/// Pixel formats that accept translucent paint
pub trait Blend: Pixel<Subpixel = u8> + 'static {
    /// Composite `paint` over this pixel in place
    fn composite(&mut self, paint: Paint);
}

/// Linear interpolation between two channel values
pub fn mix<T: Float>(base: T, over: T, weight: T) -> T {
    over.mul_add(weight, base * (T::one() - weight))
}

fn to_channel<T: Float>(value: T) -> u8 {
    value
        .round()
        .max(T::zero())
        .min(T::from(u8::MAX).unwrap_or_else(T::one))
        .to_u8()
        .unwrap_or(u8::MAX)
}

impl Blend for Rgb<u8> {
    fn composite(&mut self, paint: Paint) {
        if paint.alpha == u8::MAX {
            *self = Rgb(paint.rgb);
            return;
        }
        let weight = f32::from(paint.alpha) / 255.0;
        for (channel, source) in self.0.iter_mut().zip(paint.rgb) {
            *channel = to_channel(mix(f32::from(*channel), f32::from(source), weight));
        }
    }
}

impl Blend for Rgba<u8> {
    fn composite(&mut self, paint: Paint) {
        if paint.alpha == 0 {
            return;
        }
        let [r, g, b, a] = self.0;
        let src_alpha = f32::from(paint.alpha) / 255.0;
        let dst_alpha = f32::from(a) / 255.0;
        let out_alpha = dst_alpha.mul_add(1.0 - src_alpha, src_alpha);
        if out_alpha <= 0.0 {
            *self = Rgba([0, 0, 0, 0]);
            return;
        }

        // Destination weight relative to the combined coverage
        let dst_weight = dst_alpha * (1.0 - src_alpha) / out_alpha;
        let [sr, sg, sb] = paint.rgb;
        let channel = |dst: u8, src: u8| {
            to_channel(mix(f32::from(src), f32::from(dst), dst_weight))
        };

        *self = Rgba([
            channel(r, sr),
            channel(g, sg),
            channel(b, sb),
            to_channel(out_alpha * 255.0),
        ]);
    }
}

/// Blend paint into the pixel at signed coordinates, ignoring points off the canvas
pub fn blend_pixel<P: Blend>(canvas: &mut ImageBuffer<P, Vec<u8>>, x: i32, y: i32, paint: Paint) {
    let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if let Some(pixel) = canvas.get_pixel_mut_checked(px, py) {
        pixel.composite(paint);
    }
}

/// Clip an inclusive box to the canvas, returning `None` when nothing is visible
pub fn clip_box<P: Blend>(
    canvas: &ImageBuffer<P, Vec<u8>>,
    [x0, y0, x1, y1]: [i32; 4],
) -> Option<[i32; 4]> {
    let max_x = i32::try_from(canvas.width()).unwrap_or(i32::MAX) - 1;
    let max_y = i32::try_from(canvas.height()).unwrap_or(i32::MAX) - 1;
    let clipped = [x0.max(0), y0.max(0), x1.min(max_x), y1.min(max_y)];
    (clipped[0] <= clipped[2] && clipped[1] <= clipped[3]).then_some(clipped)
}
