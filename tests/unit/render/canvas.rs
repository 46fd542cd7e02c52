//! Tests for translucent paint compositing on RGB and RGBA pixels

#[cfg(test)]
mod tests {
    use image::{ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage};
    use placeholder_graphics::render::canvas::{Blend, blend_pixel, clip_box, mix};
    use placeholder_graphics::render::palette::{GOLD, Paint};

    // Tests opaque paint replaces an RGB pixel outright
    // Verified by always mixing, even at full alpha
    #[test]
    fn test_rgb_opaque_paint_replaces() {
        let mut pixel = Rgb([1, 2, 3]);
        pixel.composite(Paint::solid(GOLD));
        assert_eq!(pixel, Rgb(GOLD));
    }

    // Tests translucent paint mixes toward the paint color by alpha
    // Verified by swapping base and paint weights
    #[test]
    fn test_rgb_translucent_mix() {
        let mut pixel = Rgb([0, 0, 0]);
        pixel.composite(Paint::new([255, 255, 255], 51));
        assert_eq!(pixel, Rgb([51, 51, 51]));

        let mut untouched = Rgb([10, 20, 30]);
        untouched.composite(Paint::new([255, 255, 255], 0));
        assert_eq!(untouched, Rgb([10, 20, 30]));
    }

    // Tests paint over a transparent pixel keeps its own color and alpha
    // Verified by premultiplying the color channels
    #[test]
    fn test_rgba_over_transparent() {
        let mut pixel = Rgba([0, 0, 0, 0]);
        pixel.composite(Paint::new(GOLD, 100));
        assert_eq!(pixel, Rgba([GOLD[0], GOLD[1], GOLD[2], 100]));
    }

    // Tests source-over accumulates coverage and stays opaque over opaque
    // Verified by overwriting alpha with the paint's alpha
    #[test]
    fn test_rgba_over_accumulates_alpha() {
        let mut layered = Rgba([0, 0, 0, 0]);
        layered.composite(Paint::new(GOLD, 128));
        layered.composite(Paint::new(GOLD, 128));
        assert!(layered.0[3] > 128, "two layers should be more opaque than one");

        let mut opaque = Rgba([0, 0, 0, 255]);
        opaque.composite(Paint::new([255, 255, 255], 51));
        assert_eq!(opaque, Rgba([51, 51, 51, 255]));
    }

    // Tests fully transparent paint is a no-op on RGBA
    // Verified by removing the zero-alpha early return
    #[test]
    fn test_rgba_zero_alpha_noop() {
        let mut pixel = Rgba([5, 6, 7, 8]);
        pixel.composite(Paint::new(GOLD, 0));
        assert_eq!(pixel, Rgba([5, 6, 7, 8]));
    }

    // Tests off-canvas coordinates are ignored
    // Verified by casting negative coordinates to u32
    #[test]
    fn test_blend_pixel_clips() {
        let mut canvas = RgbaImage::new(4, 4);
        blend_pixel(&mut canvas, -1, 0, Paint::solid(GOLD));
        blend_pixel(&mut canvas, 0, 4, Paint::solid(GOLD));
        blend_pixel(&mut canvas, 4, 4, Paint::solid(GOLD));
        assert!(canvas.pixels().all(|p| p.0[3] == 0));

        blend_pixel(&mut canvas, 3, 3, Paint::solid(GOLD));
        assert_eq!(canvas.get_pixel(3, 3).0[3], 255);
    }

    fn paint_origin<P: Blend>(canvas: &mut ImageBuffer<P, Vec<u8>>, paint: Paint) {
        blend_pixel(canvas, 0, 0, paint);
    }

    // Tests generic blending picks each format's own compositing rule
    // Verified by mixing RGBA pixels instead of compositing them
    #[test]
    fn test_blend_pixel_generic_formats() {
        let mut opaque = RgbImage::new(2, 2);
        paint_origin(&mut opaque, Paint::new([255, 255, 255], 51));
        assert_eq!(*opaque.get_pixel(0, 0), Rgb([51, 51, 51]));
        assert_eq!(*opaque.get_pixel(1, 1), Rgb([0, 0, 0]));

        let mut transparent = RgbaImage::new(2, 2);
        paint_origin(&mut transparent, Paint::new(GOLD, 100));
        assert_eq!(
            *transparent.get_pixel(0, 0),
            Rgba([GOLD[0], GOLD[1], GOLD[2], 100])
        );
        assert_eq!(*transparent.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
    }

    // Tests box clipping against canvas bounds
    // Verified by using exclusive upper bounds
    #[test]
    fn test_clip_box() {
        let canvas = RgbImage::new(10, 5);
        assert_eq!(clip_box(&canvas, [-3, -3, 20, 20]), Some([0, 0, 9, 4]));
        assert_eq!(clip_box(&canvas, [2, 1, 3, 2]), Some([2, 1, 3, 2]));
        assert_eq!(clip_box(&canvas, [11, 0, 15, 3]), None);
        assert_eq!(clip_box(&canvas, [-5, -5, -1, -1]), None);
    }

    // Tests linear interpolation endpoints and midpoint
    // Verified by inverting the weight
    #[test]
    fn test_mix() {
        assert!((mix(0.0_f64, 10.0, 0.25) - 2.5).abs() < 1e-12);
        assert!((mix(4.0_f64, 8.0, 0.0) - 4.0).abs() < 1e-12);
        assert!((mix(4.0_f32, 8.0, 1.0) - 8.0).abs() < 1e-6);
    }
}
