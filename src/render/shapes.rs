//! Filled and stroked shapes addressed by inclusive bounding boxes
//!
//! Every primitive visits each covered pixel exactly once, so translucent
//! paint never compounds inside a single shape. Coordinates may fall outside
//! the canvas; the invisible part is clipped.

use crate::render::canvas::{Blend, blend_pixel, clip_box};
use crate::render::palette::Paint;
use image::ImageBuffer;

/// Centre and semi-axes of the ellipse inscribed in an inclusive box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    /// Horizontal centre
    pub cx: f64,
    /// Vertical centre
    pub cy: f64,
    /// Horizontal semi-axis
    pub rx: f64,
    /// Vertical semi-axis
    pub ry: f64,
}

impl Ellipse {
    /// Ellipse inscribed in `[x0, y0, x1, y1]`
    pub fn inscribed([x0, y0, x1, y1]: [i32; 4]) -> Self {
        Self {
            cx: f64::from(x0 + x1) / 2.0,
            cy: f64::from(y0 + y1) / 2.0,
            rx: f64::from(x1 - x0) / 2.0,
            ry: f64::from(y1 - y0) / 2.0,
        }
    }

    /// Same centre with both semi-axes shrunk by `amount`
    pub fn shrunk(self, amount: f64) -> Self {
        Self {
            rx: self.rx - amount,
            ry: self.ry - amount,
            ..self
        }
    }

    /// Whether the pixel centre lies inside or on the boundary
    pub fn contains(&self, x: i32, y: i32) -> bool {
        if self.rx < 0.0 || self.ry < 0.0 {
            return false;
        }
        let dx = f64::from(x) - self.cx;
        let dy = f64::from(y) - self.cy;
        let nx = if self.rx > 0.0 {
            dx / self.rx
        } else if dx == 0.0 {
            0.0
        } else {
            return false;
        };
        let ny = if self.ry > 0.0 {
            dy / self.ry
        } else if dy == 0.0 {
            0.0
        } else {
            return false;
        };
        nx.mul_add(nx, ny * ny) <= 1.0
    }

    /// Angle of a point around the centre in degrees `[0, 360)`
    ///
    /// Zero points right and angles grow clockwise, matching image rows growing downward.
    pub fn angle_of(&self, x: i32, y: i32) -> f64 {
        let degrees = (f64::from(y) - self.cy)
            .atan2(f64::from(x) - self.cx)
            .to_degrees();
        degrees.rem_euclid(360.0)
    }
}

/// Paint every pixel of an inclusive rectangle
pub fn fill_rect<P: Blend>(canvas: &mut ImageBuffer<P, Vec<u8>>, bounds: [i32; 4], paint: Paint) {
    let Some([x0, y0, x1, y1]) = clip_box(canvas, bounds) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            blend_pixel(canvas, x, y, paint);
        }
    }
}

/// Paint the ellipse inscribed in an inclusive box
pub fn fill_ellipse<P: Blend>(
    canvas: &mut ImageBuffer<P, Vec<u8>>,
    bounds: [i32; 4],
    paint: Paint,
) {
    let shape = Ellipse::inscribed(bounds);
    paint_region(canvas, bounds, paint, |x, y| shape.contains(x, y));
}

/// Paint a ring of `width` pixels along the inside of the inscribed ellipse
pub fn stroke_ellipse<P: Blend>(
    canvas: &mut ImageBuffer<P, Vec<u8>>,
    bounds: [i32; 4],
    width: i32,
    paint: Paint,
) {
    let outer = Ellipse::inscribed(bounds);
    let inner = outer.shrunk(f64::from(width));
    paint_region(canvas, bounds, paint, |x, y| {
        outer.contains(x, y) && !inner.contains(x, y)
    });
}

/// Paint part of an elliptical ring between two angles in degrees
///
/// Angles are measured clockwise from three o'clock; `end` may reach 360.
pub fn stroke_arc<P: Blend>(
    canvas: &mut ImageBuffer<P, Vec<u8>>,
    bounds: [i32; 4],
    start: f64,
    end: f64,
    width: i32,
    paint: Paint,
) {
    let outer = Ellipse::inscribed(bounds);
    let inner = outer.shrunk(f64::from(width));
    paint_region(canvas, bounds, paint, |x, y| {
        if !outer.contains(x, y) || inner.contains(x, y) {
            return false;
        }
        let angle = outer.angle_of(x, y);
        (start..=end).contains(&angle) || (start..=end).contains(&(angle + 360.0))
    });
}

/// Paint a straight segment `width` pixels thick
///
/// The band spans `[-width/2, width/2)` across the segment so even widths stay even.
pub fn draw_line<P: Blend>(
    canvas: &mut ImageBuffer<P, Vec<u8>>,
    from: (i32, i32),
    to: (i32, i32),
    width: i32,
    paint: Paint,
) {
    let (dx, dy) = (f64::from(to.0 - from.0), f64::from(to.1 - from.1));
    let length = dx.hypot(dy);
    if length == 0.0 {
        blend_pixel(canvas, from.0, from.1, paint);
        return;
    }
    let (ux, uy) = (dx / length, dy / length);
    let half = f64::from(width) / 2.0;
    let reach = width / 2 + 1;
    let bounds = [
        from.0.min(to.0) - reach,
        from.1.min(to.1) - reach,
        from.0.max(to.0) + reach,
        from.1.max(to.1) + reach,
    ];
    paint_region(canvas, bounds, paint, |x, y| {
        let px = f64::from(x - from.0);
        let py = f64::from(y - from.1);
        let along = px.mul_add(ux, py * uy);
        let across = px.mul_add(-uy, py * ux);
        (0.0..=length).contains(&along) && (-half..half).contains(&across)
    });
}

fn paint_region<P, F>(canvas: &mut ImageBuffer<P, Vec<u8>>, bounds: [i32; 4], paint: Paint, inside: F)
where
    P: Blend,
    F: Fn(i32, i32) -> bool,
{
    let Some([x0, y0, x1, y1]) = clip_box(canvas, bounds) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            if inside(x, y) {
                blend_pixel(canvas, x, y, paint);
            }
        }
    }
}
