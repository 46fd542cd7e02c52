//! Transparent overlay with quarter-circle arcs and dot clusters in each corner

use crate::io::configuration::{
    CORNER_ARC_ALPHA_STEP, CORNER_ARC_BASE_ALPHA, CORNER_ARC_BASE_WIDTH, CORNER_ARC_EXTENT,
    CORNER_ARC_LAYERS, CORNER_ARC_MARGIN, CORNER_ARC_STEP, CORNER_CANVAS_SIZE, CORNER_DOT_ALPHA,
    CORNER_DOT_ANCHOR, CORNER_DOT_RADIUS, CORNER_DOT_SPREAD, CORNER_DOTS_PER_CLUSTER,
    FLORAL_CORNERS_SEED,
};
use crate::render::palette::{GOLD, Paint};
use crate::render::random::SeededRandom;
use crate::render::shapes::{fill_ellipse, stroke_arc};
use image::RgbaImage;

/// Canvas corner an ornament belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Upper left
    TopLeft,
    /// Upper right
    TopRight,
    /// Lower left
    BottomLeft,
    /// Lower right
    BottomRight,
}

impl Corner {
    /// Corners in drawing order
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Quarter sweep in degrees, clockwise from three o'clock
    pub const fn sweep(self) -> (f64, f64) {
        match self {
            Self::TopLeft => (180.0, 270.0),
            Self::TopRight => (270.0, 360.0),
            Self::BottomLeft => (90.0, 180.0),
            Self::BottomRight => (0.0, 90.0),
        }
    }

    /// Whether the corner sits on the right edge
    const fn is_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    /// Whether the corner sits on the bottom edge
    const fn is_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }

    /// Bounding box of arc layer `layer` on a `size` x `size` canvas
    pub const fn arc_box(self, size: i32, layer: i32) -> [i32; 4] {
        let inset = layer * CORNER_ARC_STEP;
        let (x0, x1) = if self.is_right() {
            (size - CORNER_ARC_EXTENT + inset, size - CORNER_ARC_MARGIN - inset)
        } else {
            (CORNER_ARC_MARGIN + inset, CORNER_ARC_EXTENT - inset)
        };
        let (y0, y1) = if self.is_bottom() {
            (size - CORNER_ARC_EXTENT + inset, size - CORNER_ARC_MARGIN - inset)
        } else {
            (CORNER_ARC_MARGIN + inset, CORNER_ARC_EXTENT - inset)
        };
        [x0, y0, x1, y1]
    }

    /// Centre of the dot cluster for this corner
    pub const fn dot_anchor(self, size: i32) -> (i32, i32) {
        let x = if self.is_right() {
            size - CORNER_DOT_ANCHOR
        } else {
            CORNER_DOT_ANCHOR
        };
        let y = if self.is_bottom() {
            size - CORNER_DOT_ANCHOR
        } else {
            CORNER_DOT_ANCHOR
        };
        (x, y)
    }
}

/// Stroke width and paint for arc layer `layer`, outermost first
pub const fn arc_style(layer: i32) -> (i32, Paint) {
    let fade = CORNER_ARC_ALPHA_STEP.saturating_mul(layer as u8);
    (
        CORNER_ARC_BASE_WIDTH + layer,
        Paint::new(GOLD, CORNER_ARC_BASE_ALPHA.saturating_sub(fade)),
    )
}

/// Draw all concentric arcs for one corner
pub fn draw_corner_arcs(canvas: &mut RgbaImage, corner: Corner) {
    let size = i32::try_from(canvas.width()).unwrap_or(i32::MAX);
    let (start, end) = corner.sweep();
    for layer in 0..CORNER_ARC_LAYERS {
        let (width, paint) = arc_style(layer);
        stroke_arc(canvas, corner.arc_box(size, layer), start, end, width, paint);
    }
}

/// Sprinkle small dots around each corner's anchor
///
/// Corners are visited in a fixed order so the seeded sequence lands the
/// same way every run.
pub fn draw_dot_clusters(canvas: &mut RgbaImage, random: &mut SeededRandom) {
    let size = i32::try_from(canvas.width()).unwrap_or(i32::MAX);
    let paint = Paint::new(GOLD, CORNER_DOT_ALPHA);
    for corner in Corner::ALL {
        let (ax, ay) = corner.dot_anchor(size);
        for _ in 0..CORNER_DOTS_PER_CLUSTER {
            let dx = random.int_inclusive(-CORNER_DOT_SPREAD, CORNER_DOT_SPREAD);
            let dy = random.int_inclusive(-CORNER_DOT_SPREAD, CORNER_DOT_SPREAD);
            let r = random.int_inclusive(CORNER_DOT_RADIUS.0, CORNER_DOT_RADIUS.1);
            let (x, y) = (ax + dx, ay + dy);
            fill_ellipse(canvas, [x - r, y - r, x + r, y + r], paint);
        }
    }
}

/// Four arc fans plus dot clusters on a transparent square
pub fn floral_corners() -> RgbaImage {
    let mut canvas = RgbaImage::new(CORNER_CANVAS_SIZE, CORNER_CANVAS_SIZE);
    for corner in Corner::ALL {
        draw_corner_arcs(&mut canvas, corner);
    }

    let mut random = SeededRandom::new(FLORAL_CORNERS_SEED);
    draw_dot_clusters(&mut canvas, &mut random);
    canvas
}
