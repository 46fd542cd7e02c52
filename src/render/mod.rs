//! Raster drawing primitives layered on `image` pixel buffers

/// Alpha blending of translucent colors into RGB and RGBA pixels
pub mod canvas;
/// Separable blur used to soften finished backgrounds
pub mod filter;
/// Fixed burgundy and gold color constants
pub mod palette;
/// Seeded pseudo-random source for reproducible artwork
pub mod random;
/// Rectangles, ellipses, arcs, and thick lines
pub mod shapes;
/// Built-in bitmap lettering
pub mod text;
