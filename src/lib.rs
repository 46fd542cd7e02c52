//! Procedural placeholder artwork in a burgundy and gold palette
//!
//! Six fixed assets (two backgrounds, corner ornaments, a tape strip, a stamp
//! mark, and a grain texture) are painted from literal parameters and fixed
//! seeds, so every run reproduces the same files.

#![forbid(unsafe_code)]

/// The six assets and the routines that paint them
pub mod generators;
/// Command-line driver, configuration, error handling, and file output
pub mod io;
/// Drawing primitives, palette, filters, and seeded randomness
pub mod render;

pub use generators::Asset;
pub use io::error::{GraphicsError, Result};
