//! Artwork constants and runtime configuration defaults

// Output settings
/// Directory the batch writes into, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "public/graphics";
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

// File names in generation order
/// Burgundy background with gold wash
pub const FLORAL_BACKGROUND_FILE: &str = "bg-main.jpg";
/// Gold background with burgundy wash
pub const GOLD_BACKGROUND_FILE: &str = "bg-gold.jpg";
/// Transparent corner ornaments
pub const FLORAL_CORNERS_FILE: &str = "florals-corners.png";
/// Translucent ribbon strip
pub const TAPE_FILE: &str = "tape.png";
/// Circular stamp mark
pub const STAMP_FILE: &str = "stamp-ma.png";
/// Paper grain texture
pub const GRAIN_FILE: &str = "grain.png";

// Fixed seeds, one per randomized routine
/// Seed for the floral background scatter
pub const FLORAL_BACKGROUND_SEED: u64 = 42;
/// Seed for the gold background scatter
pub const GOLD_BACKGROUND_SEED: u64 = 43;
/// Seed for the corner dot clusters
pub const FLORAL_CORNERS_SEED: u64 = 44;
/// Seed for the grain noise
pub const GRAIN_SEED: u64 = 45;

// Backgrounds
/// Edge length of both square backgrounds
pub const BACKGROUND_SIZE: u32 = 1080;
/// Peak alpha of the floral background's gold wash (at the top row)
pub const FLORAL_WASH_ALPHA: f64 = 30.0;
/// Peak alpha of the gold background's burgundy wash (at the bottom row)
pub const GOLD_WASH_ALPHA: f64 = 25.0;
/// Number of scattered ellipses on the floral background
pub const FLORAL_BLOOM_COUNT: usize = 50;
/// Radius range of floral background ellipses
pub const FLORAL_BLOOM_RADIUS: (i32, i32) = (20, 80);
/// Alpha range of floral background ellipses
pub const FLORAL_BLOOM_ALPHA: (u8, u8) = (10, 40);
/// Number of scattered ellipses on the gold background
pub const GOLD_BLOOM_COUNT: usize = 40;
/// Radius range of gold background ellipses
pub const GOLD_BLOOM_RADIUS: (i32, i32) = (30, 100);
/// Alpha range of gold background ellipses
pub const GOLD_BLOOM_ALPHA: (u8, u8) = (15, 35);
/// Gaussian blur standard deviation applied to both backgrounds
pub const BACKGROUND_BLUR_SIGMA: f32 = 2.0;

// Corner ornaments
/// Edge length of the square ornament overlay
pub const CORNER_CANVAS_SIZE: u32 = 1080;
/// Concentric arcs drawn per corner
pub const CORNER_ARC_LAYERS: i32 = 5;
/// Inset between successive arc layers
pub const CORNER_ARC_STEP: i32 = 15;
/// Distance from the canvas edge to the outermost arc box
pub const CORNER_ARC_MARGIN: i32 = 10;
/// Far edge of the outermost arc box, measured from its corner
pub const CORNER_ARC_EXTENT: i32 = 200;
/// Stroke width of the outermost arc
pub const CORNER_ARC_BASE_WIDTH: i32 = 3;
/// Alpha of the outermost arc
pub const CORNER_ARC_BASE_ALPHA: u8 = 100;
/// Alpha lost per inner arc layer
pub const CORNER_ARC_ALPHA_STEP: u8 = 15;
/// Distance of each dot cluster anchor from its two edges
pub const CORNER_DOT_ANCHOR: i32 = 80;
/// Dots per cluster
pub const CORNER_DOTS_PER_CLUSTER: usize = 3;
/// Maximum offset of a dot from its anchor on each axis
pub const CORNER_DOT_SPREAD: i32 = 40;
/// Radius range of cluster dots
pub const CORNER_DOT_RADIUS: (i32, i32) = (3, 8);
/// Alpha of cluster dots
pub const CORNER_DOT_ALPHA: u8 = 120;

// Tape
/// Tape strip width
pub const TAPE_WIDTH: u32 = 1080;
/// Tape strip height
pub const TAPE_HEIGHT: u32 = 120;
/// Alpha of the tape body
pub const TAPE_BODY_ALPHA: u8 = 200;
/// Spacing between texture lines
pub const TAPE_LINE_SPACING: u32 = 20;
/// Alpha of texture lines on even multiples of the spacing
pub const TAPE_LINE_STRONG_ALPHA: u8 = 40;
/// Alpha of the remaining texture lines
pub const TAPE_LINE_WEAK_ALPHA: u8 = 20;
/// Depth of the solid border at the top and bottom edges
pub const TAPE_BORDER_DEPTH: i32 = 3;

// Stamp
/// Edge length of the square stamp
pub const STAMP_SIZE: u32 = 200;
/// Alpha of every stamp stroke
pub const STAMP_ALPHA: u8 = 150;
/// Inset and stroke width of the outer ring
pub const STAMP_OUTER_RING: (i32, i32) = (10, 4);
/// Inset and stroke width of the inner ring
pub const STAMP_INNER_RING: (i32, i32) = (20, 2);
/// Lettering in the middle of the stamp
pub const STAMP_TEXT: &str = "MA";
/// Offset of the text anchor left of and above the centre
pub const STAMP_TEXT_OFFSET: (i32, i32) = (15, 20);
/// Integer scale of the bitmap lettering
pub const STAMP_TEXT_SCALE: i32 = 2;
/// Inner and outer radius of the compass ticks
pub const STAMP_TICK_RADII: (f64, f64) = (35.0, 45.0);
/// Angles of the compass ticks in degrees
pub const STAMP_TICK_ANGLES: [f64; 4] = [0.0, 90.0, 180.0, 270.0];
/// Stroke width of the compass ticks
pub const STAMP_TICK_WIDTH: i32 = 2;

// Grain
/// Grain texture width
pub const GRAIN_WIDTH: u32 = 512;
/// Grain texture height
pub const GRAIN_HEIGHT: u32 = 512;
/// Grey level the noise is centred on
pub const GRAIN_BASELINE: i32 = 200;
/// Maximum deviation from the baseline in either direction
pub const GRAIN_AMPLITUDE: i32 = 30;
