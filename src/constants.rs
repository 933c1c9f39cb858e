/// Scroll, grid and decoration tuning constants.
///
/// These constants express intended behavior (breakpoints, wave shape, clamp
/// ranges) and keep magic numbers out of the code, improving readability.
// Viewport
pub const COMPACT_MAX_WIDTH_PX: f64 = 768.0; // widths strictly below this are Compact

// Section marker: a section is active when it straddles this line
pub const SECTION_MARKER_Y_PX: f64 = 150.0;

// Grid density per viewport class (rows, cols)
pub const GRID_COMPACT: (usize, usize) = (4, 6);
pub const GRID_REGULAR: (usize, usize) = (12, 18);

// Global rotation applied to every cell at full progress
pub const GRID_MAX_ROTATION_DEG: f64 = 30.0;

// Diagonal wave
pub const PHASE_DELAY_PER_STEP: f64 = 0.15; // added per (row + col)

// Cell scale mapping
pub const SCALE_BASE: f64 = 0.8;
pub const SCALE_SPAN: f64 = 0.3;

// Cell opacity mapping
pub const OPACITY_BASE: f64 = 0.07;
pub const OPACITY_SPAN: f64 = 0.25;

// Stroke width switches to the thick line above this intensity
pub const STROKE_THICK_THRESHOLD: f64 = 0.6;
pub const STROKE_THIN: f64 = 0.5;
pub const STROKE_THICK: f64 = 1.0;

// Slate stroke colour for grid cells
pub const GRID_STROKE_RGB: [u8; 3] = [55, 65, 81];

// Decorative shapes: per-progress coefficients
pub const TRIANGLE_ROTATION_DEG: f64 = 180.0;
pub const TRIANGLE_SCALE_GAIN: f64 = 1.0;
pub const HEXAGON_ROTATION_DEG: f64 = -120.0;
pub const HEXAGON_SCALE_GAIN: f64 = 0.5;
pub const LINES_TRAVEL_PX: f64 = 200.0;
pub const LINES_OFFSET_PX: f64 = -100.0;
pub const LINES_ROTATION_DEG: f64 = 5.0;
