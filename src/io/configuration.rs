//! Generation defaults, gallery geometry and output settings

// Parameter defaults shown in the input form
/// Default trunk length
pub const DEFAULT_TRUNK_LENGTH: f64 = 60.0;
/// Default shrink fraction
pub const DEFAULT_SHRINK_FRACTION: f64 = 0.7;
/// Default branch angle in degrees
pub const DEFAULT_BRANCH_ANGLE_DEG: f64 = 30.0;
/// Default minimum segment length
pub const DEFAULT_MIN_SEGMENT_LENGTH: f64 = 1.0;
/// Default recursion depth ceiling
pub const DEFAULT_MAX_DEPTH: u32 = 10;

// Advisory only; longer trunks are accepted but usually leave the cell
/// Largest trunk length the form suggests
pub const ADVISORY_MAX_TRUNK_LENGTH: f64 = 150.0;

// Trees whose worst case exceeds this get a warning before rendering
/// Segment count above which a tree is considered expensive
pub const SEGMENT_WARNING_THRESHOLD: u64 = 5_000_000;

// Gallery layout
/// Number of rows and columns in the gallery grid
pub const GRID_SIZE: usize = 5;
/// Width of one gallery cell in pixels
pub const CELL_WIDTH: u32 = 280;
/// Height of one gallery cell in pixels
pub const CELL_HEIGHT: u32 = 280;
/// Spacing between cells on the contact sheet
pub const CELL_GAP: u32 = 16;
/// Distance between the tree origin and the bottom edge of its cell
pub const ORIGIN_BOTTOM_MARGIN: f64 = 10.0;

// Rendering style
/// Stroke color for every branch (CSS `green`)
pub const STROKE_COLOR: [u8; 4] = [0, 128, 0, 255];
/// Fill used by a cleared surface
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];

// Persistence
/// Storage key holding the serialized gallery
pub const STORAGE_KEY: &str = "trees-grid";
/// Extension of files written by the file storage backend
pub const STORAGE_EXTENSION: &str = "json";
/// Default data directory
pub const DEFAULT_DATA_DIR: &str = ".";

// Output settings
/// File name of the contact sheet inside the data directory
pub const SHEET_FILE_NAME: &str = "trees-grid.png";
/// Prefix of per-cell images
pub const CELL_FILE_PREFIX: &str = "cell_";
/// Edge length of images produced by the single-tree `draw` command
pub const DEFAULT_DRAW_SIZE: u32 = 280;
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
