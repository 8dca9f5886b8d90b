//! Reference hyperparameters and runtime configuration defaults

use crate::style::palette::Color;

// Canvas
/// Canvas width in canvas units
pub const CANVAS_WIDTH: f64 = 1200.0;
/// Canvas height in canvas units
pub const CANVAS_HEIGHT: f64 = 675.0;
/// Distance from each canvas edge that streamlines may not cross
pub const MARGIN: f64 = 20.0;

// Occupancy index resolution; also the minimum gap between reserved points
/// Side length of an occupancy cell
pub const CELL_SIZE: f64 = 2.0;

/// Streamline step length as a multiple of the cell size
pub const STEP_CELLS: f64 = 1.5;

// Noise sampling scale bounds
/// Largest noise scale, giving the most turbulent field
pub const MAX_NOISE_SCALE: f64 = 0.001;
/// Smallest noise scale, giving the smoothest field
pub const MIN_NOISE_SCALE: f64 = 0.000_04;

// Gap between streamlines, in cells
/// Largest spacing between streamlines
pub const MAX_SPACING: f64 = 30.0;
/// Smallest spacing between streamlines
pub const MIN_SPACING: f64 = 1.0;

// Stroke widths
/// Upper bound of the big-pass stroke width
pub const MAX_BIG_LINE_WIDTH: f64 = 80.0;
/// Upper bound of the frontier-pass stroke width
pub const MAX_SMALL_LINE_WIDTH: f64 = 4.0;
/// Lower bound of the frontier-pass stroke width
pub const MIN_SMALL_LINE_WIDTH: f64 = 1.0;

// Upper bounds on the number of randomly seeded streamlines per pass
/// Big-pass streamline limit
pub const MAX_BIG_LINES: usize = 5;
/// Medium-pass streamline limit
pub const MAX_MEDIUM_LINES: usize = 20;
/// Small-pass streamline limit
pub const MAX_SMALL_LINES: usize = 40;

/// Medium width as a fraction of the big width
pub const MEDIUM_WIDTH_DIVISOR: f64 = 3.0;
/// Small width as a fraction of the big width
pub const SMALL_WIDTH_DIVISOR: f64 = 6.0;

/// Appended points between frontier candidate spawns
pub const CANDIDATE_INTERVAL: usize = 4;

/// Light scheme: warm paper background, dark ink, full spectrum of strokes
pub const LIGHT_SCHEME: [Color; 15] = [
    Color::from_hex(0xED_EAE6),
    Color::from_hex(0x27_272E),
    Color::from_hex(0x2D_4771),
    Color::from_hex(0x3B_6DB6),
    Color::from_hex(0x46_88E7),
    Color::from_hex(0x31_9BBC),
    Color::from_hex(0x19_A290),
    Color::from_hex(0x84_B88D),
    Color::from_hex(0xC6_CF96),
    Color::from_hex(0xF4_DA7C),
    Color::from_hex(0xFA_C78F),
    Color::from_hex(0xF7_9C7A),
    Color::from_hex(0xF4_6161),
    Color::from_hex(0xC1_4F87),
    Color::from_hex(0x75_4F8D),
];

/// Dark scheme: navy background, paper-colored text
pub const DARK_SCHEME: [Color; 14] = [
    Color::from_hex(0x23_3147),
    Color::from_hex(0xED_EAE6),
    Color::from_hex(0x37_5C93),
    Color::from_hex(0x37_7BA7),
    Color::from_hex(0x31_9BBC),
    Color::from_hex(0x19_A290),
    Color::from_hex(0xA0_BE9A),
    Color::from_hex(0xE2_DDCF),
    Color::from_hex(0xF7_CA6F),
    Color::from_hex(0xFC_975A),
    Color::from_hex(0xF4_6161),
    Color::from_hex(0xC1_4F87),
    Color::from_hex(0x75_4F8D),
    Color::from_hex(0x5B_5690),
];

// Overlay defaults used when a request leaves a field out
/// Author shown when none is given
pub const DEFAULT_AUTHOR: &str = "Ian Wootten";
/// Title shown when none is given
pub const DEFAULT_TITLE: &str = "This is the default title";
/// Subtitle shown when none is given
pub const DEFAULT_SUBTITLE: &str = "This is the default subheading";

/// Accent dot drawn next to the author name
pub const AUTHOR_BADGE_COLOR: Color = Color::from_hex(0xEC_D181);

// Default values for configurable parameters
/// Seed used when none is given or it does not parse
pub const DEFAULT_SEED: i64 = 0;

// Output settings
/// Prefix of generated file names
pub const OUTPUT_PREFIX: &str = "flowlines";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
