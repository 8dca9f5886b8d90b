use tracing::{debug, info};

use crate::algorithm::frontier::Frontier;
use crate::algorithm::tracer::{Streamline, StreamlineTracer};
use crate::io::configuration::{
    CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE, DARK_SCHEME, LIGHT_SCHEME, MARGIN,
    MAX_BIG_LINE_WIDTH, MAX_BIG_LINES, MAX_MEDIUM_LINES, MAX_NOISE_SCALE, MAX_SMALL_LINE_WIDTH,
    MAX_SMALL_LINES, MAX_SPACING, MEDIUM_WIDTH_DIVISOR, MIN_NOISE_SCALE, MIN_SMALL_LINE_WIDTH,
    MIN_SPACING, SMALL_WIDTH_DIVISOR, STEP_CELLS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::noise::SimplexNoise3;
use crate::math::random::Alea;
use crate::math::round_half_up;
use crate::spatial::{Canvas, Point, VectorField};
use crate::style::{Color, Palette, PaletteScheme, StyledLine};

/// Hyperparameters controlling one generation run
///
/// The value is immutable for the duration of a run and threaded into the
/// generator explicitly; two runs with equal configs and seeds produce equal
/// artwork.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Drawing surface and margin
    pub canvas: Canvas,
    /// Occupancy cell size; also the minimum gap between reserved points
    pub cell_size: f64,
    /// Step length as a multiple of the cell size
    pub step_cells: f64,
    /// Bounds of the noise sampling scale (min, max)
    pub noise_scale: (f64, f64),
    /// Bounds of the gap between streamlines in cells (min, max)
    pub spacing: (f64, f64),
    /// Upper bound of the big stroke width
    pub max_big_width: f64,
    /// Bounds of the frontier stroke width (min, max)
    pub small_width: (f64, f64),
    /// Maximum randomly seeded streamlines in the big, medium and small passes
    pub max_lines: [usize; 3],
    /// Candidate palette schemes
    pub schemes: Vec<PaletteScheme>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, MARGIN),
            cell_size: CELL_SIZE,
            step_cells: STEP_CELLS,
            noise_scale: (MIN_NOISE_SCALE, MAX_NOISE_SCALE),
            spacing: (MIN_SPACING, MAX_SPACING),
            max_big_width: MAX_BIG_LINE_WIDTH,
            small_width: (MIN_SMALL_LINE_WIDTH, MAX_SMALL_LINE_WIDTH),
            max_lines: [MAX_BIG_LINES, MAX_MEDIUM_LINES, MAX_SMALL_LINES],
            schemes: vec![
                PaletteScheme::new("light", &LIGHT_SCHEME),
                PaletteScheme::new("dark", &DARK_SCHEME),
            ],
        }
    }
}

impl GeneratorConfig {
    /// Check that every parameter describes a finite, non-empty run
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error naming the first offending field
    pub fn validate(&self) -> Result<()> {
        let canvas = &self.canvas;
        if !(canvas.width.is_finite() && canvas.width > 0.0) {
            return Err(invalid_parameter(
                "canvas.width",
                &canvas.width,
                &"must be positive",
            ));
        }
        if !(canvas.height.is_finite() && canvas.height > 0.0) {
            return Err(invalid_parameter(
                "canvas.height",
                &canvas.height,
                &"must be positive",
            ));
        }
        if !(canvas.margin >= 0.0
            && 2.0 * canvas.margin < canvas.width
            && 2.0 * canvas.margin < canvas.height)
        {
            return Err(invalid_parameter(
                "canvas.margin",
                &canvas.margin,
                &"must leave a drawable area",
            ));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &"must be positive",
            ));
        }
        // Steps shorter than a cell would collide with their own footprint
        if !(self.step_cells.is_finite() && self.step_cells > 1.0) {
            return Err(invalid_parameter(
                "step_cells",
                &self.step_cells,
                &"must exceed one cell",
            ));
        }
        check_bounds("noise_scale", self.noise_scale)?;
        check_bounds("spacing", self.spacing)?;
        check_bounds("small_width", self.small_width)?;
        if !(self.max_big_width.is_finite() && self.max_big_width >= 0.0) {
            return Err(invalid_parameter(
                "max_big_width",
                &self.max_big_width,
                &"must be non-negative",
            ));
        }
        if self.schemes.is_empty() {
            return Err(invalid_parameter(
                "schemes",
                &0,
                &"at least one palette scheme is required",
            ));
        }
        if let Some(scheme) = self.schemes.iter().find(|scheme| scheme.colors.len() < 3) {
            return Err(invalid_parameter(
                "schemes",
                &scheme.name,
                &"a scheme needs a background, a foreground and a stroke color",
            ));
        }
        Ok(())
    }
}

fn check_bounds(parameter: &'static str, (low, high): (f64, f64)) -> Result<()> {
    if low.is_finite() && high.is_finite() && (0.0..=high).contains(&low) {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &format!("{low}..{high}"),
            &"bounds must be finite, non-negative and ordered",
        ))
    }
}

/// Generation passes in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Randomly seeded streamlines at the big width
    Big,
    /// Randomly seeded streamlines at a third of the big width
    Medium,
    /// Randomly seeded streamlines at a sixth of the big width
    Small,
    /// Exhaustive frontier drain at the small width
    Frontier,
    /// All passes have run
    Done,
}

impl Pass {
    /// Number of passes that do work
    pub const COUNT: usize = 4;

    /// The pass that runs after this one
    pub const fn next(self) -> Self {
        match self {
            Self::Big => Self::Medium,
            Self::Medium => Self::Small,
            Self::Small => Self::Frontier,
            Self::Frontier | Self::Done => Self::Done,
        }
    }

    /// Short lowercase label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Big => "big",
            Self::Medium => "medium",
            Self::Small => "small",
            Self::Frontier => "frontier",
            Self::Done => "done",
        }
    }

    /// Zero-based position among the working passes
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Big => 0,
            Self::Medium => 1,
            Self::Small => 2,
            Self::Frontier => 3,
            Self::Done => Self::COUNT,
        }
    }
}

/// Counters describing one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    /// Streamlines traced per pass, including those dropped as degenerate
    pub traced: [usize; Pass::COUNT],
    /// Traces shorter than two points that produced no styled line
    pub dropped: usize,
    /// Frontier candidates queued during the run
    pub candidates_pushed: usize,
    /// Frontier candidates discarded because their spot was already claimed
    pub candidates_discarded: usize,
    /// Points held by the occupancy index at the end of the run
    pub reserved_points: usize,
}

/// Result of a generation run
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    /// Seed the artwork was generated from
    pub seed: i64,
    /// Canvas the lines were traced on
    pub canvas: Canvas,
    /// Styled lines in generation order
    pub lines: Vec<StyledLine>,
    /// Canvas fill color
    pub background: Color,
    /// Text and accent color
    pub foreground: Color,
    /// Name of the chosen palette scheme
    pub scheme: String,
    /// Reserved footprints per emitted line, when capture was enabled
    pub footprints: Vec<Vec<Point>>,
    /// Run counters
    pub stats: RunStats,
}

/// Stateful generator stepping through the fixed pass sequence
///
/// All randomness comes from one [`Alea`] stream consumed in a fixed order: the
/// noise permutation, the palette, the spacing, the noise scale, the big and
/// small widths, then the per-pass seed points. The random source, occupancy
/// index and frontier belong to this value alone.
pub struct FlowLineGenerator {
    seed: i64,
    config: GeneratorConfig,
    random: Alea,
    tracer: StreamlineTracer,
    frontier: Frontier,
    palette: Palette,
    big_width: f64,
    small_width: f64,
    pass: Pass,
    lines: Vec<StyledLine>,
    footprints: Option<Vec<Vec<Point>>>,
    stats: RunStats,
}

impl FlowLineGenerator {
    /// Create a generator with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(seed: i64, config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(seed, config))
    }

    fn with_valid_config(seed: i64, config: GeneratorConfig) -> Self {
        let mut random = Alea::new(seed);
        let noise = SimplexNoise3::new(&mut random);
        let palette = Palette::choose(&config.schemes, &mut random);
        let spacing = random.next_in_range(config.spacing.0, config.spacing.1);
        let noise_scale = random.next_in_range(config.noise_scale.0, config.noise_scale.1);
        let big_width = random.next_f64() * config.max_big_width;
        let small_width =
            round_half_up(random.next_in_range(config.small_width.0, config.small_width.1));

        let field = VectorField::new(noise, noise_scale, config.cell_size * config.step_cells);
        let tracer = StreamlineTracer::new(field, config.canvas, config.cell_size, spacing);

        debug!(
            seed,
            scheme = %palette.name,
            spacing,
            noise_scale,
            big_width,
            small_width,
            "Initialized flow line generator"
        );

        Self {
            seed,
            config,
            random,
            tracer,
            frontier: Frontier::new(),
            palette,
            big_width,
            small_width,
            pass: Pass::Big,
            lines: Vec::new(),
            footprints: None,
            stats: RunStats::default(),
        }
    }

    /// Keep the reserved footprint of every emitted line in the artwork
    pub fn enable_footprints(&mut self) {
        self.footprints.get_or_insert_with(Vec::new);
    }

    /// The pass that runs next
    pub const fn current_pass(&self) -> Pass {
        self.pass
    }

    /// Palette chosen for this run
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Stroke width of the big pass
    pub const fn big_width(&self) -> f64 {
        self.big_width
    }

    /// Stroke width of the frontier pass
    pub const fn small_width(&self) -> f64 {
        self.small_width
    }

    /// Gap between streamlines in cells
    pub const fn spacing(&self) -> f64 {
        self.tracer.spacing()
    }

    /// Noise sampling scale drawn for this run
    pub const fn noise_scale(&self) -> f64 {
        self.tracer.field().noise_scale()
    }

    /// Styled lines emitted so far
    pub fn lines(&self) -> &[StyledLine] {
        &self.lines
    }

    /// Run the next pass
    ///
    /// Returns `true` while passes remain.
    pub fn execute_pass(&mut self) -> bool {
        let pass = self.pass;
        let emitted_before = self.lines.len();

        match pass {
            Pass::Big => {
                let [max_lines, _, _] = self.config.max_lines;
                self.run_seeded_pass(pass, max_lines, self.big_width);
            }
            Pass::Medium => {
                let [_, max_lines, _] = self.config.max_lines;
                self.run_seeded_pass(pass, max_lines, self.big_width / MEDIUM_WIDTH_DIVISOR);
            }
            Pass::Small => {
                let [_, _, max_lines] = self.config.max_lines;
                self.run_seeded_pass(pass, max_lines, self.big_width / SMALL_WIDTH_DIVISOR);
            }
            Pass::Frontier => {
                let start = self.random_point();
                self.frontier.push(start);
                let streamlines = self.frontier.drain(&mut self.tracer, self.small_width);
                for streamline in streamlines {
                    self.emit(pass, &streamline);
                }
            }
            Pass::Done => return false,
        }

        debug!(
            pass = pass.label(),
            traced = self.stats.traced.get(pass.ordinal()).copied().unwrap_or(0),
            emitted = self.lines.len() - emitted_before,
            pending_candidates = self.frontier.len(),
            "Completed pass"
        );

        self.pass = pass.next();
        self.pass != Pass::Done
    }

    /// Run all remaining passes and return the artwork
    pub fn run(mut self) -> Artwork {
        while self.execute_pass() {}
        self.finish()
    }

    /// Package the lines produced so far
    pub fn finish(mut self) -> Artwork {
        self.stats.candidates_pushed = self.frontier.pushed();
        self.stats.candidates_discarded = self.frontier.discarded();
        self.stats.reserved_points = self.tracer.grid().len();

        info!(
            seed = self.seed,
            lines = self.lines.len(),
            scheme = %self.palette.name,
            dropped = self.stats.dropped,
            "Generated artwork"
        );

        Artwork {
            seed: self.seed,
            canvas: self.config.canvas,
            lines: self.lines,
            background: self.palette.background,
            foreground: self.palette.foreground,
            scheme: self.palette.name,
            footprints: self.footprints.unwrap_or_default(),
            stats: self.stats,
        }
    }

    // The loop bound is re-drawn before every iteration, so the number of
    // streamlines is itself random and never exceeds `max_lines`
    fn run_seeded_pass(&mut self, pass: Pass, max_lines: usize, width: f64) {
        let mut traced = 0usize;
        while (traced as f64) < self.random.next_f64() * max_lines as f64 {
            let seed = self.random_point();
            let streamline = self.tracer.trace(seed, width, &mut self.frontier);
            self.emit(pass, &streamline);
            traced += 1;
        }
    }

    fn random_point(&mut self) -> Point {
        let u = self.random.next_f64();
        let v = self.random.next_f64();
        self.config.canvas.point_from_unit(u, v)
    }

    fn emit(&mut self, pass: Pass, streamline: &Streamline) {
        if let Some(count) = self.stats.traced.get_mut(pass.ordinal()) {
            *count += 1;
        }

        let color = streamline
            .first_point()
            .map_or(self.palette.foreground, |first| {
                self.palette
                    .stroke_for_angle(self.tracer.field().angle_at(first))
            });

        match StyledLine::from_points(&streamline.points, color, streamline.width) {
            Some(line) => {
                self.lines.push(line);
                if let Some(footprints) = &mut self.footprints {
                    footprints.push(streamline.footprints.concat());
                }
            }
            None => self.stats.dropped += 1,
        }
    }
}

/// Generate the artwork for `seed` with the default hyperparameters
pub fn generate(seed: i64) -> Artwork {
    FlowLineGenerator::with_valid_config(seed, GeneratorConfig::default()).run()
}

/// Generate the artwork for `seed` with custom hyperparameters
///
/// # Errors
///
/// Returns an error if the configuration fails validation
pub fn generate_with(seed: i64, config: &GeneratorConfig) -> Result<Artwork> {
    Ok(FlowLineGenerator::new(seed, config.clone())?.run())
}
