//! Bidirectional streamline growth with footprint reservation
//!
//! A streamline starts at a seed point and first grows backward against the
//! field. When the next step is blocked, by the canvas margin or by space
//! already claimed in the occupancy index, the line is reversed in place and growth
//! continues forward from the seed's end. The second blocked step ends the
//! streamline. Each accepted step reserves a footprint: the new point plus a
//! row of points along the field normal covering the stroke width and one cell
//! of spacing.

use crate::algorithm::frontier::Frontier;
use crate::io::configuration::CANDIDATE_INTERVAL;
use crate::spatial::{Canvas, OccupancyGrid, Point, VectorField};

/// Direction of growth relative to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Against the field direction
    Backward,
    /// Along the field direction
    Forward,
}

impl Direction {
    /// Multiplier applied to the field step
    pub const fn sign(self) -> f64 {
        match self {
            Self::Backward => -1.0,
            Self::Forward => 1.0,
        }
    }
}

/// Raw output of one tracing invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Streamline {
    /// Accepted points in final order: reversed backward growth, then forward
    pub points: Vec<Point>,
    /// Footprint reserved for each point, in the same order as `points`
    pub footprints: Vec<Vec<Point>>,
    /// Requested stroke width
    pub width: f64,
}

impl Streamline {
    /// First point in drawing order, where backward growth stopped
    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }
}

// Mutable record of a streamline while it grows
struct GrowthState {
    line: Vec<Point>,
    footprints: Vec<Vec<Point>>,
    direction: Direction,
}

impl GrowthState {
    fn new(seed: Point, seed_footprint: Vec<Point>) -> Self {
        Self {
            line: vec![seed],
            footprints: vec![seed_footprint],
            direction: Direction::Backward,
        }
    }

    // Flip so the seed end becomes the growing tail
    fn reverse(&mut self) {
        self.line.reverse();
        self.footprints.reverse();
        self.direction = Direction::Forward;
    }

    fn tail(&self) -> Option<Point> {
        self.line.last().copied()
    }
}

/// Grows streamlines against a shared occupancy index
///
/// Owns the field, the index and the spacing drawn for the run; the frontier is
/// passed in so that the scheduler can drain it while tracing pushes to it.
#[derive(Debug, Clone)]
pub struct StreamlineTracer {
    field: VectorField,
    grid: OccupancyGrid,
    canvas: Canvas,
    spacing: f64,
}

impl StreamlineTracer {
    /// Create a tracer over an empty index sized to `canvas`
    ///
    /// `spacing` is the gap between streamlines measured in cells.
    pub fn new(field: VectorField, canvas: Canvas, cell_size: f64, spacing: f64) -> Self {
        Self {
            field,
            grid: OccupancyGrid::new(canvas.width, canvas.height, cell_size),
            canvas,
            spacing,
        }
    }

    /// The occupancy index
    pub const fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// The direction field
    pub const fn field(&self) -> &VectorField {
        &self.field
    }

    /// Gap between streamlines in cells
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Check whether a candidate seed falls in space that is already claimed
    pub fn is_claimed(&self, point: Point) -> bool {
        self.grid.is_claimed(point)
    }

    /// Trace one streamline from `seed` with stroke `width`
    ///
    /// New frontier candidates are pushed onto `frontier` while the line grows.
    pub fn trace(&mut self, seed: Point, width: f64, frontier: &mut Frontier) -> Streamline {
        let seed_footprint = self.reserve_seed(seed, width);
        let mut state = GrowthState::new(seed, seed_footprint);
        let mut current = seed;

        loop {
            let step = self.field.direction_at(current);
            let candidate = current.offset(step, state.direction.sign());
            let footprint = self.footprint(candidate, width);

            if self.is_blocked(&footprint) {
                match state.direction {
                    Direction::Backward => {
                        state.reverse();
                        current = state.tail().unwrap_or(seed);
                        continue;
                    }
                    Direction::Forward => break,
                }
            }

            for &point in &footprint {
                self.grid.insert(point);
            }
            state.line.push(candidate);
            state.footprints.push(footprint);

            if state.line.len() % CANDIDATE_INTERVAL == 0 {
                self.spawn_candidates(current, width, frontier);
            }
            current = candidate;
        }

        Streamline {
            points: state.line,
            footprints: state.footprints,
            width,
        }
    }

    // Claims the seed and a wide band across it, wider than the running
    // footprint by the full spacing so neighbors keep their distance
    fn reserve_seed(&mut self, seed: Point, width: f64) -> Vec<Point> {
        self.grid.insert(seed);
        let mut footprint = vec![seed];
        let reach = (width / 2.0).ceil() + self.spacing;

        for distance in half_steps(reach) {
            let (above, below) = self
                .field
                .perpendicular_offsets(seed, distance * self.grid.cell_size());
            for point in [above, below] {
                if !self.canvas.is_outside(point) {
                    self.grid.insert(point);
                    footprint.push(point);
                }
            }
        }
        footprint
    }

    // The candidate point followed by normal pairs out to half the width plus
    // one cell
    fn footprint(&self, candidate: Point, width: f64) -> Vec<Point> {
        let reach = (width / 2.0 + 1.0).ceil();
        let mut footprint = vec![candidate];

        for distance in half_steps(reach) {
            let (above, below) = self
                .field
                .perpendicular_offsets(candidate, distance * self.grid.cell_size());
            footprint.push(above);
            footprint.push(below);
        }
        footprint
    }

    fn is_blocked(&self, footprint: &[Point]) -> bool {
        footprint.iter().any(|&point| self.canvas.is_outside(point))
            || footprint.iter().any(|&point| self.grid.is_claimed(point))
    }

    // Candidates sit one stroke width plus two gaps away from the line
    #[allow(clippy::suboptimal_flops)]
    fn spawn_candidates(&self, current: Point, width: f64, frontier: &mut Frontier) {
        let cell_size = self.grid.cell_size();
        let distance = width * cell_size + 2.0 * self.spacing * cell_size;
        let (above, below) = self.field.perpendicular_offsets(current, distance);

        for point in [above, below] {
            if !self.canvas.is_outside(point) {
                frontier.push(point);
            }
        }
    }
}

/// Offsets `0.5, 1.5, 2.5, …` up to and including `reach`
fn half_steps(reach: f64) -> impl Iterator<Item = f64> {
    std::iter::successors(Some(0.5), |&step| Some(step + 1.0)).take_while(move |&step| step <= reach)
}
