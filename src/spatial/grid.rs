//! Uniform-grid occupancy index for streamline spacing queries
//!
//! Every point a streamline reserves is bucketed into a square cell of
//! `cell_size`. Proximity queries only visit the 3×3 block of cells around the
//! query point, so a query costs the number of points stored nearby rather than
//! the number of points on the canvas. The index only grows: once a streamline
//! claims space it stays claimed for the rest of the run.

use ndarray::Array2;

use crate::spatial::canvas::Point;

/// Bucketed store of reserved points
///
/// Buckets are preallocated for the whole canvas and stored row-major, so the
/// linear index of a cell is `col + row * cols`.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    buckets: Array2<Vec<Point>>,
    cell_size: f64,
    point_count: usize,
}

impl OccupancyGrid {
    /// Create an empty index covering `width × height` with square cells
    pub fn new(width: f64, height: f64, cell_size: f64) -> Self {
        let cols = (width / cell_size).ceil().max(1.0) as usize;
        let rows = (height / cell_size).ceil().max(1.0) as usize;

        Self {
            buckets: Array2::from_elem((rows, cols), Vec::new()),
            cell_size,
            point_count: 0,
        }
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.buckets.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.buckets.ncols()
    }

    /// Side length of a cell
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Total number of points stored
    pub const fn len(&self) -> usize {
        self.point_count
    }

    /// Check whether no point has been stored yet
    pub const fn is_empty(&self) -> bool {
        self.point_count == 0
    }

    /// Signed `(col, row)` of the cell containing `point`
    ///
    /// The result may lie outside the grid for points off the canvas.
    pub fn cell_of(&self, point: Point) -> [i64; 2] {
        [
            (point.x / self.cell_size).floor() as i64,
            (point.y / self.cell_size).floor() as i64,
        ]
    }

    /// Linear bucket index of an in-range cell
    pub fn linear_index(&self, cell: [i64; 2]) -> Option<usize> {
        self.bucket_position(cell)
            .map(|[row, col]| col + row * self.cols())
    }

    /// Append a point to its bucket
    ///
    /// Returns `false` without storing anything when the point lies outside the
    /// grid.
    pub fn insert(&mut self, point: Point) -> bool {
        let Some(position) = self.bucket_position(self.cell_of(point)) else {
            return false;
        };
        match self.buckets.get_mut(position) {
            Some(bucket) => {
                bucket.push(point);
                self.point_count += 1;
                true
            }
            None => false,
        }
    }

    /// Points stored in the 3×3 block of cells centered on `point`'s cell
    ///
    /// Cells beyond the grid edges are skipped.
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = &Point> + '_ {
        let [col, row] = self.cell_of(point);
        (-1..=1)
            .flat_map(move |dc| (-1..=1).map(move |dr| [col + dc, row + dr]))
            .filter_map(move |cell| self.bucket_position(cell))
            .filter_map(move |position| self.buckets.get(position))
            .flatten()
    }

    /// Check whether any stored point is strictly closer than `threshold`
    pub fn has_close_neighbor(&self, point: Point, threshold: f64) -> bool {
        self.neighbors(point)
            .any(|neighbor| neighbor.distance(point) < threshold)
    }

    /// Check for a stored point closer than one cell size
    pub fn is_claimed(&self, point: Point) -> bool {
        self.has_close_neighbor(point, self.cell_size)
    }

    // `[row, col]` of an in-range cell
    fn bucket_position(&self, [col, row]: [i64; 2]) -> Option<[usize; 2]> {
        let col = usize::try_from(col).ok().filter(|&c| c < self.cols())?;
        let row = usize::try_from(row).ok().filter(|&r| r < self.rows())?;
        Some([row, col])
    }
}
