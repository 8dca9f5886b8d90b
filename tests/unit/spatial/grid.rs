//! Tests for the uniform-grid occupancy index

#[cfg(test)]
mod tests {
    use flowlines::spatial::{OccupancyGrid, Point};

    // Tests grid dimensions round up to cover the canvas
    #[test]
    fn test_dimensions_cover_canvas() {
        let grid = OccupancyGrid::new(1200.0, 675.0, 2.0);

        assert_eq!(grid.cols(), 600);
        assert_eq!(grid.rows(), 338);
        assert!(grid.is_empty());
        assert!((grid.cell_size() - 2.0).abs() < f64::EPSILON);
    }

    // Tests cell lookup and the row-major linear index
    #[test]
    fn test_cell_and_linear_index() {
        let grid = OccupancyGrid::new(20.0, 10.0, 2.0);

        assert_eq!(grid.cell_of(Point::new(5.0, 3.9)), [2, 1]);
        assert_eq!(grid.cell_of(Point::new(-0.5, 0.0)), [-1, 0]);
        assert_eq!(grid.linear_index([2, 1]), Some(12));
        assert_eq!(grid.linear_index([9, 4]), Some(49));
        assert_eq!(grid.linear_index([10, 0]), None);
        assert_eq!(grid.linear_index([0, -1]), None);
    }

    // Tests that out-of-range points are ignored on insert
    #[test]
    fn test_insert_outside_grid_is_ignored() {
        let mut grid = OccupancyGrid::new(20.0, 10.0, 2.0);

        assert!(grid.insert(Point::new(1.0, 1.0)));
        assert!(!grid.insert(Point::new(-1.0, 1.0)));
        assert!(!grid.insert(Point::new(1.0, 10.0)));
        assert_eq!(grid.len(), 1);
    }

    // Tests that closeness is strict and reaches across cell boundaries
    #[test]
    fn test_claimed_uses_strict_distance_across_cells() {
        let mut grid = OccupancyGrid::new(20.0, 10.0, 2.0);
        grid.insert(Point::new(3.9, 3.9));

        assert!(grid.is_claimed(Point::new(4.1, 4.1)));
        assert!(grid.is_claimed(Point::new(5.8, 3.9)));
        assert!(!grid.is_claimed(Point::new(5.9, 3.9)));
        assert!(!grid.has_close_neighbor(Point::new(3.9, 5.9), 2.0));
        assert!(grid.has_close_neighbor(Point::new(3.9, 5.9), 2.2));
    }

    // Tests queries at the grid edges stay in range
    #[test]
    fn test_edge_queries_do_not_wrap() {
        let mut grid = OccupancyGrid::new(20.0, 10.0, 2.0);
        grid.insert(Point::new(0.5, 4.5));

        // The last column of the previous row is adjacent in linear order only
        assert!(!grid.is_claimed(Point::new(19.5, 2.5)));
        assert!(grid.is_claimed(Point::new(0.1, 4.9)));
        assert_eq!(grid.neighbors(Point::new(19.9, 9.9)).count(), 0);
        assert_eq!(grid.neighbors(Point::new(-5.0, -5.0)).count(), 0);
    }

    // Tests that neighbor queries only visit the 3x3 block
    #[test]
    fn test_neighbors_visit_adjacent_cells_only() {
        let mut grid = OccupancyGrid::new(20.0, 20.0, 2.0);
        for x in 0..10 {
            for y in 0..10 {
                grid.insert(Point::new(f64::from(x) * 2.0 + 1.0, f64::from(y) * 2.0 + 1.0));
            }
        }

        assert_eq!(grid.len(), 100);
        assert_eq!(grid.neighbors(Point::new(9.0, 9.0)).count(), 9);
        assert_eq!(grid.neighbors(Point::new(1.0, 1.0)).count(), 4);
        assert_eq!(grid.neighbors(Point::new(19.0, 9.0)).count(), 6);
    }
}
