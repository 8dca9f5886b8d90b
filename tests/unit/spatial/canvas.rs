//! Tests for canvas geometry and points

#[cfg(test)]
mod tests {
    use flowlines::spatial::{Canvas, Point};

    // Tests that the margin boundary itself counts as inside
    #[test]
    fn test_margin_boundary_is_inside() {
        let canvas = Canvas::new(1200.0, 675.0, 20.0);

        assert!(!canvas.is_outside(Point::new(20.0, 20.0)));
        assert!(!canvas.is_outside(Point::new(1180.0, 655.0)));
        assert!(!canvas.is_outside(Point::new(600.0, 300.0)));

        assert!(canvas.is_outside(Point::new(19.999, 300.0)));
        assert!(canvas.is_outside(Point::new(1180.001, 300.0)));
        assert!(canvas.is_outside(Point::new(600.0, 19.5)));
        assert!(canvas.is_outside(Point::new(600.0, 655.5)));
    }

    // Tests that containment ignores the margin but not the edges
    #[test]
    fn test_contains_covers_full_canvas() {
        let canvas = Canvas::new(100.0, 50.0, 10.0);

        assert!(canvas.contains(Point::new(0.0, 0.0)));
        assert!(canvas.contains(Point::new(100.0, 50.0)));
        assert!(canvas.contains(Point::new(5.0, 5.0)));
        assert!(!canvas.contains(Point::new(-0.1, 5.0)));
        assert!(!canvas.contains(Point::new(5.0, 50.1)));
    }

    // Tests unit draws scale by width and height independently
    #[test]
    fn test_point_from_unit_scales_axes() {
        let canvas = Canvas::new(1200.0, 675.0, 20.0);
        let point = canvas.point_from_unit(0.5, 0.2);

        assert!((point.x - 600.0).abs() < 1e-12);
        assert!((point.y - 135.0).abs() < 1e-12);
    }

    // Tests offsets, distances and finiteness
    #[test]
    fn test_point_arithmetic() {
        let origin = Point::new(1.0, 2.0);
        let moved = origin.offset(Point::new(3.0, 4.0), -1.0);

        assert_eq!(moved, Point::new(-2.0, -2.0));
        assert!((origin.distance(moved) - 5.0).abs() < 1e-12);
        assert!(moved.is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
    }
}
