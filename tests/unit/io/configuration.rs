//! Tests for default hyperparameters, overlay text and palette tables

#[cfg(test)]
mod tests {
    use flowlines::io::configuration::{
        CANDIDATE_INTERVAL, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE, DARK_SCHEME, DEFAULT_AUTHOR,
        DEFAULT_SUBTITLE, DEFAULT_TITLE, LIGHT_SCHEME, MARGIN, MAX_BIG_LINES, MAX_MEDIUM_LINES, MAX_NOISE_SCALE, MAX_SMALL_LINES, MAX_SPACING,
        MIN_NOISE_SCALE, MIN_SPACING, STEP_CELLS,
    };
    use std::collections::HashSet;

    // Tests canvas geometry leaves a drawable area inside the margin
    #[test]
    fn test_canvas_constants() {
        assert!((CANVAS_WIDTH - 1200.0).abs() < f64::EPSILON);
        assert!((CANVAS_HEIGHT - 675.0).abs() < f64::EPSILON);
        assert!(2.0 * MARGIN < CANVAS_HEIGHT);
        assert!((CELL_SIZE - 2.0).abs() < f64::EPSILON);
        assert!(STEP_CELLS > 1.0, "steps must clear their own footprint");
    }

    // Tests parameter bounds are ordered
    #[test]
    fn test_bounds_are_ordered() {
        assert!(MIN_NOISE_SCALE < MAX_NOISE_SCALE);
        assert!(MIN_SPACING < MAX_SPACING);
        assert!(MAX_BIG_LINES < MAX_MEDIUM_LINES && MAX_MEDIUM_LINES < MAX_SMALL_LINES);
        assert_eq!(CANDIDATE_INTERVAL, 4);
    }

    // Tests schemes have distinct backgrounds and no stroke matching the background
    #[test]
    fn test_palette_tables() {
        assert_eq!(LIGHT_SCHEME.len(), 15);
        assert_eq!(DARK_SCHEME.len(), 14);

        for scheme in [&LIGHT_SCHEME[..], &DARK_SCHEME[..]] {
            let Some((background, rest)) = scheme.split_first() else {
                unreachable!("schemes are non-empty");
            };
            assert!(!rest.contains(background));
            let unique: HashSet<_> = rest.iter().collect();
            assert_eq!(unique.len(), rest.len());
        }
    }

    // Tests the overlay placeholders shown when a request omits a field
    #[test]
    fn test_overlay_placeholders() {
        assert_eq!(DEFAULT_AUTHOR, "Ian Wootten");
        assert_eq!(DEFAULT_TITLE, "This is the default title");
        assert_eq!(DEFAULT_SUBTITLE, "This is the default subheading");
    }
}
