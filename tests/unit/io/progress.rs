//! Tests for per-seed progress display

#[cfg(test)]
mod tests {
    use flowlines::algorithm::executor::Pass;
    use flowlines::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use flowlines::io::progress::ProgressManager;

    // Tests a single seed through every pass
    #[test]
    fn test_single_seed_lifecycle() {
        let mut pm = ProgressManager::new();

        pm.initialize(0);
        pm.finish();

        pm.initialize(1);
        pm.start_seed(0, "flowlines_0.svg");
        pm.update_pass(0, Pass::Medium);
        pm.update_pass(0, Pass::Small);
        pm.update_pass(0, Pass::Frontier);
        pm.update_pass(0, Pass::Done);
        pm.complete_seed(0);
        pm.finish();
    }

    // Tests batch mode with more seeds than individual bars
    #[test]
    fn test_batch_mode_rolls_over() {
        let mut pm = ProgressManager::default();
        let seeds = MAX_INDIVIDUAL_PROGRESS_BARS * 3;
        pm.initialize(seeds);

        for index in 0..seeds {
            pm.start_seed(index, &format!("flowlines_{index}.svg"));
            pm.update_pass(index, Pass::Frontier);
            pm.complete_seed(index);
        }
        pm.finish();
    }

    // Tests updates for unknown indices are ignored
    #[test]
    fn test_unknown_index_is_ignored() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);
        pm.update_pass(5, Pass::Small);
        pm.complete_seed(5);
        pm.start_seed(3, "late.svg");
        pm.finish();
    }
}
