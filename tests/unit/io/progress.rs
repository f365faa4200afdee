//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tilemerge::io::progress::ProgressManager;

    // Tests a full batch lifecycle runs without a terminal
    // Verified by panicking when no bar exists
    #[test]
    fn test_progress_manager_lifecycle() {
        let mut pm = ProgressManager::new();

        pm.initialize(2);
        pm.update_game(0, 10, 3);
        pm.complete_game(3, Duration::from_millis(50));
        pm.update_game(1, 20, 7);
        pm.complete_game(7, Duration::from_millis(80));
        pm.finish();

        assert_eq!(pm.best_score(), 7);
    }

    // Tests updates before initialization are ignored
    // Verified by requiring initialize before use
    #[test]
    fn test_uninitialized_manager_is_inert() {
        let mut pm = ProgressManager::default();

        pm.update_game(0, 1, 1);
        pm.complete_game(5, Duration::ZERO);
        pm.finish();

        assert_eq!(pm.best_score(), 5);
    }

    // Tests the best score keeps the maximum
    // Verified by storing the latest score
    #[test]
    fn test_best_score_is_maximum() {
        let mut pm = ProgressManager::new();
        pm.initialize(3);

        for score in [4, 9, 2] {
            pm.complete_game(score, Duration::ZERO);
        }

        assert_eq!(pm.best_score(), 9);
    }

    // Tests reinitializing starts a fresh batch
    // Verified by carrying the best score across batches
    #[test]
    fn test_initialize_resets_best_score() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.complete_game(12, Duration::ZERO);

        pm.initialize(1);

        assert_eq!(pm.best_score(), 0);
    }
}
