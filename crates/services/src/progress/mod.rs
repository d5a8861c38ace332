mod tracker;

pub use tracker::{DEFAULT_FLASHCARD_COUNT, ProgressTracker};
