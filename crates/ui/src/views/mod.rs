mod progress;

pub use progress::{ProgressBar, ProgressCard, render_progress_bar, render_progress_card};
