pub mod views;
pub mod vm;

pub use views::{ProgressBar, ProgressCard, render_progress_bar, render_progress_card};
pub use vm::ProgressCardVm;
