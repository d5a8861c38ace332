mod number_fmt;
mod progress_vm;

pub use number_fmt::{format_percentage, round_half_up};
pub use progress_vm::ProgressCardVm;
