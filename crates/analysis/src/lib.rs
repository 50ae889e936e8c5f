pub mod convergence;
pub mod theory;

pub use convergence::{convergence_series, display_range, ConvergencePoint, DisplayRange};
pub use theory::reach_target_probability;

pub fn module_ready() -> bool {
    true
}
