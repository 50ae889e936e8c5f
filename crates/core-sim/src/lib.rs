mod generators;
mod params;
mod walk;

pub use generators::UniformGenerator;
pub use params::{InvalidParameters, SimParams};
pub use walk::{simulate_walk, Walk, DEFAULT_MAX_STEPS};

pub fn workspace_bootstrap() -> bool {
    true
}
