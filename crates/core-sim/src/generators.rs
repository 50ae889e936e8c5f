#[derive(Debug, Clone)]
pub struct UniformGenerator {
    state: u64,
}

impl UniformGenerator {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next sample from the unit interval [0, 1].
    pub fn next_unit(&mut self) -> f64 {
        let value = next_u64(&mut self.state);
        (value as f64) / (u64::MAX as f64)
    }
}

fn next_u64(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}
