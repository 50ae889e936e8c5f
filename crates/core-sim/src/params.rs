use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    pub initial_capital: i64,
    pub target_capital: i64,
    pub win_probability: f64,
    pub simulation_count: usize,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            initial_capital: 50,
            target_capital: 100,
            win_probability: 0.5,
            simulation_count: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidParameters {
    NonPositiveCapital,
    TargetNotAboveInitial,
    WinProbabilityOutOfRange,
    ZeroSimulationCount,
}

impl fmt::Display for InvalidParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveCapital => {
                write!(f, "initial and target capital must both be positive")
            }
            Self::TargetNotAboveInitial => {
                write!(f, "target capital must be strictly greater than initial capital")
            }
            Self::WinProbabilityOutOfRange => {
                write!(f, "win probability must lie strictly inside (0, 1)")
            }
            Self::ZeroSimulationCount => {
                write!(f, "simulation count must be at least 1")
            }
        }
    }
}

impl std::error::Error for InvalidParameters {}

impl SimParams {
    pub fn validate(&self) -> Result<(), InvalidParameters> {
        if self.initial_capital <= 0 || self.target_capital <= 0 {
            return Err(InvalidParameters::NonPositiveCapital);
        }
        if self.initial_capital >= self.target_capital {
            return Err(InvalidParameters::TargetNotAboveInitial);
        }
        if !self.win_probability.is_finite()
            || self.win_probability <= 0.0
            || self.win_probability >= 1.0
        {
            return Err(InvalidParameters::WinProbabilityOutOfRange);
        }
        if self.simulation_count == 0 {
            return Err(InvalidParameters::ZeroSimulationCount);
        }
        Ok(())
    }
}
