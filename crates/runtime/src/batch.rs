use core_sim::{simulate_walk, InvalidParameters, SimParams, UniformGenerator, DEFAULT_MAX_STEPS};

use crate::events::{BatchEvent, BatchStage};
use crate::progress::ProgressSink;

/// Trajectories are retained for the first walks only, to bound memory for
/// path display. The cap biases which paths are visualized, never the
/// outcome statistics.
pub const RETAINED_TRAJECTORIES: usize = 100;

pub const PROGRESS_INTERVAL: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOutcome {
    pub reached_target: bool,
    pub trajectory: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub outcomes: Vec<SimulationOutcome>,
}

impl BatchResult {
    pub fn outcome_flags(&self) -> Vec<bool> {
        self.outcomes
            .iter()
            .map(|outcome| outcome.reached_target)
            .collect()
    }

    pub fn success_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.reached_target)
            .count()
    }

    pub fn empirical_success_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.success_count() as f64 / self.outcomes.len() as f64
    }
}

/// Runs `simulation_count` independent walks sequentially, drawing from the
/// injected generator, and preserves submission order in the result. All
/// validation happens up front; once the batch starts no walk can fail.
pub fn run_batch(
    params: &SimParams,
    rng: &mut UniformGenerator,
    progress: &mut dyn ProgressSink,
) -> Result<BatchResult, InvalidParameters> {
    params.validate()?;

    let total = params.simulation_count;
    progress.report(BatchEvent::new(BatchStage::BatchStarted, 0, total));

    let mut outcomes = Vec::with_capacity(total);
    for index in 1..=total {
        let walk = simulate_walk(
            params.initial_capital,
            params.target_capital,
            params.win_probability,
            DEFAULT_MAX_STEPS,
            rng,
        );
        let reached_target = walk.reached_target(params.target_capital);
        let trajectory = (index <= RETAINED_TRAJECTORIES).then_some(walk.balances);
        outcomes.push(SimulationOutcome {
            reached_target,
            trajectory,
        });

        if index % PROGRESS_INTERVAL == 0 && index != total {
            progress.report(BatchEvent::new(
                BatchStage::SimulationsProgressed,
                index,
                total,
            ));
        }
    }

    progress.report(BatchEvent::new(BatchStage::BatchCompleted, total, total));
    Ok(BatchResult { outcomes })
}
