pub mod batch;
pub mod benchmark;
pub mod events;
pub mod export;
pub mod progress;

pub const TARGET_WALKS_PER_SEC: u64 = 50_000;

pub fn module_ready() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use analysis::{convergence_series, reach_target_probability};
    use core_sim::{SimParams, UniformGenerator};

    use crate::batch::run_batch;
    use crate::events::BatchStage;
    use crate::progress::{InMemoryProgressSink, NullProgressSink};

    #[test]
    fn batch_emits_events_in_expected_order() {
        let params = SimParams {
            simulation_count: 60,
            ..SimParams::default()
        };
        let mut rng = UniformGenerator::new(7);
        let mut sink = InMemoryProgressSink::new();

        run_batch(&params, &mut rng, &mut sink).unwrap();

        let stages: Vec<BatchStage> = sink.events().iter().map(|event| event.stage).collect();
        assert_eq!(
            stages,
            vec![
                BatchStage::BatchStarted,
                BatchStage::SimulationsProgressed,
                BatchStage::BatchCompleted,
            ]
        );
    }

    #[test]
    fn convergence_series_covers_the_whole_batch() {
        let params = SimParams {
            simulation_count: 250,
            ..SimParams::default()
        };
        let mut rng = UniformGenerator::new(21);
        let mut sink = NullProgressSink;

        let batch = run_batch(&params, &mut rng, &mut sink).unwrap();
        let series = convergence_series(&batch.outcome_flags());

        assert_eq!(series.len(), 250);
        assert_eq!(
            series.last().unwrap().cumulative_success_rate,
            batch.empirical_success_rate()
        );
    }

    #[test]
    fn empirical_rate_converges_toward_theory() {
        // Short-range unfavorable game: absorption is fast, so the
        // 5000-step cap never truncates in practice and the empirical rate
        // is an unbiased estimate of the closed form.
        let params = SimParams {
            initial_capital: 10,
            target_capital: 20,
            win_probability: 0.48,
            simulation_count: 1000,
        };
        let mut rng = UniformGenerator::new(42);
        let mut sink = NullProgressSink;

        let batch = run_batch(&params, &mut rng, &mut sink).unwrap();
        let theoretical = reach_target_probability(0.48, 10, 20);
        let empirical = batch.empirical_success_rate();

        let standard_error = (theoretical * (1.0 - theoretical) / 1000.0).sqrt();
        assert!(
            (empirical - theoretical).abs() < 3.5 * standard_error,
            "empirical {empirical} strayed from theoretical {theoretical}"
        );
    }

    #[test]
    fn single_walk_batch_resolves_or_truncates() {
        let params = SimParams {
            initial_capital: 50,
            target_capital: 100,
            win_probability: 0.5,
            simulation_count: 1,
        };
        let mut rng = UniformGenerator::new(3);
        let mut sink = NullProgressSink;

        let batch = run_batch(&params, &mut rng, &mut sink).unwrap();
        let trajectory = batch.outcomes[0].trajectory.as_ref().unwrap();
        let last = *trajectory.last().unwrap();

        assert!(trajectory.len() <= 5001);
        assert!(last == 0 || last == 100 || trajectory.len() == 5001);
        assert_eq!(reach_target_probability(0.5, 50, 100), 0.5);
    }
}
