use std::time::{Duration, Instant};

use core_sim::{InvalidParameters, SimParams, UniformGenerator};

use crate::batch::{run_batch, BatchResult};
use crate::progress::NullProgressSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThroughputReport {
    pub walks: u64,
    pub walks_per_sec: u64,
}

impl ThroughputReport {
    pub fn meets_target(&self, target_walks_per_sec: u64) -> bool {
        self.walks_per_sec >= target_walks_per_sec
    }
}

pub fn walks_per_sec(completed_walks: u64, elapsed: Duration) -> u64 {
    let elapsed_nanos = elapsed.as_nanos();
    if elapsed_nanos == 0 {
        return 0;
    }

    let scaled_walks = (completed_walks as u128).saturating_mul(1_000_000_000);
    u64::try_from(scaled_walks / elapsed_nanos).unwrap_or(u64::MAX)
}

/// Runs one seeded batch against a throwaway sink and reports the achieved
/// walk throughput alongside the batch itself.
pub fn measure_batch_throughput(
    params: &SimParams,
    seed: u64,
) -> Result<(BatchResult, ThroughputReport), InvalidParameters> {
    let mut rng = UniformGenerator::new(seed);
    let mut sink = NullProgressSink;

    let started = Instant::now();
    let batch = run_batch(params, &mut rng, &mut sink)?;
    let elapsed = started.elapsed();

    let walks = batch.outcomes.len() as u64;
    let report = ThroughputReport {
        walks,
        walks_per_sec: walks_per_sec(walks, elapsed),
    };
    Ok((batch, report))
}
