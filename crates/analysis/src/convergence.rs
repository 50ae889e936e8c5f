#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergencePoint {
    pub trial: usize,
    pub cumulative_success_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRange {
    pub low: f64,
    pub high: f64,
}

/// Running empirical success rate after each trial, in submission order.
pub fn convergence_series(outcomes: &[bool]) -> Vec<ConvergencePoint> {
    let mut series = Vec::with_capacity(outcomes.len());
    let mut successes = 0usize;

    for (index, reached_target) in outcomes.iter().enumerate() {
        if *reached_target {
            successes += 1;
        }
        let trial = index + 1;
        series.push(ConvergencePoint {
            trial,
            cumulative_success_rate: successes as f64 / trial as f64,
        });
    }

    series
}

/// Viewing interval for the convergence chart, padded by 0.05 on each side
/// and clamped to [0, 1]. The theoretical probability participates in the
/// scan so the reference line never leaves the viewport.
pub fn display_range(series: &[ConvergencePoint], theoretical_probability: f64) -> DisplayRange {
    let mut low = theoretical_probability;
    let mut high = theoretical_probability;

    for point in series {
        low = low.min(point.cumulative_success_rate);
        high = high.max(point.cumulative_success_rate);
    }

    DisplayRange {
        low: (low - 0.05).max(0.0),
        high: (high + 0.05).min(1.0),
    }
}
