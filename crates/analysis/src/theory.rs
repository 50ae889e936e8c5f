/// Closed-form probability that the walk starting at `initial_capital`
/// reaches `target_capital` before ruin, under the idealized untruncated
/// process (no step cap).
///
/// For `p == 0.5` the fair-game linear case `i / N` applies exactly;
/// otherwise with `r = (1 - p) / p` the result is `(1 - r^i) / (1 - r^N)`.
/// For `r` far from 1 and very large capitals `r^i` can overflow to
/// infinity; the quotient then degrades but the bounded parameter ranges of
/// the lab keep the computation well inside f64 territory.
pub fn reach_target_probability(
    win_probability: f64,
    initial_capital: i64,
    target_capital: i64,
) -> f64 {
    assert!(
        win_probability.is_finite() && win_probability > 0.0 && win_probability < 1.0,
        "win probability must lie strictly inside (0, 1)"
    );
    assert!(
        initial_capital > 0 && initial_capital < target_capital,
        "initial capital must sit strictly between ruin and the target"
    );

    if win_probability == 0.5 {
        return initial_capital as f64 / target_capital as f64;
    }

    let loss_to_win_ratio = (1.0 - win_probability) / win_probability;
    let numerator = 1.0 - loss_to_win_ratio.powf(initial_capital as f64);
    let denominator = 1.0 - loss_to_win_ratio.powf(target_capital as f64);
    numerator / denominator
}
