use crate::generators::UniformGenerator;

pub const DEFAULT_MAX_STEPS: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    pub balances: Vec<i64>,
}

impl Walk {
    pub fn final_balance(&self) -> i64 {
        *self
            .balances
            .last()
            .expect("a walk records at least its initial balance")
    }

    /// A walk truncated by the step cap ends between the barriers and
    /// therefore counts as a failure.
    pub fn reached_target(&self, target_capital: i64) -> bool {
        self.final_balance() >= target_capital
    }
}

pub fn simulate_walk(
    initial_capital: i64,
    target_capital: i64,
    win_probability: f64,
    max_steps: usize,
    rng: &mut UniformGenerator,
) -> Walk {
    assert!(
        initial_capital > 0 && initial_capital < target_capital,
        "initial capital must sit strictly between ruin and the target"
    );
    assert!(
        win_probability.is_finite() && win_probability > 0.0 && win_probability < 1.0,
        "win probability must lie strictly inside (0, 1)"
    );

    let mut balances = Vec::with_capacity(64);
    let mut balance = initial_capital;
    balances.push(balance);

    let mut steps = 0;
    while balance > 0 && balance < target_capital && steps < max_steps {
        balance += if rng.next_unit() < win_probability { 1 } else { -1 };
        balances.push(balance);
        steps += 1;
    }

    Walk { balances }
}
