use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tokio::sync::broadcast;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StartRunError {
    RunIdOverflow,
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum RunEvent {
    Connected {
        run_id: Option<u64>,
    },
    RunStarted {
        run_id: u64,
        simulation_count: usize,
    },
    RunProgress {
        run_id: u64,
        completed: usize,
        total: usize,
    },
    RunCompleted {
        run_id: u64,
        empirical_success_rate: f64,
        theoretical_probability: f64,
    },
}

impl RunEvent {
    pub fn connected() -> Self {
        Self::Connected { run_id: None }
    }

    pub fn run_started(run_id: u64, simulation_count: usize) -> Self {
        Self::RunStarted {
            run_id,
            simulation_count,
        }
    }

    pub fn run_progress(run_id: u64, completed: usize, total: usize) -> Self {
        Self::RunProgress {
            run_id,
            completed,
            total,
        }
    }

    pub fn run_completed(
        run_id: u64,
        empirical_success_rate: f64,
        theoretical_probability: f64,
    ) -> Self {
        Self::RunCompleted {
            run_id,
            empirical_success_rate,
            theoretical_probability,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    next_run_id: Arc<AtomicU64>,
    events_tx: broadcast::Sender<RunEvent>,
}

impl Default for AppState {
    fn default() -> Self {
        let (events_tx, _) = broadcast::channel(256);
        Self {
            next_run_id: Arc::new(AtomicU64::new(0)),
            events_tx,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_run(&self) -> Result<u64, StartRunError> {
        let previous = self
            .next_run_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                current.checked_add(1)
            })
            .map_err(|_| StartRunError::RunIdOverflow)?;

        Ok(previous + 1)
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<RunEvent> {
        self.events_tx.subscribe()
    }

    pub fn publish_event(
        &self,
        event: RunEvent,
    ) -> Result<usize, broadcast::error::SendError<RunEvent>> {
        self.events_tx.send(event)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::{AppState, RunEvent};

    #[test]
    fn run_ids_start_at_one_and_increment() {
        let state = AppState::new();

        assert_eq!(state.start_run().unwrap(), 1);
        assert_eq!(state.start_run().unwrap(), 2);
    }

    #[test]
    fn start_run_returns_overflow_error_at_u64_max() {
        let state = AppState::new();
        state.next_run_id.store(u64::MAX, Ordering::Relaxed);

        assert!(state.start_run().is_err());
    }

    #[test]
    fn events_reach_subscribers() {
        let state = AppState::new();
        let mut events = state.subscribe_events();

        state
            .publish_event(RunEvent::run_progress(1, 50, 500))
            .unwrap();

        let event = events.try_recv().unwrap();
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event_type\":\"run_progress\""));
        assert!(json.contains("\"completed\":50"));
    }

    #[test]
    fn publishing_without_subscribers_is_an_error_not_a_panic() {
        let state = AppState::new();

        assert!(state.publish_event(RunEvent::connected()).is_err());
    }
}
