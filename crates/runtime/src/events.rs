#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStage {
    BatchStarted,
    SimulationsProgressed,
    BatchCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct BatchEvent {
    pub stage: BatchStage,
    pub completed: usize,
    pub total: usize,
}

impl BatchEvent {
    pub fn new(stage: BatchStage, completed: usize, total: usize) -> Self {
        Self {
            stage,
            completed,
            total,
        }
    }
}
