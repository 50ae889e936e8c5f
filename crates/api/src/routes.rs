use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use analysis::{convergence_series, display_range, reach_target_probability};
use core_sim::{SimParams, UniformGenerator};
use runtime::batch::run_batch;
use runtime::events::BatchEvent;
use runtime::progress::ProgressSink;

use crate::{
    state::{AppState, RunEvent},
    ws,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/runs", post(start_run))
        .route("/probability", get(probability))
        .route("/ws/events", get(ws::events_socket))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub initial_capital: i64,
    pub target_capital: i64,
    pub win_probability: f64,
    pub simulation_count: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct ConvergencePointDto {
    trial: usize,
    cumulative_success_rate: f64,
}

#[derive(Debug, Serialize)]
struct DisplayRangeDto {
    low: f64,
    high: f64,
}

#[derive(Debug, Serialize)]
struct RunResponse {
    run_id: u64,
    seed: u64,
    theoretical_probability: f64,
    empirical_success_rate: f64,
    convergence: Vec<ConvergencePointDto>,
    display_range: DisplayRangeDto,
    trajectories: Vec<Vec<i64>>,
}

#[derive(Debug, Serialize)]
struct RejectedRunResponse {
    error: String,
}

type Rejection = (StatusCode, Json<RejectedRunResponse>);

fn reject(status: StatusCode, error: impl Into<String>) -> Rejection {
    (
        status,
        Json(RejectedRunResponse {
            error: error.into(),
        }),
    )
}

/// Bridges batch progress into the broadcast channel. Send errors mean no
/// subscriber is listening, which is fine for an advisory signal.
struct BroadcastProgressSink<'a> {
    state: &'a AppState,
    run_id: u64,
}

impl ProgressSink for BroadcastProgressSink<'_> {
    fn report(&mut self, event: BatchEvent) {
        let _ = self.state.publish_event(RunEvent::run_progress(
            self.run_id,
            event.completed,
            event.total,
        ));
    }
}

async fn start_run(
    State(state): State<AppState>,
    Json(request): Json<RunRequest>,
) -> Result<impl IntoResponse, Rejection> {
    let params = SimParams {
        initial_capital: request.initial_capital,
        target_capital: request.target_capital,
        win_probability: request.win_probability,
        simulation_count: request.simulation_count,
    };
    if let Err(err) = params.validate() {
        return Err(reject(StatusCode::UNPROCESSABLE_ENTITY, err.to_string()));
    }

    let run_id = state
        .start_run()
        .map_err(|_| reject(StatusCode::INTERNAL_SERVER_ERROR, "run id space exhausted"))?;
    let _ = state.publish_event(RunEvent::run_started(run_id, params.simulation_count));

    // An explicit seed reproduces a batch bit-for-bit; otherwise the fresh
    // run id keeps repeated runs statistically independent.
    let seed = request.seed.unwrap_or(run_id);
    let mut rng = UniformGenerator::new(seed);
    let mut progress = BroadcastProgressSink {
        state: &state,
        run_id,
    };
    let batch = run_batch(&params, &mut rng, &mut progress)
        .map_err(|err| reject(StatusCode::UNPROCESSABLE_ENTITY, err.to_string()))?;

    let theoretical_probability = reach_target_probability(
        params.win_probability,
        params.initial_capital,
        params.target_capital,
    );
    let empirical_success_rate = batch.empirical_success_rate();
    let series = convergence_series(&batch.outcome_flags());
    let range = display_range(&series, theoretical_probability);

    let _ = state.publish_event(RunEvent::run_completed(
        run_id,
        empirical_success_rate,
        theoretical_probability,
    ));

    let response = RunResponse {
        run_id,
        seed,
        theoretical_probability,
        empirical_success_rate,
        convergence: series
            .iter()
            .map(|point| ConvergencePointDto {
                trial: point.trial,
                cumulative_success_rate: point.cumulative_success_rate,
            })
            .collect(),
        display_range: DisplayRangeDto {
            low: range.low,
            high: range.high,
        },
        trajectories: batch
            .outcomes
            .into_iter()
            .filter_map(|outcome| outcome.trajectory)
            .collect(),
    };
    let location = format!("/runs/{run_id}");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

#[derive(Debug, Deserialize)]
pub struct ProbabilityQuery {
    pub initial_capital: i64,
    pub target_capital: i64,
    pub win_probability: f64,
}

#[derive(Debug, Serialize)]
struct ProbabilityResponse {
    theoretical_probability: f64,
}

async fn probability(
    Query(query): Query<ProbabilityQuery>,
) -> Result<impl IntoResponse, Rejection> {
    let params = SimParams {
        initial_capital: query.initial_capital,
        target_capital: query.target_capital,
        win_probability: query.win_probability,
        simulation_count: 1,
    };
    if let Err(err) = params.validate() {
        return Err(reject(StatusCode::UNPROCESSABLE_ENTITY, err.to_string()));
    }

    let theoretical_probability = reach_target_probability(
        query.win_probability,
        query.initial_capital,
        query.target_capital,
    );

    Ok(Json(ProbabilityResponse {
        theoretical_probability,
    }))
}
