use bug2_planner::PlanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("run configuration error: {0}")]
    Config(String),

    #[error("planner error: {0}")]
    Plan(#[from] PlanError),
}

pub type SimResult<T> = Result<T, SimError>;
