use hm_core::{AgentId, CoreError};
use hm_nav::NavError;
use hm_task::TaskError;
use hm_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("invalid tuning: {0}")]
    Tuning(#[from] TaskError),

    #[error("navigation setup error: {0}")]
    Nav(#[from] NavError),

    #[error("world error: {0}")]
    World(#[from] WorldError),

    #[error("no agent with id {0}")]
    UnknownAgent(AgentId),

    #[error("agent {0} is already registered")]
    DuplicateAgent(AgentId),
}

pub type SimResult<T> = Result<T, SimError>;
