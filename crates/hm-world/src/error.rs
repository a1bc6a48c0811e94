use hm_core::{AgentId, TownId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("I/O error reading world file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed world file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("peasant {peasant} belongs to unknown town {town}")]
    UnknownTown { peasant: AgentId, town: TownId },

    #[error("no peasant with id {0:?}")]
    UnknownPeasant(AgentId),

    #[error("duplicate {kind} id {id:?}")]
    DuplicateId { kind: &'static str, id: String },
}

pub type WorldResult<T> = Result<T, WorldError>;
