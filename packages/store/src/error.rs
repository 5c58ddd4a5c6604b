use thiserror::Error;

use crate::models::{ClientId, JobId, PlantId};

/// Errors returned by [`crate::GardenStore`] and the parsing helpers.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("unknown client {0}")]
    UnknownClient(ClientId),

    #[error("unknown plant {0}")]
    UnknownPlant(PlantId),

    #[error("unknown job {0}")]
    UnknownJob(JobId),

    #[error("a plant with latin name `{0}` already exists")]
    DuplicateLatinName(String),

    #[error("`{0}` is not an English month name")]
    InvalidMonth(String),

    #[error("invalid seed data: {0}")]
    Seed(String),
}
