//! # Domain models for the garden maintenance site
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Client`] | A customer whose garden is maintained, linked to the plants growing there. |
//! | [`Plant`] | A plant species with its latin name, blooming period and the jobs it needs. |
//! | [`MaintenanceJob`] | A recurring task (pruning, fertilizing, ...) scheduled in specific months. |
//!
//! Ids are allocated by [`crate::GardenStore`] and start at 1.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::month::Month;

macro_rules! id_type {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

id_type!(ClientId);
id_type!(PlantId);
id_type!(JobId);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    /// Plants in this client's garden.
    pub plant_ids: Vec<PlantId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    /// Unique among plants unless empty.
    pub latin_name: String,
    /// Free text, e.g. "May - July".
    pub blooming_period: String,
    pub job_ids: Vec<JobId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceJob {
    pub id: JobId,
    pub name: String,
    /// Markdown.
    pub description: String,
    /// Calendar order, no duplicates.
    pub months: Vec<Month>,
}
