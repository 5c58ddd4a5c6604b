pub mod config;
pub mod models;
pub mod month;

mod error;
pub use error::StoreError;

mod garden;
pub use garden::GardenStore;

mod seed;

pub use config::{PopupConfig, SiteConfig};
pub use models::{Client, ClientId, JobId, MaintenanceJob, Plant, PlantId};
pub use month::Month;
