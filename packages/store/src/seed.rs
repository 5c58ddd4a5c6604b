//! Loading a [`GardenStore`] from a TOML seed document.
//!
//! Records reference each other by name so seeds stay readable:
//!
//! ```toml
//! [[jobs]]
//! name = "Prune"
//! months = ["February", "March"]
//!
//! [[plants]]
//! name = "Rose"
//! latin_name = "Rosa canina"
//! jobs = ["Prune"]
//!
//! [[clients]]
//! name = "Mrs. Hudson"
//! plants = ["Rose"]
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::StoreError;
use crate::garden::GardenStore;
use crate::models::{JobId, PlantId};
use crate::month::Month;

#[derive(Debug, Default, Deserialize)]
struct SeedDocument {
    #[serde(default)]
    jobs: Vec<SeedJob>,
    #[serde(default)]
    plants: Vec<SeedPlant>,
    #[serde(default)]
    clients: Vec<SeedClient>,
}

#[derive(Debug, Deserialize)]
struct SeedJob {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    months: Vec<Month>,
}

#[derive(Debug, Deserialize)]
struct SeedPlant {
    name: String,
    #[serde(default)]
    latin_name: String,
    #[serde(default)]
    blooming_period: String,
    #[serde(default)]
    jobs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SeedClient {
    name: String,
    #[serde(default)]
    plants: Vec<String>,
}

impl GardenStore {
    /// Build a store from a seed document.
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        let doc: SeedDocument = toml::from_str(s).map_err(|e| StoreError::Seed(e.to_string()))?;
        let mut store = GardenStore::new();

        let mut jobs: HashMap<&str, JobId> = HashMap::new();
        for job in &doc.jobs {
            let id = store.add_job(&job.name, &job.description, job.months.clone());
            if jobs.insert(job.name.as_str(), id).is_some() {
                return Err(StoreError::Seed(format!("duplicate job `{}`", job.name)));
            }
        }

        let mut plants: HashMap<&str, PlantId> = HashMap::new();
        for plant in &doc.plants {
            let job_ids = plant
                .jobs
                .iter()
                .map(|name| {
                    jobs.get(name.as_str()).copied().ok_or_else(|| {
                        StoreError::Seed(format!(
                            "plant `{}` references unknown job `{name}`",
                            plant.name
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let id = store.add_plant(
                &plant.name,
                &plant.latin_name,
                &plant.blooming_period,
                &job_ids,
            )?;
            if plants.insert(plant.name.as_str(), id).is_some() {
                return Err(StoreError::Seed(format!("duplicate plant `{}`", plant.name)));
            }
        }

        for client in &doc.clients {
            let plant_ids = client
                .plants
                .iter()
                .map(|name| {
                    plants.get(name.as_str()).copied().ok_or_else(|| {
                        StoreError::Seed(format!(
                            "client `{}` references unknown plant `{name}`",
                            client.name
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            store.add_client(&client.name, &plant_ids)?;
        }

        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClientId;

    const SEED: &str = r#"
[[jobs]]
name = "Prune"
description = "Cut back to **three buds**."
months = ["march", "February"]

[[jobs]]
name = "Mulch"
months = ["November"]

[[plants]]
name = "Rose"
latin_name = "Rosa canina"
blooming_period = "June - August"
jobs = ["Prune", "Mulch"]

[[plants]]
name = "Box"
latin_name = "Buxus sempervirens"

[[clients]]
name = "Mrs. Hudson"
plants = ["Rose", "Box"]
"#;

    #[test]
    fn test_from_toml() {
        let store = GardenStore::from_toml(SEED).unwrap();
        assert_eq!(store.jobs().count(), 2);
        assert_eq!(store.plants().count(), 2);

        let plants = store.plants_of_client(ClientId(1)).unwrap();
        let names: Vec<_> = plants.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Rose", "Box"]);

        assert_eq!(
            store.months_of_plant(PlantId(1)).unwrap(),
            vec![Month::February, Month::March, Month::November]
        );
    }

    #[test]
    fn test_empty_seed() {
        let store = GardenStore::from_toml("").unwrap();
        assert_eq!(store, GardenStore::new());
    }

    #[test]
    fn test_unknown_reference() {
        let err = GardenStore::from_toml("[[clients]]\nname = \"A\"\nplants = [\"Yew\"]\n")
            .unwrap_err();
        assert!(matches!(err, StoreError::Seed(msg) if msg.contains("Yew")));
    }

    #[test]
    fn test_bad_month_is_a_seed_error() {
        let err = GardenStore::from_toml("[[jobs]]\nname = \"A\"\nmonths = [\"Brumaire\"]\n")
            .unwrap_err();
        assert!(matches!(err, StoreError::Seed(_)));
    }

    #[test]
    fn test_duplicate_plant_name() {
        let seed = r#"
[[plants]]
name = "Rose"
latin_name = "Rosa canina"

[[plants]]
name = "Rose"
latin_name = "Rosa gallica"

[[clients]]
name = "Mrs. Hudson"
plants = ["Rose"]
"#;
        assert_eq!(
            GardenStore::from_toml(seed),
            Err(StoreError::Seed("duplicate plant `Rose`".to_string()))
        );
    }

    #[test]
    fn test_duplicate_job_name() {
        let seed = "[[jobs]]\nname = \"Prune\"\n[[jobs]]\nname = \"Prune\"\nmonths = [\"May\"]\n";
        assert_eq!(
            GardenStore::from_toml(seed),
            Err(StoreError::Seed("duplicate job `Prune`".to_string()))
        );
    }

    #[test]
    fn test_duplicate_latin_name() {
        let seed = "[[plants]]\nname = \"A\"\nlatin_name = \"X\"\n[[plants]]\nname = \"B\"\nlatin_name = \"X\"\n";
        assert_eq!(
            GardenStore::from_toml(seed),
            Err(StoreError::DuplicateLatinName("X".to_string()))
        );
    }
}
