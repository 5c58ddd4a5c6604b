//! # GardenStore — in-memory clients, plants and maintenance jobs
//!
//! Links are stored on the owning side: a [`Client`] lists its plants and a
//! [`Plant`] lists its jobs. Reverse lookups ([`clients_of_plant`],
//! [`plants_of_job`]) scan the owners. Dropping a record removes every link
//! that points at it, so no id in the store ever dangles.
//!
//! [`clients_of_plant`]: GardenStore::clients_of_plant
//! [`plants_of_job`]: GardenStore::plants_of_job

use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::models::{Client, ClientId, JobId, MaintenanceJob, Plant, PlantId};
use crate::month::{calendar_order, Month};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GardenStore {
    clients: BTreeMap<ClientId, Client>,
    plants: BTreeMap<PlantId, Plant>,
    jobs: BTreeMap<JobId, MaintenanceJob>,
    last_client: u32,
    last_plant: u32,
    last_job: u32,
}

impl GardenStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- select ---

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.get(&id)
    }

    pub fn plant(&self, id: PlantId) -> Option<&Plant> {
        self.plants.get(&id)
    }

    pub fn job(&self, id: JobId) -> Option<&MaintenanceJob> {
        self.jobs.get(&id)
    }

    /// All clients in id order.
    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.values()
    }

    /// All plants in id order.
    pub fn plants(&self) -> impl Iterator<Item = &Plant> {
        self.plants.values()
    }

    /// All jobs in id order.
    pub fn jobs(&self) -> impl Iterator<Item = &MaintenanceJob> {
        self.jobs.values()
    }

    // --- insert / update ---

    pub fn add_client(&mut self, name: &str, plant_ids: &[PlantId]) -> Result<ClientId, StoreError> {
        let plant_ids = self.checked_plants(plant_ids)?;
        self.last_client += 1;
        let id = ClientId(self.last_client);
        self.clients.insert(
            id,
            Client {
                id,
                name: name.to_string(),
                plant_ids,
            },
        );
        Ok(id)
    }

    pub fn update_client(
        &mut self,
        id: ClientId,
        name: &str,
        plant_ids: &[PlantId],
    ) -> Result<(), StoreError> {
        let plant_ids = self.checked_plants(plant_ids)?;
        let client = self
            .clients
            .get_mut(&id)
            .ok_or(StoreError::UnknownClient(id))?;
        client.name = name.to_string();
        client.plant_ids = plant_ids;
        Ok(())
    }

    pub fn add_plant(
        &mut self,
        name: &str,
        latin_name: &str,
        blooming_period: &str,
        job_ids: &[JobId],
    ) -> Result<PlantId, StoreError> {
        self.check_latin_name(latin_name, None)?;
        let job_ids = self.checked_jobs(job_ids)?;
        self.last_plant += 1;
        let id = PlantId(self.last_plant);
        self.plants.insert(
            id,
            Plant {
                id,
                name: name.to_string(),
                latin_name: latin_name.to_string(),
                blooming_period: blooming_period.to_string(),
                job_ids,
            },
        );
        Ok(id)
    }

    pub fn update_plant(
        &mut self,
        id: PlantId,
        name: &str,
        latin_name: &str,
        blooming_period: &str,
        job_ids: &[JobId],
    ) -> Result<(), StoreError> {
        if !self.plants.contains_key(&id) {
            return Err(StoreError::UnknownPlant(id));
        }
        self.check_latin_name(latin_name, Some(id))?;
        let job_ids = self.checked_jobs(job_ids)?;
        if let Some(plant) = self.plants.get_mut(&id) {
            plant.name = name.to_string();
            plant.latin_name = latin_name.to_string();
            plant.blooming_period = blooming_period.to_string();
            plant.job_ids = job_ids;
        }
        Ok(())
    }

    pub fn add_job(&mut self, name: &str, description: &str, months: Vec<Month>) -> JobId {
        self.last_job += 1;
        let id = JobId(self.last_job);
        self.jobs.insert(
            id,
            MaintenanceJob {
                id,
                name: name.to_string(),
                description: description.to_string(),
                months: calendar_order(months),
            },
        );
        id
    }

    pub fn update_job(
        &mut self,
        id: JobId,
        name: &str,
        description: &str,
        months: Vec<Month>,
    ) -> Result<(), StoreError> {
        let job = self.jobs.get_mut(&id).ok_or(StoreError::UnknownJob(id))?;
        job.name = name.to_string();
        job.description = description.to_string();
        job.months = calendar_order(months);
        Ok(())
    }

    // --- links ---

    pub fn link_plant_to_client(&mut self, cid: ClientId, pid: PlantId) -> Result<(), StoreError> {
        if !self.plants.contains_key(&pid) {
            return Err(StoreError::UnknownPlant(pid));
        }
        let client = self
            .clients
            .get_mut(&cid)
            .ok_or(StoreError::UnknownClient(cid))?;
        insert_sorted(&mut client.plant_ids, pid);
        Ok(())
    }

    /// Returns whether a link was removed.
    pub fn unlink_plant_from_client(&mut self, cid: ClientId, pid: PlantId) -> Result<bool, StoreError> {
        let client = self
            .clients
            .get_mut(&cid)
            .ok_or(StoreError::UnknownClient(cid))?;
        Ok(remove_id(&mut client.plant_ids, pid))
    }

    pub fn link_job_to_plant(&mut self, pid: PlantId, mid: JobId) -> Result<(), StoreError> {
        if !self.jobs.contains_key(&mid) {
            return Err(StoreError::UnknownJob(mid));
        }
        let plant = self
            .plants
            .get_mut(&pid)
            .ok_or(StoreError::UnknownPlant(pid))?;
        insert_sorted(&mut plant.job_ids, mid);
        Ok(())
    }

    /// Returns whether a link was removed.
    pub fn unlink_job_from_plant(&mut self, pid: PlantId, mid: JobId) -> Result<bool, StoreError> {
        let plant = self
            .plants
            .get_mut(&pid)
            .ok_or(StoreError::UnknownPlant(pid))?;
        Ok(remove_id(&mut plant.job_ids, mid))
    }

    // --- reverse lookups ---

    pub fn plants_of_client(&self, cid: ClientId) -> Result<Vec<&Plant>, StoreError> {
        let client = self.client(cid).ok_or(StoreError::UnknownClient(cid))?;
        Ok(client
            .plant_ids
            .iter()
            .filter_map(|pid| self.plants.get(pid))
            .collect())
    }

    pub fn clients_of_plant(&self, pid: PlantId) -> Result<Vec<&Client>, StoreError> {
        if !self.plants.contains_key(&pid) {
            return Err(StoreError::UnknownPlant(pid));
        }
        Ok(self
            .clients
            .values()
            .filter(|c| c.plant_ids.contains(&pid))
            .collect())
    }

    pub fn jobs_of_plant(&self, pid: PlantId) -> Result<Vec<&MaintenanceJob>, StoreError> {
        let plant = self.plant(pid).ok_or(StoreError::UnknownPlant(pid))?;
        Ok(plant
            .job_ids
            .iter()
            .filter_map(|mid| self.jobs.get(mid))
            .collect())
    }

    pub fn plants_of_job(&self, mid: JobId) -> Result<Vec<&Plant>, StoreError> {
        if !self.jobs.contains_key(&mid) {
            return Err(StoreError::UnknownJob(mid));
        }
        Ok(self
            .plants
            .values()
            .filter(|p| p.job_ids.contains(&mid))
            .collect())
    }

    /// Distinct months in which any of the plant's jobs is due, in calendar order.
    pub fn months_of_plant(&self, pid: PlantId) -> Result<Vec<Month>, StoreError> {
        let months = self
            .jobs_of_plant(pid)?
            .into_iter()
            .flat_map(|job| job.months.iter().copied())
            .collect();
        Ok(calendar_order(months))
    }

    // --- drop ---

    pub fn drop_client(&mut self, id: ClientId) -> Result<Client, StoreError> {
        self.clients.remove(&id).ok_or(StoreError::UnknownClient(id))
    }

    /// Removes the plant and every client link to it.
    pub fn drop_plant(&mut self, id: PlantId) -> Result<Plant, StoreError> {
        let plant = self.plants.remove(&id).ok_or(StoreError::UnknownPlant(id))?;
        let unlinked = self
            .clients
            .values_mut()
            .map(|c| remove_id(&mut c.plant_ids, id))
            .filter(|removed| *removed)
            .count();
        tracing::debug!("dropped plant {id}, unlinked from {unlinked} clients");
        Ok(plant)
    }

    /// Removes the job and every plant link to it.
    pub fn drop_job(&mut self, id: JobId) -> Result<MaintenanceJob, StoreError> {
        let job = self.jobs.remove(&id).ok_or(StoreError::UnknownJob(id))?;
        let unlinked = self
            .plants
            .values_mut()
            .map(|p| remove_id(&mut p.job_ids, id))
            .filter(|removed| *removed)
            .count();
        tracing::debug!("dropped job {id}, unlinked from {unlinked} plants");
        Ok(job)
    }

    // --- helpers ---

    fn checked_plants(&self, ids: &[PlantId]) -> Result<Vec<PlantId>, StoreError> {
        if let Some(missing) = ids.iter().find(|id| !self.plants.contains_key(*id)) {
            return Err(StoreError::UnknownPlant(*missing));
        }
        Ok(sorted_ids(ids))
    }

    fn checked_jobs(&self, ids: &[JobId]) -> Result<Vec<JobId>, StoreError> {
        if let Some(missing) = ids.iter().find(|id| !self.jobs.contains_key(*id)) {
            return Err(StoreError::UnknownJob(*missing));
        }
        Ok(sorted_ids(ids))
    }

    fn check_latin_name(&self, latin_name: &str, except: Option<PlantId>) -> Result<(), StoreError> {
        if latin_name.is_empty() {
            return Ok(());
        }
        let taken = self
            .plants
            .values()
            .any(|p| Some(p.id) != except && p.latin_name == latin_name);
        if taken {
            return Err(StoreError::DuplicateLatinName(latin_name.to_string()));
        }
        Ok(())
    }
}

fn sorted_ids<T: Ord + Copy>(ids: &[T]) -> Vec<T> {
    let mut ids = ids.to_vec();
    ids.sort();
    ids.dedup();
    ids
}

fn insert_sorted<T: Ord>(ids: &mut Vec<T>, id: T) {
    if let Err(pos) = ids.binary_search(&id) {
        ids.insert(pos, id);
    }
}

fn remove_id<T: Ord>(ids: &mut Vec<T>, id: T) -> bool {
    match ids.binary_search(&id) {
        Ok(pos) => {
            ids.remove(pos);
            true
        }
        Err(_) => false,
    }
}
