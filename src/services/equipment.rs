//! Equipment service

use crate::{
    error::AppResult,
    models::equipment::{AvailableEquipment, EquipmentInMaintenance},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_available(&self) -> AppResult<Vec<AvailableEquipment>> {
        self.repository.equipment.list_available().await
    }

    pub async fn list_in_maintenance(&self) -> AppResult<Vec<EquipmentInMaintenance>> {
        self.repository.equipment.list_in_maintenance().await
    }
}
