//! Maintenance service

use crate::{
    error::AppResult,
    models::maintenance::NewMaintenance,
    repository::Repository,
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
}

impl MaintenanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a maintenance and take the equipment out of service
    pub async fn register(&self, data: &NewMaintenance) -> AppResult<i32> {
        let manutencao_id = self
            .repository
            .maintenance
            .create(data)
            .await
            .map_err(|e| e.with_context("Erro ao registrar manutenção"))?;

        tracing::info!(
            "Maintenance {} opened for equipment {} (supplier {})",
            manutencao_id,
            data.equipamento_id,
            data.fornecedor_id
        );

        Ok(manutencao_id)
    }
}
