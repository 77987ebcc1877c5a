//! Maintenance repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{maintenance::NewMaintenance, EquipmentStatus},
};

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: Pool<Postgres>,
}

impl MaintenanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Open a maintenance record and take the equipment out of service
    pub async fn create(&self, data: &NewMaintenance) -> AppResult<i32> {
        let mut tx = self.pool.begin().await?;

        let manutencao_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO manutencao (equipamento_id, fornecedor_id, dt_inicio, custo, descricao, dt_final)
            VALUES ($1, $2, $3, $4, $5, NULL)
            RETURNING manutencao_id
            "#,
        )
        .bind(data.equipamento_id)
        .bind(data.fornecedor_id)
        .bind(data.dt_inicio)
        .bind(data.custo)
        .bind(&data.descricao)
        .fetch_one(&mut *tx)
        .await?;

        // Same transition as trg_equipamento_em_manutencao, inside this transaction
        sqlx::query("UPDATE equipamento SET status = $1 WHERE equipamento_id = $2")
            .bind(EquipmentStatus::InMaintenance.as_str())
            .bind(data.equipamento_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(manutencao_id)
    }
}
