//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a piece of equipment, stored as its label in
/// `equipamento.status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EquipmentStatus {
    #[serde(rename = "Disponível")]
    Available,
    #[serde(rename = "Em Uso")]
    InUse,
    #[serde(rename = "Em Manutenção")]
    InMaintenance,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "Disponível",
            EquipmentStatus::InUse => "Em Uso",
            EquipmentStatus::InMaintenance => "Em Manutenção",
        }
    }
}

impl std::str::FromStr for EquipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Disponível" => Ok(EquipmentStatus::Available),
            "Em Uso" => Ok(EquipmentStatus::InUse),
            "Em Manutenção" => Ok(EquipmentStatus::InMaintenance),
            other => Err(format!("Unknown equipment status: {}", other)),
        }
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
