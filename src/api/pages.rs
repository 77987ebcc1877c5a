//! Server-rendered pages (menu, lookups and operation forms)

use askama::Template;
use axum::{extract::State, response::Html};

use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::{AvailableEquipment, EquipmentInMaintenance},
        people::Supplier,
        rental::{format_brl, ActiveRental},
    },
};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub title: &'static str,
}

/// Table row of the active rentals page
pub struct ActiveRentalRow {
    pub aluguel_id: i32,
    pub cliente: String,
    pub data_inicio: String,
    pub valor_total: String,
    pub funcionario: String,
}

impl From<ActiveRental> for ActiveRentalRow {
    fn from(a: ActiveRental) -> Self {
        Self {
            aluguel_id: a.aluguel_id,
            cliente: a.cliente,
            data_inicio: a.data_inicio.format("%d/%m/%Y").to_string(),
            valor_total: format_brl(a.valor_total),
            funcionario: a.funcionario,
        }
    }
}

#[derive(Template)]
#[template(path = "active_rentals.html")]
pub struct ActiveRentalsPage {
    pub title: &'static str,
    pub rows: Vec<ActiveRentalRow>,
    /// Shown instead of the table when the lookup failed
    pub error: Option<String>,
}

/// Table row of the available equipment page
pub struct AvailableEquipmentRow {
    pub equipamento_id: i32,
    pub nome: String,
    pub modelo: String,
    pub preco_diaria: String,
    pub nome_categoria: String,
    pub quant_disponivel: i32,
}

impl From<AvailableEquipment> for AvailableEquipmentRow {
    fn from(e: AvailableEquipment) -> Self {
        Self {
            equipamento_id: e.equipamento_id,
            nome: e.nome,
            modelo: e.modelo.unwrap_or_default(),
            preco_diaria: format_brl(e.preco_diaria),
            nome_categoria: e.nome_categoria,
            quant_disponivel: e.quant_disponivel,
        }
    }
}

#[derive(Template)]
#[template(path = "available_equipment.html")]
pub struct AvailableEquipmentPage {
    pub title: &'static str,
    pub rows: Vec<AvailableEquipmentRow>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "finalize_form.html")]
pub struct FinalizeFormPage {
    pub title: &'static str,
}

pub struct InMaintenanceRow {
    pub equipamento_id: i32,
    pub nome: String,
    pub numero_serie: String,
}

impl From<EquipmentInMaintenance> for InMaintenanceRow {
    fn from(e: EquipmentInMaintenance) -> Self {
        Self {
            equipamento_id: e.equipamento_id,
            nome: e.nome,
            numero_serie: e.numero_serie.unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "maintenance_form.html")]
pub struct MaintenanceFormPage {
    pub title: &'static str,
    pub suppliers: Vec<Supplier>,
    pub in_maintenance: Vec<InMaintenanceRow>,
}

fn render<T: Template>(page: &T) -> AppResult<Html<String>> {
    page.render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Template rendering failed: {}", e)))
}

/// Landing page with the menu
pub async fn index() -> AppResult<Html<String>> {
    render(&IndexPage {
        title: "Locadora de Equipamentos",
    })
}

/// Open rentals
pub async fn active_rentals(State(state): State<crate::AppState>) -> AppResult<Html<String>> {
    let page = match state.services.rentals.list_active().await {
        Ok(alugueis) => ActiveRentalsPage {
            title: "Aluguéis ativos",
            rows: alugueis.into_iter().map(ActiveRentalRow::from).collect(),
            error: None,
        },
        Err(e) => {
            tracing::warn!("Active rentals page failed: {}", e);
            ActiveRentalsPage {
                title: "Aluguéis ativos",
                rows: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    };
    render(&page)
}

/// Equipment available for rental
pub async fn available_equipment(State(state): State<crate::AppState>) -> AppResult<Html<String>> {
    let page = match state.services.equipment.list_available().await {
        Ok(equipamentos) => AvailableEquipmentPage {
            title: "Equipamentos disponíveis",
            rows: equipamentos.into_iter().map(AvailableEquipmentRow::from).collect(),
            error: None,
        },
        Err(e) => {
            tracing::warn!("Available equipment page failed: {}", e);
            AvailableEquipmentPage {
                title: "Equipamentos disponíveis",
                rows: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    };
    render(&page)
}

/// Form to finalize a rental
pub async fn finalize_form() -> AppResult<Html<String>> {
    render(&FinalizeFormPage {
        title: "Finalizar aluguel",
    })
}

/// Form to open a maintenance, with suppliers and equipment already out of service
pub async fn maintenance_form(State(state): State<crate::AppState>) -> AppResult<Html<String>> {
    let suppliers = state.services.people.suppliers().await.unwrap_or_else(|e| {
        tracing::warn!("Could not load suppliers for maintenance form: {}", e);
        Vec::new()
    });
    let in_maintenance = state
        .services
        .equipment
        .list_in_maintenance()
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Could not load equipment in maintenance: {}", e);
            Vec::new()
        });

    render(&MaintenanceFormPage {
        title: "Registrar manutenção",
        suppliers,
        in_maintenance: in_maintenance.into_iter().map(InMaintenanceRow::from).collect(),
    })
}
