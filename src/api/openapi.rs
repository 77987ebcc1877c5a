//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, maintenance, people, rentals};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Locadora API",
        version = "0.1.0",
        description = "Equipment rental management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Rentals
        rentals::create_rental,
        rentals::finalize_rental,
        rentals::list_active_rentals,
        rentals::get_rental,
        // Maintenance
        maintenance::register_maintenance,
        // Equipment
        equipment::list_available_equipment,
        equipment::list_equipment_in_maintenance,
        // People
        people::list_customers,
        people::list_employees,
        people::list_suppliers,
    ),
    components(
        schemas(
            // Rentals
            rentals::CreateRentalRequest,
            rentals::CreateRentalResponse,
            rentals::FinalizeRentalRequest,
            rentals::FinalizeRentalResponse,
            rentals::ActiveRentalsResponse,
            rentals::RentalDetailsResponse,
            crate::models::rental::RentalItemInput,
            crate::models::rental::ActiveRental,
            crate::models::rental::RentalDetails,
            crate::models::rental::RentalItemDetails,
            // Maintenance
            maintenance::RegisterMaintenanceRequest,
            maintenance::RegisterMaintenanceResponse,
            // Equipment
            equipment::AvailableEquipmentResponse,
            equipment::EquipmentInMaintenanceResponse,
            crate::models::equipment::AvailableEquipment,
            crate::models::equipment::EquipmentInMaintenance,
            crate::models::EquipmentStatus,
            // People
            people::CustomersResponse,
            people::EmployeesResponse,
            people::SuppliersResponse,
            crate::models::people::Customer,
            crate::models::people::Employee,
            crate::models::people::Supplier,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rentals", description = "Rental creation, finalization and lookup"),
        (name = "maintenance", description = "Maintenance registration"),
        (name = "equipment", description = "Equipment lookups"),
        (name = "people", description = "Customers, employees and suppliers")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
