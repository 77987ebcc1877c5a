//! Data models for Locadora

pub mod enums;
pub mod equipment;
pub mod maintenance;
pub mod people;
pub mod rental;

// Re-export commonly used types
pub use enums::EquipmentStatus;
pub use equipment::{AvailableEquipment, EquipmentInMaintenance};
pub use maintenance::NewMaintenance;
pub use people::{Customer, Employee, Supplier};
pub use rental::{
    ActiveRental, FinalizeOutcome, FinalizeRental, NewRental, RentalDetails, RentalItemDetails,
};
