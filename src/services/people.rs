//! Customers, employees and suppliers service

use crate::{
    error::AppResult,
    models::people::{Customer, Employee, Supplier},
    repository::Repository,
};

#[derive(Clone)]
pub struct PeopleService {
    repository: Repository,
}

impl PeopleService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn customers(&self) -> AppResult<Vec<Customer>> {
        self.repository.people.list_customers().await
    }

    pub async fn employees(&self) -> AppResult<Vec<Employee>> {
        self.repository.people.list_employees().await
    }

    pub async fn suppliers(&self) -> AppResult<Vec<Supplier>> {
        self.repository.people.list_suppliers().await
    }
}
