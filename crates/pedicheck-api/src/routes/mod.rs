pub mod facilities;
pub mod growth;
pub mod health;
pub mod model;
pub mod reports;
pub mod symptoms;
pub mod triage;
