// Service exports
pub mod applications;
pub mod catalog;

pub use applications::{
    Application, ApplicationError, ApplicationStats, ApplicationStatus, ApplicationStore,
};
pub use catalog::{CatalogClient, CatalogError};
