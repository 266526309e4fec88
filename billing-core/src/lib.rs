pub mod calculations;
pub mod input;
pub mod models;
pub mod services;
pub mod session;

pub use models::*;
pub use services::{CategoryService, ItemCatalog, RateService, ServiceError};
pub use session::{BillingSession, SessionState};
