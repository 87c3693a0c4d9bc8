pub mod api;
pub mod calculations;
pub mod catalog;
pub mod models;
pub mod submission;
pub mod validation;

pub use api::{GatewayError, OrderConfirmation, OrderGateway};
pub use catalog::PricingCatalog;
pub use models::*;
