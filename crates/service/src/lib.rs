//! Service layer providing business-oriented operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod pagination;
pub mod catalog;
pub mod workshop;
pub mod sku;
pub mod auth;
pub mod products;
pub mod clients;
pub mod orders;
pub mod settings;
pub mod stats;
