//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Centralizes back-office registration and login business logic.

pub mod domain;
pub mod errors;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::AuthService;
