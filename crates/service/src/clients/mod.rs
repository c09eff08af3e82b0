pub mod repository;
pub mod service;

pub use repository::{ClientRepository, SeaOrmClientRepository};
pub use service::{ClientInput, ClientPatch, ClientService};
