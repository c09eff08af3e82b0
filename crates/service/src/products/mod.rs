pub mod repository;
pub mod service;

pub use repository::{ProductRepository, SeaOrmProductRepository};
pub use service::{ProductDetail, ProductInput, ProductPatch, ProductService};
