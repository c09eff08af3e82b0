pub mod errors;
pub mod db;
pub mod admin_user;
pub mod admin_credentials;
pub mod client;
pub mod product;
pub mod product_image;
pub mod product_config;
pub mod service_order;
pub mod site_setting;

#[cfg(test)]
mod tests;
