pub mod general;
pub mod products;

pub use general::{access_denied, health_check, serve_css};
pub use products::{product_detail, product_state};
