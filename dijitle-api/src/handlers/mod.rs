//! HTTP handlers for dijitle-api.

pub mod health;
pub mod root;
pub mod status;

pub use health::health_check;
pub use root::root;
pub use status::service_status;
