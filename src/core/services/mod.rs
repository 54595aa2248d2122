pub mod config_service;
pub mod types;
pub mod vehicle_service;
