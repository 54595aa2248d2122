//! # mbta-client
//!
//! Typed client for the MBTA V3 API.
//!
//! ```rust,ignore
//! use mbta_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> mbta_client::Result<()> {
//!     let client = MbtaClient::new("https://api-v3.mbta.com".to_string())?;
//!     let vehicles = VehicleService::new(client);
//!
//!     let config = ListVehiclesConfig {
//!         filter_route_ids: vec!["Red".to_string()],
//!         sort: Some(VehicleSort::descending(VehicleSortField::UpdatedAt)),
//!         include_stop: true,
//!         ..Default::default()
//!     };
//!     for vehicle in vehicles.list_vehicles(config).await? {
//!         println!("{} {:?}", vehicle.id, vehicle.attributes.label);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`]: HTTP client, query encoding and JSON:API models
//! - [`core`]: Vehicle and configuration services, request configs
//! - [`storage`]: TOML configuration and API key lookup
//! - [`display`]: Table and JSON output for the CLI
//! - [`error`]: Error hierarchy with severities and hints

pub use error::AppError;

pub mod prelude {
    pub use crate::Result;
    pub use crate::error::{ApiError, AppError};

    pub use crate::api::client::MbtaClient;
    pub use crate::api::models::{CurrentStatus, Resource, Vehicle};

    pub use crate::core::services::types::{
        GetVehicleConfig, ListVehiclesConfig, SortOrder, VehicleSort, VehicleSortField,
    };
    pub use crate::core::services::vehicle_service::VehicleService;

    pub use crate::storage::config::Config;
}

/// Main architecture layers (dependency flow: CLI → Core → API)
pub mod cli; // Command-line interface
pub mod core; // Services and request configs
pub mod storage; // Configuration and credentials

/// Support modules (used across layers)
pub mod api; // MBTA API client
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Logging and validation

pub type Result<T> = std::result::Result<T, AppError>;
