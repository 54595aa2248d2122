use super::types::{GetVehicleConfig, ListVehiclesConfig};
use crate::api::client::MbtaClient;
use crate::api::models::{Document, Vehicle};
use crate::error::ApiError;
use tokio_util::sync::CancellationToken;

const VEHICLES_API_PATH: &str = "/vehicles";

/// Vehicle service for the `/vehicles` endpoints
#[derive(Debug, Clone)]
pub struct VehicleService {
    client: MbtaClient,
}

impl VehicleService {
    pub fn new(client: MbtaClient) -> Self {
        Self { client }
    }

    /// List vehicles matching `config`
    pub async fn list_vehicles(&self, config: ListVehiclesConfig) -> Result<Vec<Vehicle>, ApiError> {
        self.list_vehicles_with_cancel(&CancellationToken::new(), config)
            .await
    }

    /// List vehicles, giving up as soon as `cancel` fires
    pub async fn list_vehicles_with_cancel(
        &self,
        cancel: &CancellationToken,
        config: ListVehiclesConfig,
    ) -> Result<Vec<Vehicle>, ApiError> {
        let params = config.query_params();
        let document: Document<Vec<Vehicle>> = self
            .client
            .get_document(VEHICLES_API_PATH, &params, cancel)
            .await?;

        let Document {
            data: mut vehicles,
            included,
        } = document;
        if !included.is_empty() {
            for vehicle in &mut vehicles {
                vehicle.resolve_included(&included);
            }
        }

        log::debug!("Fetched {} vehicles", vehicles.len());
        Ok(vehicles)
    }

    /// Get a single vehicle by ID
    pub async fn get_vehicle(&self, id: &str, config: GetVehicleConfig) -> Result<Vehicle, ApiError> {
        self.get_vehicle_with_cancel(&CancellationToken::new(), id, config)
            .await
    }

    /// Get a single vehicle by ID, giving up as soon as `cancel` fires.
    ///
    /// `id` is used as a raw path segment.
    pub async fn get_vehicle_with_cancel(
        &self,
        cancel: &CancellationToken,
        id: &str,
        config: GetVehicleConfig,
    ) -> Result<Vehicle, ApiError> {
        let path = vehicle_path(id);
        let params = config.query_params();
        let document: Document<Vehicle> = self.client.get_document(&path, &params, cancel).await?;

        let Document {
            data: mut vehicle,
            included,
        } = document;
        vehicle.resolve_included(&included);
        Ok(vehicle)
    }
}

pub(crate) fn vehicle_path(id: &str) -> String {
    format!("{}/{}", VEHICLES_API_PATH, id)
}
