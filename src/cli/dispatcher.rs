use crate::api::client::MbtaClient;
use crate::cli::main_types::{Commands, ConfigCommands, VehicleCommands};
use crate::core::services::config_service::ConfigService;
use crate::core::services::vehicle_service::VehicleService;
use crate::display::{TableDisplay, render_json};
use crate::error::AppError;
use crate::storage::config::Config;
use crate::utils::validation::{validate_url, validate_vehicle_id};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    url_override: Option<String>,
    api_key: Option<String>,
    cancel: CancellationToken,
}

impl Dispatcher {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        url_override: Option<String>,
        api_key: Option<String>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            config,
            config_path,
            url_override,
            api_key,
            cancel,
        }
    }

    pub async fn dispatch(self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Vehicles { command } => self.handle_vehicle_command(command).await,
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn build_client(&self) -> Result<MbtaClient, AppError> {
        let url = self.config.resolve_url(self.url_override.as_deref());
        validate_url(&url)?;
        log::debug!("Using API at {}", url);

        Ok(MbtaClient::with_options(
            url,
            self.api_key.clone(),
            self.config.timeout_secs(),
        )?)
    }

    async fn handle_vehicle_command(&self, command: VehicleCommands) -> Result<(), AppError> {
        let service = VehicleService::new(self.build_client()?);
        let display = TableDisplay::new();

        match command {
            VehicleCommands::List(args) => {
                let json = args.json;
                let vehicles = service
                    .list_vehicles_with_cancel(&self.cancel, args.into())
                    .await?;

                if json {
                    println!("{}", render_json(&vehicles)?);
                } else {
                    println!("{}", display.render_vehicle_list(&vehicles));
                }
            }
            VehicleCommands::Get { id, include, json } => {
                validate_vehicle_id(&id)?;
                let vehicle = service
                    .get_vehicle_with_cancel(&self.cancel, &id, include.into())
                    .await?;

                if json {
                    println!("{}", render_json(&vehicle)?);
                } else {
                    println!("{}", display.render_vehicle_detail(&vehicle));
                }
            }
        }

        Ok(())
    }

    fn handle_config_command(self, command: ConfigCommands) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                println!("url:          {}", self.config.resolve_url(self.url_override.as_deref()));
                println!("timeout_secs: {}", self.config.timeout_secs());
                println!(
                    "api_key:      {}",
                    if self.api_key.is_some() { "set" } else { "not set" }
                );
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                let mut service = ConfigService::new(self.config);
                service.set_field(&key, &value)?;
                service.save_config(self.config_path)?;
                println!("✅ Set {} = {}", key, value);
                Ok(())
            }
        }
    }
}
