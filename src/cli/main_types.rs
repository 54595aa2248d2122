use crate::core::services::types::{GetVehicleConfig, ListVehiclesConfig, VehicleSort};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mbta")]
#[command(about = "Command line interface for the MBTA V3 API")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// API base URL (overrides MBTA_URL and the config file)
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[arg(long, global = true, env = "MBTA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query vehicles
    Vehicles {
        #[command(subcommand)]
        command: VehicleCommands,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key (url, timeout_secs)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum VehicleCommands {
    /// List vehicles
    List(ListArgs),
    /// Show a single vehicle
    Get {
        /// Vehicle ID
        id: String,
        #[command(flatten)]
        include: IncludeArgs,
        /// Print the raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct IncludeArgs {
    /// Vehicle attributes to return (sparse fieldset)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,
    /// Include the trip the vehicle is operating
    #[arg(long)]
    pub include_trip: bool,
    /// Include the vehicle's current or next stop
    #[arg(long)]
    pub include_stop: bool,
    /// Include the vehicle's route
    #[arg(long)]
    pub include_route: bool,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Offset (0-based) of the first vehicle in the page
    #[arg(long)]
    pub offset: Option<String>,
    /// Max number of vehicles to return
    #[arg(long)]
    pub limit: Option<String>,
    /// Sort key, prefix with '-' for descending (e.g. -updated_at)
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Option<VehicleSort>,
    #[command(flatten)]
    pub include: IncludeArgs,
    /// Filter by vehicle ID
    #[arg(long = "id", value_delimiter = ',')]
    pub ids: Vec<String>,
    /// Filter by trip ID
    #[arg(long = "trip", value_delimiter = ',')]
    pub trips: Vec<String>,
    /// Filter by label
    #[arg(long = "label", value_delimiter = ',')]
    pub labels: Vec<String>,
    /// Filter by route ID
    #[arg(long = "route", value_delimiter = ',')]
    pub routes: Vec<String>,
    /// Filter by direction (0 or 1)
    #[arg(long, value_parser = ["0", "1"])]
    pub direction_id: Option<String>,
    /// Filter by route type (0 light rail, 1 subway, 2 rail, 3 bus, 4 ferry)
    #[arg(long = "route-type", value_delimiter = ',')]
    pub route_types: Vec<String>,
    /// Print the raw JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl From<IncludeArgs> for GetVehicleConfig {
    fn from(args: IncludeArgs) -> Self {
        GetVehicleConfig {
            fields: args.fields,
            include_trip: args.include_trip,
            include_stop: args.include_stop,
            include_route: args.include_route,
        }
    }
}

impl From<ListArgs> for ListVehiclesConfig {
    fn from(args: ListArgs) -> Self {
        ListVehiclesConfig {
            page_offset: args.offset,
            page_limit: args.limit,
            sort: args.sort,
            fields: args.include.fields,
            include_trip: args.include.include_trip,
            include_stop: args.include.include_stop,
            include_route: args.include.include_route,
            filter_ids: args.ids,
            filter_trip_ids: args.trips,
            filter_labels: args.labels,
            filter_route_ids: args.routes,
            filter_direction_id: args.direction_id,
            filter_route_types: args.route_types,
        }
    }
}
