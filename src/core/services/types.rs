use crate::api::query::{QueryParams, add_comma_separated_list_to_query, add_to_query};
use std::fmt;
use std::str::FromStr;

/// Vehicle attributes the `/vehicles` endpoint can sort on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleSortField {
    Bearing,
    CurrentStatus,
    CurrentStopSequence,
    DirectionId,
    Label,
    Latitude,
    Longitude,
    Speed,
    UpdatedAt,
}

impl VehicleSortField {
    pub const ALL: [VehicleSortField; 9] = [
        VehicleSortField::Bearing,
        VehicleSortField::CurrentStatus,
        VehicleSortField::CurrentStopSequence,
        VehicleSortField::DirectionId,
        VehicleSortField::Label,
        VehicleSortField::Latitude,
        VehicleSortField::Longitude,
        VehicleSortField::Speed,
        VehicleSortField::UpdatedAt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleSortField::Bearing => "bearing",
            VehicleSortField::CurrentStatus => "current_status",
            VehicleSortField::CurrentStopSequence => "current_stop_sequence",
            VehicleSortField::DirectionId => "direction_id",
            VehicleSortField::Label => "label",
            VehicleSortField::Latitude => "latitude",
            VehicleSortField::Longitude => "longitude",
            VehicleSortField::Speed => "speed",
            VehicleSortField::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// A `sort` token such as `speed` or `-updated_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleSort {
    pub field: VehicleSortField,
    pub order: SortOrder,
}

impl VehicleSort {
    pub fn ascending(field: VehicleSortField) -> Self {
        Self {
            field,
            order: SortOrder::Ascending,
        }
    }

    pub fn descending(field: VehicleSortField) -> Self {
        Self {
            field,
            order: SortOrder::Descending,
        }
    }

    /// Wire token, with a leading `-` for descending order
    pub fn token(&self) -> String {
        match self.order {
            SortOrder::Ascending => self.field.as_str().to_string(),
            SortOrder::Descending => format!("-{}", self.field.as_str()),
        }
    }
}

impl fmt::Display for VehicleSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl FromStr for VehicleSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (order, name) = match s.strip_prefix('-') {
            Some(rest) => (SortOrder::Descending, rest),
            None => (SortOrder::Ascending, s),
        };

        VehicleSortField::ALL
            .iter()
            .find(|field| field.as_str() == name)
            .map(|&field| VehicleSort { field, order })
            .ok_or_else(|| {
                let valid: Vec<&str> = VehicleSortField::ALL.iter().map(|f| f.as_str()).collect();
                format!(
                    "unknown sort key '{}' (expected one of {}, optionally prefixed with '-')",
                    s,
                    valid.join(", ")
                )
            })
    }
}

/// Options for `GET /vehicles/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetVehicleConfig {
    /// Sparse fieldset for `fields[vehicle]`
    pub fields: Vec<String>,
    /// The trip the vehicle is currently operating
    pub include_trip: bool,
    /// The vehicle's current (when stopped) or next stop
    pub include_stop: bool,
    /// The route designated for the vehicle's trip
    pub include_route: bool,
}

impl GetVehicleConfig {
    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();

        let includes: Vec<&str> = [
            (self.include_trip, "trip"),
            (self.include_stop, "stop"),
            (self.include_route, "route"),
        ]
        .into_iter()
        .filter_map(|(enabled, name)| enabled.then_some(name))
        .collect();

        add_comma_separated_list_to_query(&mut params, "include", &includes);
        add_comma_separated_list_to_query(&mut params, "fields[vehicle]", &self.fields);
        params
    }
}

/// Options for `GET /vehicles`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListVehiclesConfig {
    /// Offset (0-based) of the first element in the page
    pub page_offset: Option<String>,
    /// Max number of elements to return
    pub page_limit: Option<String>,
    pub sort: Option<VehicleSort>,
    pub fields: Vec<String>,
    pub include_trip: bool,
    pub include_stop: bool,
    pub include_route: bool,
    pub filter_ids: Vec<String>,
    pub filter_trip_ids: Vec<String>,
    pub filter_labels: Vec<String>,
    /// Multi-route trips match any of their routes
    pub filter_route_ids: Vec<String>,
    /// Either "0" or "1"
    pub filter_direction_id: Option<String>,
    pub filter_route_types: Vec<String>,
}

impl ListVehiclesConfig {
    /// The include/fields part shared with single-vehicle requests
    pub fn item_config(&self) -> GetVehicleConfig {
        GetVehicleConfig {
            fields: self.fields.clone(),
            include_trip: self.include_trip,
            include_stop: self.include_stop,
            include_route: self.include_route,
        }
    }

    pub fn query_params(&self) -> QueryParams {
        let mut params = self.item_config().query_params();
        let sort = self.sort.map(|s| s.token());

        add_to_query(&mut params, "page[offset]", self.page_offset.as_deref());
        add_to_query(&mut params, "page[limit]", self.page_limit.as_deref());
        add_to_query(&mut params, "sort", sort.as_deref());
        add_to_query(
            &mut params,
            "filter[direction_id]",
            self.filter_direction_id.as_deref(),
        );
        add_comma_separated_list_to_query(&mut params, "filter[id]", &self.filter_ids);
        add_comma_separated_list_to_query(&mut params, "filter[trip]", &self.filter_trip_ids);
        add_comma_separated_list_to_query(&mut params, "filter[label]", &self.filter_labels);
        add_comma_separated_list_to_query(&mut params, "filter[route]", &self.filter_route_ids);
        add_comma_separated_list_to_query(
            &mut params,
            "filter[route_type]",
            &self.filter_route_types,
        );
        params
    }
}
