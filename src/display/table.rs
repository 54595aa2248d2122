use crate::api::models::{Resource, Vehicle};
use crate::error::{AppError, DisplayError};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};

const NOT_AVAILABLE: &str = "-";

pub struct TableDisplay {
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn bold_header(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(color)
        } else {
            Cell::new(text).add_attribute(Attribute::Bold)
        }
    }

    fn colored_cell(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(color)
        } else {
            Cell::new(text)
        }
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    pub fn render_vehicle_list(&self, vehicles: &[Vehicle]) -> String {
        let mut table = self.new_table();
        let headers = [
            "ID", "Label", "Route", "Trip", "Stop", "Status", "Dir", "Lat", "Lon", "Speed",
            "Updated",
        ];
        table.set_header(
            headers
                .iter()
                .map(|h| self.bold_header(h, Color::Cyan))
                .collect::<Vec<Cell>>(),
        );

        for vehicle in vehicles {
            let attrs = &vehicle.attributes;
            let rels = &vehicle.relationships;
            table.add_row(vec![
                self.colored_cell(&vehicle.id, Color::Cyan),
                Cell::new(or_dash(attrs.label.as_deref())),
                Cell::new(display_related(
                    vehicle.included.route.as_ref(),
                    rels.route.id(),
                    "short_name",
                )),
                Cell::new(or_dash(rels.trip.id())),
                Cell::new(display_related(
                    vehicle.included.stop.as_ref(),
                    rels.stop.id(),
                    "name",
                )),
                Cell::new(or_dash(attrs.current_status.map(|s| s.as_str()))),
                Cell::new(format_opt(attrs.direction_id)),
                Cell::new(format_coord(attrs.latitude)),
                Cell::new(format_coord(attrs.longitude)),
                Cell::new(format_opt(attrs.speed)),
                self.colored_cell(
                    &attrs
                        .updated_at
                        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                    Color::DarkGrey,
                ),
            ]);
        }

        format!("{}\n{} vehicle(s)", table, vehicles.len())
    }

    pub fn render_vehicle_detail(&self, vehicle: &Vehicle) -> String {
        let mut table = self.new_table();
        table.set_header(vec![
            self.bold_header("Field", Color::Cyan),
            self.bold_header("Value", Color::Cyan),
        ]);

        let attrs = &vehicle.attributes;
        let rels = &vehicle.relationships;
        let rows: Vec<(&str, String)> = vec![
            ("id", vehicle.id.clone()),
            ("label", or_dash(attrs.label.as_deref()).to_string()),
            (
                "current_status",
                or_dash(attrs.current_status.map(|s| s.as_str())).to_string(),
            ),
            (
                "current_stop_sequence",
                format_opt(attrs.current_stop_sequence),
            ),
            ("direction_id", format_opt(attrs.direction_id)),
            ("bearing", format_opt(attrs.bearing)),
            ("latitude", format_coord(attrs.latitude)),
            ("longitude", format_coord(attrs.longitude)),
            ("speed", format_opt(attrs.speed)),
            (
                "occupancy_status",
                or_dash(attrs.occupancy_status.as_deref()).to_string(),
            ),
            (
                "updated_at",
                attrs
                    .updated_at
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ),
            ("trip", or_dash(rels.trip.id()).to_string()),
            (
                "stop",
                display_related(vehicle.included.stop.as_ref(), rels.stop.id(), "name"),
            ),
            (
                "route",
                display_related(vehicle.included.route.as_ref(), rels.route.id(), "long_name"),
            ),
        ];

        for (field, value) in rows {
            table.add_row(vec![self.colored_cell(field, Color::DarkGrey), Cell::new(value)]);
        }

        table.to_string()
    }
}

/// Pretty JSON for `--json` output
pub fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Display(DisplayError::JsonOutput(e.to_string())))
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

fn format_opt<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn format_coord(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.5}", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Prefer a readable attribute of the included resource, fall back to the ID
fn display_related(resource: Option<&Resource>, id: Option<&str>, attribute: &str) -> String {
    match (resource.and_then(|r| r.attribute_str(attribute)), id) {
        (Some(name), Some(id)) if name != id => format!("{} ({})", name, id),
        (Some(name), _) => name.to_string(),
        (None, id) => or_dash(id).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Relationship, ResourceIdentifier, VehicleAttributes};
    use serde_json::json;

    fn sample_vehicle() -> Vehicle {
        let mut vehicle = Vehicle {
            id: "y1886".to_string(),
            resource_type: "vehicle".to_string(),
            attributes: VehicleAttributes {
                label: Some("1886".to_string()),
                latitude: Some(42.346712),
                longitude: Some(-71.08441),
                ..Default::default()
            },
            ..Default::default()
        };
        vehicle.relationships.route = Relationship {
            data: Some(ResourceIdentifier {
                resource_type: "route".to_string(),
                id: "1".to_string(),
            }),
        };
        vehicle
    }

    #[test]
    fn test_render_vehicle_list() {
        let display = TableDisplay::new().with_colors(false);
        let output = display.render_vehicle_list(&[sample_vehicle()]);
        assert!(output.contains("y1886"));
        assert!(output.contains("1886"));
        assert!(output.contains("42.34671"));
        assert!(output.ends_with("1 vehicle(s)"));
    }

    #[test]
    fn test_render_empty_list() {
        let display = TableDisplay::new().with_colors(false);
        let output = display.render_vehicle_list(&[]);
        assert!(output.ends_with("0 vehicle(s)"));
    }

    #[test]
    fn test_render_detail_uses_included_route() {
        let mut vehicle = sample_vehicle();
        vehicle.included.route = Some(Resource {
            resource_type: "route".to_string(),
            id: "1".to_string(),
            attributes: json!({"long_name": "Harvard Square - Nubian Station"}),
        });

        let display = TableDisplay::new().with_colors(false);
        let output = display.render_vehicle_detail(&vehicle);
        assert!(output.contains("Harvard Square - Nubian Station (1)"));
    }

    #[test]
    fn test_display_related_fallbacks() {
        assert_eq!(display_related(None, Some("Red"), "name"), "Red");
        assert_eq!(display_related(None, None, "name"), "-");
    }

    #[test]
    fn test_render_json() {
        let output = render_json(&[sample_vehicle()]).unwrap();
        assert!(output.contains("\"id\": \"y1886\""));
        // nothing was included, so the key is skipped
        assert!(!output.contains("\"included\""));
    }
}
