use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// JSON:API envelope
#[derive(Debug, Deserialize, Clone)]
pub struct Document<T> {
    pub data: T,
    #[serde(default)]
    pub included: Vec<Resource>,
}

/// Any resource from the `included` member. Attributes are left untyped since
/// trips, stops and routes are only carried alongside vehicles here.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    #[serde(default)]
    pub attributes: Value,
}

impl Resource {
    pub fn attribute_str(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Value::as_str)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<ResourceIdentifier>,
}

impl Relationship {
    pub fn id(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.id.as_str())
    }
}

// Vehicle models
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Vehicle {
    pub id: String,
    #[serde(rename = "type", default)]
    pub resource_type: String,
    #[serde(default)]
    pub attributes: VehicleAttributes,
    #[serde(default)]
    pub relationships: VehicleRelationships,
    /// Related resources resolved from the document's `included` member.
    #[serde(skip_deserializing, skip_serializing_if = "VehicleIncludes::is_empty", default)]
    pub included: VehicleIncludes,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct VehicleAttributes {
    pub bearing: Option<f64>,
    pub current_status: Option<CurrentStatus>,
    pub current_stop_sequence: Option<u32>,
    pub direction_id: Option<u8>,
    pub label: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub occupancy_status: Option<String>,
    pub revenue: Option<String>,
    pub speed: Option<f64>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurrentStatus {
    IncomingAt,
    StoppedAt,
    InTransitTo,
    #[serde(other)]
    Unknown,
}

impl CurrentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrentStatus::IncomingAt => "INCOMING_AT",
            CurrentStatus::StoppedAt => "STOPPED_AT",
            CurrentStatus::InTransitTo => "IN_TRANSIT_TO",
            CurrentStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct VehicleRelationships {
    #[serde(default)]
    pub trip: Relationship,
    #[serde(default)]
    pub stop: Relationship,
    #[serde(default)]
    pub route: Relationship,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct VehicleIncludes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip: Option<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Resource>,
}

impl VehicleIncludes {
    pub fn is_empty(&self) -> bool {
        self.trip.is_none() && self.stop.is_none() && self.route.is_none()
    }
}

impl Vehicle {
    /// Attach the trip, stop and route resources this vehicle links to.
    pub fn resolve_included(&mut self, included: &[Resource]) {
        let find = |relationship: &Relationship| {
            relationship.data.as_ref().and_then(|linkage| {
                included
                    .iter()
                    .find(|r| r.resource_type == linkage.resource_type && r.id == linkage.id)
                    .cloned()
            })
        };

        self.included = VehicleIncludes {
            trip: find(&self.relationships.trip),
            stop: find(&self.relationships.stop),
            route: find(&self.relationships.route),
        };
    }
}

// Error models
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ErrorDocument {
    #[serde(default)]
    pub errors: Vec<ErrorObject>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ErrorObject {
    pub status: Option<String>,
    pub code: Option<String>,
    pub title: Option<String>,
    pub detail: Option<String>,
}

impl ErrorDocument {
    /// First human-readable message in the document, if any.
    pub fn summary(&self) -> Option<String> {
        self.errors.iter().find_map(|e| {
            e.detail
                .clone()
                .or_else(|| e.title.clone())
                .or_else(|| e.code.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VEHICLE_JSON: &str = r#"{
        "type": "vehicle",
        "id": "y1886",
        "attributes": {
            "bearing": 135,
            "current_status": "IN_TRANSIT_TO",
            "current_stop_sequence": 9,
            "direction_id": 1,
            "label": "1886",
            "latitude": 42.3467,
            "longitude": -71.0844,
            "occupancy_status": null,
            "speed": null,
            "updated_at": "2024-05-01T08:15:30-04:00"
        },
        "relationships": {
            "trip": {"data": {"type": "trip", "id": "60555001"}},
            "stop": {"data": {"type": "stop", "id": "1241"}},
            "route": {"data": {"type": "route", "id": "1"}}
        }
    }"#;

    #[test]
    fn test_vehicle_deserialization() {
        let vehicle: Vehicle = serde_json::from_str(VEHICLE_JSON).unwrap();
        assert_eq!(vehicle.id, "y1886");
        assert_eq!(vehicle.resource_type, "vehicle");
        assert_eq!(vehicle.attributes.label.as_deref(), Some("1886"));
        assert_eq!(
            vehicle.attributes.current_status,
            Some(CurrentStatus::InTransitTo)
        );
        assert_eq!(vehicle.attributes.direction_id, Some(1));
        assert!(vehicle.attributes.speed.is_none());
        assert!(vehicle.attributes.updated_at.is_some());
        assert_eq!(vehicle.relationships.route.id(), Some("1"));
        assert!(vehicle.included.is_empty());
    }

    #[test]
    fn test_sparse_vehicle_deserialization() {
        // fields[vehicle]=label leaves out everything else
        let json = r#"{"type": "vehicle", "id": "y1", "attributes": {"label": "0001"}}"#;
        let vehicle: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.attributes.label.as_deref(), Some("0001"));
        assert!(vehicle.attributes.latitude.is_none());
        assert!(vehicle.relationships.trip.data.is_none());
    }

    #[test]
    fn test_unknown_current_status() {
        let json = r#"{"id": "y1", "attributes": {"current_status": "TELEPORTING"}}"#;
        let vehicle: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(
            vehicle.attributes.current_status,
            Some(CurrentStatus::Unknown)
        );
    }

    #[test]
    fn test_resolve_included() {
        let mut vehicle: Vehicle = serde_json::from_str(VEHICLE_JSON).unwrap();
        let included: Vec<Resource> = serde_json::from_str(
            r#"[
                {"type": "route", "id": "1", "attributes": {"long_name": "Harvard Square - Nubian Station"}},
                {"type": "stop", "id": "9999", "attributes": {}},
                {"type": "trip", "id": "60555001", "attributes": {"headsign": "Harvard"}}
            ]"#,
        )
        .unwrap();

        vehicle.resolve_included(&included);

        let trip = vehicle.included.trip.as_ref().unwrap();
        assert_eq!(trip.attribute_str("headsign"), Some("Harvard"));
        assert_eq!(vehicle.included.route.as_ref().unwrap().id, "1");
        // stop 1241 was not in the included list
        assert!(vehicle.included.stop.is_none());
    }

    #[test]
    fn test_document_without_included() {
        let json = r#"{"data": []}"#;
        let document: Document<Vec<Vehicle>> = serde_json::from_str(json).unwrap();
        assert!(document.data.is_empty());
        assert!(document.included.is_empty());
    }

    #[test]
    fn test_error_document_summary() {
        let json = r#"{"errors": [{"status": "400", "code": "bad_request", "detail": "Invalid sort key."}]}"#;
        let doc: ErrorDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.summary().as_deref(), Some("Invalid sort key."));

        let json = r#"{"errors": [{"status": "404", "code": "not_found"}]}"#;
        let doc: ErrorDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.summary().as_deref(), Some("not_found"));
    }
}
