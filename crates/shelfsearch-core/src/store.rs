use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// The all-zero pair is the legacy "unset" sentinel, not a real position;
/// check [`Coordinates::is_unset`] before using a pair as a geodesic
/// endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether this pair is the (0, 0) "no location recorded" sentinel.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_unset(self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

/// A store record as delivered by the external snapshot.
///
/// Field naming in the snapshot is heterogeneous: older records use
/// `storeName`/`storeAddress`, newer ones `name`/`address`, and coordinates
/// arrive either nested under `location` or as flat `latitude`/`longitude`.
/// [`StoreRecord`] is the normalized shape; the engine builds it from this
/// one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSource {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub store_address: Option<String>,
    #[serde(default)]
    pub location: Option<Coordinates>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// A store after identifier and field normalization.
///
/// `location` is `None` when the snapshot carried no coordinates or only the
/// (0, 0) sentinel, so a missing location can never turn into a distance to
/// the literal origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    /// Canonical id: the key under which this record sits in the lookup table.
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: Option<Coordinates>,
    pub owner_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_sentinel_detected() {
        assert!(Coordinates::new(0.0, 0.0).is_unset());
        assert!(!Coordinates::new(0.0, 151.2).is_unset());
        assert!(!Coordinates::new(-33.8, 0.0).is_unset());
        assert!(!Coordinates::new(-33.8, 151.2).is_unset());
    }

    #[test]
    fn store_source_accepts_modern_field_names() {
        let source: StoreSource = serde_json::from_str(
            r#"{
                "id": "ABC123",
                "name": "Hardware Corner",
                "address": "1 Main St",
                "location": {"latitude": -33.8688, "longitude": 151.2093},
                "ownerId": "u42"
            }"#,
        )
        .unwrap();
        assert_eq!(source.name.as_deref(), Some("Hardware Corner"));
        assert!(source.store_name.is_none());
        let location = source.location.unwrap();
        assert!((location.latitude - (-33.8688)).abs() < 1e-9);
    }

    #[test]
    fn store_source_accepts_legacy_field_names() {
        let source: StoreSource = serde_json::from_str(
            r#"{
                "id": "XYZ",
                "storeName": "Old Depot",
                "storeAddress": "9 Side Rd",
                "latitude": 40.7,
                "longitude": -74.0
            }"#,
        )
        .unwrap();
        assert!(source.name.is_none());
        assert_eq!(source.store_name.as_deref(), Some("Old Depot"));
        assert_eq!(source.store_address.as_deref(), Some("9 Side Rd"));
        assert_eq!(source.latitude, Some(40.7));
        assert!(source.location.is_none());
    }
}
