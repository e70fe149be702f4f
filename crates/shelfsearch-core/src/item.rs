use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog item as it appears in the external snapshot.
///
/// `store_id` is the raw store reference and may carry a `virtual_` or
/// `temp_` prefix; resolution against the store snapshot happens in the
/// engine, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub store_id: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    /// A human has confirmed this item's location/price/availability.
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub report_count: u32,
    /// Soft-delete marker. Deleted items never appear in any result.
    #[serde(default)]
    pub deleted: bool,
}
