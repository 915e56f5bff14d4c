use garde::Validate;
use serde::{Deserialize, Serialize};

/// Agenda entry (tasting, market, brewery open day).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[garde(length(min = 1))]
    pub id: String,

    #[garde(length(min = 3))]
    pub title: String,

    /// YYYY-MM-DD
    #[garde(pattern(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$"))]
    pub date: String,

    /// HH:MM
    #[garde(pattern(r"^[0-9]{2}:[0-9]{2}$"))]
    pub start_time: String,

    #[garde(pattern(r"^[0-9]{2}:[0-9]{2}$"))]
    pub end_time: String,

    #[garde(length(min = 2))]
    pub venue: String,

    #[garde(length(min = 2))]
    pub city: String,

    #[garde(length(min = 5))]
    pub address: String,

    #[garde(length(min = 10))]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(url)]
    pub registration_url: Option<String>,

    #[serde(default)]
    #[garde(skip)]
    pub highlight: bool,
}
