//! Public catalog contract published by the brewery back office.
//!
//! Field names follow the JSON document (`public-catalog.json`) one to one.
//! Shape errors surface at deserialization, field rules through `garde`.

use garde::Validate;
use serde::{Deserialize, Serialize};

/// Root of the public catalog document.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PublicCatalog {
    #[garde(skip)]
    pub generated_at: String,

    #[garde(skip)]
    pub version: f64,

    #[garde(dive)]
    pub brewery: BreweryInfo,

    #[garde(dive)]
    pub beers: Vec<PublicBeer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BreweryInfo {
    #[garde(skip)]
    pub id: String,

    #[garde(skip)]
    pub name: String,
}

/// EBC/SRM color with a human label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicColor {
    pub ebc: f64,
    pub srm: f64,
    pub label: String,
}

/// Binary web availability, the only stock signal the site uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WebAvailability {
    InStock,
    OutOfStock,
}

/// Stock levels: granular for the app, binary for the web.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicStock {
    pub available_units: f64,
    pub available_volume_l: f64,
    pub level_app: String,
    pub label_app: String,
    pub availability_web: WebAvailability,
    pub label_web: String,
}

/// Batch currently in the tanks for a beer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicFermentation {
    /// Free-form back office status ("fermenting", "conditioning", ...).
    pub status: String,
    pub status_label: String,
    #[serde(default)]
    pub batch_number: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub estimated_ready_date: Option<String>,
    pub batch_count_in_progress: f64,
    pub coming_soon: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PublicBeer {
    #[garde(length(min = 1))]
    pub id: String,

    #[garde(length(min = 1))]
    pub name: String,

    #[garde(length(min = 1))]
    pub style: String,

    #[garde(skip)]
    pub abv: f64,

    #[serde(default)]
    #[garde(skip)]
    pub ibu: Option<f64>,

    #[garde(skip)]
    pub color: PublicColor,

    #[garde(skip)]
    pub description: String,

    #[serde(default)]
    #[garde(skip)]
    pub tasting_notes: Option<String>,

    #[garde(skip)]
    pub ingredients: Vec<String>,

    #[garde(skip)]
    pub tags: Vec<String>,

    #[garde(skip)]
    pub food_pairings: Vec<String>,

    #[serde(default)]
    #[garde(skip)]
    pub season: Option<String>,

    #[garde(skip)]
    pub is_limited_edition: bool,

    /// Path fragment under `/beers/`, without leading slash.
    #[serde(default)]
    #[garde(skip)]
    pub image: Option<String>,

    #[garde(skip)]
    pub stock: PublicStock,

    #[serde(default)]
    #[garde(skip)]
    pub fermentation: Option<PublicFermentation>,

    #[garde(skip)]
    pub updated_at: String,
}
