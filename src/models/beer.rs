use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Stock status of a beer as shown on the site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, Display, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Availability {
    Available,
    ComingSoon,
    SoldOut,
}

impl Availability {
    /// Adjustment added to a beer's quiz score so stocked beers win ties.
    pub fn quiz_bonus(self) -> f64 {
        match self {
            Availability::Available => 1.0,
            Availability::ComingSoon => 0.25,
            Availability::SoldOut => -2.0,
        }
    }
}

/// A beer as consumed by the site and the quiz.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    #[garde(length(min = 1))]
    pub id: String,

    #[garde(length(min = 1))]
    pub name: String,

    /// Style label, e.g. "Pale Ale".
    #[serde(rename = "type")]
    #[garde(length(min = 1))]
    pub beer_type: String,

    #[garde(length(min = 10))]
    pub description: String,

    #[garde(length(min = 1))]
    pub tags: Vec<String>,

    #[garde(length(min = 1))]
    pub flavor_profile: Vec<String>,

    #[garde(length(min = 1))]
    pub pairings: Vec<String>,

    /// French formatted strength, e.g. "5,2% alc.".
    #[garde(pattern(r"^[0-9]+,[0-9]+% alc\.$"))]
    pub abv: String,

    #[garde(skip)]
    pub availability: Availability,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub season: Option<String>,

    #[garde(length(min = 1))]
    pub image: String,

    #[garde(skip)]
    pub has_special_effect: bool,

    #[garde(skip)]
    pub has_ghosts: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub background_image: Option<String>,
}

impl Beer {
    /// Numeric ABV parsed back from the "D,D% alc." display string.
    pub fn abv_value(&self) -> Option<f64> {
        self.abv
            .trim()
            .trim_end_matches("% alc.")
            .trim_end()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}
