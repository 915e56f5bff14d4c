use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Progress of an upcoming batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, Display, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReleaseStatus {
    ComingSoon,
    Fermenting,
    Brewing,
    Available,
    SoldOut,
}

/// An upcoming or in-progress batch shown in the "prochaines sorties" block.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    #[garde(length(min = 1))]
    pub id: String,

    /// References `Beer::id`; not enforced here.
    #[garde(length(min = 1))]
    pub beer_id: String,

    #[garde(length(min = 1))]
    pub batch: String,

    #[garde(skip)]
    pub status: ReleaseStatus,

    #[serde(default)]
    #[garde(pattern(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$"))]
    pub available_from: Option<String>,

    #[garde(length(min = 1))]
    pub volume: String,

    #[garde(length(min = 10))]
    pub notes: String,
}
