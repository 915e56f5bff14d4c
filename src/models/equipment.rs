use garde::Validate;
use serde::{Deserialize, Serialize};

/// A piece of brewhouse equipment shown on the equipment page.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Equipment {
    #[garde(length(min = 1))]
    pub id: String,

    #[garde(length(min = 1))]
    pub name: String,

    #[garde(length(min = 10))]
    pub description: String,

    /// Absolute site path.
    #[garde(prefix("/"))]
    pub image: String,

    #[garde(length(min = 1))]
    pub capacity: String,
}

/// One step of the brewing process timeline.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BrewingStep {
    #[garde(length(min = 1))]
    pub id: String,

    /// Two-digit position, "01", "02", ...
    #[garde(pattern(r"^[0-9]{2}$"))]
    pub number: String,

    #[garde(length(min = 1))]
    pub title: String,

    #[garde(length(min = 10))]
    pub description: String,

    #[garde(length(min = 1))]
    pub duration: String,

    #[garde(skip)]
    pub temperature: Option<String>,

    #[garde(length(min = 1))]
    pub icon: String,
}
