use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::models::beer::Beer;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, EnumIter, Display, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Intensity {
    Light,
    Balanced,
    Bold,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, EnumIter, Display, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Aroma {
    Hoppy,
    Malty,
    Spicy,
    Fruity,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, EnumIter, Display, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Occasion {
    Apero,
    Meal,
    Cozy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, EnumIter, Display, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Finish {
    Dry,
    Round,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, EnumIter, Display, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Adventure {
    Classic,
    Surprise,
}

/// One complete quiz submission. All five answers are required.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizAnswers {
    pub intensity: Intensity,
    pub aroma: Aroma,
    pub occasion: Occasion,
    pub finish: Finish,
    pub adventure: Adventure,
}

/// Best matching beer with its total score and up to three display reasons.
#[derive(Debug, Clone, Serialize)]
pub struct QuizRecommendation {
    pub beer: Beer,
    pub score: f64,
    pub reasons: Vec<&'static str>,
}
