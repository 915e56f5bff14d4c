//! Beer quiz scoring.
//!
//! Each beer gets five sub-scores (intensity, aroma, occasion, finish,
//! adventure) plus an availability adjustment. The highest total wins; ties
//! go to the more available beer, then to the lowest id.

use std::cmp::Ordering;

use tracing::debug;

use crate::models::beer::{Availability, Beer};
use crate::models::quiz::{
    Adventure, Aroma, Finish, Intensity, Occasion, QuizAnswers, QuizRecommendation,
};

const MAX_REASONS: usize = 3;

const DRY_PROFILE: &[&str] = &["dry-finish", "crisp", "light-body"];
const ROUND_PROFILE: &[&str] = &["rich-body", "malty", "caramel", "balanced"];

const CLASSIC_STYLES: &[&str] = &["lager", "pale ale", "saison"];
const SURPRISE_STYLES: &[&str] = &["specialty", "imperial", "seasonal"];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QuizError {
    #[error("Aucune bière disponible pour la recommandation")]
    NoBeersAvailable,
}

fn aroma_terms(aroma: Aroma) -> &'static [&'static str] {
    match aroma {
        Aroma::Hoppy => &["hoppy", "houbl", "amertume"],
        Aroma::Malty => &["malty", "malt", "caramel", "grainy"],
        Aroma::Spicy => &["spicy", "epice", "épic"],
        Aroma::Fruity => &["fruit", "floral", "nectarine"],
    }
}

fn occasion_terms(occasion: Occasion) -> &'static [&'static str] {
    match occasion {
        Occasion::Apero => &["apéritif", "salade", "frais", "poissons"],
        Occasion::Meal => &["pizza", "viandes", "plats", "charcut", "volaille", "burger"],
        Occasion::Cozy => &["dessert", "mijot", "tarte", "chocolat", "courges"],
    }
}

fn aroma_label(aroma: Aroma) -> &'static str {
    match aroma {
        Aroma::Hoppy => "profil houblonné",
        Aroma::Malty => "profil malté",
        Aroma::Spicy => "profil épicé",
        Aroma::Fruity => "profil fruité",
    }
}

fn finish_label(finish: Finish) -> &'static str {
    match finish {
        Finish::Dry => "finale sèche",
        Finish::Round => "texture ronde",
    }
}

fn occasion_label(occasion: Occasion) -> &'static str {
    match occasion {
        Occasion::Apero => "parfaite pour l’apéro",
        Occasion::Meal => "idéale à table",
        Occasion::Cozy => "adaptée aux moments cocooning",
    }
}

/// True when any term occurs inside any haystack entry, ignoring case.
fn includes_any<'a, I>(haystack: I, terms: &[&str]) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let normalized: Vec<String> = haystack.into_iter().map(str::to_lowercase).collect();
    terms
        .iter()
        .any(|term| normalized.iter().any(|value| value.contains(term)))
}

fn score_intensity(beer: &Beer, intensity: Intensity) -> f64 {
    let Some(abv) = beer.abv_value() else {
        debug!(beer_id = %beer.id, abv = %beer.abv, "Unparseable ABV, no intensity points");
        return 0.0;
    };

    match intensity {
        Intensity::Light => {
            if abv <= 5.0 {
                3.0
            } else if abv <= 6.5 {
                1.0
            } else {
                0.0
            }
        }
        Intensity::Balanced => {
            if (4.8..=6.8).contains(&abv) {
                3.0
            } else if abv > 6.8 && abv <= 7.8 {
                1.0
            } else {
                0.0
            }
        }
        Intensity::Bold => {
            if abv >= 7.5 {
                3.0
            } else if abv >= 6.5 {
                1.0
            } else {
                0.0
            }
        }
    }
}

fn score_aroma(beer: &Beer, aroma: Aroma) -> f64 {
    let source = beer
        .flavor_profile
        .iter()
        .chain(beer.tags.iter())
        .map(String::as_str)
        .chain(std::iter::once(beer.beer_type.as_str()));

    if includes_any(source, aroma_terms(aroma)) {
        3.0
    } else {
        0.0
    }
}

fn score_occasion(beer: &Beer, occasion: Occasion) -> f64 {
    if includes_any(beer.pairings.iter().map(String::as_str), occasion_terms(occasion)) {
        2.0
    } else {
        0.0
    }
}

fn score_finish(beer: &Beer, finish: Finish) -> f64 {
    let profile = match finish {
        Finish::Dry => DRY_PROFILE,
        Finish::Round => ROUND_PROFILE,
    };

    if includes_any(beer.flavor_profile.iter().map(String::as_str), profile) {
        2.0
    } else {
        0.0
    }
}

fn score_adventure(beer: &Beer, adventure: Adventure) -> f64 {
    let beer_type = beer.beer_type.to_lowercase();
    let styles = match adventure {
        Adventure::Classic => CLASSIC_STYLES,
        Adventure::Surprise => SURPRISE_STYLES,
    };

    if styles.iter().any(|style| beer_type.contains(style)) {
        2.0
    } else {
        0.0
    }
}

/// Total quiz score for one beer, availability adjustment included.
pub fn score_beer(beer: &Beer, answers: &QuizAnswers) -> f64 {
    score_intensity(beer, answers.intensity)
        + score_aroma(beer, answers.aroma)
        + score_occasion(beer, answers.occasion)
        + score_finish(beer, answers.finish)
        + score_adventure(beer, answers.adventure)
        + beer.availability.quiz_bonus()
}

/// Display reasons in fixed priority order, at most three.
pub fn build_reasons(beer: &Beer, answers: &QuizAnswers) -> Vec<&'static str> {
    let mut reasons = Vec::with_capacity(MAX_REASONS + 1);

    if score_aroma(beer, answers.aroma) > 0.0 {
        reasons.push(aroma_label(answers.aroma));
    }
    if score_finish(beer, answers.finish) > 0.0 {
        reasons.push(finish_label(answers.finish));
    }
    if score_occasion(beer, answers.occasion) > 0.0 {
        reasons.push(occasion_label(answers.occasion));
    }
    if beer.availability == Availability::Available {
        reasons.push("disponible actuellement");
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

fn rank(a: &(&Beer, f64), b: &(&Beer, f64)) -> Ordering {
    let (beer_a, score_a) = a;
    let (beer_b, score_b) = b;

    score_b
        .total_cmp(score_a)
        .then_with(|| {
            beer_b
                .availability
                .quiz_bonus()
                .total_cmp(&beer_a.availability.quiz_bonus())
        })
        .then_with(|| beer_a.id.cmp(&beer_b.id))
}

/// Pick the best matching beer for a complete set of quiz answers.
///
/// Fails only when `beers` is empty.
pub fn recommend_beer(
    beers: &[Beer],
    answers: &QuizAnswers,
) -> Result<QuizRecommendation, QuizError> {
    let (beer, score) = beers
        .iter()
        .map(|beer| (beer, score_beer(beer, answers)))
        .min_by(rank)
        .ok_or(QuizError::NoBeersAvailable)?;

    metrics::counter!("quiz_recommendations_total").increment(1);
    debug!(beer_id = %beer.id, score, "Quiz recommendation computed");

    Ok(QuizRecommendation {
        beer: beer.clone(),
        score,
        reasons: build_reasons(beer, answers),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer(id: &str, abv: &str, beer_type: &str, flavor: &[&str], pairings: &[&str]) -> Beer {
        Beer {
            id: id.to_string(),
            name: id.to_string(),
            beer_type: beer_type.to_string(),
            description: "Bière de test pour le quiz.".to_string(),
            tags: vec!["Artisanale".to_string()],
            flavor_profile: flavor.iter().map(|s| s.to_string()).collect(),
            pairings: pairings.iter().map(|s| s.to_string()).collect(),
            abv: abv.to_string(),
            availability: Availability::Available,
            season: None,
            image: "/beers/placeholder-beer.svg".to_string(),
            has_special_effect: false,
            has_ghosts: false,
            background_image: None,
        }
    }

    fn answers() -> QuizAnswers {
        QuizAnswers {
            intensity: Intensity::Balanced,
            aroma: Aroma::Hoppy,
            occasion: Occasion::Meal,
            finish: Finish::Dry,
            adventure: Adventure::Classic,
        }
    }

    #[test]
    fn test_pale_ale_regression_score() {
        let apa = beer("apa", "5,2% alc.", "Pale Ale", &["hoppy"], &["Burger"]);
        // intensity 3 + aroma 3 + occasion 2 + finish 0 + adventure 2 + available 1
        assert_eq!(score_beer(&apa, &answers()), 11.0);
    }

    #[test]
    fn test_intensity_boundaries() {
        let light = beer("a", "5,0% alc.", "Blonde", &["balanced"], &["Salade"]);
        let mid = beer("b", "6,5% alc.", "Blonde", &["balanced"], &["Salade"]);
        let strong = beer("c", "7,5% alc.", "Blonde", &["balanced"], &["Salade"]);

        assert_eq!(score_intensity(&light, Intensity::Light), 3.0);
        assert_eq!(score_intensity(&mid, Intensity::Light), 1.0);
        assert_eq!(score_intensity(&strong, Intensity::Light), 0.0);

        assert_eq!(score_intensity(&light, Intensity::Balanced), 3.0);
        assert_eq!(score_intensity(&strong, Intensity::Balanced), 1.0);

        assert_eq!(score_intensity(&strong, Intensity::Bold), 3.0);
        assert_eq!(score_intensity(&mid, Intensity::Bold), 1.0);
        assert_eq!(score_intensity(&light, Intensity::Bold), 0.0);
    }

    #[test]
    fn test_unparseable_abv_scores_zero_intensity() {
        let odd = beer("odd", "n/a", "Pale Ale", &["hoppy"], &["Burger"]);
        let score = score_beer(&odd, &answers());
        assert!(score.is_finite());
        assert_eq!(score, 8.0);
    }

    #[test]
    fn test_aroma_matches_tags_and_type() {
        let mut stout = beer("stout", "6,0% alc.", "Imperial Stout", &["roasty"], &["Dessert"]);
        stout.tags = vec!["Maltée".to_string()];
        assert_eq!(score_aroma(&stout, Aroma::Malty), 3.0);
        assert_eq!(score_aroma(&stout, Aroma::Hoppy), 0.0);
    }

    #[test]
    fn test_finish_round_matches_balanced() {
        let b = beer("b", "5,0% alc.", "Blonde", &["balanced"], &["Salade"]);
        assert_eq!(score_finish(&b, Finish::Round), 2.0);
        assert_eq!(score_finish(&b, Finish::Dry), 0.0);
    }

    #[test]
    fn test_reasons_priority_and_cap() {
        let apa = beer("apa", "5,2% alc.", "Pale Ale", &["hoppy", "crisp"], &["Burger"]);
        let reasons = build_reasons(&apa, &answers());
        assert_eq!(reasons, vec!["profil houblonné", "finale sèche", "idéale à table"]);
    }

    #[test]
    fn test_reasons_include_availability_when_room() {
        let apa = beer("apa", "5,2% alc.", "Pale Ale", &["hoppy"], &["Salade"]);
        let reasons = build_reasons(&apa, &answers());
        assert_eq!(reasons, vec!["profil houblonné", "disponible actuellement"]);
    }

    #[test]
    fn test_tie_prefers_available_then_lowest_id() {
        let mut sold_out = beer("aaa", "5,2% alc.", "Pale Ale", &["hoppy"], &["Burger"]);
        sold_out.availability = Availability::SoldOut;
        let zeta = beer("zeta", "5,2% alc.", "Pale Ale", &["hoppy"], &["Burger"]);
        let alpha = beer("alpha", "5,2% alc.", "Pale Ale", &["hoppy"], &["Burger"]);

        let result = recommend_beer(&[sold_out, zeta, alpha], &answers()).unwrap();
        assert_eq!(result.beer.id, "alpha");
        assert_eq!(result.score, 11.0);
    }

    #[test]
    fn test_equal_scores_prefer_higher_availability_bonus() {
        // 3 + 0 + 2 + 2 + 2 - 2 = 7
        let mut sold_out = beer("aaa", "5,2% alc.", "Lager", &["crisp"], &["Burger"]);
        sold_out.availability = Availability::SoldOut;
        // 1 + 3 + 0 + 0 + 2 + 1 = 7
        let available = beer("zzz", "7,0% alc.", "Pale Ale", &["hoppy"], &["Salade"]);

        let result = recommend_beer(&[sold_out, available], &answers()).unwrap();
        assert_eq!(result.beer.id, "zzz");
        assert_eq!(result.score, 7.0);
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(
            recommend_beer(&[], &answers()).unwrap_err(),
            QuizError::NoBeersAvailable
        );
    }
}
