//! Public catalog → site records.
//!
//! Keeps the site's `Beer` and `Release` shapes stable whatever the back
//! office publishes. Every optional catalog field has a default here, so
//! mapping never fails once the document passed validation.

use crate::models::beer::{Availability, Beer};
use crate::models::catalog::{PublicBeer, PublicCatalog, WebAvailability};
use crate::models::release::{Release, ReleaseStatus};

/// Image used when the catalog has none for a beer.
pub const DEFAULT_BEER_IMAGE_PATH: &str = "/beers/placeholder-beer.svg";

const DEFAULT_TAG: &str = "Artisanale";
const DEFAULT_PAIRING: &str = "Apéritif";
const DEFAULT_FLAVOR: &str = "balanced";
const DEFAULT_BATCH: &str = "Brassin en cours";
const UNKNOWN_VOLUME: &str = "–";
const COMING_SOON_SUFFIX: &str = " — Arrive bientôt !";
const MIN_NOTES_CHARS: usize = 10;

/// French catalog tags → flavor identifiers understood by the quiz.
const TAG_TO_FLAVOR: &[(&str, &str)] = &[
    ("houblonnée", "hoppy"),
    ("fruitée", "fruit-forward"),
    ("maltée", "malty"),
    ("épicée", "spicy"),
    ("torréfiée", "roasty"),
    ("légère", "light-body"),
    ("sèche", "dry-finish"),
    ("ambrée", "caramel"),
    ("florale", "floral"),
    ("nectarine", "fruit-forward"),
    ("cacao", "roasty"),
    ("levure", "rustic"),
    ("lager", "crisp"),
    ("céréale", "grainy"),
];

fn flavor_for_tag(tag: &str) -> Option<&'static str> {
    let normalized = tag.to_lowercase();
    TAG_TO_FLAVOR
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, flavor)| *flavor)
}

/// Flavor profile derived from catalog tags: unknown tags dropped,
/// duplicates removed in first-seen order, never empty.
fn derive_flavor_profile(tags: &[String]) -> Vec<String> {
    let mut flavors: Vec<String> = Vec::new();
    for flavor in tags.iter().filter_map(|tag| flavor_for_tag(tag)) {
        if !flavors.iter().any(|f| f == flavor) {
            flavors.push(flavor.to_string());
        }
    }

    if flavors.is_empty() {
        vec![DEFAULT_FLAVOR.to_string()]
    } else {
        flavors
    }
}

fn map_availability(beer: &PublicBeer) -> Availability {
    if beer.stock.availability_web == WebAvailability::InStock {
        return Availability::Available;
    }

    match &beer.fermentation {
        Some(fermentation) if fermentation.coming_soon => Availability::ComingSoon,
        _ => Availability::SoldOut,
    }
}

/// One decimal, ties rounded away from zero on the exact binary value
/// (6.25 → "6.3", 0.35 → "0.3" since 0.35 is stored as 0.3499...).
fn round_one_decimal(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Wide enough that no f64 expansion gets rounded by the formatter.
    let exact = format!("{:.1100}", value.abs());
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), "0"));
    let mut frac_digits = frac.bytes();
    let tenths = frac_digits.next().unwrap_or(b'0');
    let round_up = frac_digits.next().is_some_and(|d| d >= b'5');

    let mut digits: Vec<u8> = int_part.bytes().chain(std::iter::once(tenths)).collect();
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (whole, tenth) = digits.split_at(digits.len() - 1);
    format!(
        "{}{}.{}",
        if value < 0.0 { "-" } else { "" },
        String::from_utf8_lossy(whole),
        String::from_utf8_lossy(tenth)
    )
}

/// 5.2 → "5,2% alc."
fn format_abv(abv: f64) -> String {
    format!("{}% alc.", round_one_decimal(abv).replace('.', ","))
}

fn non_empty_or(values: &[String], fallback: &str) -> Vec<String> {
    if values.is_empty() {
        vec![fallback.to_string()]
    } else {
        values.to_vec()
    }
}

/// Convert one catalog beer into the site's `Beer`.
///
/// `has_special_effect` and `has_ghosts` are site-only easter eggs and are
/// always false for catalog beers.
pub fn map_beer(beer: &PublicBeer) -> Beer {
    Beer {
        id: beer.id.clone(),
        name: beer.name.clone(),
        beer_type: beer.style.clone(),
        description: beer.description.clone(),
        tags: non_empty_or(&beer.tags, DEFAULT_TAG),
        flavor_profile: derive_flavor_profile(&beer.tags),
        pairings: non_empty_or(&beer.food_pairings, DEFAULT_PAIRING),
        abv: format_abv(beer.abv),
        availability: map_availability(beer),
        season: beer.season.clone(),
        image: match beer.image.as_deref().filter(|image| !image.is_empty()) {
            Some(image) => format!("/beers/{}", image),
            None => DEFAULT_BEER_IMAGE_PATH.to_string(),
        },
        has_special_effect: false,
        has_ghosts: false,
        background_image: None,
    }
}

/// Map every catalog beer, keeping catalog order.
pub fn map_beers(catalog: &PublicCatalog) -> Vec<Beer> {
    catalog.beers.iter().map(map_beer).collect()
}

fn map_release_status(status: &str) -> ReleaseStatus {
    match status {
        "fermenting" => ReleaseStatus::Fermenting,
        "conditioning" => ReleaseStatus::ComingSoon,
        _ => ReleaseStatus::Brewing,
    }
}

/// Right-pad with '.' so the notes satisfy the release minimum length.
fn pad_notes(mut notes: String) -> String {
    let len = notes.chars().count();
    if len < MIN_NOTES_CHARS {
        notes.extend(std::iter::repeat('.').take(MIN_NOTES_CHARS - len));
    }
    notes
}

/// One `Release` per catalog beer that has a batch in progress, in catalog
/// order. Volume is not published by the catalog and stays a placeholder.
pub fn map_releases(catalog: &PublicCatalog) -> Vec<Release> {
    catalog
        .beers
        .iter()
        .filter_map(|beer| beer.fermentation.as_ref().map(|f| (beer, f)))
        .map(|(beer, fermentation)| {
            let mut notes = fermentation.status_label.clone();
            if fermentation.coming_soon {
                notes.push_str(COMING_SOON_SUFFIX);
            }
            if fermentation.batch_count_in_progress > 1.0 {
                notes.push_str(&format!(
                    " ({} brassins en cours)",
                    fermentation.batch_count_in_progress
                ));
            }

            Release {
                id: format!("catalog-{}", beer.id),
                beer_id: beer.id.clone(),
                batch: fermentation
                    .batch_number
                    .clone()
                    .unwrap_or_else(|| DEFAULT_BATCH.to_string()),
                status: map_release_status(&fermentation.status),
                available_from: fermentation.estimated_ready_date.clone(),
                volume: UNKNOWN_VOLUME.to_string(),
                notes: pad_notes(notes),
            }
        })
        .collect()
}
