//! Catalog fixtures shared by the integration tests

#![allow(dead_code)]

use brasserie_catalog::models::catalog::{
    BreweryInfo, PublicBeer, PublicCatalog, PublicColor, PublicFermentation, PublicStock,
    WebAvailability,
};

/// Public catalog beer conforming to the JSON contract, in stock, no batch.
pub fn public_beer(id: &str) -> PublicBeer {
    PublicBeer {
        id: id.to_string(),
        name: "American Pale Ale".to_string(),
        style: "Pale Ale".to_string(),
        abv: 5.2,
        ibu: Some(40.0),
        color: PublicColor {
            ebc: 12.0,
            srm: 6.1,
            label: "Dorée".to_string(),
        },
        description: "Une bière houblonnée et rafraîchissante.".to_string(),
        tasting_notes: Some("Agrumes, pin, finale sèche.".to_string()),
        ingredients: vec!["Malt Pale".to_string(), "Cascade".to_string(), "US-05".to_string()],
        tags: vec!["houblonnée".to_string(), "fruitée".to_string()],
        food_pairings: vec!["Burger".to_string(), "Tacos".to_string()],
        season: Some("printemps-été".to_string()),
        is_limited_edition: false,
        image: Some("apa.jpg".to_string()),
        stock: PublicStock {
            available_units: 48.0,
            available_volume_l: 36.0,
            level_app: "full".to_string(),
            label_app: "Bien garni".to_string(),
            availability_web: WebAvailability::InStock,
            label_web: "En stock".to_string(),
        },
        fermentation: None,
        updated_at: "2026-02-18T10:00:00Z".to_string(),
    }
}

pub fn fermentation(status: &str, status_label: &str) -> PublicFermentation {
    PublicFermentation {
        status: status.to_string(),
        status_label: status_label.to_string(),
        batch_number: None,
        start_date: None,
        estimated_ready_date: None,
        batch_count_in_progress: 1.0,
        coming_soon: false,
    }
}

pub fn out_of_stock(mut beer: PublicBeer) -> PublicBeer {
    beer.stock.availability_web = WebAvailability::OutOfStock;
    beer
}

pub fn catalog(beers: Vec<PublicBeer>) -> PublicCatalog {
    PublicCatalog {
        generated_at: "2026-02-18T10:00:00Z".to_string(),
        version: 1.0,
        brewery: BreweryInfo {
            id: "edb".to_string(),
            name: "L'École du Bélier".to_string(),
        },
        beers,
    }
}
