//! L'École du Bélier brewery data core
//!
//! Maps the public beer catalog onto the site's records, loads site data
//! with a bundled fallback, recommends beers from the quiz answers and
//! exports agenda events as iCalendar files.

pub mod config;
pub mod models;
pub mod services;
