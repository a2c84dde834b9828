//! Equivalent-weight presets for common volumetric reagents.
//!
//! Backs `--reagent` lookups and the `titra reagents` listing so the
//! equivalent-weight field does not have to be typed for everyday titrants
//! and primary standards. User-defined entries from the config file are
//! appended to the builtin table; lookup takes the first match in listing
//! order.

use serde::{Deserialize, Serialize};

/// A named chemical with the equivalent weight used for normality work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reagent {
    pub name: String,
    pub formula: String,
    pub equivalent_weight: f64,
}

impl Reagent {
    fn new(name: &str, formula: &str, equivalent_weight: f64) -> Self {
        Reagent {
            name: name.to_string(),
            formula: formula.to_string(),
            equivalent_weight,
        }
    }
}

/// The builtin preset table, in listing order.
///
/// Equivalent weights follow the usual acid-base or redox capacity of each
/// reagent (KMnO4 and K2Cr2O7 as oxidants in acidic medium).
pub fn builtin() -> Vec<Reagent> {
    vec![
        Reagent::new("Sodium hydroxide", "NaOH", 40.00),
        Reagent::new("Potassium hydroxide", "KOH", 56.11),
        Reagent::new("Hydrochloric acid", "HCl", 36.46),
        Reagent::new("Sulfuric acid", "H2SO4", 49.04),
        Reagent::new("Nitric acid", "HNO3", 63.01),
        Reagent::new("Sodium carbonate", "Na2CO3", 53.00),
        Reagent::new("Oxalic acid dihydrate", "H2C2O4.2H2O", 63.04),
        Reagent::new("Potassium permanganate", "KMnO4", 31.61),
        Reagent::new("Potassium dichromate", "K2Cr2O7", 49.03),
        Reagent::new("Silver nitrate", "AgNO3", 169.87),
        Reagent::new("Sodium thiosulfate pentahydrate", "Na2S2O3.5H2O", 248.18),
    ]
}

/// Case-insensitive lookup by name or formula; first match wins.
pub fn find<'a>(reagents: &'a [Reagent], query: &str) -> Option<&'a Reagent> {
    let query = query.trim().to_lowercase();
    reagents
        .iter()
        .find(|r| r.name.to_lowercase() == query || r.formula.to_lowercase() == query)
}
