//! Substat roll population fixtures.
//!
//! Values are the four possible rolls of each substat on a five-star artifact.

use serde_json::{json, Value};

/// Crit rate rolls, in configuration order.
pub const CRIT_RATE_ROLLS: [f64; 4] = [2.72, 3.11, 3.5, 3.89];

/// Crit damage rolls, in configuration order.
pub const CRIT_DMG_ROLLS: [f64; 4] = [5.44, 6.22, 6.99, 7.77];

/// Full substat table with both flat and percent modes where the game has them.
///
/// # Returns
/// - `Value` - JSON object shaped like `artifacts/substats.json`
pub fn table() -> Value {
    json!({
        "hp": {
            "flat": [209.13, 239.0, 268.88, 298.75],
            "percent": [4.08, 4.66, 5.25, 5.83]
        },
        "atk": {
            "flat": [13.62, 15.56, 17.51, 19.45],
            "percent": [4.08, 4.66, 5.25, 5.83]
        },
        "def": {
            "flat": [16.2, 18.52, 20.83, 23.15],
            "percent": [5.1, 5.83, 6.56, 7.29]
        },
        "elemental_mastery": {
            "flat": [16.32, 18.65, 20.98, 23.31]
        },
        "energy_recharge": {
            "percent": [4.53, 5.18, 5.83, 6.48]
        },
        "crit_rate": {
            "percent": CRIT_RATE_ROLLS
        },
        "crit_dmg": {
            "percent": CRIT_DMG_ROLLS
        }
    })
}

/// Table whose only population contains a non-positive roll.
pub fn invalid_table() -> Value {
    json!({
        "crit_rate": {
            "percent": [2.72, 0.0, 3.5]
        }
    })
}
