// crates/footprint-core/src/calc.rs

use crate::error::{FootprintError, Result};
use crate::types::{Breakdown, CalculationResult, Category, Measurements, RiskBand, ScaledResult, Timeframe};

// Emission factors (kg CO2 per unit).
pub const TRANSPORT_KG_PER_KM: f64 = 0.21;
pub const ENERGY_KG_PER_KWH: f64 = 0.257;
pub const FOOD_KG_PER_MEAL: f64 = 1.2;
pub const WASTE_KG_PER_KG: f64 = 0.9;
pub const PURCHASE_KG_PER_ITEM: f64 = 2.5;

// Recommended weekly range (kg CO2).
pub const WEEKLY_TARGET_MIN: f64 = 38.5;
pub const WEEKLY_TARGET_MAX: f64 = 57.7;

impl Category {
    /// Constant multiplier converting a raw activity quantity into kg CO2.
    pub fn emission_factor(&self) -> f64 {
        match self {
            Category::Transportation => TRANSPORT_KG_PER_KM,
            Category::Energy => ENERGY_KG_PER_KWH,
            Category::Food => FOOD_KG_PER_MEAL,
            Category::Waste => WASTE_KG_PER_KG,
            Category::Purchasing => PURCHASE_KG_PER_ITEM,
        }
    }
}

/// Computes the weekly footprint from raw measurements. Pure; rejects the
/// whole set if any field is not a finite number.
pub fn compute_footprint(measurements: &Measurements) -> Result<CalculationResult> {
    for category in Category::ALL {
        if !measurements.get(category).is_finite() {
            return Err(FootprintError::Validation(format!(
                "Please fill all fields with valid numbers ({} is not one).",
                category
            )));
        }
    }

    let parts = Breakdown {
        transportation: measurements.transportation_km * TRANSPORT_KG_PER_KM,
        energy: measurements.energy_kwh * ENERGY_KG_PER_KWH,
        food: measurements.food_meals * FOOD_KG_PER_MEAL,
        waste: measurements.waste_kg * WASTE_KG_PER_KG,
        purchasing: measurements.purchases * PURCHASE_KG_PER_ITEM,
    };
    let total = parts.entries().iter().map(|(_, value)| value).sum();

    Ok(CalculationResult { total, parts })
}

/// Re-expresses a weekly result in the given timeframe. Week is the identity.
pub fn scale_for_timeframe(result: &CalculationResult, timeframe: Timeframe) -> ScaledResult {
    let factor = timeframe.factor();
    ScaledResult {
        timeframe,
        factor,
        total: result.total * factor,
        parts: result.parts.scaled(factor),
    }
}

/// Bands the *unscaled weekly* total against the recommended range. The
/// banding stays stable while the displayed numbers vary by timeframe.
pub fn classify_risk(weekly_total: f64) -> RiskBand {
    if weekly_total > WEEKLY_TARGET_MAX {
        RiskBand::High
    } else if weekly_total >= WEEKLY_TARGET_MIN {
        RiskBand::Moderate
    } else {
        RiskBand::Low
    }
}

/// One-line note accompanying the band.
pub fn band_note(band: RiskBand) -> String {
    match band {
        RiskBand::High => format!(
            "Your weekly-equivalent is above the recommended range ({}-{} kg CO2).",
            WEEKLY_TARGET_MIN, WEEKLY_TARGET_MAX
        ),
        RiskBand::Moderate => "Your weekly-equivalent is within the recommended range.".to_string(),
        RiskBand::Low => "Great! Your weekly-equivalent is below the recommended range.".to_string(),
    }
}

/// Tips derived from the weekly breakdown: the largest contributor (ties go
/// to the first category in display order) plus the static weekly target.
pub fn build_tips(result: &CalculationResult) -> Vec<String> {
    let mut top = Category::Transportation;
    let mut top_value = result.parts.get(top);
    for (category, value) in result.parts.entries() {
        if value > top_value {
            top = category;
            top_value = value;
        }
    }

    vec![
        format!("Focus on {} first, it contributes the most.", top),
        format!(
            "Set a goal near {} kg CO2 per week and track your history.",
            WEEKLY_TARGET_MIN
        ),
    ]
}

/// Rounds to two decimals, the precision used everywhere a total is shown or
/// stored.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
