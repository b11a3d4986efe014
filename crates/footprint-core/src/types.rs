// crates/footprint-core/src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Footprint categories, in the fixed order used for display and for
/// breaking ties when ranking contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Transportation,
    Energy,
    Food,
    Waste,
    Purchasing,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Transportation,
        Category::Energy,
        Category::Food,
        Category::Waste,
        Category::Purchasing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transportation => "Transportation",
            Category::Energy => "Energy",
            Category::Food => "Food",
            Category::Waste => "Waste",
            Category::Purchasing => "Purchasing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five raw measurements a footprint is estimated from, weekly basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub transportation_km: f64,
    pub energy_kwh: f64,
    pub food_meals: f64,
    pub waste_kg: f64,
    pub purchases: f64,
}

impl Measurements {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation_km,
            Category::Energy => self.energy_kwh,
            Category::Food => self.food_meals,
            Category::Waste => self.waste_kg,
            Category::Purchasing => self.purchases,
        }
    }
}

/// Per-category kg CO2 subtotals.
///
/// Serializes with display-cased keys ("Transportation", ...) because that is
/// the wire shape the advice endpoint and the history file both use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Breakdown {
    pub transportation: f64,
    pub energy: f64,
    pub food: f64,
    pub waste: f64,
    pub purchasing: f64,
}

impl Breakdown {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Energy => self.energy,
            Category::Food => self.food,
            Category::Waste => self.waste,
            Category::Purchasing => self.purchasing,
        }
    }

    /// Category/value pairs in fixed display order.
    pub fn entries(&self) -> [(Category, f64); 5] {
        [
            (Category::Transportation, self.transportation),
            (Category::Energy, self.energy),
            (Category::Food, self.food),
            (Category::Waste, self.waste),
            (Category::Purchasing, self.purchasing),
        ]
    }

    pub fn scaled(&self, factor: f64) -> Breakdown {
        Breakdown {
            transportation: self.transportation * factor,
            energy: self.energy * factor,
            food: self.food * factor,
            waste: self.waste * factor,
            purchasing: self.purchasing * factor,
        }
    }
}

/// A footprint on the weekly basis. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// Weekly total, kg CO2.
    pub total: f64,
    /// Weekly subtotal per category, kg CO2.
    pub parts: Breakdown,
}

/// Display timeframe. Selected per render, never stored with history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Week,
    Month,
    Year,
}

impl Timeframe {
    pub fn factor(&self) -> f64 {
        match self {
            Timeframe::Week => 1.0,
            Timeframe::Month => 4.3,
            Timeframe::Year => 52.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Week => "week",
            Timeframe::Month => "month",
            Timeframe::Year => "year",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Timeframe::Week),
            "month" => Ok(Timeframe::Month),
            "year" => Ok(Timeframe::Year),
            other => Err(format!(
                "invalid timeframe '{}', expected week, month or year",
                other
            )),
        }
    }
}

/// A calculation re-expressed in a display timeframe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledResult {
    pub timeframe: Timeframe,
    pub factor: f64,
    pub total: f64,
    pub parts: Breakdown,
}

/// Qualitative classification of the weekly-equivalent total against the
/// recommended weekly range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Moderate => "Moderate",
            RiskBand::High => "High",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
