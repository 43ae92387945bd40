//! Data models for usage patterns, fuels and emission results

use std::fmt;

use serde::Serialize;

use crate::coerce::parse_number;
use crate::estimator::classify_risk;

/// Factor applied when no fuel is selected or the key is not recognised.
/// Equal to petrol's factor.
pub const DEFAULT_EMISSION_FACTOR: f64 = 2.3;

pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Car kilometres matching the CO2 of one hour of petrol use (4.6 km per 2.3 kg).
pub const CAR_KM_PER_KG_CO2: f64 = 4.6 / 2.3;

/// How often a device runs in a week and for how long each time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct UsagePattern {
    pub times_per_week: f64,
    pub hours_per_session: f64,
}

impl UsagePattern {
    pub fn new(times_per_week: f64, hours_per_session: f64) -> Self {
        Self {
            times_per_week,
            hours_per_session,
        }
    }

    /// Build a pattern from raw text fields; unparseable text counts as 0.
    pub fn from_raw(times_per_week: &str, hours_per_session: &str) -> Self {
        Self::new(parse_number(times_per_week), parse_number(hours_per_session))
    }

    pub fn weekly_hours(&self) -> f64 {
        self.times_per_week * self.hours_per_session
    }
}

/// The raw form values exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawUsageInputs {
    pub generator_uses: String,
    pub generator_hours: String,
    pub motorcycle_uses: String,
    pub motorcycle_hours: String,
    pub fuel: Option<String>,
}

impl RawUsageInputs {
    pub fn generator(&self) -> UsagePattern {
        UsagePattern::from_raw(&self.generator_uses, &self.generator_hours)
    }

    pub fn motorcycle(&self) -> UsagePattern {
        UsagePattern::from_raw(&self.motorcycle_uses, &self.motorcycle_hours)
    }

    /// The selected fuel, if the key is one of the known fuels
    pub fn fuel_type(&self) -> Option<FuelType> {
        self.fuel.as_deref().and_then(FuelType::from_key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Kerosene,
}

impl FuelType {
    pub const ALL: [FuelType; 3] = [FuelType::Petrol, FuelType::Diesel, FuelType::Kerosene];

    /// Look up a fuel by its exact key. Matching is case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "petrol" => Some(FuelType::Petrol),
            "diesel" => Some(FuelType::Diesel),
            "kerosene" => Some(FuelType::Kerosene),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Kerosene => "kerosene",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Kerosene => "Kerosene",
        }
    }

    /// kg CO2 per hour of operation
    pub fn emission_factor(self) -> f64 {
        match self {
            FuelType::Petrol => 2.3,
            FuelType::Diesel => 2.7,
            FuelType::Kerosene => 2.5,
        }
    }

    pub fn typical_use(self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol generator/motorcycle",
            FuelType::Diesel => "Diesel generator",
            FuelType::Kerosene => "Kerosene stoves/lights",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse bucket for a weekly CO2 figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RiskLevel {
    Safe,
    Medium,
    Risky,
    Danger,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Safe => "Safe",
            RiskLevel::Medium => "Medium",
            RiskLevel::Risky => "Risky",
            RiskLevel::Danger => "Danger",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            RiskLevel::Safe => "✅",
            RiskLevel::Medium => "⚠️",
            RiskLevel::Risky => "🔶",
            RiskLevel::Danger => "🔥",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Safe => "green",
            RiskLevel::Medium => "yellow",
            RiskLevel::Risky => "orange",
            RiskLevel::Danger => "red",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.symbol())
    }
}

/// Weekly emissions at full precision. Rounding is left to the display helpers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionsResult {
    pub weekly_kg_co2: f64,
}

impl EmissionsResult {
    pub fn new(weekly_kg_co2: f64) -> Self {
        Self { weekly_kg_co2 }
    }

    pub fn risk(&self) -> RiskLevel {
        classify_risk(self.weekly_kg_co2)
    }

    pub fn yearly_kg_co2(&self) -> f64 {
        self.weekly_kg_co2 * WEEKS_PER_YEAR
    }

    pub fn car_km_equivalent(&self) -> f64 {
        self.weekly_kg_co2 * CAR_KM_PER_KG_CO2
    }

    pub fn display_weekly(&self) -> String {
        format!("{:.2}", self.weekly_kg_co2)
    }

    pub fn display_yearly(&self) -> String {
        format!("{:.0}", self.yearly_kg_co2())
    }

    pub fn display_car_km(&self) -> String {
        format!("{:.1}", self.car_km_equivalent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_keys_are_exact_and_case_sensitive() {
        for fuel in FuelType::ALL {
            assert_eq!(FuelType::from_key(fuel.key()), Some(fuel));
        }
        assert_eq!(FuelType::from_key("Diesel"), None);
        assert_eq!(FuelType::from_key(" petrol"), None);
        assert_eq!(FuelType::from_key(""), None);
    }

    #[test]
    fn default_factor_matches_petrol() {
        assert_eq!(DEFAULT_EMISSION_FACTOR, FuelType::Petrol.emission_factor());
    }

    #[test]
    fn usage_pattern_from_raw_coerces_garbage_to_zero() {
        let pattern = UsagePattern::from_raw("abc", "2.5");
        assert_eq!(pattern.times_per_week, 0.0);
        assert_eq!(pattern.hours_per_session, 2.5);
        assert_eq!(pattern.weekly_hours(), 0.0);
    }

    #[test]
    fn raw_inputs_resolve_fuel() {
        let mut inputs = RawUsageInputs::default();
        assert_eq!(inputs.fuel_type(), None);

        inputs.fuel = Some("kerosene".to_string());
        assert_eq!(inputs.fuel_type(), Some(FuelType::Kerosene));

        inputs.fuel = Some("coal".to_string());
        assert_eq!(inputs.fuel_type(), None);
    }

    #[test]
    fn risk_level_display_includes_symbol() {
        assert_eq!(RiskLevel::Safe.to_string(), "Safe ✅");
        assert_eq!(RiskLevel::Danger.to_string(), "Danger 🔥");
        assert_eq!(RiskLevel::Risky.color(), "orange");
    }

    #[test]
    fn equivalents_round_only_for_display() {
        let result = EmissionsResult::new(47.25);
        assert_eq!(result.display_weekly(), "47.25");
        assert_eq!(result.display_yearly(), "2457");
        assert_eq!(result.display_car_km(), "94.5");

        let precise = EmissionsResult::new(10.0 / 3.0);
        assert_eq!(precise.weekly_kg_co2, 10.0 / 3.0);
        assert_eq!(precise.display_weekly(), "3.33");
    }
}
