//! Weekly emissions estimator logic

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::models::{
    DEFAULT_EMISSION_FACTOR, EmissionsResult, FuelType, RawUsageInputs, RiskLevel, UsagePattern,
};

/// Upper bounds (inclusive) of the Safe, Medium and Risky buckets, in kg CO2/week
pub const SAFE_MAX_KG: f64 = 20.0;
pub const MEDIUM_MAX_KG: f64 = 30.0;
pub const RISKY_MAX_KG: f64 = 50.0;

/// Emission factor for the selected fuel, or the default when none is selected
pub fn emission_factor(fuel: Option<FuelType>) -> f64 {
    fuel.map_or(DEFAULT_EMISSION_FACTOR, FuelType::emission_factor)
}

/// Calculate weekly CO2 from generator and motorcycle usage
///
/// Negative inputs are used as given. This never fails.
pub fn compute_weekly_emissions(
    generator: UsagePattern,
    motorcycle: UsagePattern,
    fuel: Option<FuelType>,
) -> EmissionsResult {
    let total_hours = generator.weekly_hours() + motorcycle.weekly_hours();
    EmissionsResult::new(total_hours * emission_factor(fuel))
}

/// Bucket a weekly figure. Boundaries belong to the lower bucket.
///
/// NaN fails every comparison and lands in `Danger`.
pub fn classify_risk(weekly_kg_co2: f64) -> RiskLevel {
    if weekly_kg_co2 <= SAFE_MAX_KG {
        RiskLevel::Safe
    } else if weekly_kg_co2 <= MEDIUM_MAX_KG {
        RiskLevel::Medium
    } else if weekly_kg_co2 <= RISKY_MAX_KG {
        RiskLevel::Risky
    } else {
        RiskLevel::Danger
    }
}

/// Breakdown of one calculation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub generator: UsagePattern,
    pub motorcycle: UsagePattern,
    pub generator_weekly_hours: f64,
    pub motorcycle_weekly_hours: f64,
    pub total_hours: f64,
    pub fuel: Option<FuelType>,
    /// Fuel key that was supplied but not recognised
    pub unrecognized_fuel: Option<String>,
    pub emission_factor: f64,
    pub result: EmissionsResult,
    pub risk: RiskLevel,
    #[serde(skip)]
    pub show_equivalents: bool,
}

/// Run a full calculation from raw form input
pub fn estimate(inputs: &RawUsageInputs) -> Estimate {
    let generator = inputs.generator();
    let motorcycle = inputs.motorcycle();
    let fuel = inputs.fuel_type();
    let unrecognized_fuel = match (&inputs.fuel, fuel) {
        (Some(key), None) => Some(key.clone()),
        _ => None,
    };

    let result = compute_weekly_emissions(generator, motorcycle, fuel);

    Estimate {
        generator,
        motorcycle,
        generator_weekly_hours: generator.weekly_hours(),
        motorcycle_weekly_hours: motorcycle.weekly_hours(),
        total_hours: generator.weekly_hours() + motorcycle.weekly_hours(),
        fuel,
        unrecognized_fuel,
        emission_factor: emission_factor(fuel),
        result,
        risk: result.risk(),
        show_equivalents: false,
    }
}

impl Estimate {
    pub fn with_equivalents(mut self, show: bool) -> Self {
        self.show_equivalents = show;
        self
    }

    /// Pretty JSON rendering; equivalents are included when enabled
    pub fn to_json(&self) -> Result<String> {
        let mut value = serde_json::to_value(self)?;
        if self.show_equivalents {
            value["yearly_kg_co2"] = serde_json::json!(self.result.yearly_kg_co2());
            value["car_km_equivalent"] = serde_json::json!(self.result.car_km_equivalent());
        }
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Weekly Emissions ===")?;
        writeln!(
            f,
            "Generator:   {} x {} h = {:.2} h",
            self.generator.times_per_week,
            self.generator.hours_per_session,
            self.generator_weekly_hours
        )?;
        writeln!(
            f,
            "Motorcycle:  {} x {} h = {:.2} h",
            self.motorcycle.times_per_week,
            self.motorcycle.hours_per_session,
            self.motorcycle_weekly_hours
        )?;
        writeln!(f, "Total hours: {:.2} h", self.total_hours)?;

        match (self.fuel, &self.unrecognized_fuel) {
            (Some(fuel), _) => {
                writeln!(f, "Fuel:        {} ({} kg CO₂/h)", fuel, self.emission_factor)?
            }
            (None, Some(key)) => writeln!(
                f,
                "Fuel:        '{}' not recognised, using default ({} kg CO₂/h)",
                key, self.emission_factor
            )?,
            (None, None) => writeln!(
                f,
                "Fuel:        not selected, using default ({} kg CO₂/h)",
                self.emission_factor
            )?,
        }
        writeln!(f)?;

        writeln!(f, "Your weekly emissions: {} kg CO₂", self.result.display_weekly())?;
        writeln!(f, "Status: {}", self.risk)?;

        if self.show_equivalents {
            writeln!(f)?;
            writeln!(f, "That's equivalent to approximately:")?;
            writeln!(f, "  {} kg CO₂ per year", self.result.display_yearly())?;
            writeln!(f, "  {} km of car driving", self.result.display_car_km())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(gu: &str, gh: &str, mu: &str, mh: &str, fuel: Option<&str>) -> RawUsageInputs {
        RawUsageInputs {
            generator_uses: gu.to_string(),
            generator_hours: gh.to_string(),
            motorcycle_uses: mu.to_string(),
            motorcycle_hours: mh.to_string(),
            fuel: fuel.map(str::to_string),
        }
    }

    #[test]
    fn factor_lookup_with_default() {
        assert_eq!(emission_factor(Some(FuelType::Petrol)), 2.3);
        assert_eq!(emission_factor(Some(FuelType::Diesel)), 2.7);
        assert_eq!(emission_factor(Some(FuelType::Kerosene)), 2.5);
        assert_eq!(emission_factor(None), 2.3);
    }

    #[test]
    fn weekly_emissions_formula() {
        let generator = UsagePattern::new(3.0, 2.0);
        let motorcycle = UsagePattern::new(4.0, 1.0);
        let result = compute_weekly_emissions(generator, motorcycle, Some(FuelType::Kerosene));
        assert_eq!(result.weekly_kg_co2, (6.0 + 4.0) * 2.5);
    }

    #[test]
    fn negative_inputs_are_not_rejected() {
        let generator = UsagePattern::new(-2.0, 3.0);
        let result = compute_weekly_emissions(generator, UsagePattern::default(), None);
        assert_eq!(result.weekly_kg_co2, -6.0 * 2.3);
        assert_eq!(result.risk(), RiskLevel::Safe);
    }

    #[test]
    fn risk_boundaries_belong_to_lower_bucket() {
        assert_eq!(classify_risk(0.0), RiskLevel::Safe);
        assert_eq!(classify_risk(20.0), RiskLevel::Safe);
        assert_eq!(classify_risk(20.01), RiskLevel::Medium);
        assert_eq!(classify_risk(30.0), RiskLevel::Medium);
        assert_eq!(classify_risk(30.01), RiskLevel::Risky);
        assert_eq!(classify_risk(50.0), RiskLevel::Risky);
        assert_eq!(classify_risk(50.01), RiskLevel::Danger);
        assert_eq!(classify_risk(f64::INFINITY), RiskLevel::Danger);
    }

    #[test]
    fn nan_classifies_as_danger() {
        assert_eq!(classify_risk(f64::NAN), RiskLevel::Danger);
    }

    #[test]
    fn estimate_reports_breakdown() {
        let estimate = estimate(&raw("5", "2.5", "10", "0.5", Some("diesel")));
        assert_eq!(estimate.generator_weekly_hours, 12.5);
        assert_eq!(estimate.motorcycle_weekly_hours, 5.0);
        assert_eq!(estimate.total_hours, 17.5);
        assert_eq!(estimate.fuel, Some(FuelType::Diesel));
        assert_eq!(estimate.unrecognized_fuel, None);
        assert_eq!(estimate.emission_factor, 2.7);
        assert_eq!(estimate.risk, RiskLevel::Risky);
    }

    #[test]
    fn estimate_keeps_unrecognised_key() {
        let estimate = estimate(&raw("1", "1", "", "", Some("coal")));
        assert_eq!(estimate.fuel, None);
        assert_eq!(estimate.unrecognized_fuel.as_deref(), Some("coal"));
        assert_eq!(estimate.emission_factor, DEFAULT_EMISSION_FACTOR);
        assert_eq!(estimate.result.weekly_kg_co2, 2.3);
    }

    #[test]
    fn infinity_times_zero_is_danger() {
        let estimate = estimate(&raw("Infinity", "", "", "", None));
        // "" coerces to 0, and Infinity * 0 is NaN
        assert!(estimate.result.weekly_kg_co2.is_nan());
        assert_eq!(estimate.risk, RiskLevel::Danger);
    }

    #[test]
    fn display_summary() {
        let text = estimate(&raw("5", "2.5", "10", "0.5", Some("diesel")))
            .with_equivalents(true)
            .to_string();
        assert!(text.contains("Total hours: 17.50 h"));
        assert!(text.contains("Fuel:        Diesel (2.7 kg CO₂/h)"));
        assert!(text.contains("Your weekly emissions: 47.25 kg CO₂"));
        assert!(text.contains("Status: Risky 🔶"));
        assert!(text.contains("2457 kg CO₂ per year"));
        assert!(text.contains("94.5 km of car driving"));
    }

    #[test]
    fn json_output_carries_risk_and_equivalents() {
        let json = estimate(&raw("5", "2.5", "10", "0.5", Some("diesel")))
            .with_equivalents(true)
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fuel"], "diesel");
        assert_eq!(value["risk"], "Risky");
        assert_eq!(value["total_hours"], 17.5);
        assert!(value.get("yearly_kg_co2").is_some());
        assert!(value.get("show_equivalents").is_none());

        let plain = estimate(&RawUsageInputs::default()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&plain).unwrap();
        assert_eq!(value["fuel"], serde_json::Value::Null);
        assert!(value.get("yearly_kg_co2").is_none());
    }

    #[test]
    fn display_hides_equivalents_by_default() {
        let text = estimate(&RawUsageInputs::default()).to_string();
        assert!(text.contains("not selected"));
        assert!(!text.contains("per year"));
    }
}
