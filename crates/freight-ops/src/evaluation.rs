use freight_models::{FreightConfig, Load, OperatingCosts, RateThresholds};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a load's rate per mile falls against the configured tiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    BelowMinimum,
    Minimum,
    Target,
    Premium,
}

impl RateTier {
    pub fn classify(rate_per_mile: Decimal, thresholds: &RateThresholds) -> Self {
        if rate_per_mile >= thresholds.premium_rate_per_mile {
            Self::Premium
        } else if rate_per_mile >= thresholds.target_rate_per_mile {
            Self::Target
        } else if rate_per_mile >= thresholds.minimum_rate_per_mile {
            Self::Minimum
        } else {
            Self::BelowMinimum
        }
    }
}

/// Estimated trip costs and what is left of gross revenue after them.
/// Money values are rounded to cents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostEstimate {
    pub fuel_gallons: Decimal,
    pub fuel_cost: Decimal,
    pub operating_cost: Decimal,
    pub net_profit: Decimal,
    /// Net profit as a percentage of gross revenue.
    pub profit_margin_pct: Decimal,
}

impl CostEstimate {
    /// Fuel and per-mile costs over all miles, deadhead included.
    /// `None` when an intermediate value leaves the decimal range.
    pub fn for_load(load: &Load, costs: &OperatingCosts) -> Option<Self> {
        let total_miles = load.total_miles();
        let fuel_gallons = total_miles.checked_div(costs.truck_mpg)?;
        let fuel_cost = total_miles
            .checked_mul(costs.fuel_cost_per_gallon)?
            .checked_div(costs.truck_mpg)?
            .round_dp(2);
        let operating_cost = total_miles.checked_mul(costs.cost_per_mile)?.round_dp(2);
        let gross = load.gross_revenue();
        let net_profit = gross
            .checked_sub(operating_cost)?
            .checked_sub(fuel_cost)?;
        let profit_margin_pct = net_profit
            .checked_div(gross)
            .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO)
            .round_dp(2);

        Some(Self {
            fuel_gallons: fuel_gallons.round_dp(3),
            fuel_cost,
            operating_cost,
            net_profit,
            profit_margin_pct,
        })
    }
}

/// Verdict for one load, with the full load (stored fields and derived
/// metrics) attached for downstream logging.
///
/// `profitable` is the rate/deadhead check only; a negative net profit shows
/// up as a warning and does not flip the verdict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadEvaluation {
    pub load_id: String,
    pub profitable: bool,
    pub rate_tier: RateTier,
    pub costs: Option<CostEstimate>,
    /// Human-readable reasons the load falls short of business rules.
    pub warnings: Vec<String>,
    pub load: Load,
}

fn collect_warnings(
    load: &Load,
    config: &FreightConfig,
    costs: Option<&CostEstimate>,
) -> Vec<String> {
    let rates = &config.rates;
    let mut warnings = Vec::new();

    let rpm = load.rate_per_mile();
    if rpm < rates.minimum_rate_per_mile {
        warnings.push(format!(
            "Rate per mile (${rpm:.2}) below minimum (${:.2})",
            rates.minimum_rate_per_mile
        ));
    }

    let deadhead_pct = load.deadhead_percentage();
    if deadhead_pct > rates.max_deadhead_percentage {
        warnings.push(format!(
            "Deadhead ({deadhead_pct:.1}%) exceeds maximum ({}%)",
            rates.max_deadhead_percentage
        ));
    }

    if let Some(estimate) = costs {
        if estimate.net_profit < Decimal::ZERO {
            warnings.push(format!(
                "Load is unprofitable: ${:.2} loss",
                estimate.net_profit.abs()
            ));
        }
    }

    let max_weight = config.equipment.max_weight_lbs;
    if load.weight() > max_weight {
        warnings.push(format!(
            "Load weight ({} lbs) exceeds trailer capacity ({max_weight} lbs)",
            load.weight()
        ));
    }

    let requirements = load.requirements();
    if requirements.hazmat {
        warnings.push("Requires HAZMAT certification".to_string());
    }
    if requirements.team_required {
        warnings.push("Requires team drivers".to_string());
    }

    warnings
}

pub fn evaluate_load(load: &Load, config: &FreightConfig) -> LoadEvaluation {
    let rate_per_mile = load.rate_per_mile();
    let profitable = load.meets(&config.rates);
    let rate_tier = RateTier::classify(rate_per_mile, &config.rates);
    let costs = CostEstimate::for_load(load, &config.costs);
    if costs.is_none() {
        tracing::debug!(load_id = load.load_id(), "Cost estimate out of decimal range");
    }
    let warnings = collect_warnings(load, config, costs.as_ref());
    let net_profit = costs.as_ref().map(|c| c.net_profit);

    tracing::debug!(
        load_id = load.load_id(),
        lane = %format!("{} -> {}", load.origin(), load.destination()),
        rate_per_mile = %rate_per_mile.round_dp(4),
        deadhead_pct = %load.deadhead_percentage().round_dp(2),
        profitable,
        net_profit = ?net_profit,
        warnings = warnings.len(),
        "Evaluated load"
    );

    LoadEvaluation {
        load_id: load.load_id().to_string(),
        profitable,
        rate_tier,
        costs,
        warnings,
        load: load.clone(),
    }
}

/// Evaluate every load, preserving input order.
pub fn evaluate_batch(loads: &[Load], config: &FreightConfig) -> Vec<LoadEvaluation> {
    let evaluations: Vec<LoadEvaluation> = loads
        .iter()
        .map(|load| evaluate_load(load, config))
        .collect();

    let profitable = evaluations.iter().filter(|e| e.profitable).count();
    tracing::info!(
        loads = evaluations.len(),
        profitable,
        rejected = evaluations.len() - profitable,
        "Load batch evaluated"
    );

    evaluations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use freight_models::{LoadRecord, Location, SpecialRequirements};
    use rust_decimal_macros::dec;

    fn make_load(id: &str, loaded: Decimal, deadhead: Decimal, rate: Decimal, weight: u32) -> Load {
        let pickup = Utc.with_ymd_and_hms(2025, 4, 2, 7, 30, 0).unwrap();
        Load::new(LoadRecord {
            load_id: id.to_string(),
            status: "available".to_string(),
            load_type: "flatbed".to_string(),
            origin: Location::new("Tulsa", "OK"),
            destination: Location::new("Dallas", "TX"),
            pickup_date: pickup,
            delivery_date: pickup + Duration::hours(5),
            loaded_miles: loaded,
            deadhead_miles: deadhead,
            rate,
            fuel_surcharge: Decimal::ZERO,
            accessorial_charges: Decimal::ZERO,
            weight,
            commodity: "Steel Coils".to_string(),
            broker_name: None,
            broker_mc: None,
            reference_number: None,
            posted_date: None,
            pickup_window_start: None,
            pickup_window_end: None,
            length_ft: None,
            trailer_type: None,
            requirements: SpecialRequirements::default(),
            contact: None,
            notes: None,
        })
        .unwrap()
    }

    #[test]
    fn classify_tiers() {
        let rates = RateThresholds::default();
        assert_eq!(RateTier::classify(dec!(1.99), &rates), RateTier::BelowMinimum);
        assert_eq!(RateTier::classify(dec!(2.00), &rates), RateTier::Minimum);
        assert_eq!(RateTier::classify(dec!(2.75), &rates), RateTier::Target);
        assert_eq!(RateTier::classify(dec!(3.00), &rates), RateTier::Premium);
    }

    #[test]
    fn clean_load_has_no_warnings() {
        let load = make_load("L-1", dec!(250), dec!(20), dec!(700), 5000);
        let evaluation = evaluate_load(&load, &FreightConfig::default());
        assert!(evaluation.profitable);
        assert_eq!(evaluation.rate_tier, RateTier::Target);
        assert!(evaluation.warnings.is_empty(), "{:?}", evaluation.warnings);
    }

    #[test]
    fn low_rate_warns_and_rejects() {
        let load = make_load("L-2", dec!(500), dec!(0), dec!(800), 5000);
        let evaluation = evaluate_load(&load, &FreightConfig::default());
        assert!(!evaluation.profitable);
        assert_eq!(evaluation.rate_tier, RateTier::BelowMinimum);
        assert_eq!(evaluation.warnings.len(), 1);
        assert!(evaluation.warnings[0].contains("below minimum"));
    }

    #[test]
    fn high_deadhead_warns_and_rejects() {
        let load = make_load("L-3", dec!(100), dec!(300), dec!(500), 5000);
        let evaluation = evaluate_load(&load, &FreightConfig::default());
        assert!(!evaluation.profitable);
        assert_eq!(evaluation.rate_tier, RateTier::Premium);
        assert_eq!(evaluation.warnings.len(), 1);
        assert!(evaluation.warnings[0].contains("exceeds maximum"));
    }

    #[test]
    fn overweight_load_warns_but_verdict_follows_rates() {
        let load = make_load("L-4", dec!(300), dec!(15), dec!(900), 18_000);
        let evaluation = evaluate_load(&load, &FreightConfig::default());
        assert!(evaluation.profitable);
        assert_eq!(evaluation.warnings.len(), 1);
        assert!(evaluation.warnings[0].contains("trailer capacity"));
    }

    fn with_requirements(load: &Load, requirements: SpecialRequirements) -> Load {
        let mut record = load.to_record();
        record.requirements = requirements;
        Load::new(record).unwrap()
    }

    #[test]
    fn cost_estimate_covers_all_miles() {
        let load = make_load("L-6", dec!(250), dec!(20), dec!(700), 5000);
        let estimate = CostEstimate::for_load(&load, &OperatingCosts::default()).unwrap();
        assert_eq!(estimate.fuel_gallons, dec!(30));
        assert_eq!(estimate.fuel_cost, dec!(105.00));
        assert_eq!(estimate.operating_cost, dec!(105.30));
        assert_eq!(estimate.net_profit, dec!(489.70));
        assert_eq!(estimate.profit_margin_pct, dec!(69.96));
    }

    #[test]
    fn net_loss_warns_without_changing_verdict_rules() {
        let load = make_load("L-7", dec!(500), dec!(0), dec!(100), 5000);
        let evaluation = evaluate_load(&load, &FreightConfig::default());
        let costs = evaluation.costs.as_ref().unwrap();
        assert_eq!(costs.net_profit, dec!(-289.44));
        assert!(!evaluation.profitable);
        assert_eq!(evaluation.warnings.len(), 2);
        assert!(evaluation.warnings[0].contains("below minimum"));
        assert_eq!(evaluation.warnings[1], "Load is unprofitable: $289.44 loss");
    }

    #[test]
    fn hazmat_and_team_requirements_warn() {
        let base = make_load("L-8", dec!(250), dec!(20), dec!(700), 5000);
        let load = with_requirements(
            &base,
            SpecialRequirements {
                hazmat: true,
                team_required: true,
                ..SpecialRequirements::default()
            },
        );
        let evaluation = evaluate_load(&load, &FreightConfig::default());
        assert!(evaluation.profitable);
        assert_eq!(
            evaluation.warnings,
            vec![
                "Requires HAZMAT certification".to_string(),
                "Requires team drivers".to_string(),
            ]
        );
    }

    #[test]
    fn tarp_and_expedited_do_not_warn() {
        let base = make_load("L-9", dec!(250), dec!(20), dec!(700), 5000);
        let load = with_requirements(
            &base,
            SpecialRequirements {
                expedited: true,
                requires_tarp: true,
                ..SpecialRequirements::default()
            },
        );
        assert!(evaluate_load(&load, &FreightConfig::default())
            .warnings
            .is_empty());
    }

    #[test]
    fn cost_overflow_leaves_estimate_empty() {
        let load = make_load("L-10", Decimal::MAX, dec!(0), dec!(500), 5000);
        let evaluation = evaluate_load(&load, &FreightConfig::default());
        assert!(evaluation.costs.is_none());
        assert!(!evaluation.profitable);
        assert!(evaluation
            .warnings
            .iter()
            .all(|w| !w.contains("unprofitable")));
    }

    #[test]
    fn batch_preserves_order() {
        let loads = vec![
            make_load("A", dec!(500), dec!(0), dec!(800), 5000),
            make_load("B", dec!(250), dec!(20), dec!(700), 5000),
            make_load("C", dec!(100), dec!(300), dec!(500), 5000),
        ];
        let evaluations = evaluate_batch(&loads, &FreightConfig::default());
        let ids: Vec<&str> = evaluations.iter().map(|e| e.load_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        let verdicts: Vec<bool> = evaluations.iter().map(|e| e.profitable).collect();
        assert_eq!(verdicts, vec![false, true, false]);
    }

    #[test]
    fn roundtrip_evaluation() {
        let load = make_load("L-5", dec!(420), dec!(35), dec!(1100), 9000);
        let evaluation = evaluate_load(&load, &FreightConfig::default());
        let json = serde_json::to_string(&evaluation).unwrap();
        let deserialized: LoadEvaluation = serde_json::from_str(&json).unwrap();
        assert_eq!(evaluation, deserialized);
    }

    #[test]
    fn rate_tier_serialization() {
        assert_eq!(
            serde_json::to_string(&RateTier::BelowMinimum).unwrap(),
            "\"below_minimum\""
        );
    }
}
