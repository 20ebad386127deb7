//! 대표 시나리오 회귀 테스트.
use rainwater_simulator::{
    compute_simulation,
    supply_demand::LimitingFactor,
    tank::ReserveTier,
    usage::{PoolTopUp, RoofType, UsageContribution},
    SimulationInputs,
};

fn two_person_household() -> SimulationInputs {
    SimulationInputs {
        region: "unknown".into(),
        rainfall_override_mm: None,
        roof_surface_m2: 100.0,
        roof_type: RoofType::Tile,
        collection_efficiency: 0.85,
        usages: vec![UsageContribution::Toilets { persons: 2 }],
        water_price_per_m3: 5.0,
        horizon_years: 10,
    }
}

#[test]
fn two_person_household_uncalibrated() {
    let res = compute_simulation(&two_person_household());
    assert!(!res.climate.is_calibrated);
    assert!((res.climate.annual_rainfall_mm - 700.0).abs() < 1e-9);
    assert!((res.water.supply_liters - 53_550.0).abs() < 1e-6);
    assert!((res.water.demand_liters - 22_265.0).abs() < 1e-6);
    assert!((res.water.usable_liters - 22_265.0).abs() < 1e-6);
    assert_eq!(res.water.limiting_factor, LimitingFactor::DemandLimited);

    let medium = res.option(ReserveTier::Medium).expect("medium tier");
    assert_eq!(medium.reserve_days, 40);
    assert!((medium.raw_volume_l - 2_440.0).abs() < 1e-6);
    assert_eq!(medium.volume_l, 3_000.0);
    assert!(!medium.quote_required);
    assert_eq!(medium.price, Some(1090.0));
    assert!((medium.coverage_percent - 100.0).abs() < 1e-9);

    let short = res.option(ReserveTier::Short).expect("short tier");
    let long = res.option(ReserveTier::Long).expect("long tier");
    assert_eq!((short.reserve_days, short.volume_l), (24, 2_000.0));
    assert_eq!((long.reserve_days, long.volume_l), (64, 4_000.0));
}

#[test]
fn two_person_household_finances() {
    let res = compute_simulation(&two_person_household());
    let cmp = res.comparison(ReserveTier::Medium).expect("medium comparison");
    assert!((cmp.substituted_m3_per_year - 22.265).abs() < 1e-9);
    assert!(
        (cmp.cumulative_savings - 1164.71).abs() < 0.011,
        "savings={}",
        cmp.cumulative_savings
    );
    assert_eq!(cmp.yearly.len(), 10);

    let livret_a = cmp
        .accounts
        .iter()
        .find(|a| a.account.code == "livret-a")
        .expect("livret A");
    assert!((livret_a.future_value - 1290.14).abs() < 1e-9);
    assert!((livret_a.interest_gain - 200.14).abs() < 1e-9);
    assert!(livret_a.spread < 0.0);
    assert!(livret_a.tank_wins);
    assert!(cmp.all_accounts_beaten);
    assert_eq!(cmp.payback_years, Some(9.8));
}

#[test]
fn no_usage_enabled_sizes_on_min_rain_event() {
    let mut inputs = two_person_household();
    inputs.usages.clear();
    inputs.roof_surface_m2 = 50.0;
    let res = compute_simulation(&inputs);
    assert_eq!(res.water.demand_liters, 0.0);
    assert_eq!(res.water.usable_liters, 0.0);
    for opt in &res.tank_options {
        // 10mm × 50m² × 0.9 × 0.85 = 382.5 L
        assert!((opt.raw_volume_l - 382.5).abs() < 1e-9);
        assert_eq!(opt.volume_l, 500.0);
        assert_eq!(opt.coverage_percent, 0.0);
    }
    for cmp in &res.comparisons {
        assert_eq!(cmp.cumulative_savings, 0.0);
        assert!(!cmp.all_accounts_beaten);
        assert_eq!(cmp.payback_years, None);
    }
}

#[test]
fn guard_volume_can_round_above_minimum_size() {
    let mut inputs = two_person_household();
    inputs.usages.clear();
    let res = compute_simulation(&inputs);
    // 10mm × 100m² × 0.9 × 0.85 = 765 L
    assert!(res.tank_options.iter().all(|o| o.volume_l == 1000.0));
}

#[test]
fn oversized_demand_requires_quote() {
    let inputs = SimulationInputs {
        region: "13".into(),
        rainfall_override_mm: None,
        roof_surface_m2: 1000.0,
        roof_type: RoofType::Corrugated,
        collection_efficiency: 0.85,
        usages: vec![
            UsageContribution::Toilets { persons: 20 },
            UsageContribution::Pool {
                top_up: PoolTopUp::AnnualVolume {
                    cubic_meters: 200.0,
                },
            },
        ],
        water_price_per_m3: 5.0,
        horizon_years: 10,
    };
    let res = compute_simulation(&inputs);
    for opt in &res.tank_options {
        assert!(opt.raw_volume_l > 20_000.0);
        assert!(opt.quote_required);
        assert_eq!(opt.volume_l, 20_000.0);
        assert_eq!(opt.price, None);
    }
    for cmp in &res.comparisons {
        assert_eq!(cmp.tank_price, None);
        assert!(cmp.accounts.iter().all(|a| a.future_value == 0.0));
        assert!(cmp.accounts.iter().all(|a| a.interest_gain == 0.0));
        assert!(cmp.all_accounts_beaten);
        assert_eq!(cmp.payback_years, None);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let inputs = two_person_household();
    let a = compute_simulation(&inputs);
    let b = compute_simulation(&inputs);
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).expect("json"),
        serde_json::to_string(&b).expect("json")
    );
}

#[test]
fn calibrated_region_changes_drought_factor() {
    let mut inputs = two_person_household();
    inputs.region = "29".into();
    let res = compute_simulation(&inputs);
    assert!(res.climate.is_calibrated);
    // 160 rain days ⇒ k = 1
    let days: Vec<u32> = res.tank_options.iter().map(|o| o.reserve_days).collect();
    assert_eq!(days, vec![21, 35, 56]);
    assert_eq!(res.recommended_tier, ReserveTier::Medium);
    assert!(res.recommended().is_some());
}

#[test]
fn rainfall_override_keeps_calibration_flag() {
    let mut inputs = two_person_household();
    inputs.rainfall_override_mm = Some(300.0);
    let res = compute_simulation(&inputs);
    assert!(!res.climate.is_calibrated);
    assert!(res.climate.rainfall_overridden);
    // 300 × 100 × 0.9 × 0.85 = 22 950 L ≥ 22 265 L
    assert!((res.water.supply_liters - 22_950.0).abs() < 1e-6);
    assert_eq!(res.water.limiting_factor, LimitingFactor::DemandLimited);

    inputs.rainfall_override_mm = Some(200.0);
    let res = compute_simulation(&inputs);
    assert_eq!(res.water.limiting_factor, LimitingFactor::ResourceLimited);
    assert!((res.water.usable_liters - 15_300.0).abs() < 1e-6);
    let medium = res.option(ReserveTier::Medium).expect("medium");
    assert!((medium.coverage_percent - 68.7).abs() < 1e-9);
}

#[test]
fn inputs_round_trip_through_json() {
    let inputs = two_person_household();
    let json = serde_json::to_string(&inputs).expect("serialize");
    let back: SimulationInputs = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(inputs, back);
}
