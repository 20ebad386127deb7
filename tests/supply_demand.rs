use rainwater_simulator::region::{self, FALLBACK_RAINFALL_MM, FALLBACK_RAIN_DAYS};
use rainwater_simulator::supply_demand::{self, LimitingFactor, SupplyInput};
use rainwater_simulator::usage::{
    self, PoolTopUp, RoofType, UsageContribution, UsageKind, WateringIntensity,
};

fn supply(rainfall: f64) -> SupplyInput {
    SupplyInput {
        annual_rainfall_mm: rainfall,
        roof_surface_m2: 100.0,
        roof_coefficient: 0.9,
        collection_efficiency: 0.85,
    }
}

#[test]
fn roof_coefficients() {
    assert_eq!(RoofType::Tile.coefficient(), 0.9);
    assert_eq!(usage::roof_coefficient("tuiles"), 0.9);
    assert_eq!(usage::roof_coefficient("corrugated"), 0.95);
    assert_eq!(usage::roof_coefficient("flat"), 0.8);
    assert_eq!(usage::roof_coefficient("thatch"), 0.9);
}

#[test]
fn watering_intensity_defaults_to_fifteen() {
    assert_eq!(usage::watering_liters_per_m2_per_week("low"), 10.0);
    assert_eq!(usage::watering_liters_per_m2_per_week("forte"), 20.0);
    assert_eq!(usage::watering_liters_per_m2_per_week("???"), 15.0);
}

#[test]
fn each_usage_contributes_its_formula() {
    let toilets = UsageContribution::Toilets { persons: 2 };
    assert!((toilets.annual_liters() - 22_265.0).abs() < 1e-9);

    let garden = UsageContribution::Garden {
        surface_m2: 50.0,
        intensity: WateringIntensity::Medium,
    };
    assert_eq!(garden.annual_liters(), 15.0 * 50.0 * 22.0);

    let car = UsageContribution::CarWashing {
        washes_per_month: 2,
    };
    assert_eq!(car.annual_liters(), 2.0 * 12.0 * 200.0);

    let pool_volume = UsageContribution::Pool {
        top_up: PoolTopUp::AnnualVolume { cubic_meters: 5.0 },
    };
    assert_eq!(pool_volume.annual_liters(), 5000.0);

    let pool_percent = UsageContribution::Pool {
        top_up: PoolTopUp::PercentOfVolume {
            surface_m2: 32.0,
            percent: 10.0,
        },
    };
    // 32m² × 1.5m = 48m³, 10% ⇒ 4.8m³
    assert!((pool_percent.annual_liters() - 4800.0).abs() < 1e-9);
}

#[test]
fn demand_is_summed_over_enabled_usages() {
    let usages = [
        UsageContribution::Toilets { persons: 4 },
        UsageContribution::CarWashing {
            washes_per_month: 1,
        },
    ];
    let (breakdown, total) = usage::annual_demand(&usages);
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].kind, UsageKind::Toilets);
    assert!((total - (30.5 * 4.0 * 365.0 + 2400.0)).abs() < 1e-9);

    let (breakdown, total) = usage::annual_demand(&[]);
    assert!(breakdown.is_empty());
    assert_eq!(total, 0.0);
}

#[test]
fn limiting_factor_tie_goes_to_resource() {
    // 100 × 100 × 0.9 × 0.85 = 7650 L
    let s = supply(100.0);
    assert!((supply_demand::annual_supply(&s) - 7650.0).abs() < 1e-9);

    let exact = [UsageContribution::Pool {
        top_up: PoolTopUp::AnnualVolume {
            cubic_meters: supply_demand::annual_supply(&s) / 1000.0,
        },
    }];
    let r = supply_demand::supply_and_demand(&s, &exact);
    assert_eq!(r.usable_liters, r.supply_liters);
    assert_eq!(r.limiting_factor, LimitingFactor::ResourceLimited);

    let r = supply_demand::supply_and_demand(&s, &[]);
    assert_eq!(r.usable_liters, 0.0);
    assert_eq!(r.limiting_factor, LimitingFactor::DemandLimited);

    let r = supply_demand::supply_and_demand(&supply(700.0), &[UsageContribution::Toilets { persons: 2 }]);
    assert_eq!(r.limiting_factor, LimitingFactor::DemandLimited);
}

#[test]
fn region_lookup_known_and_fallback() {
    let paris = region::lookup_region("75", None);
    assert!(paris.is_calibrated);
    assert_eq!(paris.name, Some("Paris"));

    let corsica = region::lookup_region(" 2a ", None);
    assert!(corsica.is_calibrated);
    assert_eq!(corsica.code, "2A");

    let unknown = region::lookup_region("99", None);
    assert!(!unknown.is_calibrated);
    assert_eq!(unknown.annual_rainfall_mm, FALLBACK_RAINFALL_MM);
    assert_eq!(unknown.annual_rain_days, FALLBACK_RAIN_DAYS);
}

#[test]
fn rainfall_override_wins_over_table_and_fallback() {
    let paris = region::lookup_region("75", Some(812.0));
    assert_eq!(paris.annual_rainfall_mm, 812.0);
    assert!(paris.is_calibrated);
    assert!(paris.rainfall_overridden);

    let unknown = region::lookup_region("xx", Some(812.0));
    assert_eq!(unknown.annual_rainfall_mm, 812.0);
    assert_eq!(unknown.annual_rain_days, FALLBACK_RAIN_DAYS);
    assert!(!unknown.is_calibrated);
}

#[test]
fn postal_codes_map_to_departments() {
    assert_eq!(region::department_from_postal_code("75011").as_deref(), Some("75"));
    assert_eq!(region::department_from_postal_code("20000").as_deref(), Some("2A"));
    assert_eq!(region::department_from_postal_code("20200").as_deref(), Some("2B"));
    assert_eq!(region::department_from_postal_code("97400").as_deref(), Some("974"));
    assert_eq!(region::department_from_postal_code("7501"), None);
    assert_eq!(region::department_from_postal_code("ABCDE"), None);
    assert_eq!(region::resolve_region_identifier("13008"), "13");
    assert_eq!(region::resolve_region_identifier("2b"), "2B");
}

#[test]
fn region_table_is_sorted_by_code() {
    let table = region::calibrated_regions();
    assert!(table.windows(2).all(|w| w[0].code < w[1].code));
    assert!(table
        .iter()
        .all(|r| r.annual_rainfall_mm > 0.0 && r.annual_rain_days > 0.0));
}
