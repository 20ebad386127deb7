use rainwater_simulator::tank::{
    self,
    catalog::{self, CATALOG_SIZES_L, PRICE_BREAKS},
    ReserveTier, TankSizingInput,
};

fn sizing_input(usable: f64, demand: f64, rain_days: f64) -> TankSizingInput {
    TankSizingInput {
        usable_liters: usable,
        demand_liters: demand,
        annual_rain_days: rain_days,
        roof_surface_m2: 100.0,
        roof_coefficient: 0.9,
        collection_efficiency: 0.85,
    }
}

#[test]
fn drought_factor_is_one_for_wet_regions() {
    assert_eq!(tank::drought_factor(100.0), 1.0);
    assert_eq!(tank::drought_factor(160.0), 1.0);
    assert!((tank::drought_factor(70.0) - 1.15).abs() < 1e-12);
    assert!((tank::drought_factor(0.0) - 1.5).abs() < 1e-12);
}

#[test]
fn catalog_rounds_up_to_next_size() {
    let m = catalog::round_up_to_catalog(2440.0);
    assert_eq!(m.volume_l, 3000.0);
    assert!(!m.quote_required);
    assert_eq!(catalog::round_up_to_catalog(3000.0).volume_l, 3000.0);
    assert_eq!(catalog::round_up_to_catalog(0.0).volume_l, 500.0);
    assert_eq!(catalog::round_up_to_catalog(7500.5).volume_l, 10000.0);
    assert_eq!(catalog::round_up_to_catalog(20000.0).volume_l, 20000.0);
    assert!(!catalog::round_up_to_catalog(20000.0).quote_required);
}

#[test]
fn catalog_flags_quote_above_max() {
    let m = catalog::round_up_to_catalog(35_000.0);
    assert!(m.quote_required);
    assert_eq!(m.volume_l, 20_000.0);
}

#[test]
fn tables_are_ascending_and_priced() {
    assert!(CATALOG_SIZES_L.windows(2).all(|w| w[0] < w[1]));
    assert!(PRICE_BREAKS.windows(2).all(|w| w[0].max_volume_l < w[1].max_volume_l));
    for &size in CATALOG_SIZES_L {
        assert!(catalog::price_for_volume(size).is_some(), "no price for {size}");
    }
    assert_eq!(catalog::price_for_volume(500.0), Some(190.0));
    assert_eq!(catalog::price_for_volume(3000.0), Some(1090.0));
    assert_eq!(catalog::price_for_volume(25_000.0), None);
}

#[test]
fn three_tiers_in_order() {
    let opts = tank::size_tanks(&sizing_input(22_265.0, 22_265.0, 70.0));
    let tiers: Vec<ReserveTier> = opts.iter().map(|o| o.tier).collect();
    assert_eq!(
        tiers,
        vec![ReserveTier::Short, ReserveTier::Medium, ReserveTier::Long]
    );
    assert!(opts[0].reserve_days < opts[1].reserve_days);
    assert!(opts[1].reserve_days < opts[2].reserve_days);
    assert!(opts[0].volume_l <= opts[1].volume_l);
    assert!(opts[1].volume_l <= opts[2].volume_l);
}

#[test]
fn min_rain_event_guard_applies() {
    assert!((tank::min_rain_event_volume(100.0, 0.9, 0.85) - 765.0).abs() < 1e-9);
    let opts = tank::size_tanks(&sizing_input(1000.0, 1000.0, 120.0));
    // 1000 × 21 / 365 ≈ 57.5 L < 765 L
    assert!((opts[0].raw_volume_l - 765.0).abs() < 1e-9);
    assert_eq!(opts[0].volume_l, 1000.0);
}

#[test]
fn coverage_is_shared_by_all_tiers() {
    let opts = tank::size_tanks(&sizing_input(15_300.0, 22_265.0, 70.0));
    assert!(opts.iter().all(|o| (o.coverage_percent - 68.7).abs() < 1e-9));
    assert_eq!(tank::coverage_percent(10.0, 0.0), 0.0);
}

#[test]
fn quote_required_options_have_no_price() {
    let opts = tank::size_tanks(&sizing_input(400_000.0, 400_000.0, 55.0));
    for o in &opts {
        assert!(o.quote_required);
        assert_eq!(o.price, None);
        assert_eq!(o.volume_l, 20_000.0);
    }
}
