use rainwater_simulator::finance::{
    self, accounts, ComparisonInput, SavingsAccount, WATER_INFLATION_RATE,
};
use rainwater_simulator::tank::{ReserveTier, TankOption};

fn option_with_price(price: Option<f64>) -> TankOption {
    TankOption {
        tier: ReserveTier::Medium,
        base_reserve_days: 35,
        reserve_days: 40,
        raw_volume_l: 2440.0,
        volume_l: 3000.0,
        price,
        quote_required: price.is_none(),
        coverage_percent: 100.0,
    }
}

#[test]
fn savings_compound_with_inflation() {
    assert_eq!(WATER_INFLATION_RATE, 0.01);
    let (yearly, total) = finance::project_savings(&ComparisonInput {
        usable_liters: 10_000.0,
        water_price_per_m3: 10.0,
        horizon_years: 5,
    });
    assert_eq!(yearly.len(), 5);
    assert_eq!(yearly[0].saving, 100.0);
    assert_eq!(yearly[1].saving, 101.0);
    assert_eq!(yearly[4].water_price_per_m3, 10.41);
    // 100 × (1.01^5 - 1) / 0.01 = 510.1005
    assert!((total - 510.1).abs() < 1e-9);
    assert_eq!(yearly[4].cumulative, total);
}

#[test]
fn future_value_is_rounded_to_cents() {
    assert_eq!(finance::future_value(1000.0, 0.017, 10), 1183.61);
    assert_eq!(finance::future_value(1000.0, 0.0, 10), 1000.0);
}

#[test]
fn account_projection_signs_agree() {
    let acc = SavingsAccount {
        code: "test",
        name: "Test",
        annual_rate: 0.03,
        ceiling: Some(500.0),
    };
    let p = finance::project_account(&acc, Some(1000.0), 200.0, 10);
    assert_eq!(p.future_value, 1343.92);
    assert_eq!(p.interest_gain, 343.92);
    assert_eq!(p.spread, -1143.92);
    assert_eq!(p.net_advantage, -143.92);
    assert!(!p.tank_wins);
    assert!(p.exceeds_ceiling);

    let p = finance::project_account(&acc, Some(1000.0), 400.0, 10);
    assert!(p.net_advantage > 0.0);
    assert!(p.tank_wins);
}

#[test]
fn equal_savings_and_interest_is_not_a_win() {
    let acc = SavingsAccount {
        code: "flat",
        name: "Flat",
        annual_rate: 0.1,
        ceiling: None,
    };
    // 100 × 1.1 = 110 ⇒ 이자 10
    let p = finance::project_account(&acc, Some(100.0), 10.0, 1);
    assert_eq!(p.interest_gain, 10.0);
    assert_eq!(p.net_advantage, 0.0);
    assert!(!p.tank_wins);
    assert!(!p.exceeds_ceiling);
}

#[test]
fn quote_required_option_compares_against_zero() {
    let cmp = finance::compare_option(
        &option_with_price(None),
        &ComparisonInput {
            usable_liters: 22_265.0,
            water_price_per_m3: 5.0,
            horizon_years: 10,
        },
    );
    assert_eq!(cmp.accounts.len(), accounts::savings_accounts().len());
    for a in &cmp.accounts {
        assert_eq!(a.future_value, 0.0);
        assert_eq!(a.spread, cmp.cumulative_savings);
        assert!(!a.exceeds_ceiling);
    }
    assert!(cmp.all_accounts_beaten);
    assert_eq!(cmp.payback_years, None);
}

#[test]
fn expensive_tank_loses_to_some_account() {
    let cmp = finance::compare_option(
        &option_with_price(Some(20_000.0)),
        &ComparisonInput {
            usable_liters: 5_000.0,
            water_price_per_m3: 5.0,
            horizon_years: 5,
        },
    );
    assert!(!cmp.all_accounts_beaten);
    assert!(cmp.accounts.iter().any(|a| !a.tank_wins));
    assert_eq!(cmp.payback_years, Some(800.0));
}

#[test]
fn account_table_lookup() {
    let lep = accounts::find_account("LEP").expect("lep");
    assert_eq!(lep.annual_rate, 0.027);
    let livret_a = accounts::find_account("livret-a").expect("livret A");
    assert_eq!(livret_a.annual_rate, 0.017);
    assert!(accounts::find_account("crypto").is_none());
}
