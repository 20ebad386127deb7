use serde::Serialize;

use super::accounts::{self, SavingsAccount, WATER_INFLATION_RATE};
use crate::tank::{ReserveTier, TankOption};
use crate::units::{convert_volume, round_to, VolumeUnit};

/// 절감액 비교 입력.
#[derive(Debug, Clone)]
pub struct ComparisonInput {
    /// 연간 대체 수량 [L/년]
    pub usable_liters: f64,
    /// 현재 물값 [EUR/m³]
    pub water_price_per_m3: f64,
    /// 분석 기간 [년]
    pub horizon_years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlySaving {
    pub year: u32,
    /// 해당 연도 물값 [EUR/m³]
    pub water_price_per_m3: f64,
    /// 해당 연도 절감액 [EUR]
    pub saving: f64,
    /// 누적 절감액 [EUR]
    pub cumulative: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountProjection {
    pub account: SavingsAccount,
    /// 탱크 가격을 예치했을 때의 미래가치 [EUR]. 가격이 없으면 0.
    pub future_value: f64,
    /// 미래가치 - 원금
    pub interest_gain: f64,
    /// 누적 절감액 - 미래가치
    pub spread: f64,
    /// 누적 절감액 - 이자 수익
    pub net_advantage: f64,
    /// 누적 절감액이 이자 수익보다 큰지
    pub tank_wins: bool,
    /// 탱크 가격이 예치 한도를 넘는지
    pub exceeds_ceiling: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialComparison {
    pub tier: ReserveTier,
    pub tank_price: Option<f64>,
    /// 연간 대체 수량 [m³/년]
    pub substituted_m3_per_year: f64,
    /// 기간 누적 절감액 [EUR], 소수 둘째 자리
    pub cumulative_savings: f64,
    pub yearly: Vec<YearlySaving>,
    pub accounts: Vec<AccountProjection>,
    pub all_accounts_beaten: bool,
    /// 단순 회수기간 [년] (가격 / 첫해 절감액)
    pub payback_years: Option<f64>,
}

/// 물값 상승을 반영한 연도별 절감액을 계산한다. 누적값만 마지막에 반올림한다.
pub fn project_savings(input: &ComparisonInput) -> (Vec<YearlySaving>, f64) {
    let substituted_m3 = substituted_m3_per_year(input.usable_liters);
    let mut yearly = Vec::with_capacity(input.horizon_years as usize);
    let mut cumulative = 0.0;
    for year in 1..=input.horizon_years {
        let price = input.water_price_per_m3 * (1.0 + WATER_INFLATION_RATE).powi(year as i32 - 1);
        let saving = substituted_m3 * price;
        cumulative += saving;
        yearly.push(YearlySaving {
            year,
            water_price_per_m3: round_to(price, 2),
            saving: round_to(saving, 2),
            cumulative: round_to(cumulative, 2),
        });
    }
    (yearly, round_to(cumulative, 2))
}

/// 연간 대체 수량 [m³/년]. 사용 패턴은 해마다 같다고 본다.
pub fn substituted_m3_per_year(usable_liters: f64) -> f64 {
    convert_volume(usable_liters, VolumeUnit::Liter, VolumeUnit::CubicMeter)
}

/// 원금을 `years`년 복리 예치한 미래가치, 소수 둘째 자리.
pub fn future_value(principal: f64, annual_rate: f64, years: u32) -> f64 {
    round_to(principal * (1.0 + annual_rate).powi(years as i32), 2)
}

/// 한 저축 상품에 대한 비교값을 계산한다.
pub fn project_account(
    account: &SavingsAccount,
    tank_price: Option<f64>,
    cumulative_savings: f64,
    horizon_years: u32,
) -> AccountProjection {
    let (fv, interest_gain) = match tank_price {
        Some(price) => {
            let fv = future_value(price, account.annual_rate, horizon_years);
            (fv, round_to(fv - price, 2))
        }
        None => (0.0, 0.0),
    };
    let net_advantage = round_to(cumulative_savings - interest_gain, 2);
    AccountProjection {
        account: *account,
        future_value: fv,
        interest_gain,
        spread: round_to(cumulative_savings - fv, 2),
        net_advantage,
        tank_wins: cumulative_savings > interest_gain,
        exceeds_ceiling: match (tank_price, account.ceiling) {
            (Some(price), Some(ceiling)) => price > ceiling,
            _ => false,
        },
    }
}

/// 탱크 옵션 하나를 모든 저축 상품과 비교한다.
pub fn compare_option(option: &TankOption, input: &ComparisonInput) -> FinancialComparison {
    let (yearly, cumulative_savings) = project_savings(input);
    let accounts: Vec<AccountProjection> = accounts::savings_accounts()
        .iter()
        .map(|a| project_account(a, option.price, cumulative_savings, input.horizon_years))
        .collect();
    let all_accounts_beaten = accounts.iter().all(|p| p.tank_wins);
    let substituted_m3 = substituted_m3_per_year(input.usable_liters);
    let first_year_saving = substituted_m3 * input.water_price_per_m3;
    let payback_years = match option.price {
        Some(price) if first_year_saving > 0.0 => Some(round_to(price / first_year_saving, 1)),
        _ => None,
    };
    FinancialComparison {
        tier: option.tier,
        tank_price: option.price,
        substituted_m3_per_year: substituted_m3,
        cumulative_savings,
        yearly,
        accounts,
        all_accounts_beaten,
        payback_years,
    }
}
