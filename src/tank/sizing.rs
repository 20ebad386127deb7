use serde::Serialize;

use super::catalog;
use crate::units::round_to;

/// 최소 강우 이벤트 기준 강수량 [mm]
pub const MIN_RAIN_EVENT_MM: f64 = 10.0;

/// 예비 일수 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReserveTier {
    Short,
    Medium,
    Long,
}

impl ReserveTier {
    pub const ALL: [ReserveTier; 3] = [ReserveTier::Short, ReserveTier::Medium, ReserveTier::Long];

    /// 가뭄 보정 전 예비 일수
    pub fn base_reserve_days(self) -> u32 {
        match self {
            ReserveTier::Short => 21,
            ReserveTier::Medium => 35,
            ReserveTier::Long => 56,
        }
    }
}

/// 추천 등급
pub const RECOMMENDED_TIER: ReserveTier = ReserveTier::Medium;

/// 탱크 사이징 입력.
#[derive(Debug, Clone)]
pub struct TankSizingInput {
    /// 연간 사용 가능량 [L/년]
    pub usable_liters: f64,
    /// 연간 수요량 [L/년]
    pub demand_liters: f64,
    /// 연 강수일수 [일]
    pub annual_rain_days: f64,
    pub roof_surface_m2: f64,
    pub roof_coefficient: f64,
    pub collection_efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TankOption {
    pub tier: ReserveTier,
    pub base_reserve_days: u32,
    /// 가뭄 보정 후 예비 일수
    pub reserve_days: u32,
    /// 반올림 전 필요 용량 [L]
    pub raw_volume_l: f64,
    /// 시판 용량 [L]
    pub volume_l: f64,
    /// 가격 [EUR]. 견적 필요 시 None.
    pub price: Option<f64>,
    pub quote_required: bool,
    /// 수요 대비 충당률 [%]
    pub coverage_percent: f64,
}

/// 가뭄 보정 계수 k = 1 + max(0, (100 - 강수일수) / 200). 항상 1 이상.
pub fn drought_factor(annual_rain_days: f64) -> f64 {
    1.0 + ((100.0 - annual_rain_days) / 200.0).max(0.0)
}

/// 최소 강우 이벤트(10mm) 한 번으로 모이는 양 [L].
pub fn min_rain_event_volume(
    roof_surface_m2: f64,
    roof_coefficient: f64,
    collection_efficiency: f64,
) -> f64 {
    MIN_RAIN_EVENT_MM * roof_surface_m2 * roof_coefficient * collection_efficiency
}

/// 충당률 [%], 소수 첫째 자리. 수요가 0이면 0.
pub fn coverage_percent(usable_liters: f64, demand_liters: f64) -> f64 {
    if demand_liters > 0.0 {
        round_to(usable_liters / demand_liters * 100.0, 1)
    } else {
        0.0
    }
}

/// 세 등급(단기/중기/장기)의 탱크 옵션을 계산한다.
pub fn size_tanks(input: &TankSizingInput) -> [TankOption; 3] {
    let k = drought_factor(input.annual_rain_days);
    let guard_l = min_rain_event_volume(
        input.roof_surface_m2,
        input.roof_coefficient,
        input.collection_efficiency,
    );
    let coverage = coverage_percent(input.usable_liters, input.demand_liters);
    log::debug!("tank sizing: k={k:.3}, guard={guard_l:.1} L, coverage={coverage}%");

    ReserveTier::ALL.map(|tier| {
        let base = tier.base_reserve_days();
        let reserve_days = (base as f64 * k).round() as u32;
        let raw_volume_l = (input.usable_liters * (reserve_days as f64 / 365.0)).max(guard_l);
        let matched = catalog::round_up_to_catalog(raw_volume_l);
        let price = if matched.quote_required {
            None
        } else {
            catalog::price_for_volume(matched.volume_l)
        };
        TankOption {
            tier,
            base_reserve_days: base,
            reserve_days,
            raw_volume_l,
            volume_l: matched.volume_l,
            price,
            quote_required: matched.quote_required,
            coverage_percent: coverage,
        }
    })
}
