use serde::Serialize;

use crate::usage::{self, UsageContribution, UsageDemand};

/// 집수 설비 기본 효율(필터/초기 우수 배제 손실 반영)
pub const DEFAULT_COLLECTION_EFFICIENCY: f64 = 0.85;

/// 집수 가능량 계산 입력.
#[derive(Debug, Clone)]
pub struct SupplyInput {
    /// 연 강수량 [mm]
    pub annual_rainfall_mm: f64,
    /// 지붕 투영 면적 [m²]
    pub roof_surface_m2: f64,
    /// 지붕 유출 계수(0~1)
    pub roof_coefficient: f64,
    /// 집수 효율(0~1)
    pub collection_efficiency: f64,
}

/// 사용 가능량을 제한한 쪽.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitingFactor {
    /// 집수량이 수요 이하 (동률 포함)
    ResourceLimited,
    /// 수요가 집수량보다 작음
    DemandLimited,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplyDemandResult {
    /// 연간 집수 가능량 [L/년]
    pub supply_liters: f64,
    /// 연간 수요량 [L/년]
    pub demand_liters: f64,
    /// min(집수량, 수요량) [L/년]
    pub usable_liters: f64,
    pub limiting_factor: LimitingFactor,
    pub demand_breakdown: Vec<UsageDemand>,
}

/// 연간 집수 가능량 [L/년]. mm × m² = L.
pub fn annual_supply(input: &SupplyInput) -> f64 {
    (input.annual_rainfall_mm
        * input.roof_surface_m2
        * input.roof_coefficient
        * input.collection_efficiency)
        .max(0.0)
}

/// 집수량과 수요량을 비교해 사용 가능량을 계산한다.
pub fn supply_and_demand(input: &SupplyInput, usages: &[UsageContribution]) -> SupplyDemandResult {
    let supply_liters = annual_supply(input);
    let (demand_breakdown, demand_liters) = usage::annual_demand(usages);
    let usable_liters = supply_liters.min(demand_liters);
    let limiting_factor = if usable_liters == supply_liters {
        LimitingFactor::ResourceLimited
    } else {
        LimitingFactor::DemandLimited
    };
    SupplyDemandResult {
        supply_liters,
        demand_liters,
        usable_liters,
        limiting_factor,
        demand_breakdown,
    }
}
