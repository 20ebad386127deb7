//! 입력 묶음에서 탱크 추천과 재무 비교까지 한 번에 계산하는 진입점.
//!
//! 모든 단계는 순수 함수이며 정적 테이블만 읽는다. 같은 입력이면 항상 같은 결과가 나온다.

use serde::{Deserialize, Serialize};

use crate::finance::{self, ComparisonInput, FinancialComparison};
use crate::region::{self, RegionClimate};
use crate::supply_demand::{self, SupplyDemandResult, SupplyInput, DEFAULT_COLLECTION_EFFICIENCY};
use crate::tank::{self, ReserveTier, TankOption, TankSizingInput, RECOMMENDED_TIER};
use crate::usage::{RoofType, UsageContribution};

/// 시뮬레이션 입력. 범위 검증은 호출 측(`validation`) 책임이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    /// 도 코드 등 지역 식별자
    pub region: String,
    /// 외부 강수량 값 [mm/년]
    #[serde(default)]
    pub rainfall_override_mm: Option<f64>,
    pub roof_surface_m2: f64,
    pub roof_type: RoofType,
    #[serde(default = "default_collection_efficiency")]
    pub collection_efficiency: f64,
    /// 활성화된 용도만 담는다
    #[serde(default)]
    pub usages: Vec<UsageContribution>,
    pub water_price_per_m3: f64,
    pub horizon_years: u32,
}

fn default_collection_efficiency() -> f64 {
    DEFAULT_COLLECTION_EFFICIENCY
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResults {
    pub climate: RegionClimate,
    pub roof_coefficient: f64,
    pub water: SupplyDemandResult,
    /// 단기/중기/장기 순
    pub tank_options: Vec<TankOption>,
    /// `tank_options`와 같은 순서
    pub comparisons: Vec<FinancialComparison>,
    pub recommended_tier: ReserveTier,
    pub horizon_years: u32,
    pub water_price_per_m3: f64,
}

impl SimulationResults {
    pub fn option(&self, tier: ReserveTier) -> Option<&TankOption> {
        self.tank_options.iter().find(|o| o.tier == tier)
    }

    pub fn comparison(&self, tier: ReserveTier) -> Option<&FinancialComparison> {
        self.comparisons.iter().find(|c| c.tier == tier)
    }

    pub fn recommended(&self) -> Option<(&TankOption, &FinancialComparison)> {
        Some((
            self.option(self.recommended_tier)?,
            self.comparison(self.recommended_tier)?,
        ))
    }
}

/// 지역 조회 → 집수/수요 → 탱크 사이징 → 재무 비교 순으로 계산한다.
pub fn compute_simulation(inputs: &SimulationInputs) -> SimulationResults {
    let climate = region::lookup_region(&inputs.region, inputs.rainfall_override_mm);
    let roof_coefficient = inputs.roof_type.coefficient();
    log::debug!(
        "climate for '{}': {} mm, {} rain days (calibrated={})",
        climate.code,
        climate.annual_rainfall_mm,
        climate.annual_rain_days,
        climate.is_calibrated
    );

    let water = supply_demand::supply_and_demand(
        &SupplyInput {
            annual_rainfall_mm: climate.annual_rainfall_mm,
            roof_surface_m2: inputs.roof_surface_m2,
            roof_coefficient,
            collection_efficiency: inputs.collection_efficiency,
        },
        &inputs.usages,
    );
    log::debug!(
        "supply={:.1} L, demand={:.1} L, usable={:.1} L ({:?})",
        water.supply_liters,
        water.demand_liters,
        water.usable_liters,
        water.limiting_factor
    );

    let tank_options = tank::size_tanks(&TankSizingInput {
        usable_liters: water.usable_liters,
        demand_liters: water.demand_liters,
        annual_rain_days: climate.annual_rain_days,
        roof_surface_m2: inputs.roof_surface_m2,
        roof_coefficient,
        collection_efficiency: inputs.collection_efficiency,
    });

    let comparison_input = ComparisonInput {
        usable_liters: water.usable_liters,
        water_price_per_m3: inputs.water_price_per_m3,
        horizon_years: inputs.horizon_years,
    };
    let comparisons: Vec<FinancialComparison> = tank_options
        .iter()
        .map(|opt| finance::compare_option(opt, &comparison_input))
        .collect();
    for c in &comparisons {
        log::debug!(
            "{:?}: savings={} EUR over {} years, beats all accounts={}",
            c.tier,
            c.cumulative_savings,
            inputs.horizon_years,
            c.all_accounts_beaten
        );
    }

    SimulationResults {
        climate,
        roof_coefficient,
        water,
        tank_options: tank_options.to_vec(),
        comparisons,
        recommended_tier: RECOMMENDED_TIER,
        horizon_years: inputs.horizon_years,
        water_price_per_m3: inputs.water_price_per_m3,
    }
}
