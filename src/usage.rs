//! 지붕 종류별 유출 계수와 용도별 연간 물 수요 계산.

use serde::{Deserialize, Serialize};

/// 1인 1일 화장실 사용량 [L]
pub const TOILET_LITERS_PER_PERSON_PER_DAY: f64 = 30.5;
/// 정원 급수 기간(5~9월) [주]
pub const GARDEN_WATERING_WEEKS: f64 = 22.0;
/// 세차 1회당 사용량 [L]
pub const LITERS_PER_CAR_WASH: f64 = 200.0;
/// 수영장 부피 추정용 평균 수심 [m]
pub const POOL_AVERAGE_DEPTH_M: f64 = 1.5;
/// 알 수 없는 지붕 종류에 쓰는 유출 계수
pub const DEFAULT_ROOF_COEFFICIENT: f64 = 0.9;
/// 알 수 없는 급수 강도에 쓰는 주간 급수량 [L/m²/주]
pub const DEFAULT_WATERING_LITERS_PER_M2_PER_WEEK: f64 = 15.0;

/// 지붕 종류. 각 값은 고정된 유출 계수를 가진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofType {
    /// 기와
    Tile,
    /// 골함석
    Corrugated,
    /// 평지붕
    Flat,
}

impl RoofType {
    pub fn coefficient(self) -> f64 {
        match self {
            RoofType::Tile => 0.9,
            RoofType::Corrugated => 0.95,
            RoofType::Flat => 0.8,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "tile" | "tuile" | "tuiles" => Some(RoofType::Tile),
            "corrugated" | "tole" | "tôle" => Some(RoofType::Corrugated),
            "flat" | "plat" | "toit-plat" => Some(RoofType::Flat),
            _ => None,
        }
    }
}

/// 문자열 코드로 유출 계수를 조회한다. 알 수 없으면 0.9.
pub fn roof_coefficient(code: &str) -> f64 {
    RoofType::from_code(code)
        .map(RoofType::coefficient)
        .unwrap_or(DEFAULT_ROOF_COEFFICIENT)
}

/// 정원 급수 강도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WateringIntensity {
    Low,
    Medium,
    High,
}

impl WateringIntensity {
    pub fn liters_per_m2_per_week(self) -> f64 {
        match self {
            WateringIntensity::Low => 10.0,
            WateringIntensity::Medium => 15.0,
            WateringIntensity::High => 20.0,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "low" | "faible" => Some(WateringIntensity::Low),
            "medium" | "moyen" | "moyenne" => Some(WateringIntensity::Medium),
            "high" | "fort" | "forte" => Some(WateringIntensity::High),
            _ => None,
        }
    }
}

/// 문자열 코드로 주간 급수량을 조회한다. 알 수 없으면 15.
pub fn watering_liters_per_m2_per_week(code: &str) -> f64 {
    WateringIntensity::from_code(code)
        .map(WateringIntensity::liters_per_m2_per_week)
        .unwrap_or(DEFAULT_WATERING_LITERS_PER_M2_PER_WEEK)
}

/// 수영장 보충수 입력 방식.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PoolTopUp {
    /// 연간 보충량을 직접 입력 [m³]
    AnnualVolume { cubic_meters: f64 },
    /// 수면 면적으로 부피를 추정하고 그 비율만큼 보충
    PercentOfVolume { surface_m2: f64, percent: f64 },
}

/// 활성화된 용도 하나. 비활성 용도는 목록에 넣지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "usage", rename_all = "snake_case")]
pub enum UsageContribution {
    Toilets { persons: u32 },
    Garden {
        surface_m2: f64,
        intensity: WateringIntensity,
    },
    CarWashing { washes_per_month: u32 },
    Pool { top_up: PoolTopUp },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageKind {
    Toilets,
    Garden,
    CarWashing,
    Pool,
}

/// 용도별 연간 수요 [L/년].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UsageDemand {
    pub kind: UsageKind,
    pub liters_per_year: f64,
}

impl UsageContribution {
    pub fn kind(&self) -> UsageKind {
        match self {
            UsageContribution::Toilets { .. } => UsageKind::Toilets,
            UsageContribution::Garden { .. } => UsageKind::Garden,
            UsageContribution::CarWashing { .. } => UsageKind::CarWashing,
            UsageContribution::Pool { .. } => UsageKind::Pool,
        }
    }

    /// 연간 수요량 [L/년]을 계산한다.
    pub fn annual_liters(&self) -> f64 {
        match *self {
            UsageContribution::Toilets { persons } => {
                TOILET_LITERS_PER_PERSON_PER_DAY * persons as f64 * 365.0
            }
            UsageContribution::Garden {
                surface_m2,
                intensity,
            } => intensity.liters_per_m2_per_week() * surface_m2 * GARDEN_WATERING_WEEKS,
            UsageContribution::CarWashing { washes_per_month } => {
                washes_per_month as f64 * 12.0 * LITERS_PER_CAR_WASH
            }
            UsageContribution::Pool {
                top_up: PoolTopUp::AnnualVolume { cubic_meters },
            } => {
                cubic_meters * 1000.0
            }
            UsageContribution::Pool {
                top_up: PoolTopUp::PercentOfVolume {
                    surface_m2,
                    percent,
                },
            } => surface_m2 * POOL_AVERAGE_DEPTH_M * (percent / 100.0) * 1000.0,
        }
    }
}

/// 용도별 수요 목록과 합계를 돌려준다.
pub fn annual_demand(usages: &[UsageContribution]) -> (Vec<UsageDemand>, f64) {
    let breakdown: Vec<UsageDemand> = usages
        .iter()
        .map(|u| UsageDemand {
            kind: u.kind(),
            liters_per_year: u.annual_liters().max(0.0),
        })
        .collect();
    let total = breakdown.iter().map(|d| d.liters_per_year).sum();
    (breakdown, total)
}
