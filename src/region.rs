//! 지역(프랑스 도 코드)별 연평균 강수량/강수일수 테이블과 조회 함수.
//! 값은 기후 평년값 근사치이며 참고용이다.

use serde::Serialize;

/// 테이블에 없는 지역에 사용하는 연 강수량 [mm].
pub const FALLBACK_RAINFALL_MM: f64 = 700.0;
/// 테이블에 없는 지역에 사용하는 연 강수일수 [일].
pub const FALLBACK_RAIN_DAYS: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClimateRecord {
    pub code: &'static str,
    pub name: &'static str,
    pub annual_rainfall_mm: f64,
    pub annual_rain_days: f64,
}

/// 조회 결과. `is_calibrated`가 false면 폴백 상수를 사용한 것이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionClimate {
    pub code: String,
    pub name: Option<&'static str>,
    pub annual_rainfall_mm: f64,
    pub annual_rain_days: f64,
    pub is_calibrated: bool,
    /// 강수량이 외부 값으로 대체되었는지 여부
    pub rainfall_overridden: bool,
}

pub fn calibrated_regions() -> &'static [ClimateRecord] {
    CLIMATE_TABLE
}

pub fn find_region(code: &str) -> Option<&'static ClimateRecord> {
    let code = code.trim();
    CLIMATE_TABLE
        .iter()
        .find(|r| r.code.eq_ignore_ascii_case(code))
}

/// 지역 코드로 기후 값을 조회한다. 외부 강수량 값이 주어지면 강수량만 대체하고
/// 보정 여부(`is_calibrated`)는 바꾸지 않는다.
pub fn lookup_region(code: &str, rainfall_override_mm: Option<f64>) -> RegionClimate {
    let (name, rainfall, rain_days, is_calibrated) = match find_region(code) {
        Some(rec) => (
            Some(rec.name),
            rec.annual_rainfall_mm,
            rec.annual_rain_days,
            true,
        ),
        None => {
            log::debug!("region '{code}' not calibrated, using fallback climate");
            (None, FALLBACK_RAINFALL_MM, FALLBACK_RAIN_DAYS, false)
        }
    };
    RegionClimate {
        code: code.trim().to_uppercase(),
        name,
        annual_rainfall_mm: rainfall_override_mm.unwrap_or(rainfall),
        annual_rain_days: rain_days,
        is_calibrated,
        rainfall_overridden: rainfall_override_mm.is_some(),
    }
}

/// 우편번호(5자리)에서 도 코드를 뽑는다. 코르시카(20xxx)와 해외 도(97x)는 별도 처리한다.
pub fn department_from_postal_code(postal_code: &str) -> Option<String> {
    let cp = postal_code.trim();
    if cp.len() != 5 || !cp.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let prefix = &cp[..2];
    match prefix {
        "00" => None,
        "20" => {
            let n: u32 = cp.parse().ok()?;
            Some(if n < 20200 { "2A".into() } else { "2B".into() })
        }
        "97" | "98" => Some(cp[..3].to_string()),
        _ => Some(prefix.to_string()),
    }
}

/// 사용자가 입력한 우편번호 또는 도 코드를 도 코드로 정규화한다.
pub fn resolve_region_identifier(input: &str) -> String {
    let trimmed = input.trim();
    department_from_postal_code(trimmed).unwrap_or_else(|| trimmed.to_uppercase())
}

const fn rec(
    code: &'static str,
    name: &'static str,
    annual_rainfall_mm: f64,
    annual_rain_days: f64,
) -> ClimateRecord {
    ClimateRecord {
        code,
        name,
        annual_rainfall_mm,
        annual_rain_days,
    }
}

// 코드 오름차순 유지
const CLIMATE_TABLE: &[ClimateRecord] = &[
    rec("06", "Alpes-Maritimes", 760.0, 62.0),
    rec("13", "Bouches-du-Rhône", 550.0, 55.0),
    rec("14", "Calvados", 750.0, 125.0),
    rec("17", "Charente-Maritime", 760.0, 110.0),
    rec("21", "Côte-d'Or", 730.0, 115.0),
    rec("29", "Finistère", 1110.0, 160.0),
    rec("2A", "Corse-du-Sud", 640.0, 60.0),
    rec("2B", "Haute-Corse", 760.0, 70.0),
    rec("30", "Gard", 760.0, 60.0),
    rec("31", "Haute-Garonne", 640.0, 100.0),
    rec("33", "Gironde", 940.0, 125.0),
    rec("34", "Hérault", 630.0, 55.0),
    rec("35", "Ille-et-Vilaine", 690.0, 115.0),
    rec("37", "Indre-et-Loire", 700.0, 110.0),
    rec("38", "Isère", 960.0, 110.0),
    rec("44", "Loire-Atlantique", 820.0, 120.0),
    rec("45", "Loiret", 640.0, 110.0),
    rec("59", "Nord", 740.0, 125.0),
    rec("63", "Puy-de-Dôme", 600.0, 110.0),
    rec("64", "Pyrénées-Atlantiques", 1200.0, 140.0),
    rec("66", "Pyrénées-Orientales", 560.0, 55.0),
    rec("67", "Bas-Rhin", 650.0, 115.0),
    rec("69", "Rhône", 830.0, 105.0),
    rec("75", "Paris", 640.0, 110.0),
    rec("76", "Seine-Maritime", 800.0, 130.0),
    rec("83", "Var", 720.0, 60.0),
    rec("84", "Vaucluse", 680.0, 65.0),
    rec("86", "Vienne", 690.0, 110.0),
    rec("92", "Hauts-de-Seine", 640.0, 110.0),
    rec("93", "Seine-Saint-Denis", 640.0, 110.0),
    rec("94", "Val-de-Marne", 640.0, 110.0),
];
