//! 시판 탱크 용량 목록과 가격표.
//! 가격은 설치 전 본체 기준 참고값이며 실제 견적과 다를 수 있다.

use serde::Serialize;

/// 시판 용량 [L], 오름차순.
pub const CATALOG_SIZES_L: &[f64] = &[
    500.0, 1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 6000.0, 7500.0, 10000.0, 15000.0, 20000.0,
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBreak {
    pub max_volume_l: f64,
    pub price_eur: f64,
}

impl PriceBreak {
    pub const fn new(max_volume_l: f64, price_eur: f64) -> Self {
        Self {
            max_volume_l,
            price_eur,
        }
    }
}

/// 가격 구간, `max_volume_l` 오름차순.
pub const PRICE_BREAKS: &[PriceBreak] = &[
    PriceBreak::new(500.0, 190.0),
    PriceBreak::new(1000.0, 390.0),
    PriceBreak::new(2000.0, 790.0),
    PriceBreak::new(3000.0, 1090.0),
    PriceBreak::new(4000.0, 1390.0),
    PriceBreak::new(5000.0, 1690.0),
    PriceBreak::new(6000.0, 1990.0),
    PriceBreak::new(7500.0, 2390.0),
    PriceBreak::new(10000.0, 3190.0),
    PriceBreak::new(15000.0, 4590.0),
    PriceBreak::new(20000.0, 5990.0),
];

/// 카탈로그 반올림 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogMatch {
    /// 표시 용량 [L]. 견적 필요 시 최대 용량으로 고정된다.
    pub volume_l: f64,
    pub quote_required: bool,
}

pub fn max_catalog_size() -> f64 {
    CATALOG_SIZES_L[CATALOG_SIZES_L.len() - 1]
}

/// `raw_l` 이상인 가장 작은 시판 용량을 찾는다. 최대 용량을 넘으면 견적 필요로 표시한다.
pub fn round_up_to_catalog(raw_l: f64) -> CatalogMatch {
    match CATALOG_SIZES_L.iter().copied().find(|&size| size >= raw_l) {
        Some(volume_l) => CatalogMatch {
            volume_l,
            quote_required: false,
        },
        None => CatalogMatch {
            volume_l: max_catalog_size(),
            quote_required: true,
        },
    }
}

/// 용량에 해당하는 첫 가격 구간의 가격. 표에 없으면 None.
pub fn price_for_volume(volume_l: f64) -> Option<f64> {
    PRICE_BREAKS
        .iter()
        .find(|b| b.max_volume_l >= volume_l)
        .map(|b| b.price_eur)
}
