//! 입력 폼 단계의 범위 검증. 계산 코어는 검증된 입력을 가정한다.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::simulation::SimulationInputs;
use crate::usage::{PoolTopUp, UsageContribution};

pub const ROOF_SURFACE_RANGE: RangeInclusive<f64> = 10.0..=1000.0;
pub const PERSONS_RANGE: RangeInclusive<u32> = 1..=20;
pub const CAR_WASHES_RANGE: RangeInclusive<u32> = 1..=30;
pub const WATER_PRICE_RANGE: RangeInclusive<f64> = 5.0..=15.0;
pub const HORIZON_RANGE: RangeInclusive<u32> = 5..=20;

/// 입력 검증 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("collection efficiency must be in (0, 1] (got {0})")]
    Efficiency(f64),
    #[error("region identifier is empty")]
    EmptyRegion,
}

fn check_f64(
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), ValidationError> {
    if value.is_finite() && range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min: *range.start(),
            max: *range.end(),
            value,
        })
    }
}

fn check_u32(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), ValidationError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min: *range.start() as f64,
            max: *range.end() as f64,
            value: value as f64,
        })
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}

pub fn validate_usage(usage: &UsageContribution) -> Result<(), ValidationError> {
    match *usage {
        UsageContribution::Toilets { persons } => check_u32("persons", persons, &PERSONS_RANGE),
        UsageContribution::Garden { surface_m2, .. } => check_positive("garden surface", surface_m2),
        UsageContribution::CarWashing { washes_per_month } => {
            check_u32("car washes per month", washes_per_month, &CAR_WASHES_RANGE)
        }
        UsageContribution::Pool {
            top_up: PoolTopUp::AnnualVolume { cubic_meters },
        } => check_positive("pool top-up volume", cubic_meters),
        UsageContribution::Pool {
            top_up: PoolTopUp::PercentOfVolume {
                surface_m2,
                percent,
            },
        } => {
            check_positive("pool surface", surface_m2)?;
            check_f64("pool top-up percent", percent, &(0.0..=100.0))
        }
    }
}

/// 전체 입력을 검증한다. 첫 번째 오류에서 멈춘다.
pub fn validate_inputs(inputs: &SimulationInputs) -> Result<(), ValidationError> {
    if inputs.region.trim().is_empty() {
        return Err(ValidationError::EmptyRegion);
    }
    if let Some(mm) = inputs.rainfall_override_mm {
        check_positive("rainfall override", mm)?;
    }
    check_f64("roof surface", inputs.roof_surface_m2, &ROOF_SURFACE_RANGE)?;
    let eff = inputs.collection_efficiency;
    if !(eff.is_finite() && eff > 0.0 && eff <= 1.0) {
        return Err(ValidationError::Efficiency(eff));
    }
    for usage in &inputs.usages {
        validate_usage(usage)?;
    }
    check_f64("water price", inputs.water_price_per_m3, &WATER_PRICE_RANGE)?;
    check_u32("horizon", inputs.horizon_years, &HORIZON_RANGE)
}
