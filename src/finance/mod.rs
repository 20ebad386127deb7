//! 물값 절감액과 저축 상품 수익 비교 모듈 모음.

pub mod accounts;
pub mod comparison;

pub use accounts::{savings_accounts, SavingsAccount, WATER_INFLATION_RATE};
pub use comparison::*;
