//! 비교 대상 저축 상품 금리표와 물값 상승률.

use serde::Serialize;

/// 연간 물값 상승률
pub const WATER_INFLATION_RATE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsAccount {
    pub code: &'static str,
    pub name: &'static str,
    /// 연 이율(소수)
    pub annual_rate: f64,
    /// 예치 한도 [EUR]. None이면 한도 없음.
    pub ceiling: Option<f64>,
}

pub fn savings_accounts() -> &'static [SavingsAccount] {
    SAVINGS_ACCOUNTS
}

pub fn find_account(code: &str) -> Option<&'static SavingsAccount> {
    SAVINGS_ACCOUNTS
        .iter()
        .find(|a| a.code.eq_ignore_ascii_case(code.trim()))
}

const SAVINGS_ACCOUNTS: &[SavingsAccount] = &[
    SavingsAccount {
        code: "livret-a",
        name: "Livret A",
        annual_rate: 0.017,
        ceiling: Some(22_950.0),
    },
    SavingsAccount {
        code: "ldds",
        name: "LDDS",
        annual_rate: 0.017,
        ceiling: Some(12_000.0),
    },
    SavingsAccount {
        code: "lep",
        name: "LEP",
        annual_rate: 0.027,
        ceiling: Some(10_000.0),
    },
    SavingsAccount {
        code: "fonds-euros",
        name: "Fonds euros",
        annual_rate: 0.025,
        ceiling: None,
    },
];
