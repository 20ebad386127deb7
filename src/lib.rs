//! 빗물 저류조 설치와 저축 상품 예치를 비교하는 계산 로직을 라이브러리로 분리하여
//! CLI 외의 소비자(결과 화면, 알림 메일 등)도 같은 코어를 쓰게 한다.

pub mod app;
pub mod config;
pub mod finance;
pub mod i18n;
pub mod region;
pub mod report;
pub mod simulation;
pub mod supply_demand;
pub mod tank;
pub mod ui_cli;
pub mod units;
pub mod usage;
pub mod validation;

pub use simulation::{compute_simulation, SimulationInputs, SimulationResults};
