//! 탱크 용량 산정 모듈 모음.

pub mod catalog;
pub mod sizing;

pub use catalog::{round_up_to_catalog, CatalogMatch};
pub use sizing::*;
