use thiserror::Error;

use crate::config::{Config, ConfigError, OutputFormat};
use crate::i18n::Translator;
use crate::report;
use crate::simulation::{self, SimulationInputs, SimulationResults};
use crate::ui_cli;
use crate::validation::{self, ValidationError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("input stream closed before the form was complete")]
    InputClosed,
}

/// 입력을 검증한 뒤 계산한다.
pub fn simulate(inputs: &SimulationInputs) -> Result<SimulationResults, AppError> {
    validation::validate_inputs(inputs)?;
    Ok(simulation::compute_simulation(inputs))
}

/// 결과를 설정된 형식의 문자열로 만든다.
pub fn render(
    results: &SimulationResults,
    format: OutputFormat,
    tr: &Translator,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(report::render_text(results, tr)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

/// 입력 묶음 하나를 계산하고 출력한다.
pub fn run_simulation(
    inputs: &SimulationInputs,
    format: OutputFormat,
    tr: &Translator,
) -> Result<(), AppError> {
    let results = simulate(inputs)?;
    println!("{}", render(&results, format, tr)?);
    Ok(())
}

/// 대화형 마법사를 실행한다.
pub fn run_wizard(config: &Config, format: OutputFormat, tr: &Translator) -> Result<(), AppError> {
    let inputs = ui_cli::run_wizard(config, tr)?;
    run_simulation(&inputs, format, tr)
}

pub fn run_regions(tr: &Translator) {
    print!("{}", report::render_regions(tr));
}
