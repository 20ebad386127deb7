//! 대화형 입력 마법사. 위치 → 지붕 → 용도 → 재무 순서로 입력을 받는다.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::region;
use crate::simulation::SimulationInputs;
use crate::supply_demand::DEFAULT_COLLECTION_EFFICIENCY;
use crate::usage::{PoolTopUp, RoofType, UsageContribution, WateringIntensity};
use crate::validation::{
    CAR_WASHES_RANGE, HORIZON_RANGE, PERSONS_RANGE, ROOF_SURFACE_RANGE, WATER_PRICE_RANGE,
};

/// 입력 스트림과 출력 스트림을 묶은 프롬프트 도우미. 테스트에서는 메모리 버퍼를 쓴다.
pub struct Prompter<'a, R: BufRead, W: Write> {
    input: R,
    output: W,
    tr: &'a Translator,
}

impl<'a, R: BufRead, W: Write> Prompter<'a, R, W> {
    pub fn new(input: R, output: W, tr: &'a Translator) -> Self {
        Self { input, output, tr }
    }

    fn say(&mut self, key: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", self.tr.t(key))?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(buf.trim().to_string())
    }

    fn read_f64_in(
        &mut self,
        prompt: &str,
        range: &RangeInclusive<f64>,
        default: Option<f64>,
    ) -> Result<f64, AppError> {
        loop {
            let s = self.read_line(prompt)?;
            if s.is_empty() {
                if let Some(d) = default {
                    return Ok(d);
                }
            }
            match s.replace(',', ".").parse::<f64>() {
                Ok(v) if range.contains(&v) => return Ok(v),
                Ok(_) => {
                    let msg = self.tr.tf(
                        keys::ERROR_OUT_OF_RANGE,
                        &[
                            ("min", range.start().to_string()),
                            ("max", range.end().to_string()),
                        ],
                    );
                    writeln!(self.output, "{msg}")?;
                }
                Err(_) => self.say(keys::ERROR_INVALID_NUMBER)?,
            }
        }
    }

    fn read_u32_in(
        &mut self,
        prompt: &str,
        range: &RangeInclusive<u32>,
        default: Option<u32>,
    ) -> Result<u32, AppError> {
        let fr = (*range.start() as f64)..=(*range.end() as f64);
        let v = self.read_f64_in(prompt, &fr, default.map(|d| d as f64))?;
        Ok(v.round() as u32)
    }

    fn read_yes_no(&mut self, prompt: &str) -> Result<bool, AppError> {
        loop {
            let s = self.read_line(prompt)?.to_lowercase();
            match s.as_str() {
                "o" | "oui" | "y" | "yes" => return Ok(true),
                "n" | "non" | "no" | "" => return Ok(false),
                _ => self.say(keys::ERROR_YES_NO)?,
            }
        }
    }

    fn read_choice(&mut self, prompt: &str, max: u32) -> Result<u32, AppError> {
        self.read_u32_in(prompt, &(1..=max), Some(1))
    }

    /// 모든 단계를 진행해 시뮬레이션 입력을 만든다.
    pub fn collect_inputs(&mut self, cfg: &Config) -> Result<SimulationInputs, AppError> {
        let tr = self.tr;
        self.say(keys::WIZARD_TITLE)?;

        self.say(keys::STEP_LOCATION)?;
        let location = loop {
            let s = self.read_line(&tr.t(keys::PROMPT_LOCATION))?;
            if !s.is_empty() {
                break s;
            }
        };
        let region = region::resolve_region_identifier(&location);
        let rainfall_override_mm = {
            let s = self.read_line(&tr.t(keys::PROMPT_RAINFALL_OVERRIDE))?;
            s.replace(',', ".").parse::<f64>().ok().filter(|v| *v > 0.0)
        };

        self.say(keys::STEP_ROOF)?;
        let roof_surface_m2 =
            self.read_f64_in(&tr.t(keys::PROMPT_ROOF_SURFACE), &ROOF_SURFACE_RANGE, None)?;
        let roof_type = match self.read_line(&tr.t(keys::PROMPT_ROOF_TYPE))?.as_str() {
            "1" => RoofType::Tile,
            "2" => RoofType::Corrugated,
            "3" => RoofType::Flat,
            other => RoofType::from_code(other).unwrap_or(cfg.default_roof_type),
        };

        self.say(keys::STEP_USAGES)?;
        let mut usages = Vec::new();
        if self.read_yes_no(&tr.t(keys::PROMPT_TOILETS_ENABLE))? {
            let persons = self.read_u32_in(&tr.t(keys::PROMPT_PERSONS), &PERSONS_RANGE, None)?;
            usages.push(UsageContribution::Toilets { persons });
        }
        if self.read_yes_no(&tr.t(keys::PROMPT_GARDEN_ENABLE))? {
            let surface_m2 =
                self.read_f64_in(&tr.t(keys::PROMPT_GARDEN_AREA), &(1.0..=10_000.0), None)?;
            let intensity = match self.read_choice(&tr.t(keys::PROMPT_WATERING), 3)? {
                1 => WateringIntensity::Low,
                3 => WateringIntensity::High,
                _ => WateringIntensity::Medium,
            };
            usages.push(UsageContribution::Garden {
                surface_m2,
                intensity,
            });
        }
        if self.read_yes_no(&tr.t(keys::PROMPT_CAR_ENABLE))? {
            let washes_per_month =
                self.read_u32_in(&tr.t(keys::PROMPT_CAR_WASHES), &CAR_WASHES_RANGE, None)?;
            usages.push(UsageContribution::CarWashing { washes_per_month });
        }
        if self.read_yes_no(&tr.t(keys::PROMPT_POOL_ENABLE))? {
            let top_up = if self.read_choice(&tr.t(keys::PROMPT_POOL_MODE), 2)? == 2 {
                let surface_m2 =
                    self.read_f64_in(&tr.t(keys::PROMPT_POOL_SURFACE), &(1.0..=500.0), None)?;
                let percent =
                    self.read_f64_in(&tr.t(keys::PROMPT_POOL_PERCENT), &(0.0..=100.0), None)?;
                PoolTopUp::PercentOfVolume {
                    surface_m2,
                    percent,
                }
            } else {
                let cubic_meters =
                    self.read_f64_in(&tr.t(keys::PROMPT_POOL_VOLUME), &(0.1..=1000.0), None)?;
                PoolTopUp::AnnualVolume { cubic_meters }
            };
            usages.push(UsageContribution::Pool { top_up });
        }

        self.say(keys::STEP_FINANCES)?;
        let price_prompt = tr.tf(
            keys::PROMPT_WATER_PRICE,
            &[("default", cfg.default_water_price_per_m3.to_string())],
        );
        let water_price_per_m3 = self.read_f64_in(
            &price_prompt,
            &WATER_PRICE_RANGE,
            Some(cfg.default_water_price_per_m3),
        )?;
        let horizon_prompt = tr.tf(
            keys::PROMPT_HORIZON,
            &[("default", cfg.default_horizon_years.to_string())],
        );
        let horizon_years = self.read_u32_in(
            &horizon_prompt,
            &HORIZON_RANGE,
            Some(cfg.default_horizon_years),
        )?;

        Ok(SimulationInputs {
            region,
            rainfall_override_mm,
            roof_surface_m2,
            roof_type,
            collection_efficiency: DEFAULT_COLLECTION_EFFICIENCY,
            usages,
            water_price_per_m3,
            horizon_years,
        })
    }
}

/// 표준 입출력으로 마법사를 실행한다.
pub fn run_wizard(cfg: &Config, tr: &Translator) -> Result<SimulationInputs, AppError> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout(), tr);
    prompter.collect_inputs(cfg)
}
