use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rainwater_simulator::{
    app::{self, AppError},
    config::{self, OutputFormat},
    i18n::{self, keys, Translator},
    region,
    simulation::SimulationInputs,
    supply_demand::DEFAULT_COLLECTION_EFFICIENCY,
    usage::{PoolTopUp, RoofType, UsageContribution, WateringIntensity},
};

#[derive(Debug, Parser)]
#[command(name = "rainwater_simulator", version, about = "Rainwater tank vs savings account simulator")]
struct Cli {
    /// Interface language: auto, fr or en
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,
    /// Path of the configuration file
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a simulation from command-line flags
    Simulate(SimulateArgs),
    /// Fill in the form step by step
    Wizard {
        #[arg(long)]
        json: bool,
    },
    /// List calibrated departments
    Regions,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoofArg {
    Tile,
    Corrugated,
    Flat,
}

impl From<RoofArg> for RoofType {
    fn from(value: RoofArg) -> Self {
        match value {
            RoofArg::Tile => RoofType::Tile,
            RoofArg::Corrugated => RoofType::Corrugated,
            RoofArg::Flat => RoofType::Flat,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WateringArg {
    Low,
    Medium,
    High,
}

impl From<WateringArg> for WateringIntensity {
    fn from(value: WateringArg) -> Self {
        match value {
            WateringArg::Low => WateringIntensity::Low,
            WateringArg::Medium => WateringIntensity::Medium,
            WateringArg::High => WateringIntensity::High,
        }
    }
}

#[derive(Debug, Args)]
struct SimulateArgs {
    /// Department code (e.g. 75, 2A)
    #[arg(long, conflicts_with = "postal_code", required_unless_present = "postal_code")]
    region: Option<String>,
    /// Five-digit postal code
    #[arg(long)]
    postal_code: Option<String>,
    /// Known annual rainfall in mm, replaces the regional figure
    #[arg(long)]
    rainfall_mm: Option<f64>,
    /// Roof surface in m²
    #[arg(long)]
    roof_surface: f64,
    #[arg(long, value_enum)]
    roof_type: Option<RoofArg>,
    /// Persons using the toilets
    #[arg(long)]
    toilets: Option<u32>,
    /// Garden area in m²
    #[arg(long)]
    garden_area: Option<f64>,
    #[arg(long, value_enum, default_value = "medium")]
    watering: WateringArg,
    /// Car washes per month
    #[arg(long)]
    car_washes: Option<u32>,
    /// Annual pool top-up volume in m³
    #[arg(long, conflicts_with = "pool_surface")]
    pool_top_up_m3: Option<f64>,
    /// Pool surface in m², used with --pool-top-up-percent
    #[arg(long, requires = "pool_top_up_percent")]
    pool_surface: Option<f64>,
    #[arg(long, requires = "pool_surface")]
    pool_top_up_percent: Option<f64>,
    /// Water price in EUR/m³
    #[arg(long)]
    water_price: Option<f64>,
    /// Horizon in years
    #[arg(long)]
    horizon: Option<u32>,
    #[arg(long)]
    json: bool,
}

impl SimulateArgs {
    fn into_inputs(self, cfg: &config::Config) -> SimulationInputs {
        let region = match (self.postal_code, self.region) {
            (Some(cp), _) => region::resolve_region_identifier(&cp),
            (None, Some(code)) => region::resolve_region_identifier(&code),
            (None, None) => String::new(),
        };
        let mut usages = Vec::new();
        if let Some(persons) = self.toilets {
            usages.push(UsageContribution::Toilets { persons });
        }
        if let Some(surface_m2) = self.garden_area {
            usages.push(UsageContribution::Garden {
                surface_m2,
                intensity: self.watering.into(),
            });
        }
        if let Some(washes_per_month) = self.car_washes {
            usages.push(UsageContribution::CarWashing { washes_per_month });
        }
        if let Some(cubic_meters) = self.pool_top_up_m3 {
            usages.push(UsageContribution::Pool {
                top_up: PoolTopUp::AnnualVolume { cubic_meters },
            });
        } else if let (Some(surface_m2), Some(percent)) =
            (self.pool_surface, self.pool_top_up_percent)
        {
            usages.push(UsageContribution::Pool {
                top_up: PoolTopUp::PercentOfVolume {
                    surface_m2,
                    percent,
                },
            });
        }
        SimulationInputs {
            region,
            rainfall_override_mm: self.rainfall_mm,
            roof_surface_m2: self.roof_surface,
            roof_type: self
                .roof_type
                .map(RoofType::from)
                .unwrap_or(cfg.default_roof_type),
            collection_efficiency: DEFAULT_COLLECTION_EFFICIENCY,
            usages,
            water_price_per_m3: self.water_price.unwrap_or(cfg.default_water_price_per_m3),
            horizon_years: self.horizon.unwrap_or(cfg.default_horizon_years),
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = match config::load_or_default_at(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("falling back to default config: {err}");
            config::Config::default()
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, None);
    match try_run(cli.command, &cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(command: Command, cfg: &config::Config, tr: &Translator) -> Result<(), AppError> {
    let format_for = |json: bool| if json { OutputFormat::Json } else { cfg.output_format };
    match command {
        Command::Simulate(args) => {
            let format = format_for(args.json);
            let inputs = args.into_inputs(cfg);
            app::run_simulation(&inputs, format, tr)
        }
        Command::Wizard { json } => app::run_wizard(cfg, format_for(json), tr),
        Command::Regions => {
            app::run_regions(tr);
            Ok(())
        }
    }
}
