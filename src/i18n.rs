use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_OUT_OF_RANGE: &str = "error.out_of_range";
    pub const ERROR_YES_NO: &str = "error.yes_no";

    pub const WIZARD_TITLE: &str = "wizard.title";
    pub const STEP_LOCATION: &str = "wizard.step_location";
    pub const PROMPT_LOCATION: &str = "prompt.location";
    pub const PROMPT_RAINFALL_OVERRIDE: &str = "prompt.rainfall_override";
    pub const STEP_ROOF: &str = "wizard.step_roof";
    pub const PROMPT_ROOF_SURFACE: &str = "prompt.roof_surface";
    pub const PROMPT_ROOF_TYPE: &str = "prompt.roof_type";
    pub const STEP_USAGES: &str = "wizard.step_usages";
    pub const PROMPT_TOILETS_ENABLE: &str = "prompt.toilets_enable";
    pub const PROMPT_PERSONS: &str = "prompt.persons";
    pub const PROMPT_GARDEN_ENABLE: &str = "prompt.garden_enable";
    pub const PROMPT_GARDEN_AREA: &str = "prompt.garden_area";
    pub const PROMPT_WATERING: &str = "prompt.watering";
    pub const PROMPT_CAR_ENABLE: &str = "prompt.car_enable";
    pub const PROMPT_CAR_WASHES: &str = "prompt.car_washes";
    pub const PROMPT_POOL_ENABLE: &str = "prompt.pool_enable";
    pub const PROMPT_POOL_MODE: &str = "prompt.pool_mode";
    pub const PROMPT_POOL_VOLUME: &str = "prompt.pool_volume";
    pub const PROMPT_POOL_SURFACE: &str = "prompt.pool_surface";
    pub const PROMPT_POOL_PERCENT: &str = "prompt.pool_percent";
    pub const STEP_FINANCES: &str = "wizard.step_finances";
    pub const PROMPT_WATER_PRICE: &str = "prompt.water_price";
    pub const PROMPT_HORIZON: &str = "prompt.horizon";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_REGION: &str = "report.region";
    pub const REPORT_UNCALIBRATED: &str = "report.uncalibrated";
    pub const REPORT_RAINFALL: &str = "report.rainfall";
    pub const REPORT_SUPPLY: &str = "report.supply";
    pub const REPORT_DEMAND: &str = "report.demand";
    pub const REPORT_USABLE: &str = "report.usable";
    pub const REPORT_RESOURCE_LIMITED: &str = "report.resource_limited";
    pub const REPORT_DEMAND_LIMITED: &str = "report.demand_limited";
    pub const REPORT_TANKS_HEADING: &str = "report.tanks_heading";
    pub const TIER_SHORT: &str = "tier.short";
    pub const TIER_MEDIUM: &str = "tier.medium";
    pub const TIER_LONG: &str = "tier.long";
    pub const REPORT_TANK_LINE: &str = "report.tank_line";
    pub const REPORT_QUOTE_REQUIRED: &str = "report.quote_required";
    pub const REPORT_RECOMMENDED: &str = "report.recommended";
    pub const REPORT_COVERAGE: &str = "report.coverage";
    pub const REPORT_FINANCE_HEADING: &str = "report.finance_heading";
    pub const REPORT_SAVINGS: &str = "report.savings";
    pub const REPORT_PAYBACK: &str = "report.payback";
    pub const REPORT_ACCOUNT_LINE: &str = "report.account_line";
    pub const REPORT_TANK_WINS: &str = "report.tank_wins";
    pub const REPORT_ACCOUNT_WINS: &str = "report.account_wins";
    pub const REPORT_ALL_BEATEN: &str = "report.all_beaten";
    pub const REPORT_NOT_ALL_BEATEN: &str = "report.not_all_beaten";

    pub const REGIONS_HEADING: &str = "regions.heading";
    pub const REGIONS_LINE: &str = "regions.line";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Fr,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Fr
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(fr/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 fr로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 프랑스어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        let s = match self.lang {
            Language::En => en(key).unwrap_or_else(|| fr(key)),
            Language::Fr => fr(key),
        };
        s.to_string()
    }

    /// `{name}` 자리표시자를 채운 번역을 가져온다.
    pub fn tf(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut s = self.t(key);
        for (name, value) in args {
            s = s.replace(&format!("{{{name}}}"), value);
        }
        s
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "fr".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("fr") => Some("fr".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "fr" => Some("fr".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    for var in ["LC_ALL", "LANG"] {
        if let Some(code) = std::env::var(var).ok().as_deref().and_then(normalize_locale_string) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn fr(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Erreur",
        ERROR_INVALID_NUMBER => "Veuillez saisir un nombre.",
        ERROR_OUT_OF_RANGE => "La valeur doit être comprise entre {min} et {max}.",
        ERROR_YES_NO => "Répondez par o (oui) ou n (non).",
        WIZARD_TITLE => "\n=== Simulateur récupérateur d'eau de pluie ===",
        STEP_LOCATION => "\n-- Étape 1/4 : localisation --",
        PROMPT_LOCATION => "Code postal ou numéro de département : ",
        PROMPT_RAINFALL_OVERRIDE => "Pluviométrie annuelle connue en mm (vide pour la valeur régionale) : ",
        STEP_ROOF => "\n-- Étape 2/4 : toiture --",
        PROMPT_ROOF_SURFACE => "Surface de toiture en m² (10-1000) : ",
        PROMPT_ROOF_TYPE => "Type de toiture : 1=tuiles 2=tôle 3=toit plat : ",
        STEP_USAGES => "\n-- Étape 3/4 : usages --",
        PROMPT_TOILETS_ENABLE => "Alimenter les WC ? (o/n) : ",
        PROMPT_PERSONS => "Nombre de personnes (1-20) : ",
        PROMPT_GARDEN_ENABLE => "Arroser le jardin ? (o/n) : ",
        PROMPT_GARDEN_AREA => "Surface du jardin en m² : ",
        PROMPT_WATERING => "Intensité d'arrosage : 1=faible 2=moyenne 3=forte : ",
        PROMPT_CAR_ENABLE => "Laver la voiture ? (o/n) : ",
        PROMPT_CAR_WASHES => "Lavages par mois (1-30) : ",
        PROMPT_POOL_ENABLE => "Remplir la piscine ? (o/n) : ",
        PROMPT_POOL_MODE => "Appoint : 1=volume annuel en m³ 2=pourcentage du volume : ",
        PROMPT_POOL_VOLUME => "Volume d'appoint annuel en m³ : ",
        PROMPT_POOL_SURFACE => "Surface de la piscine en m² : ",
        PROMPT_POOL_PERCENT => "Appoint annuel en % du volume : ",
        STEP_FINANCES => "\n-- Étape 4/4 : finances --",
        PROMPT_WATER_PRICE => "Prix de l'eau en €/m³ (5-15, vide = {default}) : ",
        PROMPT_HORIZON => "Horizon en années (5-20, vide = {default}) : ",
        REPORT_TITLE => "\n=== Résultats de la simulation ===",
        REPORT_REGION => "Département : {code} {name}",
        REPORT_UNCALIBRATED => "Département non calibré : valeurs climatiques par défaut utilisées.",
        REPORT_RAINFALL => "Pluviométrie : {mm} mm/an, {days} jours de pluie/an",
        REPORT_SUPPLY => "Eau récupérable : {liters} L/an",
        REPORT_DEMAND => "Besoins : {liters} L/an",
        REPORT_USABLE => "Volume utilisable : {liters} L/an",
        REPORT_RESOURCE_LIMITED => "Limité par la ressource (pluie).",
        REPORT_DEMAND_LIMITED => "Limité par les besoins.",
        REPORT_TANKS_HEADING => "\n-- Cuves proposées --",
        TIER_SHORT => "Courte réserve",
        TIER_MEDIUM => "Réserve moyenne",
        TIER_LONG => "Longue réserve",
        REPORT_TANK_LINE => "{tier} : {days} jours, {volume} L, {price}",
        REPORT_QUOTE_REQUIRED => "sur devis",
        REPORT_RECOMMENDED => " (recommandée)",
        REPORT_COVERAGE => "Couverture des besoins : {percent} %",
        REPORT_FINANCE_HEADING => "\n-- Comparaison financière sur {years} ans ({tier}) --",
        REPORT_SAVINGS => "Économies cumulées sur l'eau : {amount} €",
        REPORT_PAYBACK => "Retour sur investissement : {years} ans",
        REPORT_ACCOUNT_LINE => "{account} ({rate} %) : valeur future {fv} €, intérêts {gain} €, écart {spread} €",
        REPORT_TANK_WINS => "  → la cuve est plus rentable",
        REPORT_ACCOUNT_WINS => "  → le placement est plus rentable",
        REPORT_ALL_BEATEN => "La cuve bat tous les placements comparés.",
        REPORT_NOT_ALL_BEATEN => "Au moins un placement rapporte davantage que la cuve.",
        REGIONS_HEADING => "Départements calibrés :",
        REGIONS_LINE => "{code}  {name}  {mm} mm/an  {days} j/an",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_OUT_OF_RANGE => "Value must be between {min} and {max}.",
        ERROR_YES_NO => "Answer y (yes) or n (no).",
        WIZARD_TITLE => "\n=== Rainwater tank simulator ===",
        STEP_LOCATION => "\n-- Step 1/4: location --",
        PROMPT_LOCATION => "Postal code or department number: ",
        PROMPT_RAINFALL_OVERRIDE => "Known annual rainfall in mm (empty for regional value): ",
        STEP_ROOF => "\n-- Step 2/4: roof --",
        PROMPT_ROOF_SURFACE => "Roof surface in m² (10-1000): ",
        PROMPT_ROOF_TYPE => "Roof type: 1=tile 2=corrugated 3=flat: ",
        STEP_USAGES => "\n-- Step 3/4: usages --",
        PROMPT_TOILETS_ENABLE => "Supply the toilets? (y/n): ",
        PROMPT_PERSONS => "Number of persons (1-20): ",
        PROMPT_GARDEN_ENABLE => "Water the garden? (y/n): ",
        PROMPT_GARDEN_AREA => "Garden area in m²: ",
        PROMPT_WATERING => "Watering intensity: 1=low 2=medium 3=high: ",
        PROMPT_CAR_ENABLE => "Wash the car? (y/n): ",
        PROMPT_CAR_WASHES => "Washes per month (1-30): ",
        PROMPT_POOL_ENABLE => "Top up the pool? (y/n): ",
        PROMPT_POOL_MODE => "Top-up: 1=annual volume in m³ 2=percent of volume: ",
        PROMPT_POOL_VOLUME => "Annual top-up volume in m³: ",
        PROMPT_POOL_SURFACE => "Pool surface in m²: ",
        PROMPT_POOL_PERCENT => "Annual top-up in % of volume: ",
        STEP_FINANCES => "\n-- Step 4/4: finances --",
        PROMPT_WATER_PRICE => "Water price in €/m³ (5-15, empty = {default}): ",
        PROMPT_HORIZON => "Horizon in years (5-20, empty = {default}): ",
        REPORT_TITLE => "\n=== Simulation results ===",
        REPORT_REGION => "Department: {code} {name}",
        REPORT_UNCALIBRATED => "Uncalibrated department: default climate values used.",
        REPORT_RAINFALL => "Rainfall: {mm} mm/year, {days} rain days/year",
        REPORT_SUPPLY => "Collectible water: {liters} L/year",
        REPORT_DEMAND => "Demand: {liters} L/year",
        REPORT_USABLE => "Usable volume: {liters} L/year",
        REPORT_RESOURCE_LIMITED => "Limited by the resource (rain).",
        REPORT_DEMAND_LIMITED => "Limited by demand.",
        REPORT_TANKS_HEADING => "\n-- Suggested tanks --",
        TIER_SHORT => "Short reserve",
        TIER_MEDIUM => "Medium reserve",
        TIER_LONG => "Long reserve",
        REPORT_TANK_LINE => "{tier}: {days} days, {volume} L, {price}",
        REPORT_QUOTE_REQUIRED => "quote required",
        REPORT_RECOMMENDED => " (recommended)",
        REPORT_COVERAGE => "Demand coverage: {percent} %",
        REPORT_FINANCE_HEADING => "\n-- Financial comparison over {years} years ({tier}) --",
        REPORT_SAVINGS => "Cumulative water savings: {amount} €",
        REPORT_PAYBACK => "Payback: {years} years",
        REPORT_ACCOUNT_LINE => "{account} ({rate} %): future value {fv} €, interest {gain} €, spread {spread} €",
        REPORT_TANK_WINS => "  → the tank pays off more",
        REPORT_ACCOUNT_WINS => "  → the account pays off more",
        REPORT_ALL_BEATEN => "The tank beats every compared account.",
        REPORT_NOT_ALL_BEATEN => "At least one account earns more than the tank.",
        REGIONS_HEADING => "Calibrated departments:",
        REGIONS_LINE => "{code}  {name}  {mm} mm/yr  {days} d/yr",
        _ => return None,
    };
    Some(s)
}
