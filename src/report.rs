//! 시뮬레이션 결과를 사람이 읽는 요약 문자열로 만든다.

use std::fmt::Write;

use crate::i18n::{keys, Translator};
use crate::simulation::SimulationResults;
use crate::supply_demand::LimitingFactor;
use crate::tank::ReserveTier;

pub fn tier_label(tr: &Translator, tier: ReserveTier) -> String {
    tr.t(match tier {
        ReserveTier::Short => keys::TIER_SHORT,
        ReserveTier::Medium => keys::TIER_MEDIUM,
        ReserveTier::Long => keys::TIER_LONG,
    })
}

fn liters(v: f64) -> String {
    format!("{:.0}", v)
}

fn euros(v: f64) -> String {
    format!("{:.2}", v)
}

/// 결과 요약 텍스트를 만든다. 재무 비교는 추천 등급만 자세히 보여준다.
pub fn render_text(results: &SimulationResults, tr: &Translator) -> String {
    let mut out = String::new();
    let climate = &results.climate;
    let _ = writeln!(out, "{}", tr.t(keys::REPORT_TITLE));
    let _ = writeln!(
        out,
        "{}",
        tr.tf(
            keys::REPORT_REGION,
            &[
                ("code", climate.code.clone()),
                ("name", climate.name.unwrap_or("").to_string()),
            ],
        )
    );
    if !climate.is_calibrated {
        let _ = writeln!(out, "{}", tr.t(keys::REPORT_UNCALIBRATED));
    }
    let _ = writeln!(
        out,
        "{}",
        tr.tf(
            keys::REPORT_RAINFALL,
            &[
                ("mm", format!("{:.0}", climate.annual_rainfall_mm)),
                ("days", format!("{:.0}", climate.annual_rain_days)),
            ],
        )
    );

    let water = &results.water;
    for (key, value) in [
        (keys::REPORT_SUPPLY, water.supply_liters),
        (keys::REPORT_DEMAND, water.demand_liters),
        (keys::REPORT_USABLE, water.usable_liters),
    ] {
        let _ = writeln!(out, "{}", tr.tf(key, &[("liters", liters(value))]));
    }
    let _ = writeln!(
        out,
        "{}",
        tr.t(match water.limiting_factor {
            LimitingFactor::ResourceLimited => keys::REPORT_RESOURCE_LIMITED,
            LimitingFactor::DemandLimited => keys::REPORT_DEMAND_LIMITED,
        })
    );

    let _ = writeln!(out, "{}", tr.t(keys::REPORT_TANKS_HEADING));
    for opt in &results.tank_options {
        let price = match opt.price {
            Some(p) => format!("{} €", euros(p)),
            None => tr.t(keys::REPORT_QUOTE_REQUIRED),
        };
        let mut line = tr.tf(
            keys::REPORT_TANK_LINE,
            &[
                ("tier", tier_label(tr, opt.tier)),
                ("days", opt.reserve_days.to_string()),
                ("volume", liters(opt.volume_l)),
                ("price", price),
            ],
        );
        if opt.tier == results.recommended_tier {
            line.push_str(&tr.t(keys::REPORT_RECOMMENDED));
        }
        let _ = writeln!(out, "{line}");
    }
    if let Some(first) = results.tank_options.first() {
        let _ = writeln!(
            out,
            "{}",
            tr.tf(
                keys::REPORT_COVERAGE,
                &[("percent", format!("{:.1}", first.coverage_percent))],
            )
        );
    }

    if let Some((opt, cmp)) = results.recommended() {
        let _ = writeln!(
            out,
            "{}",
            tr.tf(
                keys::REPORT_FINANCE_HEADING,
                &[
                    ("years", results.horizon_years.to_string()),
                    ("tier", tier_label(tr, opt.tier)),
                ],
            )
        );
        let _ = writeln!(
            out,
            "{}",
            tr.tf(keys::REPORT_SAVINGS, &[("amount", euros(cmp.cumulative_savings))])
        );
        if let Some(years) = cmp.payback_years {
            let _ = writeln!(
                out,
                "{}",
                tr.tf(keys::REPORT_PAYBACK, &[("years", format!("{years:.1}"))])
            );
        }
        for acc in &cmp.accounts {
            let _ = writeln!(
                out,
                "{}",
                tr.tf(
                    keys::REPORT_ACCOUNT_LINE,
                    &[
                        ("account", acc.account.name.to_string()),
                        ("rate", format!("{:.1}", acc.account.annual_rate * 100.0)),
                        ("fv", euros(acc.future_value)),
                        ("gain", euros(acc.interest_gain)),
                        ("spread", euros(acc.spread)),
                    ],
                )
            );
            let _ = writeln!(
                out,
                "{}",
                tr.t(if acc.tank_wins {
                    keys::REPORT_TANK_WINS
                } else {
                    keys::REPORT_ACCOUNT_WINS
                })
            );
        }
        let _ = writeln!(
            out,
            "{}",
            tr.t(if cmp.all_accounts_beaten {
                keys::REPORT_ALL_BEATEN
            } else {
                keys::REPORT_NOT_ALL_BEATEN
            })
        );
    }
    out
}

/// 보정된 지역 목록을 출력용 문자열로 만든다.
pub fn render_regions(tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::REGIONS_HEADING));
    for rec in crate::region::calibrated_regions() {
        let _ = writeln!(
            out,
            "{}",
            tr.tf(
                keys::REGIONS_LINE,
                &[
                    ("code", rec.code.to_string()),
                    ("name", rec.name.to_string()),
                    ("mm", format!("{:.0}", rec.annual_rainfall_mm)),
                    ("days", format!("{:.0}", rec.annual_rain_days)),
                ],
            )
        );
    }
    out
}
