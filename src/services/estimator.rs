//! ============================================================
//!  Rooftop Solar Cost, Generation & Payback Estimator
//!
//!  Pipeline:
//!   1. Sizing         – whole panels covering the requested kW
//!   2. Cost           – installed cost from capacity
//!   3. Subsidy        – PM Surya Ghar slab (panel count or size keyed)
//!   4. Generation     – monthly / annual units from daily yield
//!   5. Net metering   – surplus export vs. deficit import
//!   6. Savings        – avoided grid cost + buyback income
//!   7. Payback        – simple ROI, optional 20-year projection
//! ============================================================

use crate::config::{EstimatorPolicy, RoundingPolicy, SubsidyTierPolicy, TariffConfig};
use crate::models::estimate::{EstimateInput, EstimateResult, PaybackPoint, Roi};

// ─── Fixed scheme constants ──────────────────────────────────
const DAYS_PER_MONTH: f64 = 30.0;
const MONTHS_PER_YEAR: f64 = 12.0;
const PROJECTION_YEARS: u32 = 20;

/// Typical monthly units produced per installed kW, used for the size hint.
const UNITS_PER_KW_MONTH: f64 = 126.0;
const MIN_SIZE_KW: f64 = 0.5;
/// Largest system the estimator sizes; keeps panel counts well inside `u32`.
pub const MAX_SIZE_KW: f64 = 1000.0;

const SUBSIDY_SLABS: [f64; 3] = [30_000.0, 60_000.0, 78_000.0];

const BUYBACK_RATE_UNSUBSIDISED: f64 = 3.86;
/// (upper bound kW, ₹/unit); anything larger gets `BUYBACK_RATE_LARGE`.
const BUYBACK_TIERS_SUBSIDISED: [(f64, f64); 2] = [(2.0, 2.30), (3.0, 2.48)];
const BUYBACK_RATE_LARGE: f64 = 2.93;

/// Rounds to `decimals` places, ties to even.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Size pre-filled in the form for a given consumption.
pub fn suggested_size_kw(monthly_units: f64) -> f64 {
    round_to(monthly_units / UNITS_PER_KW_MONTH, 2).max(MIN_SIZE_KW)
}

/// Main entry point – one full estimate, no state carried between calls.
pub fn compute(input: &EstimateInput, tariff: &TariffConfig, policy: &EstimatorPolicy) -> EstimateResult {
    // ── 1. Sizing ──────────────────────────────────────────────
    let panels_required = panel_count(input.requested_size_kw, tariff.panel_wattage, policy.rounding);
    let actual_size_kw = round_to(f64::from(panels_required) * tariff.panel_kw(), 3);

    // ── 2. Cost ────────────────────────────────────────────────
    let base_cost = actual_size_kw * tariff.cost_per_kw;

    // ── 3. Subsidy ─────────────────────────────────────────────
    let subsidy_amount = if input.subsidy_requested {
        subsidy_slab(panels_required, actual_size_kw, policy.subsidy_tiers)
    } else {
        0.0
    };
    let final_cost = base_cost - subsidy_amount;

    // ── 4. Generation ──────────────────────────────────────────
    let monthly_generation_units = round_to(actual_size_kw * tariff.daily_gen_per_kw_hours * DAYS_PER_MONTH, 1);
    let annual_generation_units = round_to(monthly_generation_units * MONTHS_PER_YEAR, 1);

    // ── 5. Net metering ────────────────────────────────────────
    let buyback_rate_per_unit = buyback_rate(input.subsidy_requested, actual_size_kw);
    let consumption = input.monthly_consumption_units;
    let surplus_units = round_to((monthly_generation_units - consumption).max(0.0), 1);
    let deficit_units = round_to((consumption - monthly_generation_units).max(0.0), 1);

    let total_rate = tariff.total_rate();
    let buyback_income_annual = round_to(surplus_units * buyback_rate_per_unit * MONTHS_PER_YEAR, 2);
    let import_cost_annual = round_to(deficit_units * total_rate * MONTHS_PER_YEAR, 2);

    // ── 6. Savings ─────────────────────────────────────────────
    let self_consumed_monthly = monthly_generation_units - surplus_units;
    let annual_savings = round_to(
        self_consumed_monthly * total_rate * MONTHS_PER_YEAR + buyback_income_annual,
        2,
    );

    // ── 7. Payback ─────────────────────────────────────────────
    let roi_years = if annual_savings > 0.0 {
        Roi::Finite { years: round_to(final_cost / annual_savings, 2) }
    } else {
        Roi::Unbounded
    };
    let twenty_year_savings = policy
        .twenty_year_projection
        .then(|| projected_savings(annual_savings, tariff.price_escalation_rate, PROJECTION_YEARS));

    EstimateResult {
        panels_required,
        actual_size_kw,
        base_cost,
        subsidy_amount,
        final_cost,
        monthly_generation_units,
        annual_generation_units,
        surplus_units,
        deficit_units,
        buyback_rate_per_unit,
        buyback_income_annual,
        import_cost_annual,
        annual_savings,
        roi_years,
        twenty_year_savings,
    }
}

/// Remaining balance of the investment for years `0..=years`.
pub fn payback_series(result: &EstimateResult, years: u32) -> Vec<PaybackPoint> {
    (0..=years)
        .map(|year| PaybackPoint {
            year,
            remaining_balance: result.final_cost - result.annual_savings * f64::from(year),
        })
        .collect()
}

fn panel_count(requested_kw: f64, panel_wattage: f64, rounding: RoundingPolicy) -> u32 {
    let exact = requested_kw * 1000.0 / panel_wattage;
    let panels = match rounding {
        RoundingPolicy::Ceil => exact.ceil(),
        RoundingPolicy::Nearest => exact.round_ties_even(),
    };
    (panels as u32).max(1)
}

fn subsidy_slab(panels: u32, actual_size_kw: f64, tiers: SubsidyTierPolicy) -> f64 {
    let slab = match tiers {
        SubsidyTierPolicy::PanelCount => match panels {
            0..=2 => 0,
            3..=4 => 1,
            _ => 2,
        },
        SubsidyTierPolicy::SystemSize if actual_size_kw <= 1.0 => 0,
        SubsidyTierPolicy::SystemSize if actual_size_kw <= 2.0 => 1,
        SubsidyTierPolicy::SystemSize => 2,
    };
    SUBSIDY_SLABS[slab]
}

fn buyback_rate(subsidy_applied: bool, actual_size_kw: f64) -> f64 {
    if !subsidy_applied {
        return BUYBACK_RATE_UNSUBSIDISED;
    }
    BUYBACK_TIERS_SUBSIDISED
        .iter()
        .find(|(upper_kw, _)| actual_size_kw <= *upper_kw)
        .map_or(BUYBACK_RATE_LARGE, |(_, rate)| *rate)
}

/// Sum of `years` annual savings growing by `escalation` each year.
/// Rounded once at the end, not per term.
fn projected_savings(annual_savings: f64, escalation: f64, years: u32) -> f64 {
    let mut total = 0.0;
    let mut current = annual_savings;
    for _ in 0..years {
        total += current;
        current *= 1.0 + escalation;
    }
    round_to(total, 2)
}
