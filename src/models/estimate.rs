use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::config::{EstimatorPolicy, TariffConfig};

// ─── Estimator values ────────────────────────────────────────────────────────

/// Inputs of a single estimate. Callers reject out-of-range values first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct EstimateInput {
    /// Average monthly consumption (units)
    pub monthly_consumption_units: f64,
    /// System size asked for (kW), at least 0.5
    pub requested_size_kw: f64,
    pub subsidy_requested: bool,
}

/// Simple payback period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Roi {
    Finite { years: f64 },
    /// Savings are not positive, so the installation never pays back.
    Unbounded,
}

impl Roi {
    pub fn years(&self) -> Option<f64> {
        match self {
            Self::Finite { years } => Some(*years),
            Self::Unbounded => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EstimateResult {
    // ── Sizing ───────────────────────────────────────────────────────────────
    pub panels_required: u32,
    /// Installed capacity, a whole number of panels (kW)
    pub actual_size_kw: f64,

    // ── Cost ─────────────────────────────────────────────────────────────────
    pub base_cost: f64,
    pub subsidy_amount: f64,
    pub final_cost: f64,

    // ── Energy ───────────────────────────────────────────────────────────────
    pub monthly_generation_units: f64,
    pub annual_generation_units: f64,
    /// Monthly export to the grid
    pub surplus_units: f64,
    /// Monthly import from the grid
    pub deficit_units: f64,

    // ── Money flows ──────────────────────────────────────────────────────────
    /// Price paid per exported unit (₹)
    pub buyback_rate_per_unit: f64,
    pub buyback_income_annual: f64,
    pub import_cost_annual: f64,
    pub annual_savings: f64,
    pub roi_years: Roi,
    /// Savings over 20 years with price escalation, when projected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twenty_year_savings: Option<f64>,
}

/// Remaining investment after `year` years of savings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct PaybackPoint {
    pub year: u32,
    pub remaining_balance: f64,
}

// ─── Presentation ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum Language {
    #[default]
    #[serde(alias = "english", alias = "en")]
    English,
    #[serde(alias = "kannada", alias = "kn")]
    Kannada,
}

/// One rendered row of the textual summary.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SummaryLine {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

// ─── REST API request / response types ───────────────────────────────────────

fn default_monthly_units() -> f64 { 300.0 }

/// Form state as submitted by the page, either as query parameters or JSON.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EstimateRequest {
    /// Average monthly consumption (units), defaults to 300
    #[serde(default = "default_monthly_units")]
    #[validate(range(min = 0.0))]
    pub monthly_units: f64,
    /// Desired system size (kW, 0.5 to 1000); the suggested size is used when absent
    #[validate(range(min = 0.5, max = 1000.0))]
    pub requested_kw: Option<f64>,
    /// Apply for the PM Surya Ghar subsidy
    #[serde(default)]
    pub subsidy: bool,
    #[serde(default)]
    #[param(inline)]
    pub language: Language,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EstimateResponse {
    pub generated_at: DateTime<Utc>,
    pub language: Language,
    pub input: EstimateInput,
    pub result: EstimateResult,
    pub summary: Vec<SummaryLine>,
    /// Years 0–10, present when the payback chart is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payback: Option<Vec<PaybackPoint>>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SuggestQuery {
    #[validate(range(min = 0.0))]
    pub monthly_units: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestedSize {
    pub monthly_units: f64,
    pub suggested_kw: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TariffResponse {
    pub tariff: TariffConfig,
    /// Grid price per unit including tax
    pub total_rate: f64,
    pub policy: EstimatorPolicy,
    pub payback_chart: bool,
}
