use serde::Serialize;
use utoipa::ToSchema;

use crate::models::estimate::Language;

/// Every user-facing caption of the calculator for one language.
#[derive(Debug, Serialize, ToSchema)]
pub struct Labels {
    pub title: &'static str,
    pub select_language: &'static str,
    pub monthly_units: &'static str,
    pub manual_kw: &'static str,
    pub apply_subsidy: &'static str,
    pub estimate_result: &'static str,
    pub requested_size: &'static str,
    pub actual_size: &'static str,
    pub base_cost: &'static str,
    pub subsidy: &'static str,
    pub subsidy_not_applied: &'static str,
    pub final_cost: &'static str,
    pub panels: &'static str,
    pub generation: &'static str,
    pub consumption: &'static str,
    pub surplus: &'static str,
    pub deficit: &'static str,
    pub savings: &'static str,
    pub roi: &'static str,
    pub download: &'static str,
    pub buyback_income: &'static str,
    pub import_cost: &'static str,
    pub future_savings: &'static str,
    pub payback_chart: &'static str,
    pub chart_year_axis: &'static str,
    pub chart_balance_axis: &'static str,
    pub unit_panels: &'static str,
    pub unit_per_month: &'static str,
    pub unit_per_year: &'static str,
    pub unit_per_unit: &'static str,
    pub unit_years: &'static str,
    pub over_twenty_years: &'static str,
    pub never: &'static str,
}

pub static ENGLISH: Labels = Labels {
    title: "☀️ Solar Rooftop Estimator - PM Surya Ghar",
    select_language: "Select Language",
    monthly_units: "Enter your average monthly electricity consumption (in units)",
    manual_kw: "Or enter your desired system size (in kW)",
    apply_subsidy: "Apply for PM Surya Ghar Subsidy?",
    estimate_result: "📊 Estimate Result:",
    requested_size: "✏️ Requested System Size",
    actual_size: "🔧 Actual Installed Size (after panels)",
    base_cost: "🪙 Estimated Cost",
    subsidy: "💸 Subsidy",
    subsidy_not_applied: "Not applied",
    final_cost: "🧾 Final Cost after Subsidy",
    panels: "🔌 Panels Required (525W)",
    generation: "☀️ Monthly Generation",
    consumption: "⚡ Consumption",
    surplus: "📤 Surplus",
    deficit: "📥 Deficit",
    savings: "💰 Annual Savings",
    roi: "📈 Simple ROI",
    download: "📄 Download Estimate as PDF",
    buyback_income: "💵 Buyback Income (Surplus Units)",
    import_cost: "🧾 Grid Import Cost (Deficit Units)",
    future_savings: "🌞 20-Year Savings (with price escalation)",
    payback_chart: "📉 Payback Timeline",
    chart_year_axis: "Year",
    chart_balance_axis: "Remaining balance (₹)",
    unit_panels: "panels",
    unit_per_month: "units/month",
    unit_per_year: "/year",
    unit_per_unit: "/unit",
    unit_years: "years",
    over_twenty_years: "over 20 years",
    never: "no payback",
};

pub static KANNADA: Labels = Labels {
    title: "☀️ ಸೌರ ಮೇಲ್ಛಾವಣಿ ಅಂದಾಜುಗಾರ - PM ಸೂರ್ಯ ಘರ್",
    select_language: "ಭಾಷೆ ಆಯ್ಕೆಮಾಡಿ",
    monthly_units: "ತಿಂಗಳಿಗೆ ಸರಾಸರಿ ಬಳಕೆ (ಯುನಿಟ್‌ಗಳಲ್ಲಿ) ನಮೂದಿಸಿ",
    manual_kw: "ಅಥವಾ ನೀವು ಬಯಸುವ ಸಿಸ್ಟಂ ಗಾತ್ರ (kW) ನಮೂದಿಸಿ",
    apply_subsidy: "PM ಸೂರ್ಯ ಗೃಹ ಸಬ್ಸಿಡಿಗೆ ಅರ್ಜಿ ಹಾಕಿದೀರಿ?",
    estimate_result: "📊 ಅಂದಾಜು ಫಲಿತಾಂಶ:",
    requested_size: "✏️ ವಿನಂತಿಸಿದ ಸಿಸ್ಟಂ ಗಾತ್ರ",
    actual_size: "🔧 ಸ್ಥಾಪಿತ ಗಾತ್ರ (ಪ್ಯಾನೆಲ್‌ಗಳ ನಂತರ)",
    base_cost: "🪙 ಅಂದಾಜಿತ ವೆಚ್ಚ",
    subsidy: "💸 ಸಬ್ಸಿಡಿ",
    subsidy_not_applied: "ಅನ್ವಯಿಸಿಲ್ಲ",
    final_cost: "🧾 ಸಬ್ಸಿಡಿಯ ನಂತರದ ವೆಚ್ಚ",
    panels: "🔌 ಬೇಕಾಗುವ ಪ್ಯಾನೆಲ್‌ಗಳು (525W)",
    generation: "☀️ ತಿಂಗಳ ಉತ್ಪಾದನೆ",
    consumption: "⚡ ಬಳಕೆ",
    surplus: "📤 ಹೆಚ್ಚುವರಿ",
    deficit: "📥 ಕೊರತೆ",
    savings: "💰 ವಾರ್ಷಿಕ ಉಳಿತಾಯ",
    roi: "📈 ಹೂಡಿಕೆ ಮರುಪಾವತಿ",
    download: "📄 PDF ಆಗಿ ಡೌನ್ಲೋಡ್ ಮಾಡಿ",
    buyback_income: "💵 ಮಾರಾಟ ಆದಾಯ",
    import_cost: "🧾 ಜಾಲಿಸಿದ ವಿದ್ಯುತ್ ಖರ್ಚು",
    future_savings: "🌞 20 ವರ್ಷದ ಉಳಿತಾಯ (ಬೆಲೆ ಏರಿಕೆ ಒಳಗೊಂಡು)",
    payback_chart: "📉 ಮರುಪಾವತಿ ಕಾಲರೇಖೆ",
    chart_year_axis: "ವರ್ಷ",
    chart_balance_axis: "ಉಳಿದ ಮೊತ್ತ (₹)",
    unit_panels: "ಪ್ಯಾನೆಲ್‌ಗಳು",
    unit_per_month: "ಯುನಿಟ್/ತಿಂಗಳು",
    unit_per_year: "/ವರ್ಷ",
    unit_per_unit: "/ಯುನಿಟ್",
    unit_years: "ವರ್ಷಗಳು",
    over_twenty_years: "20 ವರ್ಷಗಳಲ್ಲಿ",
    never: "ಮರುಪಾವತಿ ಇಲ್ಲ",
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Self {
        match language {
            Language::English => &ENGLISH,
            Language::Kannada => &KANNADA,
        }
    }
}
