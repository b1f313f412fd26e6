use crate::models::estimate::{EstimateInput, EstimateResult, Roi, SummaryLine};
use crate::services::labels::Labels;

/// `₹` followed by the whole-rupee part with comma thousands grouping.
pub fn format_rupees(amount: f64) -> String {
    format!("₹{}", group_thousands(amount))
}

/// Integer part of `amount` (truncated toward zero) grouped as `1,234,567`.
pub fn group_thousands(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn format_roi(roi: Roi, labels: &Labels) -> String {
    match roi {
        Roi::Finite { years } => format!("{years} {}", labels.unit_years),
        Roi::Unbounded => format!("∞ ({})", labels.never),
    }
}

/// Localized key/value rows describing an estimate, in display order.
pub fn summary_lines(input: &EstimateInput, result: &EstimateResult, labels: &'static Labels) -> Vec<SummaryLine> {
    let mut lines = Vec::with_capacity(13);
    let mut push = |key: &'static str, label: &'static str, value: String| {
        lines.push(SummaryLine { key, label, value });
    };

    push("requested_size", labels.requested_size, format!("{} kW", input.requested_size_kw));
    push(
        "actual_size",
        labels.actual_size,
        format!("{} kW ({} {})", result.actual_size_kw, result.panels_required, labels.unit_panels),
    );
    push("base_cost", labels.base_cost, format_rupees(result.base_cost));

    if input.subsidy_requested {
        push("subsidy", labels.subsidy, format_rupees(result.subsidy_amount));
        push("final_cost", labels.final_cost, format_rupees(result.final_cost));
    } else {
        push("subsidy", labels.subsidy, labels.subsidy_not_applied.to_string());
    }

    push(
        "generation",
        labels.generation,
        format!("{} {}", result.monthly_generation_units, labels.unit_per_month),
    );
    push(
        "consumption",
        labels.consumption,
        format!("{} {}", input.monthly_consumption_units, labels.unit_per_month),
    );

    if result.surplus_units > 0.0 {
        push("surplus", labels.surplus, format!("{} {}", result.surplus_units, labels.unit_per_month));
        push(
            "buyback_income",
            labels.buyback_income,
            format!(
                "{}{} (₹{}{})",
                format_rupees(result.buyback_income_annual),
                labels.unit_per_year,
                result.buyback_rate_per_unit,
                labels.unit_per_unit,
            ),
        );
    }
    if result.deficit_units > 0.0 {
        push("deficit", labels.deficit, format!("{} {}", result.deficit_units, labels.unit_per_month));
        push(
            "import_cost",
            labels.import_cost,
            format!("{}{}", format_rupees(result.import_cost_annual), labels.unit_per_year),
        );
    }

    push(
        "savings",
        labels.savings,
        format!("{}{}", format_rupees(result.annual_savings), labels.unit_per_year),
    );
    if let Some(projected) = result.twenty_year_savings {
        push(
            "future_savings",
            labels.future_savings,
            format!("{} ({})", format_rupees(projected), labels.over_twenty_years),
        );
    }
    push("roi", labels.roi, format_roi(result.roi_years, labels));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EstimatorPolicy, TariffConfig};
    use crate::services::estimator;
    use crate::services::labels::{ENGLISH, KANNADA};
    use rstest::rstest;

    fn lines_for(units: f64, kw: f64, subsidy: bool, labels: &'static Labels) -> Vec<SummaryLine> {
        let input = EstimateInput {
            monthly_consumption_units: units,
            requested_size_kw: kw,
            subsidy_requested: subsidy,
        };
        let result = estimator::compute(&input, &TariffConfig::default(), &EstimatorPolicy::default());
        summary_lines(&input, &result, labels)
    }

    fn value<'a>(lines: &'a [SummaryLine], key: &str) -> Option<&'a str> {
        lines.iter().find(|line| line.key == key).map(|line| line.value.as_str())
    }

    #[rstest]
    #[case(0.0, "0")]
    #[case(999.99, "999")]
    #[case(1000.0, "1,000")]
    #[case(170_625.0, "170,625")]
    #[case(834_763.57, "834,763")]
    #[case(1_234_567.0, "1,234,567")]
    #[case(-45_500.5, "-45,500")]
    fn test_group_thousands(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(group_thousands(amount), expected);
    }

    #[test]
    fn test_subsidised_surplus_summary() {
        let lines = lines_for(300.0, 2.4, true, &ENGLISH);
        let keys: Vec<_> = lines.iter().map(|line| line.key).collect();
        assert_eq!(
            keys,
            [
                "requested_size", "actual_size", "base_cost", "subsidy", "final_cost",
                "generation", "consumption", "surplus", "buyback_income", "savings",
                "future_savings", "roi",
            ]
        );
        assert_eq!(value(&lines, "actual_size"), Some("2.625 kW (5 panels)"));
        assert_eq!(value(&lines, "base_cost"), Some("₹170,625"));
        assert_eq!(value(&lines, "final_cost"), Some("₹92,625"));
        assert_eq!(value(&lines, "generation"), Some("330.8 units/month"));
        assert_eq!(value(&lines, "buyback_income"), Some("₹916/year (₹2.48/unit)"));
        assert_eq!(value(&lines, "savings"), Some("₹25,245/year"));
        assert_eq!(value(&lines, "roi"), Some("3.67 years"));
    }

    #[test]
    fn test_unsubsidised_deficit_summary() {
        let lines = lines_for(500.0, 1.0, false, &ENGLISH);
        assert_eq!(value(&lines, "subsidy"), Some("Not applied"));
        assert_eq!(value(&lines, "final_cost"), None);
        assert_eq!(value(&lines, "surplus"), None);
        assert_eq!(value(&lines, "deficit"), Some("367.7 units/month"));
        assert_eq!(value(&lines, "import_cost"), Some("₹29,819/year"));
    }

    #[test]
    fn test_kannada_captions() {
        let lines = lines_for(300.0, 2.4, false, &KANNADA);
        let savings = lines.iter().find(|line| line.key == "savings").unwrap();
        assert_eq!(savings.label, KANNADA.savings);
        assert!(savings.value.ends_with("/ವರ್ಷ"));
    }

    #[test]
    fn test_unbounded_roi() {
        assert_eq!(format_roi(Roi::Unbounded, &ENGLISH), "∞ (no payback)");
        assert_eq!(format_roi(Roi::Finite { years: 6.5 }, &ENGLISH), "6.5 years");
    }
}
