//! Single-page A4 estimate summary.
//!
//! Layout is fixed: a bold title at (100, 800) pt, then one line per field
//! 18 pt apart starting at y = 780. The built-in PDF fonts only cover
//! WinAnsi, so the document is English and prints rupees as `Rs.`.

use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Pt};
use thiserror::Error;

use crate::models::estimate::{EstimateInput, EstimateResult};
use crate::services::summary::group_thousands;

pub const FILE_NAME: &str = "solar_estimate.pdf";
pub const TITLE: &str = "Solar Rooftop Estimation Summary";

const PAGE_WIDTH_PT: f32 = 595.0;
const PAGE_HEIGHT_PT: f32 = 842.0;
const LEFT_PT: f32 = 100.0;
const TITLE_Y_PT: f32 = 800.0;
const FIRST_LINE_Y_PT: f32 = 780.0;
const LINE_SPACING_PT: f32 = 18.0;
const FOOTER_Y_PT: f32 = 40.0;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render PDF: {0}")]
    Render(String),
}

fn rupees(amount: f64) -> String {
    format!("Rs. {}", group_thousands(amount))
}

/// Text lines of the document body, top to bottom.
pub fn document_lines(input: &EstimateInput, result: &EstimateResult) -> Vec<String> {
    let mut lines = vec![
        format!("Requested size: {} kW", input.requested_size_kw),
        format!(
            "Actual installed size: {} kW ({} panels)",
            result.actual_size_kw, result.panels_required
        ),
        format!("Base cost: {}", rupees(result.base_cost)),
    ];
    if input.subsidy_requested {
        lines.push(format!("Subsidy: {}", rupees(result.subsidy_amount)));
        lines.push(format!("Final cost: {}", rupees(result.final_cost)));
    } else {
        lines.push("Subsidy: Not applied".to_string());
    }
    lines.push(format!("Monthly generation: {} units", result.monthly_generation_units));
    lines.push(format!("Monthly consumption: {} units", input.monthly_consumption_units));
    lines.push(format!("Annual savings: {}", rupees(result.annual_savings)));
    if let Some(projected) = result.twenty_year_savings {
        lines.push(format!(
            "20-year projected savings (with escalation): {}",
            rupees(projected)
        ));
    }
    lines.push(match result.roi_years.years() {
        Some(years) => format!("ROI: {years} years"),
        None => "ROI: not reached (no savings)".to_string(),
    });
    lines
}

fn text_at(layer: &PdfLayerReference, text: &str, size: f32, y_pt: f32, font: &IndirectFontRef) {
    layer.use_text(text, size, Mm::from(Pt(LEFT_PT)), Mm::from(Pt(y_pt)), font);
}

/// Renders the estimate to PDF bytes.
pub fn render(
    input: &EstimateInput,
    result: &EstimateResult,
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        TITLE,
        Mm::from(Pt(PAGE_WIDTH_PT)),
        Mm::from(Pt(PAGE_HEIGHT_PT)),
        "Estimate",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Render(format!("{e:?}")))?;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Render(format!("{e:?}")))?;

    text_at(&layer, TITLE, 12.0, TITLE_Y_PT, &bold);

    let mut y = FIRST_LINE_Y_PT;
    for line in document_lines(input, result) {
        text_at(&layer, &line, 11.0, y, &regular);
        y -= LINE_SPACING_PT;
    }

    let footer = format!("Generated {}", generated_at.format("%Y-%m-%d %H:%M UTC"));
    text_at(&layer, &footer, 8.0, FOOTER_Y_PT, &regular);

    doc.save_to_bytes().map_err(|e| ExportError::Render(format!("{e:?}")))
}
