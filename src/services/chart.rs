//! SVG rendering of the payback timeline.
//!
//! Plots the remaining balance of the investment per year as a polyline, with
//! a dashed zero line marking the payback point. Uses a `viewBox` so the page
//! can scale it freely.

use crate::models::estimate::PaybackPoint;
use crate::services::labels::Labels;
use crate::services::summary::group_thousands;

/// Years shown on the chart.
pub const CHART_YEARS: u32 = 10;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;
const Y_TICKS: u32 = 5;

const FONT_FAMILY: &str = "sans-serif";
const AXIS_COLOR: &str = "#444";
const GRID_COLOR: &str = "#ddd";
const LINE_COLOR: &str = "#f59e0b";
const ZERO_COLOR: &str = "#dc2626";

struct Frame {
    year_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Frame {
    fn fit(series: &[PaybackPoint]) -> Self {
        let year_max = series.last().map_or(1.0, |p| f64::from(p.year.max(1)));
        let (mut y_min, mut y_max) = series.iter().fold((0.0_f64, 0.0_f64), |(lo, hi), p| {
            (lo.min(p.remaining_balance), hi.max(p.remaining_balance))
        });
        if (y_max - y_min).abs() < f64::EPSILON {
            y_min -= 1.0;
            y_max += 1.0;
        }
        Self { year_max, y_min, y_max }
    }

    fn x(&self, year: f64) -> f64 {
        MARGIN_LEFT + year / self.year_max * (WIDTH - MARGIN_LEFT - MARGIN_RIGHT)
    }

    fn y(&self, value: f64) -> f64 {
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        MARGIN_TOP + (self.y_max - value) / (self.y_max - self.y_min) * plot_height
    }
}

pub fn render_svg(series: &[PaybackPoint], labels: &Labels) -> String {
    let frame = Frame::fit(series);
    let left = MARGIN_LEFT;
    let right = WIDTH - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = HEIGHT - MARGIN_BOTTOM;

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg viewBox="0 0 {WIDTH} {HEIGHT}" xmlns="http://www.w3.org/2000/svg">"#
    ));
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{WIDTH}" height="{HEIGHT}" fill="white"/>"#
    ));

    // Title
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="24" text-anchor="middle" font-size="16" font-family="{FONT_FAMILY}" fill="{AXIS_COLOR}">{}</text>"#,
        WIDTH / 2.0,
        escape(labels.payback_chart)
    ));

    // Horizontal grid with balance labels
    for i in 0..=Y_TICKS {
        let value = frame.y_min + (frame.y_max - frame.y_min) * f64::from(i) / f64::from(Y_TICKS);
        let y = frame.y(value);
        svg.push_str(&format!(
            r#"<line x1="{left}" y1="{y:.1}" x2="{right}" y2="{y:.1}" stroke="{GRID_COLOR}" stroke-width="1"/>"#
        ));
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{y:.1}" text-anchor="end" dominant-baseline="middle" font-size="11" font-family="{FONT_FAMILY}" fill="{AXIS_COLOR}">{}</text>"#,
            left - 6.0,
            group_thousands(value)
        ));
    }

    // Year ticks
    for point in series {
        let x = frame.x(f64::from(point.year));
        svg.push_str(&format!(
            r#"<text x="{x:.1}" y="{:.1}" text-anchor="middle" font-size="11" font-family="{FONT_FAMILY}" fill="{AXIS_COLOR}">{}</text>"#,
            bottom + 16.0,
            point.year
        ));
    }

    // Axes
    svg.push_str(&format!(
        r#"<line x1="{left}" y1="{top}" x2="{left}" y2="{bottom}" stroke="{AXIS_COLOR}" stroke-width="1.5"/>"#
    ));
    svg.push_str(&format!(
        r#"<line x1="{left}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="{AXIS_COLOR}" stroke-width="1.5"/>"#
    ));
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" font-family="{FONT_FAMILY}" fill="{AXIS_COLOR}">{}</text>"#,
        (left + right) / 2.0,
        HEIGHT - 8.0,
        escape(labels.chart_year_axis)
    ));
    svg.push_str(&format!(
        r#"<text x="14" y="{:.1}" text-anchor="middle" font-size="12" font-family="{FONT_FAMILY}" fill="{AXIS_COLOR}" transform="rotate(-90 14 {:.1})">{}</text>"#,
        (top + bottom) / 2.0,
        (top + bottom) / 2.0,
        escape(labels.chart_balance_axis)
    ));

    // Zero reference
    let zero_y = frame.y(0.0);
    svg.push_str(&format!(
        r#"<line class="zero" x1="{left}" y1="{zero_y:.1}" x2="{right}" y2="{zero_y:.1}" stroke="{ZERO_COLOR}" stroke-width="1.5" stroke-dasharray="6 4"/>"#
    ));

    // Remaining balance
    let points = series
        .iter()
        .map(|p| format!("{:.1},{:.1}", frame.x(f64::from(p.year)), frame.y(p.remaining_balance)))
        .collect::<Vec<_>>()
        .join(" ");
    if !points.is_empty() {
        svg.push_str(&format!(
            r#"<polyline class="balance" points="{points}" fill="none" stroke="{LINE_COLOR}" stroke-width="2.5"/>"#
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
