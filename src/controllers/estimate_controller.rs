use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::error::ApiError;
use crate::models::estimate::{
    EstimateInput, EstimateRequest, EstimateResponse, Language, SuggestQuery, SuggestedSize,
    TariffResponse,
};
use crate::services::labels::Labels;
use crate::services::{chart, estimator, pdf_export, summary};
use crate::shared_state::AppState;

fn ensure_finite(name: &str, value: f64) -> Result<(), ApiError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ApiError::BadRequest(format!("{name} must be a finite number")))
    }
}

/// Turns submitted form state into estimator input, filling in the suggested
/// size when none was given.
fn parse_input(request: &EstimateRequest) -> Result<EstimateInput, ApiError> {
    ensure_finite("monthly_units", request.monthly_units)?;
    if let Some(kw) = request.requested_kw {
        ensure_finite("requested_kw", kw)?;
    }
    request.validate()?;

    let requested_size_kw = request
        .requested_kw
        .unwrap_or_else(|| estimator::suggested_size_kw(request.monthly_units));
    if requested_size_kw > estimator::MAX_SIZE_KW {
        return Err(ApiError::BadRequest(format!(
            "system size {requested_size_kw} kW exceeds {} kW",
            estimator::MAX_SIZE_KW
        )));
    }

    Ok(EstimateInput {
        monthly_consumption_units: request.monthly_units,
        requested_size_kw,
        subsidy_requested: request.subsidy,
    })
}

fn build_response(state: &AppState, request: &EstimateRequest) -> Result<EstimateResponse, ApiError> {
    let config = &state.config;
    let input = parse_input(request)?;
    let result = estimator::compute(&input, &config.tariff, &config.policy);
    tracing::debug!(
        monthly_units = input.monthly_consumption_units,
        requested_kw = input.requested_size_kw,
        subsidy = input.subsidy_requested,
        panels = result.panels_required,
        annual_savings = result.annual_savings,
        "estimate computed"
    );

    let labels = Labels::for_language(request.language);
    let summary = summary::summary_lines(&input, &result, labels);
    let payback = config
        .presentation
        .payback_chart
        .then(|| estimator::payback_series(&result, chart::CHART_YEARS));

    Ok(EstimateResponse {
        generated_at: Utc::now(),
        language: request.language,
        input,
        result,
        summary,
        payback,
    })
}

/// GET /api/estimate
/// Estimate from query parameters
///
/// Computes sizing, cost, subsidy, generation, savings and payback for the
/// given consumption and system size, with a localized summary.
#[utoipa::path(
    get,
    path = "/api/estimate",
    params(EstimateRequest),
    responses(
        (status = 200, description = "Estimate with localized summary", body = EstimateResponse),
        (status = 400, description = "Input out of range")
    )
)]
pub async fn get_estimate(
    State(state): State<AppState>,
    Query(request): Query<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ApiError> {
    build_response(&state, &request).map(Json)
}

/// POST /api/estimate
/// Estimate from a JSON body
#[utoipa::path(
    post,
    path = "/api/estimate",
    request_body = EstimateRequest,
    responses(
        (status = 200, description = "Estimate with localized summary", body = EstimateResponse),
        (status = 400, description = "Input out of range")
    )
)]
pub async fn post_estimate(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ApiError> {
    build_response(&state, &request).map(Json)
}

/// GET /api/estimate/pdf
/// Download the estimate as a one-page PDF
#[utoipa::path(
    get,
    path = "/api/estimate/pdf",
    params(EstimateRequest),
    responses(
        (status = 200, description = "application/pdf attachment named solar_estimate.pdf"),
        (status = 400, description = "Input out of range"),
        (status = 500, description = "PDF rendering failed")
    )
)]
pub async fn get_estimate_pdf(
    State(state): State<AppState>,
    Query(request): Query<EstimateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = parse_input(&request)?;
    let result = estimator::compute(&input, &state.config.tariff, &state.config.policy);
    let bytes = pdf_export::render(&input, &result, Utc::now())?;
    tracing::info!(size = bytes.len(), "PDF estimate exported");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", pdf_export::FILE_NAME),
            ),
        ],
        bytes,
    ))
}

/// GET /api/estimate/chart.svg
/// Payback timeline chart
///
/// Remaining balance for years 0–10 with a zero line. Returns 404 when the
/// chart is disabled in the configuration.
#[utoipa::path(
    get,
    path = "/api/estimate/chart.svg",
    params(EstimateRequest),
    responses(
        (status = 200, description = "image/svg+xml line chart"),
        (status = 400, description = "Input out of range"),
        (status = 404, description = "Payback chart disabled")
    )
)]
pub async fn get_payback_chart(
    State(state): State<AppState>,
    Query(request): Query<EstimateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.config.presentation.payback_chart {
        return Err(ApiError::NotFound("payback chart is disabled".to_string()));
    }
    let input = parse_input(&request)?;
    let result = estimator::compute(&input, &state.config.tariff, &state.config.policy);
    let series = estimator::payback_series(&result, chart::CHART_YEARS);
    let svg = chart::render_svg(&series, Labels::for_language(request.language));

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

/// GET /api/sizing/suggest
/// Suggested system size for a monthly consumption
#[utoipa::path(
    get,
    path = "/api/sizing/suggest",
    params(SuggestQuery),
    responses(
        (status = 200, description = "Suggested size in kW", body = SuggestedSize),
        (status = 400, description = "Input out of range")
    )
)]
pub async fn get_suggested_size(Query(query): Query<SuggestQuery>) -> Result<Json<SuggestedSize>, ApiError> {
    ensure_finite("monthly_units", query.monthly_units)?;
    query.validate()?;
    Ok(Json(SuggestedSize {
        monthly_units: query.monthly_units,
        suggested_kw: estimator::suggested_size_kw(query.monthly_units),
    }))
}

/// GET /api/labels/{language}
/// Label table for one language
#[utoipa::path(
    get,
    path = "/api/labels/{language}",
    params(
        ("language" = Language, Path, description = "English or Kannada")
    ),
    responses(
        (status = 200, description = "Captions used by the page", body = Labels),
        (status = 400, description = "Unknown language")
    )
)]
pub async fn get_labels(Path(language): Path<Language>) -> Json<&'static Labels> {
    Json(Labels::for_language(language))
}

/// GET /api/tariff
/// Effective tariff constants and estimator policy
#[utoipa::path(
    get,
    path = "/api/tariff",
    responses(
        (status = 200, description = "Tariff and policy in use", body = TariffResponse)
    )
)]
pub async fn get_tariff(State(state): State<AppState>) -> Json<TariffResponse> {
    let config = &state.config;
    Json(TariffResponse {
        tariff: config.tariff.clone(),
        total_rate: config.tariff.total_rate(),
        policy: config.policy.clone(),
        payback_chart: config.presentation.payback_chart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(monthly_units: f64, requested_kw: Option<f64>) -> EstimateRequest {
        EstimateRequest {
            monthly_units,
            requested_kw,
            subsidy: false,
            language: Language::English,
        }
    }

    #[test]
    fn test_missing_size_uses_suggestion() {
        let input = parse_input(&request(300.0, None)).unwrap();
        assert_eq!(input.requested_size_kw, 2.38);
    }

    #[test]
    fn test_rejects_negative_consumption() {
        let error = parse_input(&request(-10.0, Some(1.0))).unwrap_err();
        assert!(matches!(error, ApiError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_small_system() {
        let error = parse_input(&request(300.0, Some(0.4))).unwrap_err();
        assert!(matches!(error, ApiError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_oversized_system() {
        let error = parse_input(&request(300.0, Some(1e30))).unwrap_err();
        assert!(matches!(error, ApiError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_oversized_suggestion() {
        let error = parse_input(&request(1e30, None)).unwrap_err();
        assert!(matches!(error, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_rejects_non_finite_numbers() {
        assert!(matches!(
            parse_input(&request(f64::NAN, None)).unwrap_err(),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            parse_input(&request(300.0, Some(f64::INFINITY))).unwrap_err(),
            ApiError::BadRequest(_)
        ));
    }
}
