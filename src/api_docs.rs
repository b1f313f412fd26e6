use utoipa::OpenApi;
use crate::controllers::estimate_controller;
use crate::models::estimate;
use crate::services::labels;
use crate::config;

#[derive(OpenApi)]
#[openapi(
    paths(
        estimate_controller::get_estimate,
        estimate_controller::post_estimate,
        estimate_controller::get_estimate_pdf,
        estimate_controller::get_payback_chart,
        estimate_controller::get_suggested_size,
        estimate_controller::get_labels,
        estimate_controller::get_tariff
    ),
    components(
        schemas(
            estimate::EstimateRequest,
            estimate::EstimateResponse,
            estimate::EstimateInput,
            estimate::EstimateResult,
            estimate::Roi,
            estimate::Language,
            estimate::PaybackPoint,
            estimate::SummaryLine,
            estimate::SuggestedSize,
            estimate::TariffResponse,
            labels::Labels,
            config::TariffConfig,
            config::EstimatorPolicy,
            config::RoundingPolicy,
            config::SubsidyTierPolicy
        )
    ),
    tags(
        (name = "solar-estimator", description = "Rooftop Solar Estimator API")
    )
)]
pub struct ApiDoc;
