use axum::{routing::get, Router};
use crate::controllers::estimate_controller::{
    // Estimates
    get_estimate, post_estimate, get_estimate_pdf, get_payback_chart,
    // Form helpers
    get_suggested_size, get_labels, get_tariff,
};
use crate::shared_state::AppState;

/// Build the `/api/*` sub-router.
pub fn estimate_routes(state: AppState) -> Router {
    Router::new()
        .route("/estimate",            get(get_estimate).post(post_estimate))
        .route("/estimate/pdf",        get(get_estimate_pdf))
        .route("/estimate/chart.svg",  get(get_payback_chart))
        .route("/sizing/suggest",      get(get_suggested_size))
        .route("/labels/{language}",   get(get_labels))
        .route("/tariff",              get(get_tariff))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::{Config, PresentationConfig};

    fn app(config: Config) -> Router {
        Router::new().nest("/api", estimate_routes(AppState::new(config)))
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, Vec<u8>, Option<String>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec(), content_type)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let (status, body, _) = fetch(app, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_estimate_from_query() {
        let (status, body) = get_json(
            app(Config::default()),
            "/api/estimate?monthly_units=300&requested_kw=2.4&subsidy=true",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["panels_required"], 5);
        assert_eq!(body["result"]["subsidy_amount"], 78_000.0);
        assert_eq!(body["result"]["roi_years"]["kind"], "finite");
        assert_eq!(body["payback"].as_array().unwrap().len(), 11);
        assert_eq!(body["summary"][0]["key"], "requested_size");
        assert_eq!(body["language"], "English");
    }

    #[tokio::test]
    async fn test_estimate_from_json_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/estimate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{ "monthly_units": 500, "requested_kw": 1.0, "language": "kn" }"#))
            .unwrap();
        let response = app(Config::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&to_bytes(response.into_body(), usize::MAX).await.unwrap()).unwrap();
        assert_eq!(body["language"], "Kannada");
        assert_eq!(body["result"]["deficit_units"], 367.7);
        assert_eq!(body["summary"][0]["label"], crate::services::labels::KANNADA.requested_size);
    }

    #[tokio::test]
    async fn test_estimate_rejects_small_system() {
        let (status, body) = get_json(app(Config::default()), "/api/estimate?monthly_units=300&requested_kw=0.2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "ValidationError");
    }

    #[tokio::test]
    async fn test_estimate_rejects_oversized_system() {
        let (status, body) = get_json(app(Config::default()), "/api/estimate?monthly_units=300&requested_kw=1e30").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "ValidationError");
    }

    #[tokio::test]
    async fn test_estimate_rejects_nan() {
        let (status, body) = get_json(app(Config::default()), "/api/estimate?monthly_units=NaN").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BadRequest");
    }

    #[tokio::test]
    async fn test_pdf_download() {
        let response = app(Config::default())
            .oneshot(
                Request::builder()
                    .uri("/api/estimate/pdf?monthly_units=300&requested_kw=2.4&subsidy=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"solar_estimate.pdf\""
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_chart_svg() {
        let (status, body, content_type) = fetch(app(Config::default()), "/api/estimate/chart.svg?monthly_units=300").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
        assert!(String::from_utf8(body).unwrap().starts_with("<svg"));
    }

    #[tokio::test]
    async fn test_chart_can_be_disabled() {
        let config = Config {
            presentation: PresentationConfig { payback_chart: false },
            ..Config::default()
        };
        let (status, _, _) = fetch(app(config.clone()), "/api/estimate/chart.svg").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, body) = get_json(app(config), "/api/estimate").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("payback").is_none());
    }

    #[tokio::test]
    async fn test_suggested_size() {
        let (status, body) = get_json(app(Config::default()), "/api/sizing/suggest?monthly_units=300").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggested_kw"], 2.38);
    }

    #[tokio::test]
    async fn test_labels() {
        let (status, body) = get_json(app(Config::default()), "/api/labels/Kannada").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roi"], crate::services::labels::KANNADA.roi);

        let (status, _, _) = fetch(app(Config::default()), "/api/labels/Klingon").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_tariff() {
        let (status, body) = get_json(app(Config::default()), "/api/tariff").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tariff"]["panel_wattage"], 525.0);
        assert_eq!(body["policy"]["rounding"], "ceil");
        assert_eq!(body["policy"]["subsidy_tiers"], "panel_count");
    }
}
