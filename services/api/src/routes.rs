use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use marketplace_admin::analytics::{AnalyticsOverview, ReportingPeriod, SalesSnapshot};
use marketplace_admin::error::AppError;
use marketplace_admin::reports::{csv_attachment, sales_report_csv, seller_performance_report_csv};
use marketplace_admin::sellers::{
    seller_router, ReviewNotifier, SellerRepository, SellerReviewService,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnalyticsParams {
    #[serde(default)]
    pub(crate) period: Option<String>,
}

impl AnalyticsParams {
    /// A missing or blank period means the default daily window.
    fn period(&self) -> Result<ReportingPeriod, AppError> {
        match self.period.as_deref().map(str::trim) {
            None | Some("") => Ok(ReportingPeriod::default()),
            Some(raw) => Ok(raw.parse::<ReportingPeriod>()?),
        }
    }
}

pub(crate) fn with_seller_routes<R, N>(service: Arc<SellerReviewService<R, N>>) -> axum::Router
where
    R: SellerRepository + 'static,
    N: ReviewNotifier + 'static,
{
    seller_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/analytics/overview",
            axum::routing::get(analytics_overview_endpoint),
        )
        .route(
            "/api/v1/reports/sales.csv",
            axum::routing::get(sales_report_endpoint),
        )
        .route(
            "/api/v1/reports/seller-performance.csv",
            axum::routing::get(seller_performance_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn analytics_overview_endpoint(
    Query(params): Query<AnalyticsParams>,
) -> Result<Json<AnalyticsOverview>, AppError> {
    Ok(Json(AnalyticsOverview::demo(params.period()?)))
}

pub(crate) async fn sales_report_endpoint(
    Query(params): Query<AnalyticsParams>,
) -> Result<Response, AppError> {
    let period = params.period()?;
    let products = SalesSnapshot::demo().ranked_products();
    let csv = sales_report_csv(&products)?;
    Ok(csv_attachment(&format!("sales-report-{period}.csv"), csv))
}

pub(crate) async fn seller_performance_report_endpoint(
    Query(params): Query<AnalyticsParams>,
) -> Result<Response, AppError> {
    let period = params.period()?;
    let sellers = SalesSnapshot::demo().ranked_sellers();
    let csv = seller_performance_report_csv(&sellers)?;
    Ok(csv_attachment(
        &format!("seller-performance-{period}.csv"),
        csv,
    ))
}
