use crate::cli::ServeArgs;
use crate::infra::{demo_seller_records, AppState, InMemorySellerRepository, TracingNotifier};
use crate::routes::with_seller_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use marketplace_admin::config::AppConfig;
use marketplace_admin::error::AppError;
use marketplace_admin::sellers::{ReviewServiceError, SellerReviewService};
use marketplace_admin::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let seed = if config.catalog.seed_demo_sellers {
        demo_seller_records().map_err(ReviewServiceError::Repository)?
    } else {
        Vec::new()
    };
    let seeded = seed.len();
    let repository = Arc::new(
        InMemorySellerRepository::seeded(seed).map_err(ReviewServiceError::Repository)?,
    );
    let notifier = Arc::new(TracingNotifier);
    let review_service = Arc::new(SellerReviewService::new(repository, notifier));

    let app = with_seller_routes(review_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, seeded, "marketplace admin console ready");

    axum::serve(listener, app).await?;
    Ok(())
}
