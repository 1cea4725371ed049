use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::domain::{SellerId, SellerStatus};
use super::filter::{SellerQuery, StatusFilter};
use super::repository::{ReviewNotifier, SellerRepository};
use super::service::SellerReviewService;
use super::validation::ValidationError;
use super::views::{SellerDetailView, SellerRowView};
use crate::error::AppError;
use crate::reports::{csv_attachment, seller_report_csv};

/// Router builder exposing the seller review endpoints.
pub fn seller_router<R, N>(service: Arc<SellerReviewService<R, N>>) -> Router
where
    R: SellerRepository + 'static,
    N: ReviewNotifier + 'static,
{
    Router::new()
        .route("/api/v1/sellers", get(list_handler::<R, N>))
        .route("/api/v1/sellers/:seller_id", get(row_handler::<R, N>))
        .route(
            "/api/v1/sellers/:seller_id/detail",
            get(detail_handler::<R, N>),
        )
        .route(
            "/api/v1/sellers/:seller_id/approve",
            post(approve_handler::<R, N>),
        )
        .route(
            "/api/v1/sellers/:seller_id/reject",
            post(reject_handler::<R, N>),
        )
        .route(
            "/api/v1/sellers/:seller_id/request-info",
            post(request_info_handler::<R, N>),
        )
        .route("/api/v1/reports/sellers.csv", get(report_handler::<R, N>))
        .with_state(service)
}

/// Raw list parameters; both are optional and validated into a [`SellerQuery`].
#[derive(Debug, Default, Deserialize)]
pub struct SellerListParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl SellerListParams {
    fn into_query(self) -> Result<SellerQuery, ValidationError> {
        SellerQuery::parse(self.search.as_deref(), self.status.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct SellerListResponse {
    pub search: String,
    pub status_filter: StatusFilter,
    pub total: usize,
    pub sellers: Vec<SellerRowView>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct InfoRequestPayload {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct InfoRequestAccepted {
    pub seller_id: SellerId,
    pub status: SellerStatus,
    pub message: String,
}

pub(crate) async fn list_handler<R, N>(
    State(service): State<Arc<SellerReviewService<R, N>>>,
    Query(params): Query<SellerListParams>,
) -> Result<Json<SellerListResponse>, AppError>
where
    R: SellerRepository + 'static,
    N: ReviewNotifier + 'static,
{
    let query = params.into_query()?;
    let sellers: Vec<SellerRowView> = service
        .list(&query)?
        .iter()
        .map(SellerRowView::from)
        .collect();

    Ok(Json(SellerListResponse {
        search: query.search,
        status_filter: query.status,
        total: sellers.len(),
        sellers,
    }))
}

pub(crate) async fn row_handler<R, N>(
    State(service): State<Arc<SellerReviewService<R, N>>>,
    Path(seller_id): Path<String>,
) -> Result<Json<SellerRowView>, AppError>
where
    R: SellerRepository + 'static,
    N: ReviewNotifier + 'static,
{
    let application = service.get(&SellerId(seller_id))?;
    Ok(Json(SellerRowView::from(&application)))
}

pub(crate) async fn detail_handler<R, N>(
    State(service): State<Arc<SellerReviewService<R, N>>>,
    Path(seller_id): Path<String>,
) -> Result<Json<SellerDetailView>, AppError>
where
    R: SellerRepository + 'static,
    N: ReviewNotifier + 'static,
{
    let detail = service.detail(&SellerId(seller_id))?;
    Ok(Json(SellerDetailView::from(&detail)))
}

pub(crate) async fn approve_handler<R, N>(
    State(service): State<Arc<SellerReviewService<R, N>>>,
    Path(seller_id): Path<String>,
) -> Result<Json<SellerRowView>, AppError>
where
    R: SellerRepository + 'static,
    N: ReviewNotifier + 'static,
{
    let application = service.approve(&SellerId(seller_id))?;
    Ok(Json(SellerRowView::from(&application)))
}

pub(crate) async fn reject_handler<R, N>(
    State(service): State<Arc<SellerReviewService<R, N>>>,
    Path(seller_id): Path<String>,
) -> Result<Json<SellerRowView>, AppError>
where
    R: SellerRepository + 'static,
    N: ReviewNotifier + 'static,
{
    let application = service.reject(&SellerId(seller_id))?;
    Ok(Json(SellerRowView::from(&application)))
}

pub(crate) async fn request_info_handler<R, N>(
    State(service): State<Arc<SellerReviewService<R, N>>>,
    Path(seller_id): Path<String>,
    Json(payload): Json<InfoRequestPayload>,
) -> Result<(StatusCode, Json<InfoRequestAccepted>), AppError>
where
    R: SellerRepository + 'static,
    N: ReviewNotifier + 'static,
{
    let seller_id = SellerId(seller_id);
    let application = service.request_more_info(&seller_id, &payload.message)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(InfoRequestAccepted {
            seller_id,
            status: application.status,
            message: payload.message,
        }),
    ))
}

pub(crate) async fn report_handler<R, N>(
    State(service): State<Arc<SellerReviewService<R, N>>>,
    Query(params): Query<SellerListParams>,
) -> Result<Response, AppError>
where
    R: SellerRepository + 'static,
    N: ReviewNotifier + 'static,
{
    let applications = service.list(&params.into_query()?)?;
    let csv = seller_report_csv(&applications)?;
    Ok(csv_attachment("seller-applications.csv", csv))
}
