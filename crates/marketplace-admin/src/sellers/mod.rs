//! Seller application review: filtering the review list, approving or rejecting
//! applications, and asking sellers for more information.

pub mod domain;
pub mod filter;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    ProductListing, SellerApplication, SellerDetail, SellerDocument, SellerId, SellerStatus,
};
pub use filter::{filter_applications, SellerQuery, StatusFilter};
pub use repository::{
    NotifyError, RepositoryError, ReviewNotice, ReviewNotifier, SellerRecord, SellerRepository,
};
pub use router::{seller_router, InfoRequestPayload, SellerListParams, SellerListResponse};
pub use service::{ReviewServiceError, SellerReviewService};
pub use validation::{InfoRequestMessage, ValidationError};
pub use views::{BadgeVariant, DetailTab, SellerDetailView, SellerRowView};
