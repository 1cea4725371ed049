use serde::{Deserialize, Serialize};

use super::domain::{SellerApplication, SellerDetail, SellerId, SellerStatus};

/// Stored seller application plus the richer profile captured at intake, when available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerRecord {
    pub application: SellerApplication,
    pub detail: Option<SellerDetail>,
}

impl SellerRecord {
    pub fn new(application: SellerApplication) -> Self {
        Self {
            application,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: SellerDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn id(&self) -> &SellerId {
        &self.application.id
    }

    /// Detail view source, falling back to the list fields when no profile was captured.
    pub fn detail_or_summary(&self) -> SellerDetail {
        match &self.detail {
            Some(detail) => detail.clone(),
            None => SellerDetail::from_application(&self.application),
        }
    }
}

/// Storage abstraction so the review service can run against any data source.
///
/// `list` returns records in insertion order; the review list depends on it.
pub trait SellerRepository: Send + Sync {
    fn insert(&self, record: SellerRecord) -> Result<SellerRecord, RepositoryError>;
    fn update(&self, record: SellerRecord) -> Result<(), RepositoryError>;
    /// Replace the stored record only while its status still equals `expected`, checked and
    /// written under one lock. `Ok(false)` means another writer got there first.
    fn update_if_status(
        &self,
        expected: SellerStatus,
        record: SellerRecord,
    ) -> Result<bool, RepositoryError>;
    fn fetch(&self, id: &SellerId) -> Result<Option<SellerRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<SellerRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Receiver of review decisions (seller e-mail, onboarding queue, audit log).
pub trait ReviewNotifier: Send + Sync {
    fn notify(&self, notice: ReviewNotice) -> Result<(), NotifyError>;
}

/// Review decision forwarded to the [`ReviewNotifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReviewNotice {
    Approved { seller_id: SellerId },
    Rejected { seller_id: SellerId },
    MoreInfoRequested { seller_id: SellerId, message: String },
}

impl ReviewNotice {
    pub fn seller_id(&self) -> &SellerId {
        match self {
            ReviewNotice::Approved { seller_id }
            | ReviewNotice::Rejected { seller_id }
            | ReviewNotice::MoreInfoRequested { seller_id, .. } => seller_id,
        }
    }

    pub const fn template(&self) -> &'static str {
        match self {
            ReviewNotice::Approved { .. } => "seller_approved",
            ReviewNotice::Rejected { .. } => "seller_rejected",
            ReviewNotice::MoreInfoRequested { .. } => "seller_more_info_requested",
        }
    }
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
