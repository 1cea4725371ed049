use std::sync::Arc;

use tracing::{error, info, warn};

use super::domain::{SellerApplication, SellerDetail, SellerId, SellerStatus};
use super::filter::SellerQuery;
use super::repository::{
    NotifyError, RepositoryError, ReviewNotice, ReviewNotifier, SellerRecord, SellerRepository,
};
use super::validation::{InfoRequestMessage, ValidationError};

/// Review workflow over an injected seller store and notification channel.
///
/// Every action persists first and notifies second. When the notifier fails the stored
/// record is put back the way it was, unless another decision has replaced it since, so
/// callers only ever display committed state.
pub struct SellerReviewService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> SellerReviewService<R, N>
where
    R: SellerRepository + 'static,
    N: ReviewNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Applications matching the query, in store order.
    pub fn list(&self, query: &SellerQuery) -> Result<Vec<SellerApplication>, ReviewServiceError> {
        let applications: Vec<SellerApplication> = self
            .repository
            .list()?
            .into_iter()
            .map(|record| record.application)
            .collect();

        Ok(query.apply(&applications).into_iter().cloned().collect())
    }

    pub fn get(&self, seller_id: &SellerId) -> Result<SellerApplication, ReviewServiceError> {
        Ok(self.fetch_record(seller_id)?.application)
    }

    pub fn detail(&self, seller_id: &SellerId) -> Result<SellerDetail, ReviewServiceError> {
        Ok(self.fetch_record(seller_id)?.detail_or_summary())
    }

    pub fn approve(&self, seller_id: &SellerId) -> Result<SellerApplication, ReviewServiceError> {
        self.decide(
            seller_id,
            SellerStatus::Approved,
            ReviewNotice::Approved {
                seller_id: seller_id.clone(),
            },
        )
    }

    pub fn reject(&self, seller_id: &SellerId) -> Result<SellerApplication, ReviewServiceError> {
        self.decide(
            seller_id,
            SellerStatus::Rejected,
            ReviewNotice::Rejected {
                seller_id: seller_id.clone(),
            },
        )
    }

    /// Ask the seller for more information. The application's status is left untouched.
    pub fn request_more_info(
        &self,
        seller_id: &SellerId,
        message: &str,
    ) -> Result<SellerApplication, ReviewServiceError> {
        let message = InfoRequestMessage::parse(message)?;
        let record = self.fetch_record(seller_id)?;

        self.notifier.notify(ReviewNotice::MoreInfoRequested {
            seller_id: seller_id.clone(),
            message: message.into_inner(),
        })?;

        info!(%seller_id, status = %record.application.status, "requested more information from seller");
        Ok(record.application)
    }

    fn decide(
        &self,
        seller_id: &SellerId,
        target: SellerStatus,
        notice: ReviewNotice,
    ) -> Result<SellerApplication, ReviewServiceError> {
        let previous = self.fetch_record(seller_id)?;
        let prior_status = previous.application.status;

        if prior_status.is_final() {
            warn!(%seller_id, from = %prior_status, to = %target, "re-reviewing application with a final decision");
        }

        let mut updated = previous.clone();
        updated.application.status = target;
        self.repository.update(updated.clone())?;

        if let Err(err) = self.notifier.notify(notice) {
            // Only undo our own write; a decision committed meanwhile stays.
            match self.repository.update_if_status(target, previous) {
                Ok(true) => {
                    error!(%seller_id, error = %err, "notification failed, previous status restored");
                }
                Ok(false) => {
                    warn!(%seller_id, error = %err, "notification failed after a newer decision, keeping it");
                }
                Err(restore_err) => {
                    error!(
                        %seller_id,
                        error = %err,
                        restore_error = %restore_err,
                        "notification failed and previous status could not be restored"
                    );
                }
            }
            return Err(ReviewServiceError::Transport(err));
        }

        info!(%seller_id, from = %prior_status, to = %target, "seller application reviewed");
        Ok(updated.application)
    }

    fn fetch_record(&self, seller_id: &SellerId) -> Result<SellerRecord, ReviewServiceError> {
        self.repository
            .fetch(seller_id)?
            .ok_or_else(|| ReviewServiceError::NotFound(seller_id.clone()))
    }
}

/// Error raised by the review service.
#[derive(Debug, thiserror::Error)]
pub enum ReviewServiceError {
    #[error("seller application {0} not found")]
    NotFound(SellerId),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Transport(#[from] NotifyError),
}

impl ReviewServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ReviewServiceError::NotFound(_)
                | ReviewServiceError::Repository(RepositoryError::NotFound)
        )
    }
}
