use super::common::*;
use crate::sellers::domain::{SellerId, SellerStatus};
use crate::sellers::filter::{SellerQuery, StatusFilter};
use crate::sellers::repository::{
    NotifyError, RepositoryError, ReviewNotice, ReviewNotifier, SellerRecord, SellerRepository,
};
use crate::sellers::validation::ValidationError;
use crate::sellers::{ReviewServiceError, SellerReviewService};
use std::sync::Arc;

#[test]
fn approve_sets_status_and_notifies() {
    let (service, repository, notifier) = build_service();
    let id = SellerId::new("1");

    let approved = service.approve(&id).expect("approval succeeds");

    assert_eq!(approved.status, SellerStatus::Approved);
    assert_eq!(repository.status_of("1"), SellerStatus::Approved);
    assert_eq!(
        notifier.events(),
        vec![ReviewNotice::Approved {
            seller_id: id.clone()
        }]
    );
}

#[test]
fn reject_sets_status_and_notifies() {
    let (service, repository, notifier) = build_service();

    let rejected = service
        .reject(&SellerId::new("2"))
        .expect("rejection succeeds");

    assert_eq!(rejected.status, SellerStatus::Rejected);
    assert_eq!(repository.status_of("2"), SellerStatus::Rejected);
    assert_eq!(notifier.events().len(), 1);
    assert_eq!(notifier.events()[0].template(), "seller_rejected");
}

#[test]
fn approve_wins_regardless_of_prior_status() {
    let (service, repository, _) = build_service();

    for prior in SellerStatus::ordered() {
        let mut record = repository
            .fetch(&SellerId::new("1"))
            .expect("fetch succeeds")
            .expect("seeded record");
        record.application.status = prior;
        repository.update(record).expect("update succeeds");

        service.approve(&SellerId::new("1")).expect("approval");
        assert_eq!(
            repository.status_of("1"),
            SellerStatus::Approved,
            "prior {prior}"
        );
    }
}

#[test]
fn unknown_ids_report_not_found_without_notifying() {
    let (service, _, notifier) = build_service();
    let missing = SellerId::new("missing");

    for result in [
        service.approve(&missing),
        service.reject(&missing),
        service.request_more_info(&missing, "need more docs"),
        service.get(&missing),
    ] {
        match result {
            Err(ReviewServiceError::NotFound(id)) => assert_eq!(id, missing),
            other => panic!("expected not found error, got {other:?}"),
        }
    }
    assert!(matches!(
        service.detail(&missing),
        Err(ReviewServiceError::NotFound(_))
    ));
    assert!(notifier.events().is_empty());
}

#[test]
fn request_more_info_rejects_blank_messages() {
    let (service, _, notifier) = build_service();
    let id = SellerId::new("1");

    for message in ["", "   ", "\n\t"] {
        match service.request_more_info(&id, message) {
            Err(ReviewServiceError::Validation(ValidationError::EmptyMessage)) => {}
            other => panic!("expected validation error for {message:?}, got {other:?}"),
        }
    }
    assert!(notifier.events().is_empty());
}

#[test]
fn request_more_info_keeps_status_and_forwards_message() {
    let (service, repository, notifier) = build_service();
    let id = SellerId::new("2");

    let application = service
        .request_more_info(&id, "need more docs")
        .expect("request succeeds");

    assert_eq!(application.status, SellerStatus::Pending);
    assert_eq!(repository.status_of("2"), SellerStatus::Pending);
    assert_eq!(
        notifier.events(),
        vec![ReviewNotice::MoreInfoRequested {
            seller_id: id,
            message: "need more docs".to_string(),
        }]
    );
}

#[test]
fn notifier_failure_rolls_back_status() {
    let repository = Arc::new(MemoryRepository::seeded(vec![SellerRecord::new(juan())]));
    let service = SellerReviewService::new(repository.clone(), Arc::new(OfflineNotifier));

    match service.approve(&SellerId::new("1")) {
        Err(ReviewServiceError::Transport(err)) => {
            assert!(err.to_string().contains("mail relay offline"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
    assert_eq!(repository.status_of("1"), SellerStatus::Pending);

    assert!(matches!(
        service.reject(&SellerId::new("1")),
        Err(ReviewServiceError::Transport(_))
    ));
    assert_eq!(repository.status_of("1"), SellerStatus::Pending);
}

/// Lets a second reviewer reject the seller while the approval notice is in flight, then
/// fails the approval notice.
struct ConcurrentRejectNotifier {
    rival: SellerReviewService<MemoryRepository, MemoryNotifier>,
}

impl ReviewNotifier for ConcurrentRejectNotifier {
    fn notify(&self, notice: ReviewNotice) -> Result<(), NotifyError> {
        if let ReviewNotice::Approved { seller_id } = &notice {
            self.rival
                .reject(seller_id)
                .map_err(|err| NotifyError::Transport(err.to_string()))?;
        }
        Err(NotifyError::Transport("mail relay offline".to_string()))
    }
}

#[test]
fn rollback_keeps_a_decision_committed_during_notification() {
    let repository = Arc::new(MemoryRepository::seeded(vec![SellerRecord::new(juan())]));
    let rival_notifier = Arc::new(MemoryNotifier::default());
    let rival = SellerReviewService::new(repository.clone(), rival_notifier.clone());
    let service = SellerReviewService::new(
        repository.clone(),
        Arc::new(ConcurrentRejectNotifier { rival }),
    );

    assert!(matches!(
        service.approve(&SellerId::new("1")),
        Err(ReviewServiceError::Transport(_))
    ));

    assert_eq!(
        rival_notifier.events(),
        vec![ReviewNotice::Rejected {
            seller_id: SellerId::new("1")
        }]
    );
    assert_eq!(repository.status_of("1"), SellerStatus::Rejected);
}

/// Store whose conditional restore always fails.
struct RestoreFailingRepository {
    inner: MemoryRepository,
}

impl SellerRepository for RestoreFailingRepository {
    fn insert(&self, record: SellerRecord) -> Result<SellerRecord, RepositoryError> {
        self.inner.insert(record)
    }

    fn update(&self, record: SellerRecord) -> Result<(), RepositoryError> {
        self.inner.update(record)
    }

    fn update_if_status(
        &self,
        _expected: SellerStatus,
        _record: SellerRecord,
    ) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("primary failed over".to_string()))
    }

    fn fetch(&self, id: &SellerId) -> Result<Option<SellerRecord>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn list(&self) -> Result<Vec<SellerRecord>, RepositoryError> {
        self.inner.list()
    }
}

#[test]
fn failed_restore_still_reports_the_transport_error() {
    let repository = Arc::new(RestoreFailingRepository {
        inner: MemoryRepository::seeded(vec![SellerRecord::new(juan())]),
    });
    let service = SellerReviewService::new(repository, Arc::new(OfflineNotifier));

    match service.reject(&SellerId::new("1")) {
        Err(ReviewServiceError::Transport(err)) => {
            assert!(err.to_string().contains("mail relay offline"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn notifier_failure_surfaces_for_info_requests() {
    let repository = Arc::new(MemoryRepository::seeded(vec![SellerRecord::new(maria())]));
    let service = SellerReviewService::new(repository.clone(), Arc::new(OfflineNotifier));

    assert!(matches!(
        service.request_more_info(&SellerId::new("2"), "send permits"),
        Err(ReviewServiceError::Transport(_))
    ));
    assert_eq!(repository.status_of("2"), SellerStatus::Pending);
}

#[test]
fn repository_failures_propagate() {
    let service = SellerReviewService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifier::default()),
    );

    match service.list(&SellerQuery::default()) {
        Err(ReviewServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "database offline");
        }
        other => panic!("expected unavailable repository, got {other:?}"),
    }
    assert!(matches!(
        service.approve(&SellerId::new("1")),
        Err(ReviewServiceError::Repository(_))
    ));
}

#[test]
fn list_applies_query_in_store_order() {
    let (service, _, _) = build_service();

    let all = service.list(&SellerQuery::default()).expect("list");
    assert_eq!(
        all.iter().map(|app| app.id.as_str()).collect::<Vec<_>>(),
        vec!["1", "2"]
    );

    service.approve(&SellerId::new("2")).expect("approve");
    let pending = service
        .list(&SellerQuery::new("", StatusFilter::Only(SellerStatus::Pending)))
        .expect("list");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, SellerId::new("1"));
}

#[test]
fn detail_falls_back_to_list_fields() {
    let (service, _, _) = build_service();

    let captured = service.detail(&SellerId::new("2")).expect("detail");
    assert_eq!(captured.address, "Liliw, Laguna, Philippines");
    assert_eq!(captured.products.len(), 1);

    let summary = service.detail(&SellerId::new("1")).expect("detail");
    assert_eq!(summary.name, "Juan Dela Cruz");
    assert!(summary.documents.is_empty());
    assert!(summary.products.is_empty());
}
