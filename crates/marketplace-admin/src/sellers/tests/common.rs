use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::sellers::domain::{
    ProductListing, SellerApplication, SellerDetail, SellerDocument, SellerId, SellerStatus,
};
use crate::sellers::repository::{
    NotifyError, RepositoryError, ReviewNotice, ReviewNotifier, SellerRecord, SellerRepository,
};
use crate::sellers::{seller_router, SellerReviewService};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn application(
    id: &str,
    name: &str,
    business_name: &str,
    email: &str,
    status: SellerStatus,
) -> SellerApplication {
    SellerApplication {
        id: SellerId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        phone: "+63 912 345 6789".to_string(),
        business_name: business_name.to_string(),
        categories: vec!["Men's Slippers".to_string()],
        application_date: date(2023, 6, 15),
        status,
        product_images: Vec::new(),
    }
}

pub(super) fn juan() -> SellerApplication {
    let mut juan = application(
        "1",
        "Juan Dela Cruz",
        "Juan's Footwear",
        "juan@example.com",
        SellerStatus::Pending,
    );
    juan.categories = vec!["Men's Slippers".to_string(), "Women's Slippers".to_string()];
    juan.product_images = vec![
        "https://images.example.com/juan-1.jpg".to_string(),
        "https://images.example.com/juan-2.jpg".to_string(),
    ];
    juan
}

pub(super) fn maria() -> SellerApplication {
    let mut maria = application(
        "2",
        "Maria Santos",
        "Maria's Handcrafted",
        "maria@example.com",
        SellerStatus::Pending,
    );
    maria.application_date = date(2023, 6, 18);
    maria
}

/// Mixed-status collection used by the filtering properties.
pub(super) fn mixed_records() -> Vec<SellerApplication> {
    vec![
        juan(),
        maria(),
        application(
            "3",
            "Pedro Reyes",
            "Reyes Footwear",
            "pedro@example.com",
            SellerStatus::Approved,
        ),
        application(
            "4",
            "Ana Maria Lopez",
            "Laguna Weaves",
            "ana@example.com",
            SellerStatus::Rejected,
        ),
        application(
            "5",
            "Jose Rizal",
            "MARIAKINA Soles",
            "jose@example.com",
            SellerStatus::Approved,
        ),
    ]
}

pub(super) fn maria_detail() -> SellerDetail {
    SellerDetail {
        id: SellerId::new("2"),
        name: "Maria Santos".to_string(),
        email: "maria@example.com".to_string(),
        phone: "+63 912 345 6789".to_string(),
        address: "Liliw, Laguna, Philippines".to_string(),
        application_date: date(2023, 6, 18),
        business_name: "Maria's Handcrafted Slippers".to_string(),
        business_description: "Handmade traditional slippers".to_string(),
        profile_image: "https://avatars.example.com/maria.svg".to_string(),
        documents: vec![SellerDocument {
            id: "doc-1".to_string(),
            name: "Business Permit".to_string(),
            kind: "PDF".to_string(),
            url: "https://files.example.com/permit.pdf".to_string(),
        }],
        products: vec![ProductListing {
            id: "prod-1".to_string(),
            name: "Traditional Abaca Slippers".to_string(),
            description: "Handwoven abaca slippers".to_string(),
            price: 350.0,
            images: vec![
                "https://images.example.com/abaca-1.jpg".to_string(),
                "https://images.example.com/abaca-2.jpg".to_string(),
            ],
            category: "Traditional".to_string(),
        }],
    }
}

pub(super) fn build_service() -> (
    SellerReviewService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::seeded(vec![
        SellerRecord::new(juan()),
        SellerRecord::new(maria()).with_detail(maria_detail()),
    ]));
    let notifier = Arc::new(MemoryNotifier::default());
    let service = SellerReviewService::new(repository.clone(), notifier.clone());
    (service, repository, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<SellerRecord>>>,
}

impl MemoryRepository {
    pub(super) fn seeded(records: Vec<SellerRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    pub(super) fn status_of(&self, id: &str) -> SellerStatus {
        self.fetch(&SellerId::new(id))
            .expect("fetch succeeds")
            .expect("record present")
            .application
            .status
    }
}

impl SellerRepository for MemoryRepository {
    fn insert(&self, record: SellerRecord) -> Result<SellerRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id() == record.id()) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn update(&self, record: SellerRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let slot = guard
            .iter_mut()
            .find(|existing| existing.id() == record.id())
            .ok_or(RepositoryError::NotFound)?;
        *slot = record;
        Ok(())
    }

    fn update_if_status(
        &self,
        expected: SellerStatus,
        record: SellerRecord,
    ) -> Result<bool, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let slot = guard
            .iter_mut()
            .find(|existing| existing.id() == record.id())
            .ok_or(RepositoryError::NotFound)?;
        if slot.application.status != expected {
            return Ok(false);
        }
        *slot = record;
        Ok(true)
    }

    fn fetch(&self, id: &SellerId) -> Result<Option<SellerRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| record.id() == id).cloned())
    }

    fn list(&self) -> Result<Vec<SellerRecord>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<ReviewNotice>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<ReviewNotice> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl ReviewNotifier for MemoryNotifier {
    fn notify(&self, notice: ReviewNotice) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct OfflineNotifier;

impl ReviewNotifier for OfflineNotifier {
    fn notify(&self, _notice: ReviewNotice) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("mail relay offline".to_string()))
    }
}

pub(super) struct UnavailableRepository;

impl SellerRepository for UnavailableRepository {
    fn insert(&self, _record: SellerRecord) -> Result<SellerRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: SellerRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_if_status(
        &self,
        _expected: SellerStatus,
        _record: SellerRecord,
    ) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SellerId) -> Result<Option<SellerRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<SellerRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(
    service: SellerReviewService<MemoryRepository, MemoryNotifier>,
) -> axum::Router {
    seller_router(Arc::new(service))
}
