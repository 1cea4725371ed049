use chrono::NaiveDate;
use marketplace_admin::sellers::{
    NotifyError, ProductListing, RepositoryError, ReviewNotice, ReviewNotifier, SellerApplication,
    SellerDetail, SellerDocument, SellerId, SellerRecord, SellerRepository, SellerStatus,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Insertion-ordered store so listings keep the order applications arrived in.
#[derive(Default, Clone)]
pub(crate) struct InMemorySellerRepository {
    records: Arc<Mutex<Vec<SellerRecord>>>,
}

impl InMemorySellerRepository {
    pub(crate) fn seeded(records: Vec<SellerRecord>) -> Result<Self, RepositoryError> {
        let repository = Self::default();
        for record in records {
            repository.insert(record)?;
        }
        Ok(repository)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<SellerRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("seller store mutex poisoned".to_string()))
    }
}

impl SellerRepository for InMemorySellerRepository {
    fn insert(&self, record: SellerRecord) -> Result<SellerRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.iter().any(|existing| existing.id() == record.id()) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn update(&self, record: SellerRecord) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        match guard.iter_mut().find(|existing| existing.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn update_if_status(
        &self,
        expected: SellerStatus,
        record: SellerRecord,
    ) -> Result<bool, RepositoryError> {
        let mut guard = self.lock()?;
        match guard.iter_mut().find(|existing| existing.id() == record.id()) {
            Some(slot) if slot.application.status == expected => {
                *slot = record;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &SellerId) -> Result<Option<SellerRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.iter().find(|record| record.id() == id).cloned())
    }

    fn list(&self) -> Result<Vec<SellerRecord>, RepositoryError> {
        Ok(self.lock()?.clone())
    }
}

/// Writes every notice to the log in place of an outbound mailer.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TracingNotifier;

impl ReviewNotifier for TracingNotifier {
    fn notify(&self, notice: ReviewNotice) -> Result<(), NotifyError> {
        info!(
            seller_id = %notice.seller_id(),
            template = notice.template(),
            "seller notification dispatched"
        );
        Ok(())
    }
}

/// Logs like [`TracingNotifier`] and keeps each notice so a session can be replayed.
#[derive(Default, Clone)]
pub(crate) struct RecordingNotifier {
    events: Arc<Mutex<Vec<ReviewNotice>>>,
}

impl ReviewNotifier for RecordingNotifier {
    fn notify(&self, notice: ReviewNotice) -> Result<(), NotifyError> {
        TracingNotifier.notify(notice.clone())?;
        let mut guard = self
            .events
            .lock()
            .map_err(|_| NotifyError::Transport("notification log mutex poisoned".to_string()))?;
        guard.push(notice);
        Ok(())
    }
}

impl RecordingNotifier {
    pub(crate) fn events(&self) -> Vec<ReviewNotice> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, RepositoryError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        RepositoryError::InvalidRecord(format!("seed date {year}-{month:02}-{day:02} does not exist"))
    })
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w=400&q=80")
}

#[allow(clippy::too_many_arguments)]
fn application(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    business_name: &str,
    categories: [&str; 2],
    application_date: NaiveDate,
    photos: [&str; 2],
) -> SellerApplication {
    SellerApplication {
        id: SellerId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        business_name: business_name.to_string(),
        categories: categories.iter().map(|category| category.to_string()).collect(),
        application_date,
        status: SellerStatus::Pending,
        product_images: photos.iter().map(|photo| unsplash(photo)).collect(),
    }
}

fn product(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    photos: &[&str],
    category: &str,
) -> ProductListing {
    ProductListing {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        images: photos.iter().map(|photo| unsplash(photo)).collect(),
        category: category.to_string(),
    }
}

fn maria_detail(application: &SellerApplication) -> SellerDetail {
    let document = |id: &str, name: &str, kind: &str| SellerDocument {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        url: "#".to_string(),
    };
    SellerDetail {
        address: "Liliw, Laguna, Philippines".to_string(),
        business_description: "Handmade traditional slippers using locally sourced materials \
            with unique designs inspired by Filipino culture."
            .to_string(),
        profile_image: "https://api.dicebear.com/7.x/avataaars/svg?seed=Maria".to_string(),
        documents: vec![
            document("doc-1", "Business Permit", "PDF"),
            document("doc-2", "Valid ID", "JPG"),
            document("doc-3", "Tax Certificate", "PDF"),
        ],
        products: vec![
            product(
                "prod-1",
                "Traditional Abaca Slippers",
                "Handwoven abaca slippers with comfortable soles",
                350.0,
                &["1543163521-1bf539c55dd2", "1562273138-f46be4ebdf33"],
                "Traditional",
            ),
            product(
                "prod-2",
                "Modern Woven Slippers",
                "Contemporary design with traditional weaving techniques",
                450.0,
                &["1531310197839-ccf54634509e", "1601924582970-9238bcb495d9"],
                "Modern",
            ),
            product(
                "prod-3",
                "Children's Colorful Slippers",
                "Bright and colorful slippers for kids",
                250.0,
                &["1560769629-975ec94e6a86"],
                "Children",
            ),
        ],
        ..SellerDetail::from_application(application)
    }
}

/// Pending applications shown by the console before any reviewer has acted.
pub(crate) fn demo_seller_records() -> Result<Vec<SellerRecord>, RepositoryError> {
    let juan = application(
        "1",
        "Juan Dela Cruz",
        "juan@example.com",
        "+63 912 345 6789",
        "Juan's Footwear",
        ["Men's Slippers", "Women's Slippers"],
        date(2023, 6, 15)?,
        ["1543163521-1bf539c55dd2", "1562273138-f46be4ebdf33"],
    );
    let maria = application(
        "2",
        "Maria Santos",
        "maria@example.com",
        "+63 923 456 7890",
        "Maria's Handcrafted",
        ["Children's Slippers", "Custom Designs"],
        date(2023, 6, 18)?,
        ["1551107696-a4b0c5a0d9a2", "1531310197839-ccf54634509e"],
    );
    let pedro = application(
        "3",
        "Pedro Reyes",
        "pedro@example.com",
        "+63 934 567 8901",
        "Reyes Footwear",
        ["Beach Slippers", "Casual Wear"],
        date(2023, 6, 20)?,
        ["1603487742131-4160ec999306", "1578116922645-3976907a7671"],
    );

    let maria_profile = maria_detail(&maria);
    Ok(vec![
        SellerRecord::new(juan),
        SellerRecord::new(maria).with_detail(maria_profile),
        SellerRecord::new(pedro),
    ])
}
