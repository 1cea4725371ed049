use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{
    ProductListing, SellerApplication, SellerDetail, SellerDocument, SellerId, SellerStatus,
};

/// Number of product thumbnails shown per list row before collapsing into a `+N` counter.
pub const ROW_THUMBNAIL_LIMIT: usize = 2;

/// Badge styling for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Default,
    Destructive,
    Secondary,
}

impl From<SellerStatus> for BadgeVariant {
    fn from(status: SellerStatus) -> Self {
        match status {
            SellerStatus::Approved => BadgeVariant::Default,
            SellerStatus::Rejected => BadgeVariant::Destructive,
            SellerStatus::Pending => BadgeVariant::Secondary,
        }
    }
}

/// One row of the seller application list.
#[derive(Debug, Clone, Serialize)]
pub struct SellerRowView {
    pub seller_id: SellerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar_initials: String,
    pub business_name: String,
    pub categories: Vec<String>,
    pub application_date: NaiveDate,
    pub application_date_label: String,
    pub status: SellerStatus,
    pub status_label: &'static str,
    pub badge: BadgeVariant,
    pub thumbnails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_images_label: Option<String>,
}

impl From<&SellerApplication> for SellerRowView {
    fn from(application: &SellerApplication) -> Self {
        let hidden = application
            .product_images
            .len()
            .saturating_sub(ROW_THUMBNAIL_LIMIT);

        Self {
            seller_id: application.id.clone(),
            name: application.name.clone(),
            email: application.email.clone(),
            phone: application.phone.clone(),
            avatar_initials: initials(&application.name),
            business_name: application.business_name.clone(),
            categories: application.categories.clone(),
            application_date: application.application_date,
            application_date_label: format_display_date(application.application_date),
            status: application.status,
            status_label: application.status.display_label(),
            badge: application.status.into(),
            thumbnails: application
                .product_images
                .iter()
                .take(ROW_THUMBNAIL_LIMIT)
                .cloned()
                .collect(),
            more_images_label: (hidden > 0).then(|| format!("+{hidden}")),
        }
    }
}

/// Tabs of the seller review dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailTab {
    #[default]
    Profile,
    Products,
    Documents,
}

impl DetailTab {
    pub const fn ordered() -> [Self; 3] {
        [Self::Profile, Self::Products, Self::Documents]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile Information",
            Self::Products => "Product Listings",
            Self::Documents => "Documents",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileTabView {
    pub name: String,
    pub avatar_url: String,
    pub avatar_fallback: String,
    pub business_name: String,
    pub business_description: String,
    pub application_date: NaiveDate,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductCardView {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub additional_images: Vec<String>,
}

impl From<&ProductListing> for ProductCardView {
    fn from(product: &ProductListing) -> Self {
        let mut images = product.images.iter().cloned();
        let cover_image = images.next();

        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price_label: format_peso_price(product.price),
            cover_image,
            additional_images: images.collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentCardView {
    pub document_id: String,
    pub name: String,
    pub kind_label: String,
    pub url: String,
}

impl From<&SellerDocument> for DocumentCardView {
    fn from(document: &SellerDocument) -> Self {
        Self {
            document_id: document.id.clone(),
            name: document.name.clone(),
            kind_label: format!("{} Document", document.kind),
            url: document.url.clone(),
        }
    }
}

/// Read-only projection of a seller profile into the review dialog's tabs.
#[derive(Debug, Clone, Serialize)]
pub struct SellerDetailView {
    pub seller_id: SellerId,
    pub default_tab: DetailTab,
    pub profile: ProfileTabView,
    pub products: Vec<ProductCardView>,
    pub documents: Vec<DocumentCardView>,
}

impl From<&SellerDetail> for SellerDetailView {
    fn from(detail: &SellerDetail) -> Self {
        Self {
            seller_id: detail.id.clone(),
            default_tab: DetailTab::default(),
            profile: ProfileTabView {
                name: detail.name.clone(),
                avatar_url: detail.profile_image.clone(),
                avatar_fallback: detail.name.chars().take(1).collect(),
                business_name: detail.business_name.clone(),
                business_description: detail.business_description.clone(),
                application_date: detail.application_date,
                email: detail.email.clone(),
                phone: detail.phone.clone(),
                address: detail.address.clone(),
            },
            products: detail.products.iter().map(ProductCardView::from).collect(),
            documents: detail.documents.iter().map(DocumentCardView::from).collect(),
        }
    }
}

/// `2023-06-15` -> `Jun 15, 2023`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Two-decimal peso amount, e.g. `₱350.00`.
pub fn format_peso_price(amount: f64) -> String {
    format!("₱{amount:.2}")
}

fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}
