use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Identifier wrapper for seller applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellerId(pub String);

impl SellerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Review stage of a seller application. `Approved` and `Rejected` are final decisions;
/// nothing moves an application back to `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellerStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SellerStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Pending, Self::Approved, Self::Rejected]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Capitalised label shown on status badges.
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl fmt::Display for SellerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SellerStatus {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|status| status.label() == normalized)
            .ok_or_else(|| ValidationError::UnknownStatus(raw.to_string()))
    }
}

/// Application submitted by a prospective marketplace seller, as shown in the review list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerApplication {
    pub id: SellerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    pub categories: Vec<String>,
    pub application_date: NaiveDate,
    #[serde(default)]
    pub status: SellerStatus,
    #[serde(default)]
    pub product_images: Vec<String>,
}

/// Supporting document attached to a seller application (permits, IDs, tax certificates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerDocument {
    pub id: String,
    pub name: String,
    /// File kind as uploaded, e.g. `PDF` or `JPG`.
    pub kind: String,
    pub url: String,
}

/// Product the seller intends to list once onboarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListing {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in pesos.
    pub price: f64,
    pub images: Vec<String>,
    pub category: String,
}

/// Richer seller profile backing the review detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerDetail {
    pub id: SellerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub application_date: NaiveDate,
    pub business_name: String,
    pub business_description: String,
    pub profile_image: String,
    pub documents: Vec<SellerDocument>,
    pub products: Vec<ProductListing>,
}

impl SellerDetail {
    /// Detail shape derived from a list record when no richer profile was captured.
    pub fn from_application(application: &SellerApplication) -> Self {
        Self {
            id: application.id.clone(),
            name: application.name.clone(),
            email: application.email.clone(),
            phone: application.phone.clone(),
            address: String::new(),
            application_date: application.application_date,
            business_name: application.business_name.clone(),
            business_description: String::new(),
            profile_image: String::new(),
            documents: Vec::new(),
            products: Vec::new(),
        }
    }
}
