use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::domain::{SellerApplication, SellerStatus};
use super::validation::ValidationError;

/// Status narrowing applied to the review list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SellerStatus),
}

impl StatusFilter {
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.label(),
        }
    }

    pub fn matches(self, status: SellerStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        raw.parse::<SellerStatus>()
            .map(Self::Only)
            .map_err(|_| ValidationError::UnknownStatusFilter(raw.to_string()))
    }
}

impl Serialize for StatusFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// Search text and status filter as entered in the review list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SellerQuery {
    pub search: String,
    pub status: StatusFilter,
}

impl SellerQuery {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    /// Build a query from optional raw inputs, e.g. URL parameters or CLI flags.
    pub fn parse(search: Option<&str>, status: Option<&str>) -> Result<Self, ValidationError> {
        let status = match status {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => StatusFilter::All,
        };
        Ok(Self::new(search.unwrap_or_default(), status))
    }

    pub fn apply<'a>(&self, records: &'a [SellerApplication]) -> Vec<&'a SellerApplication> {
        filter_applications(records, &self.search, self.status)
    }
}

/// Narrow `records` to those matching both the search text and the status filter.
///
/// The search is a case-insensitive substring match against the seller's name, business
/// name, or email; an empty search matches everything. Input order is preserved.
pub fn filter_applications<'a>(
    records: &'a [SellerApplication],
    search_term: &str,
    status_filter: StatusFilter,
) -> Vec<&'a SellerApplication> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| matches_search(record, &needle) && status_filter.matches(record.status))
        .collect()
}

fn matches_search(record: &SellerApplication, needle: &str) -> bool {
    [&record.name, &record.business_name, &record.email]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
