//! Revenue and performance summaries for the dashboard overview.

mod views;

pub use views::{ProductSalesView, SellerPerformanceView, StatCard};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of products and sellers shown in the overview rankings.
pub const RANKING_LIMIT: usize = 5;

/// Reporting window selected on the overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportingPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl ReportingPeriod {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reporting period '{0}' (expected daily, weekly, or monthly)")]
pub struct UnknownPeriod(pub String);

impl FromStr for ReportingPeriod {
    type Err = UnknownPeriod;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(UnknownPeriod(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

/// Revenue total for the period and its change against the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Whole pesos.
    pub total: u64,
    pub percentage_change: f32,
    pub is_positive: bool,
}

impl RevenueSummary {
    pub const fn trend(&self) -> Trend {
        if self.is_positive {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub id: String,
    pub name: String,
    pub sales: u32,
    pub revenue: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerPerformance {
    pub id: String,
    pub name: String,
    pub sales: u32,
    pub rating: f32,
}

/// Raw sales figures for a period, behind both the overview and the downloadable reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSnapshot {
    pub revenue: RevenueSummary,
    /// Cards shown after the revenue card.
    pub stats: Vec<StatCard>,
    pub products: Vec<ProductSales>,
    pub sellers: Vec<SellerPerformance>,
}

impl SalesSnapshot {
    /// Every product, best sellers first. Ties keep their input order.
    pub fn ranked_products(&self) -> Vec<ProductSales> {
        let mut products = self.products.clone();
        products.sort_by(|left, right| right.sales.cmp(&left.sales));
        products
    }

    /// Every seller, highest sales first. Ties keep their input order.
    pub fn ranked_sellers(&self) -> Vec<SellerPerformance> {
        let mut sellers = self.sellers.clone();
        sellers.sort_by(|left, right| right.sales.cmp(&left.sales));
        sellers
    }

    /// Sample figures used by the console until a sales source is wired in.
    pub fn demo() -> Self {
        let revenue = RevenueSummary {
            total: 24_500,
            percentage_change: 12.5,
            is_positive: true,
        };

        let stats = vec![
            StatCard::new("Total Orders", "1,284", 8.2, Trend::Up),
            StatCard::new("Active Sellers", "42", 4.5, Trend::Up),
            StatCard::new("Conversion Rate", "3.2%", 0.4, Trend::Down),
        ];

        let products = [
            ("1", "Classic Liliw Slippers", 245, 4_900),
            ("2", "Embroidered Slippers", 187, 4_675),
            ("3", "Beaded Liliw Sandals", 156, 3_900),
            ("4", "Woven Pattern Slippers", 134, 3_350),
            ("5", "Premium Leather Slippers", 98, 2_940),
        ]
        .into_iter()
        .map(|(id, name, sales, revenue)| ProductSales {
            id: id.to_string(),
            name: name.to_string(),
            sales,
            revenue,
        })
        .collect();

        let sellers = [
            ("1", "Liliw Crafts Co.", 342, 4.8),
            ("2", "Laguna Footwear", 287, 4.7),
            ("3", "Handmade Treasures", 245, 4.9),
            ("4", "Filipino Artisans", 198, 4.5),
            ("5", "Heritage Slippers", 176, 4.6),
        ]
        .into_iter()
        .map(|(id, name, sales, rating)| SellerPerformance {
            id: id.to_string(),
            name: name.to_string(),
            sales,
            rating,
        })
        .collect();

        Self {
            revenue,
            stats,
            products,
            sellers,
        }
    }
}

/// Everything the dashboard overview renders.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsOverview {
    pub period: ReportingPeriod,
    pub revenue: RevenueSummary,
    pub stats: Vec<StatCard>,
    pub top_products: Vec<ProductSalesView>,
    pub seller_performance: Vec<SellerPerformanceView>,
}

impl AnalyticsOverview {
    /// Assemble the overview. The revenue card is always first; products and sellers are
    /// ranked by sales volume and capped at [`RANKING_LIMIT`].
    pub fn build(period: ReportingPeriod, snapshot: &SalesSnapshot) -> Self {
        let mut products = snapshot.ranked_products();
        products.truncate(RANKING_LIMIT);
        let mut sellers = snapshot.ranked_sellers();
        sellers.truncate(RANKING_LIMIT);

        let leader_sales = products.first().map_or(0, |product| product.sales);

        let mut stats = Vec::with_capacity(snapshot.stats.len() + 1);
        stats.push(StatCard::revenue(&snapshot.revenue));
        stats.extend(snapshot.stats.iter().cloned());

        Self {
            period,
            revenue: snapshot.revenue.clone(),
            stats,
            top_products: products
                .iter()
                .map(|product| ProductSalesView::new(product, leader_sales))
                .collect(),
            seller_performance: sellers.iter().map(SellerPerformanceView::from).collect(),
        }
    }

    pub fn demo(period: ReportingPeriod) -> Self {
        Self::build(period, &SalesSnapshot::demo())
    }
}

/// Whole-peso amount with thousands separators, e.g. `₱24,500`.
pub fn format_peso_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("₱{grouped}")
}
