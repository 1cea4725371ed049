use serde::Serialize;

use super::{format_peso_amount, ProductSales, RevenueSummary, SellerPerformance, Trend};

const MAX_STARS: f32 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change_pct: f32,
    pub trend: Trend,
}

impl StatCard {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        change_pct: f32,
        trend: Trend,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change_pct,
            trend,
        }
    }

    pub(super) fn revenue(summary: &RevenueSummary) -> Self {
        Self::new(
            "Total Revenue",
            format_peso_amount(summary.total),
            summary.percentage_change,
            summary.trend(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSalesView {
    pub id: String,
    pub name: String,
    pub sales: u32,
    pub revenue: u64,
    pub revenue_label: String,
    /// Sales relative to the best-selling product, 0..=100.
    pub share_of_leader_pct: f32,
}

impl ProductSalesView {
    pub(super) fn new(product: &ProductSales, leader_sales: u32) -> Self {
        let share_of_leader_pct = if leader_sales == 0 {
            0.0
        } else {
            product.sales as f32 / leader_sales as f32 * 100.0
        };

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            sales: product.sales,
            revenue: product.revenue,
            revenue_label: format_peso_amount(product.revenue),
            share_of_leader_pct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerPerformanceView {
    pub id: String,
    pub name: String,
    pub sales: u32,
    pub rating: f32,
    pub full_stars: u8,
}

impl From<&SellerPerformance> for SellerPerformanceView {
    fn from(seller: &SellerPerformance) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.name.clone(),
            sales: seller.sales,
            rating: seller.rating,
            full_stars: seller.rating.floor().clamp(0.0, MAX_STARS) as u8,
        }
    }
}
