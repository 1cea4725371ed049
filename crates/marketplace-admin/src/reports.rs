//! Downloadable reports for the admin console: seller applications, product sales, and
//! seller performance, all written as CSV.

use std::io::Write;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::{ProductSales, SellerPerformance};
use crate::sellers::SellerApplication;

pub const SELLER_REPORT_HEADER: [&str; 8] = [
    "id",
    "name",
    "email",
    "phone",
    "business_name",
    "categories",
    "application_date",
    "status",
];

pub const SALES_REPORT_HEADER: [&str; 5] =
    ["rank", "product_id", "product_name", "units_sold", "revenue"];

pub const SELLER_PERFORMANCE_REPORT_HEADER: [&str; 5] =
    ["rank", "seller_id", "seller_name", "sales", "rating"];

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error while writing report: {0}")]
    Io(#[from] std::io::Error),
    #[error("report is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Serialize)]
struct SellerReportRow<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    business_name: &'a str,
    categories: String,
    application_date: NaiveDate,
    status: &'static str,
}

impl<'a> From<&'a SellerApplication> for SellerReportRow<'a> {
    fn from(application: &'a SellerApplication) -> Self {
        Self {
            id: application.id.as_str(),
            name: &application.name,
            email: &application.email,
            phone: &application.phone,
            business_name: &application.business_name,
            categories: application.categories.join("; "),
            application_date: application.application_date,
            status: application.status.label(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SalesReportRow<'a> {
    rank: usize,
    product_id: &'a str,
    product_name: &'a str,
    units_sold: u32,
    /// Whole pesos, unformatted so spreadsheets can sum the column.
    revenue: u64,
}

#[derive(Debug, Serialize)]
struct SellerPerformanceReportRow<'a> {
    rank: usize,
    seller_id: &'a str,
    seller_name: &'a str,
    sales: u32,
    rating: f32,
}

fn write_csv<W, R, I>(writer: W, header: &[&str], rows: I) -> Result<W, ReportError>
where
    W: Write,
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(header)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    csv_writer
        .into_inner()
        .map_err(|err| ReportError::Io(err.into_error()))
}

fn into_text(bytes: Vec<u8>) -> Result<String, ReportError> {
    Ok(String::from_utf8(bytes)?)
}

/// Write the seller application report as CSV. The header row is always written, even when
/// no applications match.
pub fn write_seller_report<'a, W, I>(writer: W, applications: I) -> Result<W, ReportError>
where
    W: Write,
    I: IntoIterator<Item = &'a SellerApplication>,
{
    write_csv(
        writer,
        &SELLER_REPORT_HEADER,
        applications.into_iter().map(SellerReportRow::from),
    )
}

pub fn seller_report_csv<'a, I>(applications: I) -> Result<String, ReportError>
where
    I: IntoIterator<Item = &'a SellerApplication>,
{
    into_text(write_seller_report(Vec::new(), applications)?)
}

/// Write the sales report. Rows keep the input order and are numbered from 1, so callers
/// pass products already ranked.
pub fn write_sales_report<'a, W, I>(writer: W, products: I) -> Result<W, ReportError>
where
    W: Write,
    I: IntoIterator<Item = &'a ProductSales>,
{
    let rows = products
        .into_iter()
        .enumerate()
        .map(|(index, product)| SalesReportRow {
            rank: index + 1,
            product_id: &product.id,
            product_name: &product.name,
            units_sold: product.sales,
            revenue: product.revenue,
        });
    write_csv(writer, &SALES_REPORT_HEADER, rows)
}

pub fn sales_report_csv<'a, I>(products: I) -> Result<String, ReportError>
where
    I: IntoIterator<Item = &'a ProductSales>,
{
    into_text(write_sales_report(Vec::new(), products)?)
}

/// Write the seller performance report, numbered in input order like the sales report.
pub fn write_seller_performance_report<'a, W, I>(writer: W, sellers: I) -> Result<W, ReportError>
where
    W: Write,
    I: IntoIterator<Item = &'a SellerPerformance>,
{
    let rows = sellers
        .into_iter()
        .enumerate()
        .map(|(index, seller)| SellerPerformanceReportRow {
            rank: index + 1,
            seller_id: &seller.id,
            seller_name: &seller.name,
            sales: seller.sales,
            rating: seller.rating,
        });
    write_csv(writer, &SELLER_PERFORMANCE_REPORT_HEADER, rows)
}

pub fn seller_performance_report_csv<'a, I>(sellers: I) -> Result<String, ReportError>
where
    I: IntoIterator<Item = &'a SellerPerformance>,
{
    into_text(write_seller_performance_report(Vec::new(), sellers)?)
}

/// `200 OK` CSV download named `filename`.
pub fn csv_attachment(filename: &str, csv: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response()
}
