use crate::infra::{demo_seller_records, InMemorySellerRepository, RecordingNotifier};
use clap::Args;
use marketplace_admin::analytics::{AnalyticsOverview, ReportingPeriod, SalesSnapshot, Trend};
use marketplace_admin::error::AppError;
use marketplace_admin::reports::{
    write_sales_report, write_seller_performance_report, write_seller_report, ReportError,
};
use marketplace_admin::sellers::{
    DetailTab, ReviewServiceError, SellerDetailView, SellerId, SellerQuery, SellerReviewService,
    SellerRowView,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

type DemoService = SellerReviewService<InMemorySellerRepository, RecordingNotifier>;

#[derive(Args, Debug, Default)]
pub(crate) struct SellerListArgs {
    /// Case-insensitive match against name, business name, or email
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Status filter: all, pending, approved, or rejected
    #[arg(long)]
    pub(crate) status: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SellerReportArgs {
    /// Write the CSV to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) filter: SellerListArgs,
}

/// Which analytics download to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnalyticsReport {
    Sales,
    SellerPerformance,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyticsReportArgs {
    /// Write the CSV to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) window: AnalyticsArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyticsArgs {
    /// Reporting period: daily, weekly, or monthly
    #[arg(long, default_value = "daily")]
    pub(crate) period: String,
}

fn demo_service() -> Result<(DemoService, Arc<RecordingNotifier>), AppError> {
    let records = demo_seller_records().map_err(ReviewServiceError::Repository)?;
    let repository =
        InMemorySellerRepository::seeded(records).map_err(ReviewServiceError::Repository)?;
    let notifier = Arc::new(RecordingNotifier::default());
    let service = SellerReviewService::new(Arc::new(repository), notifier.clone());
    Ok((service, notifier))
}

impl SellerListArgs {
    fn query(&self) -> Result<SellerQuery, AppError> {
        Ok(SellerQuery::parse(
            self.search.as_deref(),
            self.status.as_deref(),
        )?)
    }
}

pub(crate) fn run_seller_list(args: SellerListArgs) -> Result<(), AppError> {
    let query = args.query()?;
    let (service, _) = demo_service()?;
    let applications = service.list(&query)?;

    println!(
        "Seller applications (search: {:?}, status: {})",
        query.search, query.status
    );
    if applications.is_empty() {
        println!("No seller applications found");
        return Ok(());
    }
    for application in &applications {
        render_row(&SellerRowView::from(application));
    }
    Ok(())
}

pub(crate) fn run_seller_report(args: SellerReportArgs) -> Result<(), AppError> {
    let SellerReportArgs { output, filter } = args;
    let query = filter.query()?;
    let (service, _) = demo_service()?;
    let applications = service.list(&query)?;

    let rows = applications.len();
    write_report(output, "seller applications", rows, |writer| {
        write_seller_report(writer, &applications).map(drop)
    })
}

pub(crate) fn run_analytics_report(
    report: AnalyticsReport,
    args: AnalyticsReportArgs,
) -> Result<(), AppError> {
    let AnalyticsReportArgs { output, window } = args;
    let period = window.period.parse::<ReportingPeriod>()?;
    let snapshot = SalesSnapshot::demo();

    match report {
        AnalyticsReport::Sales => {
            let products = snapshot.ranked_products();
            let label = format!("{period} sales rows");
            write_report(output, &label, products.len(), |writer| {
                write_sales_report(writer, &products).map(drop)
            })
        }
        AnalyticsReport::SellerPerformance => {
            let sellers = snapshot.ranked_sellers();
            let label = format!("{period} seller performance rows");
            write_report(output, &label, sellers.len(), |writer| {
                write_seller_performance_report(writer, &sellers).map(drop)
            })
        }
    }
}

/// Write a CSV report to `output`, or to stdout when no path is given.
fn write_report<F>(
    output: Option<PathBuf>,
    label: &str,
    rows: usize,
    write: F,
) -> Result<(), AppError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), ReportError>,
{
    match output {
        Some(path) => {
            let mut file = BufWriter::new(File::create(&path)?);
            write(&mut file)?;
            println!("Wrote {} {} to {}", rows, label, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            write(&mut stdout)?;
        }
    }
    Ok(())
}

pub(crate) fn run_analytics(args: AnalyticsArgs) -> Result<(), AppError> {
    let period = args.period.parse::<ReportingPeriod>()?;
    render_overview(&AnalyticsOverview::demo(period));
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let (service, notifier) = demo_service()?;

    println!("Marketplace admin demo");
    let pending = SellerQuery::parse(None, Some("pending"))?;
    let queue = service.list(&pending)?;
    println!("\nPending queue ({} applications)", queue.len());
    for application in &queue {
        render_row(&SellerRowView::from(application));
    }

    let maria = SellerId::new("2");
    let detail = SellerDetailView::from(&service.detail(&maria)?);
    render_detail(&detail);

    println!("\nReview decisions");
    let approved = service.approve(&SellerId::new("1"))?;
    println!("- {} -> {}", approved.name, approved.status.display_label());
    let rejected = service.reject(&SellerId::new("3"))?;
    println!("- {} -> {}", rejected.name, rejected.status.display_label());

    match service.request_more_info(&maria, "   ") {
        Ok(_) => println!("- Blank information request unexpectedly accepted"),
        Err(err) => println!("- Blank information request refused: {}", err),
    }
    let asked = service.request_more_info(
        &maria,
        "Please upload a clearer copy of your business permit.",
    )?;
    println!(
        "- {} -> more information requested (status stays {})",
        asked.name,
        asked.status.display_label()
    );

    println!("\nNotifications dispatched");
    for notice in notifier.events() {
        println!("- {} for seller {}", notice.template(), notice.seller_id());
    }

    println!("\nFinal review list");
    for application in service.list(&SellerQuery::default())? {
        render_row(&SellerRowView::from(&application));
    }

    render_overview(&AnalyticsOverview::demo(ReportingPeriod::default()));
    Ok(())
}

fn render_row(row: &SellerRowView) {
    println!(
        "- [{}] {} ({}) <{}> | {} | applied {} | {}",
        row.avatar_initials,
        row.name,
        row.business_name,
        row.email,
        row.categories.join(", "),
        row.application_date_label,
        row.status_label
    );
    if let Some(more) = &row.more_images_label {
        println!("  {} product images shown, {} more", row.thumbnails.len(), more);
    }
}

fn render_detail(detail: &SellerDetailView) {
    let tabs: Vec<&str> = DetailTab::ordered().iter().map(|tab| tab.label()).collect();
    println!(
        "\nSeller detail: {} [{}]",
        detail.profile.business_name,
        tabs.join(" | ")
    );
    println!("  Owner: {}", detail.profile.name);
    println!("  Contact: {} / {}", detail.profile.email, detail.profile.phone);
    if !detail.profile.address.is_empty() {
        println!("  Address: {}", detail.profile.address);
    }
    for product in &detail.products {
        println!(
            "  Product: {} ({}) {}",
            product.name, product.category, product.price_label
        );
    }
    for document in &detail.documents {
        println!("  Document: {} - {}", document.name, document.kind_label);
    }
}

fn render_overview(overview: &AnalyticsOverview) {
    println!("\nAnalytics overview ({})", overview.period);
    for card in &overview.stats {
        let arrow = match card.trend {
            Trend::Up => "up",
            Trend::Down => "down",
        };
        println!(
            "- {}: {} ({} {:.1}%)",
            card.title, card.value, arrow, card.change_pct
        );
    }

    println!("\nTop products");
    for product in &overview.top_products {
        println!(
            "- {}: {} sold, {} ({:.0}% of leader)",
            product.name, product.sales, product.revenue_label, product.share_of_leader_pct
        );
    }

    println!("\nSeller performance");
    for seller in &overview.seller_performance {
        println!(
            "- {}: {} sales, rating {:.1} ({} stars)",
            seller.name, seller.sales, seller.rating, seller.full_stars
        );
    }
}
