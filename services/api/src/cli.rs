use crate::demo::{
    run_analytics, run_analytics_report, run_demo, run_seller_list, run_seller_report,
    AnalyticsArgs, AnalyticsReport, AnalyticsReportArgs, SellerListArgs, SellerReportArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use marketplace_admin::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Marketplace Admin Console",
    about = "Review seller applications and inspect marketplace analytics from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect or export seller applications
    Sellers {
        #[command(subcommand)]
        command: SellersCommand,
    },
    /// Print the analytics overview for a reporting period
    Analytics(AnalyticsArgs),
    /// Download sales or seller performance reports as CSV
    Reports {
        #[command(subcommand)]
        command: ReportsCommand,
    },
    /// Walk through a full review session against the sample applications
    Demo,
}

#[derive(Subcommand, Debug)]
enum SellersCommand {
    /// List applications matching a search term and status filter
    List(SellerListArgs),
    /// Export matching applications as CSV
    Report(SellerReportArgs),
}

#[derive(Subcommand, Debug)]
enum ReportsCommand {
    /// Units sold and revenue per product, best sellers first
    Sales(AnalyticsReportArgs),
    /// Sales and rating per seller, highest sales first
    SellerPerformance(AnalyticsReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Sellers {
            command: SellersCommand::List(args),
        } => run_seller_list(args),
        Command::Sellers {
            command: SellersCommand::Report(args),
        } => run_seller_report(args),
        Command::Analytics(args) => run_analytics(args),
        Command::Reports {
            command: ReportsCommand::Sales(args),
        } => run_analytics_report(AnalyticsReport::Sales, args),
        Command::Reports {
            command: ReportsCommand::SellerPerformance(args),
        } => run_analytics_report(AnalyticsReport::SellerPerformance, args),
        Command::Demo => run_demo(),
    }
}
