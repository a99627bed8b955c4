//! AgencyHub dashboard report
//!
//! Fetches every collection from the REST API, aggregates them for a
//! period, and prints the snapshot as JSON.

use agencyhub_client::{ApiClient, DashboardLoader};
use agencyhub_core::period::PeriodToken;
use agencyhub_shared::AppConfig;
use agencyhub_shared::types::Locale;
use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Print an AgencyHub dashboard snapshot as JSON
#[derive(Parser, Debug)]
#[command(name = "agencyhub-report")]
#[command(version, about, long_about = None)]
struct Args {
    /// Period token (7d, 30d, 90d, current_month, last_month, current_year,
    /// 6months, 12months). Unknown tokens fall back to current_month.
    period: Option<String>,

    /// Month label locale (en, pt-BR) [default: report.locale]
    #[arg(long)]
    locale: Option<Locale>,

    /// Reference date as YYYY-MM-DD [default: local today]
    #[arg(long)]
    today: Option<NaiveDate>,
}

impl Args {
    fn period(&self, config: &AppConfig) -> PeriodToken {
        let raw = self
            .period
            .as_deref()
            .unwrap_or(config.report.default_period.as_str());
        PeriodToken::parse_range_or_default(raw)
    }

    fn locale(&self, config: &AppConfig) -> Locale {
        self.locale.unwrap_or(config.report.locale)
    }

    fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the JSON snapshot
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agencyhub=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let period = args.period(&config);
    let locale = args.locale(&config);
    let today = args.today();

    let api = ApiClient::from_config(&config).context("Failed to create API client")?;
    info!(
        base_url = %config.api.base_url,
        period = %period,
        locale = %locale,
        today = %today,
        "Loading dashboard"
    );

    let loader = DashboardLoader::new(api, locale);
    let snapshot = loader
        .load(period, today)
        .await
        .context("Failed to load dashboard")?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
