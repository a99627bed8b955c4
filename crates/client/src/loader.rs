//! Dashboard loading: fetch every collection, then aggregate.

use agencyhub_core::dashboard::{DashboardInput, DashboardService, DashboardSnapshot};
use agencyhub_core::period::PeriodToken;
use agencyhub_shared::types::Locale;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::ClientError;
use crate::source::DataSource;

/// Loads a dashboard snapshot from a data source.
pub struct DashboardLoader<S> {
    source: S,
    locale: Locale,
}

impl<S: DataSource> DashboardLoader<S> {
    /// Creates a loader.
    #[must_use]
    pub fn new(source: S, locale: Locale) -> Self {
        Self { source, locale }
    }

    /// Returns the underlying data source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches all collections concurrently and builds the snapshot.
    ///
    /// Any collection failing fails the load. The server metrics endpoint
    /// is optional: if it fails the snapshot carries no server KPIs.
    ///
    /// # Errors
    ///
    /// Returns the first collection fetch error.
    pub async fn load(
        &self,
        period: PeriodToken,
        today: NaiveDate,
    ) -> Result<DashboardSnapshot, ClientError> {
        let collections = async {
            tokio::try_join!(
                self.source.financial_records(),
                self.source.clients(),
                self.source.opportunities(),
                self.source.tasks(),
                self.source.products(),
                self.source.product_sales(),
            )
        };

        let (collections, metrics) =
            tokio::join!(collections, self.source.dashboard_metrics(period));
        let (financial_records, clients, opportunities, tasks, products, product_sales) =
            collections?;

        let metrics = match metrics {
            Ok(metrics) => Some(metrics),
            Err(err) => {
                warn!(period = %period, error = %err, "Dashboard metrics unavailable");
                None
            }
        };

        debug!(
            financial_records = financial_records.len(),
            clients = clients.len(),
            opportunities = opportunities.len(),
            tasks = tasks.len(),
            products = products.len(),
            product_sales = product_sales.len(),
            "Collections fetched"
        );

        let input = DashboardInput {
            financial_records,
            clients,
            opportunities,
            tasks,
            products,
            product_sales,
            metrics,
        };
        let snapshot = DashboardService::build(&input, period, today, self.locale);

        info!(
            period = %period,
            today = %today,
            revenue = %snapshot.kpis.revenue.value,
            urgent_tasks = snapshot.urgent_tasks.len(),
            "Dashboard loaded"
        );

        Ok(snapshot)
    }
}
