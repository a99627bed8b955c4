//! Data source abstraction over the REST resources.

use agencyhub_core::dashboard::DashboardMetrics;
use agencyhub_core::entities::{
    Client, FinancialRecord, Opportunity, Product, ProductSale, Task,
};
use agencyhub_core::period::PeriodToken;
use async_trait::async_trait;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::resource::{Resource, ResourceKey};

/// Supplies the raw collections the dashboard is computed from.
///
/// A record that cannot be decoded is left out of its collection; only
/// transport, status and whole-body failures are errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSource: Send + Sync {
    /// All financial records.
    async fn financial_records(&self) -> Result<Vec<FinancialRecord>, ClientError>;

    /// All clients.
    async fn clients(&self) -> Result<Vec<Client>, ClientError>;

    /// All opportunities.
    async fn opportunities(&self) -> Result<Vec<Opportunity>, ClientError>;

    /// All tasks.
    async fn tasks(&self) -> Result<Vec<Task>, ClientError>;

    /// All products.
    async fn products(&self) -> Result<Vec<Product>, ClientError>;

    /// All product sales.
    async fn product_sales(&self) -> Result<Vec<ProductSale>, ClientError>;

    /// Server-computed KPIs for a period.
    async fn dashboard_metrics(&self, period: PeriodToken) -> Result<DashboardMetrics, ClientError>;
}

#[async_trait]
impl DataSource for ApiClient {
    async fn financial_records(&self) -> Result<Vec<FinancialRecord>, ClientError> {
        self.get_collection(&Resource::FinancialRecords.into()).await
    }

    async fn clients(&self) -> Result<Vec<Client>, ClientError> {
        self.get_collection(&Resource::Clients.into()).await
    }

    async fn opportunities(&self) -> Result<Vec<Opportunity>, ClientError> {
        self.get_collection(&Resource::Opportunities.into()).await
    }

    async fn tasks(&self) -> Result<Vec<Task>, ClientError> {
        self.get_collection(&Resource::Tasks.into()).await
    }

    async fn products(&self) -> Result<Vec<Product>, ClientError> {
        self.get_collection(&Resource::Products.into()).await
    }

    async fn product_sales(&self) -> Result<Vec<ProductSale>, ClientError> {
        self.get_collection(&Resource::ProductSales.into()).await
    }

    async fn dashboard_metrics(&self, period: PeriodToken) -> Result<DashboardMetrics, ClientError> {
        let key = ResourceKey::new(Resource::DashboardMetrics).with_param("period", period.as_str());
        self.get_json(&key).await
    }
}
