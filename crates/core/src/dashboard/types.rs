//! Dashboard data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;
use crate::entities::{Client, FinancialRecord, Opportunity, Product, ProductSale, Task};
use crate::heatmap::ProductHeat;
use crate::period::{DateRange, PeriodToken};
use crate::pipeline::PipelineSummary;
use crate::revenue::{OverdueSummary, PercentChange, RevenueSeries};
use crate::tasks::UrgencySummary;

/// Pre-aggregated metrics computed by the backend for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Paid revenue in the period.
    pub monthly_revenue: Decimal,
    /// Clients with status `active`.
    pub active_clients: u64,
    /// Tasks not completed.
    pub pending_tasks: u64,
    /// Open pipeline value.
    pub pipeline_value: Decimal,
    /// Payments past due.
    pub overdue_payments: u64,
    /// Paid revenue in the previous period.
    #[serde(default)]
    pub previous_month_revenue: Option<Decimal>,
    /// Clients registered in the period.
    #[serde(default)]
    pub new_clients_this_month: Option<u64>,
    /// Opportunities in any stage.
    #[serde(default)]
    pub total_opportunities: Option<u64>,
}

/// A monetary KPI with its change against the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyKpi {
    /// Value in the current period.
    pub value: Decimal,
    /// Change against the previous period.
    pub change: PercentChange,
}

/// KPI cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardKpis {
    /// Paid revenue.
    pub revenue: MoneyKpi,
    /// Active clients.
    pub active_clients: u64,
    /// Open tasks.
    pub open_tasks: u64,
    /// Open pipeline value.
    pub pipeline_value: Decimal,
    /// Overdue payments.
    pub overdue_payments: u64,
    /// Clients registered in the period, when known.
    pub new_clients: Option<u64>,
    /// Opportunities in any stage, when known.
    pub total_opportunities: Option<u64>,
}

/// Raw collections a snapshot is computed from.
#[derive(Debug, Clone, Default)]
pub struct DashboardInput {
    /// Financial records.
    pub financial_records: Vec<FinancialRecord>,
    /// Clients.
    pub clients: Vec<Client>,
    /// Opportunities.
    pub opportunities: Vec<Opportunity>,
    /// Tasks.
    pub tasks: Vec<Task>,
    /// Products.
    pub products: Vec<Product>,
    /// Product sales.
    pub product_sales: Vec<ProductSale>,
    /// Backend metrics for the period, if they could be fetched.
    pub metrics: Option<DashboardMetrics>,
}

/// Everything the dashboard shows for one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Selected period.
    pub period: PeriodToken,
    /// Date the snapshot was computed for.
    pub today: NaiveDate,
    /// Resolved range.
    pub range: DateRange,
    /// Range the KPIs are compared against.
    pub previous_range: DateRange,
    /// KPIs computed from the raw collections.
    pub kpis: DashboardKpis,
    /// KPIs as reported by the backend, if available.
    pub server_kpis: Option<DashboardKpis>,
    /// Monthly revenue chart.
    pub revenue_series: RevenueSeries,
    /// Clients per status.
    pub client_distribution: Distribution,
    /// Opportunities per stage.
    pub pipeline_distribution: Distribution,
    /// Pipeline totals.
    pub pipeline: PipelineSummary,
    /// Overdue and due-today tasks.
    pub urgent_tasks: Vec<Task>,
    /// Open tasks per urgency class.
    pub urgency: UrgencySummary,
    /// Payments past due.
    pub overdue: OverdueSummary,
    /// Product heat map over the range.
    pub product_heat: Vec<ProductHeat>,
}
