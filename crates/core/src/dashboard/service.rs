//! Dashboard service.

use agencyhub_shared::types::Locale;
use chrono::NaiveDate;

use super::types::{DashboardInput, DashboardKpis, DashboardMetrics, DashboardSnapshot, MoneyKpi};
use crate::distribution::DistributionService;
use crate::entities::ClientStatus;
use crate::heatmap::HeatMapService;
use crate::period::{PeriodResolver, PeriodToken};
use crate::pipeline::PipelineService;
use crate::revenue::RevenueService;
use crate::tasks::UrgencyClassifier;

/// Builds dashboard snapshots.
pub struct DashboardService;

impl DashboardService {
    /// KPI view of backend metrics.
    ///
    /// Revenue change is measured against `previousMonthRevenue`; without it
    /// the change is reported as having no prior data.
    #[must_use]
    pub fn kpis_from_metrics(metrics: &DashboardMetrics) -> DashboardKpis {
        DashboardKpis {
            revenue: MoneyKpi {
                value: metrics.monthly_revenue,
                change: RevenueService::percent_change(
                    metrics.monthly_revenue,
                    metrics.previous_month_revenue,
                ),
            },
            active_clients: metrics.active_clients,
            open_tasks: metrics.pending_tasks,
            pipeline_value: metrics.pipeline_value,
            overdue_payments: metrics.overdue_payments,
            new_clients: metrics.new_clients_this_month,
            total_opportunities: metrics.total_opportunities,
        }
    }

    /// Computes a full snapshot for `period` as of `today`.
    ///
    /// The revenue chart uses the period's buckets when it is bucket-shaped
    /// and six months otherwise.
    #[must_use]
    pub fn build(
        input: &DashboardInput,
        period: PeriodToken,
        today: NaiveDate,
        locale: Locale,
    ) -> DashboardSnapshot {
        let range = PeriodResolver::range(period, today);
        let previous_range = PeriodResolver::previous_range(period, today);
        let buckets = PeriodResolver::buckets(period, today, locale);

        let revenue = RevenueService::total(&input.financial_records, &range);
        let previous_revenue = RevenueService::total(&input.financial_records, &previous_range);
        let overdue = RevenueService::overdue_payments(&input.financial_records, today);
        let pipeline = PipelineService::summarize(&input.opportunities);
        let urgency = UrgencyClassifier::summarize(&input.tasks, today);

        let active_clients = input
            .clients
            .iter()
            .filter(|client| client.status == ClientStatus::Active)
            .count();
        let new_clients = input
            .clients
            .iter()
            .filter(|client| client.created_at.is_some_and(|date| range.contains(date)))
            .count();

        let kpis = DashboardKpis {
            revenue: MoneyKpi {
                value: revenue,
                change: RevenueService::percent_change(revenue, Some(previous_revenue)),
            },
            active_clients: to_u64(active_clients),
            open_tasks: to_u64(urgency.open),
            pipeline_value: pipeline.open_value,
            overdue_payments: to_u64(overdue.count),
            new_clients: Some(to_u64(new_clients)),
            total_opportunities: Some(to_u64(pipeline.total_opportunities)),
        };

        DashboardSnapshot {
            period,
            today,
            range,
            previous_range,
            kpis,
            server_kpis: input.metrics.as_ref().map(Self::kpis_from_metrics),
            revenue_series: RevenueService::bucket_totals(&input.financial_records, &buckets),
            client_distribution: DistributionService::client_statuses(&input.clients),
            pipeline_distribution: DistributionService::pipeline_stages(&input.opportunities),
            pipeline,
            urgent_tasks: UrgencyClassifier::urgent_tasks(&input.tasks, today)
                .into_iter()
                .cloned()
                .collect(),
            urgency,
            overdue,
            product_heat: HeatMapService::build_in_range(
                &input.products,
                &input.product_sales,
                &range,
            ),
        }
    }
}

fn to_u64(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}
