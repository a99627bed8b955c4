//! REST resources and cache keys.

use std::collections::BTreeMap;

/// A collection or endpoint exposed by the AgencyHub REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Financial records.
    FinancialRecords,
    /// Clients.
    Clients,
    /// Pipeline opportunities.
    Opportunities,
    /// Tasks.
    Tasks,
    /// Products.
    Products,
    /// Product sales.
    ProductSales,
    /// Server-side dashboard metrics (takes a `period` param).
    DashboardMetrics,
}

impl Resource {
    /// Path relative to the API base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::FinancialRecords => "financial-records",
            Self::Clients => "clients",
            Self::Opportunities => "opportunities",
            Self::Tasks => "tasks",
            Self::Products => "products",
            Self::ProductSales => "product-sales",
            Self::DashboardMetrics => "dashboard/metrics",
        }
    }
}

/// Cache key: a resource plus its query parameters.
///
/// Parameters are kept sorted, so insertion order never produces two keys
/// for the same request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    /// Requested resource.
    pub resource: Resource,
    /// Query parameters.
    pub params: BTreeMap<String, String>,
}

impl ResourceKey {
    /// Key for a resource without parameters.
    #[must_use]
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            params: BTreeMap::new(),
        }
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// `name=value` pairs joined by `&`, unescaped, in key order.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl From<Resource> for ResourceKey {
    fn from(resource: Resource) -> Self {
        Self::new(resource)
    }
}

impl std::fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.params.is_empty() {
            f.write_str(self.resource.path())
        } else {
            write!(f, "{}?{}", self.resource.path(), self.query_string())
        }
    }
}
