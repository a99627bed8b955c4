//! Products and product sales.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use agencyhub_shared::types::{ProductId, ProductSaleId};

/// A product or service package the agency sells.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Catalog category.
    #[serde(default)]
    pub category: Option<String>,
    /// List price.
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// A single sale of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSale {
    /// Sale ID.
    pub id: ProductSaleId,
    /// Product sold.
    pub product_id: ProductId,
    /// Sale amount.
    pub amount: Decimal,
    /// Date of sale.
    #[serde(default, with = "agencyhub_shared::types::date::optional")]
    pub sale_date: Option<NaiveDate>,
}
