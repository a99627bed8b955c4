//! Property-based tests for the heat map.

use agencyhub_shared::types::{ProductId, ProductSaleId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::HeatMapService;
use crate::entities::{Product, ProductSale};

fn products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            id: ProductId::new(format!("product-{i}")),
            name: format!("Product {i}"),
            category: None,
            price: None,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Intensity always lies in [0, 100], and the best product with positive
    /// revenue reaches exactly 100.
    #[test]
    fn prop_intensity_bounded(
        count in 1usize..10,
        sales in prop::collection::vec((0usize..10, -10_000i64..1_000_000i64), 0..60),
    ) {
        let products = products(count);
        let sales: Vec<ProductSale> = sales
            .into_iter()
            .map(|(index, cents)| ProductSale {
                id: ProductSaleId::from(1),
                product_id: products[index % count].id.clone(),
                amount: Decimal::new(cents, 2),
                sale_date: None,
            })
            .collect();

        let heat = HeatMapService::build(&products, &sales);
        prop_assert_eq!(heat.len(), count);

        for cell in &heat {
            prop_assert!(cell.intensity >= Decimal::ZERO);
            prop_assert!(cell.intensity <= Decimal::ONE_HUNDRED);
        }

        let max = heat.iter().map(|h| h.revenue).max().unwrap_or(Decimal::ZERO);
        if max > Decimal::ZERO {
            prop_assert!(heat.iter().any(|h| h.intensity == Decimal::ONE_HUNDRED));
        } else {
            prop_assert!(heat.iter().all(|h| h.intensity.is_zero()));
        }

        let counted: usize = heat.iter().map(|h| h.sales_count).sum();
        prop_assert_eq!(counted, sales.len());
    }
}
