//! Heat map service.

use std::collections::HashMap;

use rust_decimal::Decimal;

use agencyhub_shared::types::ProductId;

use super::types::{IntensityBand, ProductHeat};
use crate::entities::{Product, ProductSale};
use crate::period::DateRange;

/// Builds per-product revenue heat maps.
pub struct HeatMapService;

impl HeatMapService {
    /// Builds one cell per product, in product order, from all sales.
    ///
    /// `intensity = revenue / max(revenue) * 100`, rounded to two decimals and
    /// clamped to `[0, 100]`. The band is decided before rounding. When no
    /// product has positive revenue every intensity is 0. Sales of unknown
    /// products are ignored.
    #[must_use]
    pub fn build(products: &[Product], sales: &[ProductSale]) -> Vec<ProductHeat> {
        Self::build_from(products, sales.iter())
    }

    /// Like [`HeatMapService::build`], restricted to sales dated inside `range`.
    ///
    /// Undated sales are left out.
    #[must_use]
    pub fn build_in_range(
        products: &[Product],
        sales: &[ProductSale],
        range: &DateRange,
    ) -> Vec<ProductHeat> {
        Self::build_from(
            products,
            sales
                .iter()
                .filter(|sale| sale.sale_date.is_some_and(|date| range.contains(date))),
        )
    }

    /// Intensity of `revenue` against the best revenue `max`, rounded to two
    /// decimals.
    #[must_use]
    pub fn intensity(revenue: Decimal, max: Decimal) -> Decimal {
        Self::share(revenue, max).round_dp(2)
    }

    /// Unrounded `revenue / max * 100` clamped to `[0, 100]`; 0 when `max`
    /// is not positive. Bands are decided on this value.
    fn share(revenue: Decimal, max: Decimal) -> Decimal {
        if max <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        revenue
            .checked_div(max)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO)
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }

    fn build_from<'a>(
        products: &[Product],
        sales: impl Iterator<Item = &'a ProductSale>,
    ) -> Vec<ProductHeat> {
        let mut totals: HashMap<&ProductId, (usize, Decimal)> = products
            .iter()
            .map(|product| (&product.id, (0, Decimal::ZERO)))
            .collect();

        for sale in sales {
            if let Some((count, revenue)) = totals.get_mut(&sale.product_id) {
                *count += 1;
                *revenue += sale.amount;
            }
        }

        let max = totals
            .values()
            .map(|(_, revenue)| *revenue)
            .max()
            .unwrap_or(Decimal::ZERO);

        products
            .iter()
            .map(|product| {
                let (sales_count, revenue) =
                    totals.get(&product.id).copied().unwrap_or((0, Decimal::ZERO));
                let share = Self::share(revenue, max);
                ProductHeat {
                    product_id: product.id.clone(),
                    name: product.name.clone(),
                    sales_count,
                    revenue,
                    intensity: share.round_dp(2),
                    band: IntensityBand::from_intensity(share),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agencyhub_shared::types::ProductSaleId;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn product(name: &str) -> Product {
        Product {
            id: ProductId::new(name),
            name: name.to_string(),
            category: None,
            price: None,
        }
    }

    fn sale(product: &Product, amount: Decimal, date: Option<NaiveDate>) -> ProductSale {
        ProductSale {
            id: ProductSaleId::from(1),
            product_id: product.id.clone(),
            amount,
            sale_date: date,
        }
    }

    #[test]
    fn test_zero_and_best_product() {
        let seo = product("SEO");
        let ads = product("Ads");
        let sales = vec![sale(&ads, dec!(150), None), sale(&ads, dec!(50), None)];

        let heat = HeatMapService::build(&[seo, ads], &sales);
        let intensities: Vec<Decimal> = heat.iter().map(|h| h.intensity).collect();

        assert_eq!(intensities, [dec!(0), dec!(100)]);
        assert_eq!(heat[1].sales_count, 2);
        assert_eq!(heat[1].revenue, dec!(200));
        assert_eq!(heat[1].band, IntensityBand::High);
        assert_eq!(heat[0].band, IntensityBand::Low);
    }

    #[test]
    fn test_no_revenue_means_zero_intensity() {
        let products = vec![product("A"), product("B")];
        let heat = HeatMapService::build(&products, &[]);
        assert!(heat.iter().all(|h| h.intensity.is_zero()));
    }

    #[test]
    fn test_unknown_product_sales_are_ignored() {
        let known = product("Known");
        let stranger = product("Stranger");
        let sales = vec![sale(&stranger, dec!(1000), None), sale(&known, dec!(10), None)];

        let heat = HeatMapService::build(std::slice::from_ref(&known), &sales);
        assert_eq!(heat.len(), 1);
        assert_eq!(heat[0].revenue, dec!(10));
        assert_eq!(heat[0].intensity, dec!(100));
    }

    #[test]
    fn test_build_in_range_filters_by_sale_date() {
        let social = product("Social");
        let march = DateRange::new(
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        )
        .unwrap();
        let sales = vec![
            sale(&social, dec!(100), NaiveDate::from_ymd_opt(2026, 3, 10)),
            sale(&social, dec!(400), NaiveDate::from_ymd_opt(2026, 4, 1)),
            sale(&social, dec!(800), None),
        ];

        let heat = HeatMapService::build_in_range(std::slice::from_ref(&social), &sales, &march);
        assert_eq!(heat[0].sales_count, 1);
        assert_eq!(heat[0].revenue, dec!(100));
    }

    #[rstest]
    #[case(dec!(100), IntensityBand::High)]
    #[case(dec!(66.01), IntensityBand::High)]
    #[case(dec!(66), IntensityBand::Medium)]
    #[case(dec!(33.5), IntensityBand::Medium)]
    #[case(dec!(33), IntensityBand::Low)]
    #[case(dec!(0), IntensityBand::Low)]
    fn test_intensity_band_thresholds(#[case] intensity: Decimal, #[case] band: IntensityBand) {
        assert_eq!(IntensityBand::from_intensity(intensity), band);
    }

    #[test]
    fn test_band_uses_unrounded_share() {
        let best = product("Best");
        let close = product("Close");
        let sales = vec![sale(&best, dec!(100), None), sale(&close, dec!(66.004), None)];

        let heat = HeatMapService::build(&[best, close], &sales);
        assert_eq!(heat[1].intensity, dec!(66.00));
        assert_eq!(heat[1].band, IntensityBand::High);
    }

    #[test]
    fn test_share_just_below_threshold_stays_in_lower_band() {
        let best = product("Best");
        let edge = product("Edge");
        let sales = vec![sale(&best, dec!(100), None), sale(&edge, dec!(33), None)];

        let heat = HeatMapService::build(&[best, edge], &sales);
        assert_eq!(heat[1].intensity, dec!(33));
        assert_eq!(heat[1].band, IntensityBand::Low);
    }

    #[test]
    fn test_intensity_clamps_negative_revenue() {
        assert_eq!(HeatMapService::intensity(dec!(-50), dec!(100)), dec!(0));
        assert_eq!(HeatMapService::intensity(dec!(1), dec!(3)), dec!(33.33));
    }
}
