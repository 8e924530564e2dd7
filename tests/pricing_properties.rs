//! Property tests for the per-kilogram pricing rule.

use chekku::{catalog::Catalog, pricing::amount_for, weight::Weight};
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// Weights from 0 to 10 tonnes with up to three decimal places.
fn weight() -> impl Strategy<Value = Weight> {
    (0_i64..10_000_000, 0_u32..=3).prop_filter_map("non-negative weight", |(units, scale)| {
        Weight::new(Decimal::new(units, scale)).ok()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        ..ProptestConfig::default()
    })]

    /// Property: amount is weight × 35 rounded to paise.
    #[test]
    fn amount_is_weight_times_rate_rounded(weight in weight()) {
        let amount = amount_for(weight, Catalog::default().rate_per_kg())?;

        let expected = (weight.kg() * Decimal::from(35))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        prop_assert_eq!(*amount.amount(), expected);
        prop_assert!(amount.amount().scale() <= 2);
    }

    /// Property: a heavier sale never costs less.
    #[test]
    fn amount_never_decreases_with_weight(a in weight(), b in weight()) {
        let rate = Catalog::default().rate_per_kg();
        let (lighter, heavier) = if a <= b { (a, b) } else { (b, a) };

        let lighter_amount = amount_for(lighter, rate)?;
        let heavier_amount = amount_for(heavier, rate)?;

        prop_assert!(lighter_amount.amount() <= heavier_amount.amount());
    }

    /// Property: every item in the catalog costs the same for the same weight.
    #[test]
    fn item_never_affects_amount(weight in weight()) {
        let catalog = Catalog::default();
        let biller = chekku::billing::Biller::new(catalog.clone());

        let amounts = catalog
            .items()
            .iter()
            .map(|item| biller.quote(item, weight).map(|line| *line.amount().amount()))
            .collect::<Result<Vec<_>, _>>()?;

        prop_assert!(amounts.windows(2).all(|pair| pair.first() == pair.last()));
    }
}

#[test]
fn zero_weight_is_free() -> Result<(), chekku::pricing::PricingError> {
    let amount = amount_for(Weight::ZERO, Catalog::default().rate_per_kg())?;

    assert_eq!(amount.amount().to_string(), "0.00");

    Ok(())
}
