use rust_decimal::Decimal;
use storefront::i18n::Locale;
use storefront::order::calculator::{calc_total, PricingScheme, TotalInput};
use storefront::order::catalog::TierPrice;
use storefront::order::configurator::{build_state, quote, OrderEdits};
use storefront::order::preferences::StoredPreferences;
use storefront::order::vocabulary::ROTATING_SERVICE_ID;
use storefront::order::{resolve, CatalogSet, ResolutionInput};

#[test]
fn rotating_ten_gigabytes_end_to_end() {
    let set = CatalogSet::build().expect("shipped catalog is valid");

    for locale in Locale::ALL {
        let catalog = &set.get(locale).catalog;
        let input = ResolutionInput {
            tier_id: Some("rotating-10".to_string()),
            ..Default::default()
        };

        let selection = resolve(catalog, &input).expect("catalog is not empty");
        assert_eq!(selection.service_id, ROTATING_SERVICE_ID);
        assert_eq!(selection.category_id, "bandwidth");
        assert_eq!(selection.tier_id, "rotating-10");

        let (_, _, tier) = catalog.locate_tier("rotating-10").unwrap();
        let bundle = match &tier.price {
            TierPrice::Bundle(bundle) => bundle,
            other => panic!("expected a bundle, got {:?}", other),
        };
        assert_eq!(bundle.price_per_gb_display, "4.9990");
        assert_eq!(bundle.total_usd, Decimal::new(4999, 2));

        let total = calc_total(&TotalInput {
            scheme: PricingScheme::TrafficTierPerMonth,
            unit_price_usd: None,
            proxies: None,
            tier_total_usd: Some(bundle.total_usd),
            months: 1.0,
        });
        assert_eq!(total, Decimal::new(4999, 2));

        let state = build_state(catalog, selection, &OrderEdits::default(), true);
        assert_eq!(quote(tier, &state).total_usd, total);
    }
}

#[test]
fn stored_preferences_resolve_back_to_the_same_selection() {
    let set = CatalogSet::build().unwrap();
    let catalog = &set.get(Locale::En).catalog;

    for service in catalog.services() {
        for category in &service.categories {
            for tier in &category.tiers {
                let input = ResolutionInput {
                    tier_id: Some(tier.id.clone()),
                    duration: Some("yearly".to_string()),
                    ..Default::default()
                };
                let selection = resolve(catalog, &input).unwrap();
                let prefs = StoredPreferences::from_selection(&selection).unwrap();
                let again = resolve(catalog, &prefs.to_resolution_input()).unwrap();
                assert_eq!(again, selection, "{}", tier.id);
            }
        }
    }
}
