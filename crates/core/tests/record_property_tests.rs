//! Property-based tests for the record formatter and configuration model.
//!
//! These tests verify that the line-protocol contract holds across random
//! inputs, using the `proptest` crate for test case generation.

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone, Utc};
use crypto2influx_core::config::{Config, Investment, Position, TrackedCoin};
use crypto2influx_core::line_protocol::escape_tag_value;
use crypto2influx_core::records::{format_coin_record, format_investment_record, format_quote_record};
use crypto2influx_market_data::{Coin, Quote};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// Amounts and prices with at most two decimals, so JSON round-trips are exact.
fn arb_amount() -> impl Strategy<Value = f64> {
    (0u64..10_000_000_000).prop_map(|cents| cents as f64 / 100.0)
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1970i32..2200, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_investment() -> impl Strategy<Value = Investment> {
    (arb_amount(), arb_amount(), arb_date(), "[A-Za-z ]{0,12}").prop_map(
        |(buy_price, amount, date, platform)| Investment {
            buy_price,
            amount,
            date,
            platform,
        },
    )
}

fn arb_tracked_coin() -> impl Strategy<Value = TrackedCoin> {
    (
        proptest::option::of("[a-z-]{1,12}"),
        proptest::option::of((arb_amount(), arb_amount())),
        proptest::collection::btree_map("[a-z0-9-]{1,10}", arb_investment(), 0..4),
    )
        .prop_map(|(slug, position, investments)| TrackedCoin {
            slug: slug.unwrap_or_default(),
            position: position.map(|(buy_price, amount)| Position { buy_price, amount }),
            investments,
        })
}

fn arb_config() -> impl Strategy<Value = Config> {
    (
        "[A-Za-z0-9-]{0,36}",
        "[A-Za-z0-9]{0,20}",
        proptest::collection::btree_map("[a-z-]{1,12}", arb_tracked_coin(), 0..5),
    )
        .prop_map(|(cmc_token, influx_token, coins)| {
            let mut config = Config {
                coins,
                ..Default::default()
            };
            config.coinmarketcap.token = cmc_token;
            config.influxcloud.token = influx_token;
            config
        })
}

fn coin_named(name: &str) -> Coin {
    Coin {
        id: 1,
        name: name.to_string(),
        symbol: "SYM".to_string(),
        slug: "some-coin".to_string(),
        ..Default::default()
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every space in a display name gets exactly one backslash in front of
    /// it and no other character changes.
    #[test]
    fn prop_name_spaces_are_escaped(name in "[A-Za-z0-9 ,.=()-]{1,40}") {
        let escaped = escape_tag_value(&name);
        prop_assert_eq!(escaped.replace("\\ ", " "), name.clone());
        prop_assert_eq!(escaped.matches("\\ ").count(), name.matches(' ').count());
        prop_assert_eq!(escaped.len(), name.len() + name.matches(' ').count());

        let line = format_coin_record(&coin_named(&name));
        let expected_tag = format!(",name={} ", escaped);
        prop_assert!(line.contains(&expected_tag));
    }

    /// The quote record carries the full field set and the quote's own
    /// update time in nanoseconds.
    #[test]
    fn prop_quote_record_fields_and_timestamp(
        price in arb_amount(),
        secs in 0i64..4_000_000_000,
    ) {
        let last_updated = Utc.timestamp_opt(secs, 0).unwrap();
        let quote = Quote {
            price,
            last_updated: Some(last_updated),
            ..Default::default()
        };
        let line = format_quote_record(&coin_named("Coin"), &quote);

        let mut parts = line.split(' ');
        let series = parts.next().unwrap();
        let fields = parts.next().unwrap();
        let timestamp = parts.next().unwrap();
        prop_assert!(parts.next().is_none());

        prop_assert_eq!(series, "quote,symbol=SYM,slug=some-coin");
        let keys: Vec<&str> = fields.split(',').map(|kv| kv.split('=').next().unwrap()).collect();
        prop_assert_eq!(keys, vec![
            "price",
            "volume_24h",
            "volume_change_24h",
            "percent_change_1h",
            "percent_change_24h",
            "percent_change_7d",
            "percent_change_30d",
            "market_cap",
            "market_cap_dominance",
            "fully_diluted_market_cap",
        ]);
        let expected_price = format!("price={},", price);
        prop_assert!(fields.starts_with(&expected_price));
        prop_assert_eq!(timestamp.parse::<i64>().unwrap(), secs * 1_000_000_000);
    }

    /// The lot date is written as midnight UTC twice: milliseconds in the
    /// `date` field, nanoseconds as the record timestamp.
    #[test]
    fn prop_investment_dual_timestamp(investment in arb_investment()) {
        let midnight = Utc.from_utc_datetime(&investment.date.and_hms_opt(0, 0, 0).unwrap());
        let line = format_investment_record(&coin_named("Coin"), "lot-1", &investment);

        let expected_date = format!(",date={}i ", midnight.timestamp_millis());
        prop_assert!(line.contains(&expected_date));
        let expected_timestamp = format!(" {}", midnight.timestamp_nanos_opt().unwrap());
        prop_assert!(line.ends_with(&expected_timestamp));
    }

    /// A configuration serialized then deserialized is identical.
    #[test]
    fn prop_config_round_trip(config in arb_config()) {
        let json = config.to_json().unwrap();
        let parsed = Config::from_json(&json).unwrap();
        prop_assert_eq!(parsed, config);
    }
}

#[test]
fn test_investment_record_for_2023_06_15() {
    let investment = Investment {
        buy_price: 25000.0,
        amount: 0.1,
        date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
        platform: "Kraken".to_string(),
    };
    let line = format_investment_record(&coin_named("Bitcoin"), "kraken-1", &investment);
    assert!(line.contains(",date=1686787200000i "));
    assert!(line.ends_with(" 1686787200000000000"));
}

#[test]
fn test_round_trip_preserves_tracked_coins_field_for_field() {
    let mut investments = BTreeMap::new();
    investments.insert(
        "kraken-1".to_string(),
        Investment {
            buy_price: 25000.5,
            amount: 0.125,
            date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            platform: "Kraken".to_string(),
        },
    );
    let mut config = Config::default();
    config.coins.insert(
        "bitcoin".to_string(),
        TrackedCoin {
            slug: "bitcoin".to_string(),
            position: Some(Position {
                buy_price: 20000.0,
                amount: 0.5,
            }),
            investments,
        },
    );

    let parsed = Config::from_json(&config.to_json().unwrap()).unwrap();
    assert_eq!(parsed.coins, config.coins);
    assert_eq!(
        parsed.coins["bitcoin"].investments["kraken-1"].date,
        NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
    );
}
