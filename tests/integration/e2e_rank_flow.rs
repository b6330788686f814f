//! End-to-end ranking flow.
//!
//! Simulates a user typing into the asset search box keystroke by keystroke
//! and checks the list shown after each one.

use asset_picker::{AssetWithOptionalAmount, rank};

use super::TestEnv;

fn symbols(ranked: &[&AssetWithOptionalAmount]) -> Vec<String> {
    ranked.iter().map(|a| a.symbol().to_string()).collect()
}

crate::integration_test!(test_default_order_surfaces_known_tickers, |env: &TestEnv| {
    let ranked = symbols(&rank(&env.assets, ""));
    // ETH, USDC and DAI are in the priority table; the rest are alphabetical.
    assert_eq!(ranked, vec!["ETH", "USDC", "DAI", "ABC", "aUSDC", "PEPE"]);
});

crate::integration_test!(test_typing_narrows_and_reorders, |env: &TestEnv| {
    let steps = [
        ("u", vec!["USDC", "aUSDC"]),
        ("us", vec!["USDC", "aUSDC"]),
        ("usd", vec!["USDC", "aUSDC"]),
        ("ausd", vec!["aUSDC"]),
    ];
    for (term, expected) in steps {
        assert_eq!(symbols(&rank(&env.assets, term)), expected, "term {term:?}");
    }

    // Starts-with matches lead even when alphabetically later.
    assert_eq!(symbols(&rank(&env.assets, "a")), vec!["ABC", "aUSDC", "DAI"]);
});

crate::integration_test!(test_search_by_contract_address, |env: &TestEnv| {
    assert_eq!(symbols(&rank(&env.assets, "0xa0b86991")), vec!["USDC"]);
    assert_eq!(symbols(&rank(&env.assets, "0xA0B86991")), vec!["USDC"]);
    // Middle of the DAI address.
    assert_eq!(symbols(&rank(&env.assets, "0x89094c44")), vec!["DAI"]);
    // Odd-length term against an odd-length address.
    assert_eq!(symbols(&rank(&env.assets, "0xabc12")), vec!["ABC"]);
    // Longer than any address in the list.
    let too_long = format!("{}00", super::USDC_ADDRESS);
    assert!(rank(&env.assets, &too_long).is_empty());
});

crate::integration_test!(test_no_match_is_empty, |env: &TestEnv| {
    assert!(rank(&env.assets, "BTC").is_empty());
});

crate::integration_test!(test_ranking_is_repeatable, |env: &TestEnv| {
    let first = symbols(&rank(&env.assets, "d"));
    let second = symbols(&rank(&env.assets, "d"));
    assert_eq!(first, second);
    assert_eq!(first, vec!["DAI", "aUSDC", "USDC"]);
});

crate::integration_test!(test_order_independent_of_input_order, |env: &TestEnv| {
    let mut reversed = env.assets.clone();
    reversed.reverse();
    let mut rotated = env.assets.clone();
    rotated.rotate_left(2);

    for term in ["", "a", "d", "usdc", "0xa0b8"] {
        let expected = symbols(&rank(&env.assets, term));
        assert_eq!(symbols(&rank(&reversed, term)), expected, "term {term:?}");
        assert_eq!(symbols(&rank(&rotated, term)), expected, "term {term:?}");
    }
});
