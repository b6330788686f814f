//! End-to-end amount entry flow.
//!
//! Selects an asset, types an amount one character at a time, and checks the
//! inline validation result after each keystroke, then exercises "use max".

use asset_picker::{
    ValidationError, max_amount_string, parse_amount, validate, validate_selection,
};

use super::TestEnv;

crate::integration_test!(test_typing_amount_keystroke_by_keystroke, |env: &TestEnv| {
    let usdc = env.asset("USDC");
    let steps = [
        ("", None),
        ("4", None),
        ("4.", None),
        ("4.9", None),
        ("4.99", None),
        ("4.999999", None),
        ("4.9999999", None),
        ("4.99999999x", Some(ValidationError::InvalidAmount)),
    ];
    for (input, expected) in steps {
        assert_eq!(validate_selection(input, Some(usdc)), expected, "input {input:?}");
    }

    let over = [("5", None), ("50", Some(ValidationError::InsufficientBalance))];
    for (input, expected) in over {
        assert_eq!(validate_selection(input, Some(usdc)), expected, "input {input:?}");
    }
});

crate::integration_test!(test_unknown_balance_is_never_checked, |env: &TestEnv| {
    let abc = env.asset("ABC");
    for input in ["1", "999999999", "garbage", "1.2.3"] {
        assert_eq!(validate_selection(input, Some(abc)), None);
    }
    assert_eq!(max_amount_string(abc.amount.as_ref()), None);
});

crate::integration_test!(test_zero_balance_rejects_everything, |env: &TestEnv| {
    let dai = env.asset("DAI");
    for input in ["0", "0.0", "1"] {
        assert_eq!(
            validate_selection(input, Some(dai)),
            Some(ValidationError::InsufficientBalance),
            "input {input:?}"
        );
    }
    // Malformed input is reported as such first.
    assert_eq!(
        validate_selection("abc", Some(dai)),
        Some(ValidationError::InvalidAmount)
    );
});

crate::integration_test!(test_use_max_round_trips, |env: &TestEnv| {
    for symbol in ["ETH", "USDC", "PEPE", "DAI"] {
        let asset = env.asset(symbol);
        let balance = asset.amount.as_ref().expect("fixture has balance");
        let max = max_amount_string(Some(balance)).expect("known balance");

        let decimals = asset.asset.decimals().expect("fixture has decimals");
        let reparsed = parse_amount(&max).unwrap().rescale(decimals).unwrap();
        assert_eq!(reparsed.raw(), balance.raw(), "{symbol}");

        if !balance.is_zero() {
            assert_eq!(validate(&max, Some(decimals), Some(balance)), None, "{symbol}");
        }
    }

    assert_eq!(
        max_amount_string(env.asset("ETH").amount.as_ref()).as_deref(),
        Some("1.2345")
    );
    assert_eq!(
        max_amount_string(env.asset("PEPE").amount.as_ref()).as_deref(),
        Some("42000000")
    );
});

crate::integration_test!(test_one_unit_over_max_is_rejected, |env: &TestEnv| {
    let eth = env.asset("ETH");
    assert_eq!(
        validate_selection("1.234500000000000001", Some(eth)),
        Some(ValidationError::InsufficientBalance)
    );
    assert_eq!(validate_selection("1.2345", Some(eth)), None);
});
