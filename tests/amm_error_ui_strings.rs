use swap_pricing_core::amm::error::AmmError;
use swap_pricing_core::amm::error_catalog::AmmErrorCode;

#[test]
fn no_newlines_or_tabs() {
    let err = AmmError::new(AmmErrorCode::StateUnavailable).with_context("reason", "linha1\nlinha2\ttab");
    let user = err.to_user_string();
    assert!(!user.contains('\n'));
    assert!(!user.contains('\t'));
    assert!(user.ends_with("linha1 linha2 tab"));
}

#[test]
fn truncate_long_context_values() {
    let err = AmmError::new(AmmErrorCode::MintEstimateFailed).with_context("reason", "a".repeat(1024));
    let value = err.context.get("reason").unwrap();
    assert_eq!(value.chars().count(), 256);
    assert!(value.ends_with('…'));
    assert!(err.to_user_string().len() < 512);
}

#[test]
fn unknown_placeholder_is_left_as_is() {
    let err = AmmError::new(AmmErrorCode::TokenMismatch);
    assert_eq!(err.to_user_string(), "[AMM-0002] tokens incompatíveis: {left} vs {right}");
    assert_eq!(err.render_with_template("erro {desconhecido}"), "erro {desconhecido}");
}

#[test]
fn display_matches_user_string() {
    let err = AmmError::new(AmmErrorCode::OverflowNumeric);
    assert_eq!(err.to_string(), err.to_user_string());
}
