//! Direção de arredondamento na renderização de frações e percentuais.

mod common;

use common::{fixed_mint, pool};
use num_bigint::BigInt;
use swap_pricing_core::{calculate_deposit_price_impact, Fraction, Percent, Rounding, Token, TokenAmount};

#[test]
fn r1_percent_display_is_two_decimals_half_up() {
    assert_eq!(Percent::from_bps(42).to_string(), "0.42%");
    assert_eq!(Percent::from_fraction(Fraction::new(1, 800).unwrap()).to_string(), "0.13%");
    assert_eq!(Percent::zero().to_string(), "0.00%");
    assert_eq!(Percent::from_fraction(Fraction::one()).to_string(), "100.00%");
}

#[test]
fn r2_impact_renders_for_ui() {
    let s = pool(1_000_000, 1_000_000, 2_000_000);
    let impact = calculate_deposit_price_impact(&s, 100_000, 0, &fixed_mint(95_000)).unwrap();
    assert_eq!(impact.to_string(), "0.24%");
    assert_eq!(impact.to_fixed(2, Rounding::Floor), "0.23");
    assert_eq!(impact.to_bps(Rounding::HalfUp), BigInt::from(24));
    assert_eq!(impact.to_bps(Rounding::Floor), BigInt::from(23));
}

#[test]
fn r3_ties_follow_policy() {
    // 0,005 exato
    let tie = Fraction::new(1, 200).unwrap();
    assert_eq!(tie.to_fixed(2, Rounding::HalfUp), "0.01");
    assert_eq!(tie.to_fixed(2, Rounding::NearestEven), "0.00");
    assert_eq!(tie.to_fixed(2, Rounding::Ceil), "0.01");
    assert_eq!(tie.to_fixed(2, Rounding::Floor), "0.00");
    // 0,015 → par é 0,02
    let tie = Fraction::new(3, 200).unwrap();
    assert_eq!(tie.to_fixed(2, Rounding::NearestEven), "0.02");
}

#[test]
fn r4_token_amount_exact_is_floor() {
    let lp = TokenAmount::new(Token::new("SS-LP", 9), 1_234_567_891);
    assert_eq!(lp.to_exact(), "1.234567891");
    assert_eq!(lp.to_string(), "1.234567891 SS-LP");
}
