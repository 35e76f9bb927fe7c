#![allow(dead_code)]

use swap_pricing_core::{Amount, ExchangeState, Result, Token, TokenAmount};

pub fn pool(a: Amount, b: Amount, lp: Amount) -> ExchangeState {
    ExchangeState::new(
        TokenAmount::new(Token::new("USDC", 6), a),
        TokenAmount::new(Token::new("USDT", 6), b),
        TokenAmount::new(Token::new("SS-LP", 6), lp),
    )
    .expect("pool válido")
}

/// `min(a * S / x, b * S / y)`: penaliza qualquer desvio da proporção do pool.
pub fn proportional_mint(state: &ExchangeState, a: Amount, b: Amount) -> Result<Amount> {
    let s = state.lp_total_supply().raw();
    let (x, y) = (state.reserve_a().raw(), state.reserve_b().raw());
    if x == 0 || y == 0 {
        return Ok(0);
    }
    Ok((a * s / x).min(b * s / y))
}

/// `(a + b) * S / (x + y)`: curva "plana", sem penalidade de desbalanceamento.
pub fn flat_mint(state: &ExchangeState, a: Amount, b: Amount) -> Result<Amount> {
    let s = state.lp_total_supply().raw();
    let reserves = state.reserve_a().raw() + state.reserve_b().raw();
    if reserves == 0 {
        return Ok(0);
    }
    Ok((a + b) * s / reserves)
}

pub fn fixed_mint(minted: Amount) -> impl Fn(&ExchangeState, Amount, Amount) -> Result<Amount> {
    move |_, _, _| Ok(minted)
}
