//! Capacidade externa de estimativa de mint.
//!
//! A matemática da curva (invariante stable-swap, fator de amplificação,
//! taxas de desbalanceamento) fica fora deste crate; aqui só existe o
//! contrato consumido pelo cálculo de price impact.

use super::error::Result;
use super::exchange::ExchangeState;
use super::types::Amount;

/// Quantos LP o pool emitiria para depositar `amount_a`/`amount_b` em `state`.
///
/// Falhas do estimador sobem sem alteração para quem chamou o cálculo.
pub trait MintEstimator {
    fn estimate_mint(&self, state: &ExchangeState, amount_a: Amount, amount_b: Amount) -> Result<Amount>;
}

impl<F> MintEstimator for F
where
    F: Fn(&ExchangeState, Amount, Amount) -> Result<Amount>,
{
    fn estimate_mint(&self, state: &ExchangeState, amount_a: Amount, amount_b: Amount) -> Result<Amount> {
        self(state, amount_a, amount_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amm::types::{Token, TokenAmount};

    fn state() -> ExchangeState {
        ExchangeState::new(
            TokenAmount::new(Token::new("A", 6), 10),
            TokenAmount::new(Token::new("B", 6), 10),
            TokenAmount::new(Token::new("LP", 6), 20),
        )
        .unwrap()
    }

    #[test]
    fn t_closure_is_estimator() {
        let sum = |_: &ExchangeState, a: Amount, b: Amount| -> Result<Amount> { Ok(a + b) };
        assert_eq!(sum.estimate_mint(&state(), 3, 4).unwrap(), 7);
    }

    #[test]
    fn t_boxed_trait_object() {
        let boxed: Box<dyn MintEstimator> =
            Box::new(|s: &ExchangeState, _: Amount, _: Amount| -> Result<Amount> { Ok(s.lp_total_supply().raw()) });
        assert_eq!(boxed.estimate_mint(&state(), 0, 1).unwrap(), 20);
    }
}
