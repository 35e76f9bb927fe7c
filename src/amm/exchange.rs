//! Snapshot do pool (duas reservas + supply de LP) e proposta de depósito.
//! Tudo é valor imutável: derivar o estado pós-depósito gera outro valor.

use super::error::Result;
use super::error_map::{from_exchange_state, to_error};
use super::fraction::Fraction;
use super::types::{Amount, TokenAmount};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExchangeState {
    reserve_a: TokenAmount,
    reserve_b: TokenAmount,
    lp_total_supply: TokenAmount,
}

impl ExchangeState {
    pub fn new(reserve_a: TokenAmount, reserve_b: TokenAmount, lp_total_supply: TokenAmount) -> Result<Self> {
        if let Some(code) = from_exchange_state(&reserve_a, &reserve_b, &lp_total_supply) {
            return Err(to_error(code)
                .with_context("reserve_a", &reserve_a)
                .with_context("reserve_b", &reserve_b)
                .with_context("lp_total_supply", &lp_total_supply));
        }
        Ok(Self { reserve_a, reserve_b, lp_total_supply })
    }

    pub fn reserve_a(&self) -> &TokenAmount {
        &self.reserve_a
    }

    pub fn reserve_b(&self) -> &TokenAmount {
        &self.reserve_b
    }

    pub fn lp_total_supply(&self) -> &TokenAmount {
        &self.lp_total_supply
    }

    /// Valor combinado das reservas por LP: `(a + b) / supply`.
    /// `None` com supply zero (pool vazio).
    pub fn lp_price(&self) -> Option<Fraction> {
        let reserves = self.reserve_a.as_fraction() + self.reserve_b.as_fraction();
        reserves.checked_div(&self.lp_total_supply.as_fraction()).ok()
    }

    /// Estado após depositar `deposit` e mintar `minted` LP.
    pub fn after_deposit(&self, deposit: &DepositProposal, minted: Amount) -> Result<ExchangeState> {
        Ok(Self {
            reserve_a: self.reserve_a.add_raw(deposit.amount_a)?,
            reserve_b: self.reserve_b.add_raw(deposit.amount_b)?,
            lp_total_supply: self.lp_total_supply.add_raw(minted)?,
        })
    }

    /// Mesmo pool com os papéis de A e B trocados.
    pub fn swapped(&self) -> ExchangeState {
        Self {
            reserve_a: self.reserve_b.clone(),
            reserve_b: self.reserve_a.clone(),
            lp_total_supply: self.lp_total_supply.clone(),
        }
    }
}

/// Magnitudes brutas do depósito, nas unidades base de cada reserva.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DepositProposal {
    pub amount_a: Amount,
    pub amount_b: Amount,
}

impl DepositProposal {
    pub fn new(amount_a: Amount, amount_b: Amount) -> Self {
        Self { amount_a, amount_b }
    }

    /// `amount_a + amount_b == 0`, sem risco de overflow.
    pub fn is_empty(&self) -> bool {
        self.amount_a == 0 && self.amount_b == 0
    }

    pub fn swapped(&self) -> Self {
        Self { amount_a: self.amount_b, amount_b: self.amount_a }
    }
}

/// Fonte do snapshot atual do pool (RPC, cache, fixture...).
pub trait ExchangeStateProvider {
    fn exchange_state(&self) -> Result<ExchangeState>;
}

impl ExchangeStateProvider for ExchangeState {
    fn exchange_state(&self) -> Result<ExchangeState> {
        Ok(self.clone())
    }
}

impl<F> ExchangeStateProvider for F
where
    F: Fn() -> Result<ExchangeState>,
{
    fn exchange_state(&self) -> Result<ExchangeState> {
        self()
    }
}
