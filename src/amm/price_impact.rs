//! Price impact de depósitos em pool de dois ativos.
//!
//! Preço de referência: valor combinado das reservas por LP,
//! `p = (reserve_a + reserve_b) / lp_supply`. O impacto compara `p` antes e
//! depois do depósito usando a **média** dos dois preços como base:
//!
//! `delta = (p1 - p0) / ((p0 + p1) / 2)`, devolvido em módulo.
//!
//! Casos degenerados (depósito zero, pool sem supply, média zero) viram
//! `Percent(0)`; o resultado é só informativo para a UI.

use core::fmt;

use tracing::{debug, debug_span, trace};

use super::error::Result;
use super::exchange::{DepositProposal, ExchangeState, ExchangeStateProvider};
use super::fraction::{Fraction, Rounding};
use super::mint::MintEstimator;
use super::percent::Percent;
use super::types::Amount;
use crate::config::ImpactThresholds;

/// Variação percentual do preço do LP causada pelo depósito `amount_a`/`amount_b`.
///
/// Sempre `>= 0`. Depósito vazio devolve zero sem consultar o estimador.
/// Erros do estimador sobem intactos; overflow ao somar reservas vira
/// `OverflowNumeric`.
pub fn calculate_deposit_price_impact<M>(
    state: &ExchangeState,
    amount_a: Amount,
    amount_b: Amount,
    estimator: &M,
) -> Result<Percent>
where
    M: MintEstimator + ?Sized,
{
    let span = debug_span!("deposit_price_impact", amount_a = %amount_a, amount_b = %amount_b);
    let _enter = span.enter();

    let deposit = DepositProposal::new(amount_a, amount_b);
    if deposit.is_empty() {
        trace!("depósito vazio, impacto zero");
        return Ok(Percent::zero());
    }

    let minted = estimator.estimate_mint(state, amount_a, amount_b)?;
    let post = state.after_deposit(&deposit, minted)?;

    let (before, after) = match (state.lp_price(), post.lp_price()) {
        (Some(before), Some(after)) => (before, after),
        _ => {
            debug!(minted = %minted, "preço do LP indefinido (supply zero)");
            return Ok(Percent::zero());
        }
    };

    let average = (&before + &after).checked_div(&Fraction::from_integer(2))?;
    let delta = match (&after - &before).checked_div(&average) {
        Ok(delta) => delta,
        Err(_) => {
            debug!("média de preços zero, impacto zero");
            return Ok(Percent::zero());
        }
    };

    let impact = Percent::from_fraction(delta);
    let impact = if impact.is_negative() { -impact } else { impact };
    debug!(
        minted = %minted,
        price_before = %before.to_fixed(9, Rounding::HalfUp),
        price_after = %after.to_fixed(9, Rounding::HalfUp),
        impact = %impact,
        "price impact de depósito"
    );
    Ok(impact)
}

/// Faixa do impacto para exibição.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceImpactLevel {
    /// Exatamente zero.
    None,
    Low,
    Warning,
    Danger,
}

impl PriceImpactLevel {
    pub fn classify(impact: &Percent, thresholds: &ImpactThresholds) -> Self {
        if impact.is_zero() {
            Self::None
        } else if *impact >= thresholds.danger() {
            Self::Danger
        } else if *impact >= thresholds.warning() {
            Self::Warning
        } else {
            Self::Low
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for PriceImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceImpactQuote {
    pub impact: Percent,
    pub level: PriceImpactLevel,
}

impl fmt::Display for PriceImpactQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.impact, self.level)
    }
}

/// Fachada para a UI: estimador + limiares de alerta.
#[derive(Clone, Debug)]
pub struct PriceImpactCalculator<M> {
    estimator: M,
    thresholds: ImpactThresholds,
}

impl<M: MintEstimator> PriceImpactCalculator<M> {
    pub fn new(estimator: M, thresholds: ImpactThresholds) -> Self {
        Self { estimator, thresholds }
    }

    pub fn thresholds(&self) -> &ImpactThresholds {
        &self.thresholds
    }

    pub fn estimate(&self, state: &ExchangeState, deposit: &DepositProposal) -> Result<Percent> {
        calculate_deposit_price_impact(state, deposit.amount_a, deposit.amount_b, &self.estimator)
    }

    /// Lê o snapshot do provedor, calcula e classifica o impacto.
    pub fn quote<P>(&self, provider: &P, deposit: &DepositProposal) -> Result<PriceImpactQuote>
    where
        P: ExchangeStateProvider + ?Sized,
    {
        let state = provider.exchange_state()?;
        let impact = self.estimate(&state, deposit)?;
        let level = PriceImpactLevel::classify(&impact, &self.thresholds);
        Ok(PriceImpactQuote { impact, level })
    }
}
