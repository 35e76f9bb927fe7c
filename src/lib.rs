//! Cálculo exato de price impact para depósitos em pools stable-swap.
//!
//! A curva do pool (estimativa de mint) é uma dependência externa, injetada via
//! [`amm::mint::MintEstimator`]; este crate só faz a aritmética racional em volta.

pub mod amm;
pub mod config;
pub mod telemetry;

pub use amm::error::{AmmError, Result};
pub use amm::error_catalog::AmmErrorCode;
pub use amm::exchange::{DepositProposal, ExchangeState, ExchangeStateProvider};
pub use amm::fraction::{Fraction, Rounding};
pub use amm::mint::MintEstimator;
pub use amm::percent::Percent;
pub use amm::price_impact::{
    calculate_deposit_price_impact, PriceImpactCalculator, PriceImpactLevel, PriceImpactQuote,
};
pub use amm::types::{Amount, Token, TokenAmount};
pub use config::{ImpactThresholds, TelemetryConfig};
