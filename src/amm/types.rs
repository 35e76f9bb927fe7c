//! Quantias inteiras marcadas com a identidade do token.
//! Só quantias do mesmo token se somam/subtraem.

use core::fmt;

use num_bigint::BigInt;

use super::error::Result;
use super::error_catalog::AmmErrorCode;
use super::fraction::{Fraction, Rounding};
use crate::amm_err;

/// Magnitude em unidades base (menor unidade do token).
pub type Amount = u128;

/// Identidade do token: mint + casas decimais.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token {
    pub mint: String,
    pub decimals: u8,
}

impl Token {
    pub fn new(mint: impl Into<String>, decimals: u8) -> Self {
        Self { mint: mint.into(), decimals }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.mint, self.decimals)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TokenAmount {
    token: Token,
    raw: Amount,
}

impl TokenAmount {
    pub fn new(token: Token, raw: Amount) -> Self {
        Self { token, raw }
    }

    pub fn zero(token: Token) -> Self {
        Self { token, raw: 0 }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn raw(&self) -> Amount {
        self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw == 0
    }

    /// `raw / 1`; a identidade do token é descartada.
    pub fn as_fraction(&self) -> Fraction {
        Fraction::from(self.raw)
    }

    fn ensure_same_token(&self, other: &TokenAmount) -> Result<()> {
        if self.token != other.token {
            return Err(amm_err!(
                AmmErrorCode::TokenMismatch,
                left => &self.token,
                right => &other.token,
            ));
        }
        Ok(())
    }

    pub fn checked_add(&self, other: &TokenAmount) -> Result<TokenAmount> {
        self.ensure_same_token(other)?;
        let raw = self
            .raw
            .checked_add(other.raw)
            .ok_or_else(|| amm_err!(AmmErrorCode::OverflowNumeric, op => "add", token => &self.token))?;
        Ok(Self::new(self.token.clone(), raw))
    }

    pub fn checked_sub(&self, other: &TokenAmount) -> Result<TokenAmount> {
        self.ensure_same_token(other)?;
        let raw = self
            .raw
            .checked_sub(other.raw)
            .ok_or_else(|| amm_err!(AmmErrorCode::OverflowNumeric, op => "sub", token => &self.token))?;
        Ok(Self::new(self.token.clone(), raw))
    }

    /// Soma uma magnitude bruta no mesmo token.
    pub fn add_raw(&self, raw: Amount) -> Result<TokenAmount> {
        self.checked_add(&Self::new(self.token.clone(), raw))
    }

    /// Valor em unidades inteiras, ex.: raw=1_500_000 com 6 decimais → `"1.500000"`.
    pub fn to_exact(&self) -> String {
        let unit = BigInt::from(10u8).pow(u32::from(self.token.decimals));
        let value = Fraction::from_integer(self.raw)
            .checked_div(&Fraction::from_integer(unit))
            .unwrap_or_else(|_| Fraction::zero());
        value.to_fixed(u32::from(self.token.decimals), Rounding::Floor)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.token.mint)
    }
}
