//! Fração exata sobre inteiros de precisão arbitrária (BigRational).
//! Nenhuma operação passa por ponto flutuante; arredondamento só na
//! renderização, com política explícita.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::error::Result;
use super::error_catalog::AmmErrorCode;

/// Política de arredondamento para conversões racional → inteiro/decimal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    Floor,
    Ceil,
    /// Empate se afasta de zero.
    #[default]
    HalfUp,
    /// Empate vai para o par.
    NearestEven,
}

/// `n / d` arredondado conforme `rounding`. Requer `d > 0`.
pub(crate) fn div_rounded(n: &BigInt, d: &BigInt, rounding: Rounding) -> BigInt {
    let (q, r) = n.div_mod_floor(d); // 0 <= r < d
    if r.is_zero() {
        return q;
    }
    match rounding {
        Rounding::Floor => q,
        Rounding::Ceil => q + 1,
        Rounding::HalfUp | Rounding::NearestEven => {
            let two_r: BigInt = &r << 1;
            match two_r.cmp(d) {
                core::cmp::Ordering::Less => q,
                core::cmp::Ordering::Greater => q + 1,
                core::cmp::Ordering::Equal => match rounding {
                    // q + 0.5: para n < 0 "longe de zero" é q
                    Rounding::HalfUp if n.is_negative() => q,
                    Rounding::HalfUp => q + 1,
                    _ if q.is_odd() => q + 1,
                    _ => q,
                },
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fraction(BigRational);

impl Fraction {
    /// Constrói `numerator / denominator`; denominador zero é erro.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let d = denominator.into();
        if d.is_zero() {
            return Err(AmmErrorCode::ZeroDenominator.into());
        }
        Ok(Self(BigRational::new(numerator.into(), d)))
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn one() -> Self {
        Self(BigRational::one())
    }

    /// Numerador na forma reduzida (sinal fica no numerador).
    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    /// Denominador na forma reduzida, sempre > 0.
    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn checked_div(&self, other: &Fraction) -> Result<Fraction> {
        if other.is_zero() {
            return Err(AmmErrorCode::ZeroDenominator.into());
        }
        Ok(Self(&self.0 / &other.0))
    }

    pub fn round_to_integer(&self, rounding: Rounding) -> BigInt {
        div_rounded(self.0.numer(), self.0.denom(), rounding)
    }

    /// Representação decimal com `decimals` casas, ex.: `1/3` → `"0.333"`.
    pub fn to_fixed(&self, decimals: u32, rounding: Rounding) -> String {
        let scale = BigInt::from(10u8).pow(decimals);
        let scaled = div_rounded(&(self.0.numer() * &scale), self.0.denom(), rounding);
        format_scaled(&scaled, decimals)
    }
}

fn format_scaled(scaled: &BigInt, decimals: u32) -> String {
    let digits = scaled.abs().to_string();
    let width = decimals as usize + 1;
    let padded = if digits.len() < width {
        format!("{}{}", "0".repeat(width - digits.len()), digits)
    } else {
        digits
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - decimals as usize);
    let sign = if scaled.is_negative() { "-" } else { "" };
    if decimals == 0 {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    }
}

impl From<BigRational> for Fraction {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl From<u128> for Fraction {
    fn from(value: u128) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0.numer(), self.0.denom())
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<'a> $trait<&'a Fraction> for &'a Fraction {
            type Output = Fraction;
            fn $method(self, rhs: &'a Fraction) -> Fraction {
                Fraction(&self.0 $op &rhs.0)
            }
        }
        impl $trait for Fraction {
            type Output = Fraction;
            fn $method(self, rhs: Fraction) -> Fraction {
                Fraction(self.0 $op rhs.0)
            }
        }
    };
}

forward_binop!(Add, add, +);
forward_binop!(Sub, sub, -);
forward_binop!(Mul, mul, *);

impl Neg for Fraction {
    type Output = Fraction;
    fn neg(self) -> Fraction {
        Fraction(-self.0)
    }
}
