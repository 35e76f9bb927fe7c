//! Percentual exato: uma [`Fraction`] em que `1` significa 100%.

use core::fmt;
use core::ops::Neg;

use num_bigint::BigInt;
use num_rational::BigRational;

use super::fraction::{Fraction, Rounding};

pub const BPS_SCALE: u32 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(Fraction);

impl Percent {
    pub fn zero() -> Self {
        Self(Fraction::zero())
    }

    pub fn from_fraction(value: Fraction) -> Self {
        Self(value)
    }

    /// `bps / 10_000`, ex.: `from_bps(42)` é 0,42%.
    pub fn from_bps(bps: u32) -> Self {
        Self(Fraction::from(BigRational::new(BigInt::from(bps), BigInt::from(BPS_SCALE))))
    }

    pub fn as_fraction(&self) -> &Fraction {
        &self.0
    }

    pub fn into_fraction(self) -> Fraction {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Valor em pontos percentuais com `decimals` casas: 2/839 → `"0.24"`.
    pub fn to_fixed(&self, decimals: u32, rounding: Rounding) -> String {
        (&self.0 * &Fraction::from_integer(100)).to_fixed(decimals, rounding)
    }

    pub fn to_bps(&self, rounding: Rounding) -> BigInt {
        (&self.0 * &Fraction::from_integer(BPS_SCALE)).round_to_integer(rounding)
    }
}

impl Default for Percent {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Fraction> for Percent {
    fn from(value: Fraction) -> Self {
        Self(value)
    }
}

impl Neg for Percent {
    type Output = Percent;
    fn neg(self) -> Percent {
        Percent(-self.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.to_fixed(2, Rounding::HalfUp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_from_bps_and_back() {
        let p = Percent::from_bps(42);
        assert_eq!(p.as_fraction(), &Fraction::new(42, 10_000).unwrap());
        assert_eq!(p.to_bps(Rounding::Floor), BigInt::from(42));
        assert_eq!(p.to_string(), "0.42%");
    }

    #[test]
    fn t_sign_helpers() {
        let p = -Percent::from_bps(7);
        assert!(p.is_negative());
        assert_eq!(p.abs(), Percent::from_bps(7));
        assert!(Percent::zero().is_zero());
        assert!(!Percent::zero().is_negative());
    }

    #[test]
    fn t_display_rounds_half_up() {
        // 0.125% → "0.13%"
        let p = Percent::from_fraction(Fraction::new(1, 800).unwrap());
        assert_eq!(p.to_string(), "0.13%");
        assert_eq!(p.to_fixed(3, Rounding::Floor), "0.125");
    }

    #[test]
    fn t_ordering() {
        assert!(Percent::from_bps(1) > Percent::zero());
        assert!(Percent::from_bps(100) < Percent::from_bps(500));
    }
}
