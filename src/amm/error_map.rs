//! Mapeamento entre condições de domínio e códigos de erro.
use crate::amm::error::AmmError;
use crate::amm::error_catalog::AmmErrorCode;
use crate::amm::types::TokenAmount;

/// Classifica um snapshot bruto de pool; `None` quando é válido.
///
/// Os três tokens precisam ser distintos e o supply de LP só pode ser zero
/// com as duas reservas zeradas (pool não inicializado).
pub fn from_exchange_state(
    reserve_a: &TokenAmount,
    reserve_b: &TokenAmount,
    lp_total_supply: &TokenAmount,
) -> Option<AmmErrorCode> {
    let (a, b, lp) = (reserve_a.token(), reserve_b.token(), lp_total_supply.token());
    if a == b || a == lp || b == lp {
        return Some(AmmErrorCode::TokenMismatch);
    }
    if lp_total_supply.is_zero() && !(reserve_a.is_zero() && reserve_b.is_zero()) {
        return Some(AmmErrorCode::InconsistentSupply);
    }
    None
}

pub fn to_error(code: AmmErrorCode) -> AmmError {
    AmmError::new(code)
}
