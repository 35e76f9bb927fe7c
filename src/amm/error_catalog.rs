//! Catálogo imutável de erros do núcleo de precificação.
use core::fmt;

/// Código de erro estável.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum AmmErrorCode {
    /// Fração construída ou dividida por zero.
    ZeroDenominator,
    /// Aritmética entre quantias de tokens diferentes.
    TokenMismatch,
    /// Overflow ou underflow em quantias inteiras.
    OverflowNumeric,
    /// Supply de LP zerado com reservas não vazias.
    InconsistentSupply,
    /// O estimador externo de mint falhou.
    MintEstimateFailed,
    /// O provedor não conseguiu entregar o estado do pool.
    StateUnavailable,
}

impl AmmErrorCode {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ZeroDenominator => "AMM-0001",
            Self::TokenMismatch => "AMM-0002",
            Self::OverflowNumeric => "AMM-0003",
            Self::InconsistentSupply => "AMM-0004",
            Self::MintEstimateFailed => "AMM-0005",
            Self::StateUnavailable => "AMM-0006",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::ZeroDenominator => "Denominador zerado",
            Self::TokenMismatch => "Tokens incompatíveis",
            Self::OverflowNumeric => "Overflow numérico",
            Self::InconsistentSupply => "Supply inconsistente",
            Self::MintEstimateFailed => "Estimativa de mint falhou",
            Self::StateUnavailable => "Estado do pool indisponível",
        }
    }

    /// Mensagem base em português; aceita `{placeholders}` do contexto.
    pub const fn message_pt(&self) -> &'static str {
        match self {
            Self::ZeroDenominator => "denominador deve ser != 0",
            Self::TokenMismatch => "tokens incompatíveis: {left} vs {right}",
            Self::OverflowNumeric => "overflow/underflow numérico",
            Self::InconsistentSupply => "supply de LP zerado com reservas não vazias",
            Self::MintEstimateFailed => "estimativa de mint falhou: {reason}",
            Self::StateUnavailable => "estado do pool indisponível: {reason}",
        }
    }

    pub fn all() -> &'static [AmmErrorCode] {
        const ALL: &[AmmErrorCode] = &[
            AmmErrorCode::ZeroDenominator,
            AmmErrorCode::TokenMismatch,
            AmmErrorCode::OverflowNumeric,
            AmmErrorCode::InconsistentSupply,
            AmmErrorCode::MintEstimateFailed,
            AmmErrorCode::StateUnavailable,
        ];
        ALL
    }
}

impl fmt::Display for AmmErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Mensagem padrão na localidade ativa (pt-BR).
pub fn default_locale_message(code: AmmErrorCode) -> &'static str {
    code.message_pt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_display_is_code() {
        assert_eq!(AmmErrorCode::TokenMismatch.to_string(), "AMM-0002");
    }

    #[test]
    fn t_all_is_ordered() {
        let all = AmmErrorCode::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }
}
