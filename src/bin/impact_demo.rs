use anyhow::Result;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use swap_pricing_core::{
    telemetry, Amount, DepositProposal, ExchangeState, ImpactThresholds, PriceImpactCalculator,
    TelemetryConfig, Token, TokenAmount,
};

/// Estimador ingênuo só para a demo: mint proporcional limitado pelo lado mais
/// escasso, `min(a * S / x, b * S / y)`. A curva real vem do SDK do pool.
fn proportional_mint(state: &ExchangeState, a: Amount, b: Amount) -> swap_pricing_core::Result<Amount> {
    let s = state.lp_total_supply().raw();
    let (x, y) = (state.reserve_a().raw(), state.reserve_b().raw());
    if x == 0 || y == 0 {
        return Ok(0);
    }
    let sx = a.saturating_mul(s) / x;
    let sy = b.saturating_mul(s) / y;
    Ok(sx.min(sy))
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = TelemetryConfig::from_env("swap-pricing-core");
    let tel = match telemetry::init(&config) {
        Ok(tel) => Some(tel),
        Err(err) => {
            telemetry::init_fmt_only()?;
            warn!(error = %err, "telemetria OTLP indisponível, seguindo só com logs");
            None
        }
    };

    let thresholds = ImpactThresholds::from_env()?;
    let calc = PriceImpactCalculator::new(proportional_mint, thresholds);

    let pool = ExchangeState::new(
        TokenAmount::new(Token::new("USDC", 6), 1_000_000_000_000),
        TokenAmount::new(Token::new("USDT", 6), 1_000_000_000_000),
        TokenAmount::new(Token::new("SS-LP", 6), 2_000_000_000_000),
    )?;

    let deposits = [
        DepositProposal::new(0, 0),
        DepositProposal::new(1_000_000_000, 1_000_000_000),
        DepositProposal::new(10_000_000_000, 5_000_000_000),
        DepositProposal::new(100_000_000_000, 0),
    ];

    for (i, deposit) in deposits.iter().enumerate() {
        let span = telemetry::make_info_span("deposit_quote", i as u32, "impact_demo", &config.commit_sha);
        let _guard = span.enter();

        let t0 = Instant::now();
        let quote = telemetry::timed("deposit_quote", || calc.quote(&pool, deposit))?;
        if let Some(tel) = &tel {
            tel.record_quote(&quote, t0.elapsed());
        }
        info!(
            amount_a = %deposit.amount_a,
            amount_b = %deposit.amount_b,
            impact = %quote.impact,
            level = %quote.level,
            "cotação de depósito"
        );
        println!("{:>16} / {:<16} -> {}", deposit.amount_a, deposit.amount_b, quote);
    }

    if let Some(tel) = tel {
        tokio::time::sleep(Duration::from_millis(200)).await;
        tel.shutdown();
    }
    Ok(())
}
