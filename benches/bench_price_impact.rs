use std::time::Duration;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use swap_pricing_core::{calculate_deposit_price_impact, Amount, ExchangeState, Result, Token, TokenAmount};

fn pool(a: Amount, b: Amount, lp: Amount) -> ExchangeState {
    ExchangeState::new(
        TokenAmount::new(Token::new("USDC", 6), a),
        TokenAmount::new(Token::new("USDT", 6), b),
        TokenAmount::new(Token::new("SS-LP", 6), lp),
    )
    .expect("pool ok")
}

fn proportional_mint(state: &ExchangeState, a: Amount, b: Amount) -> Result<Amount> {
    let s = state.lp_total_supply().raw();
    let (x, y) = (state.reserve_a().raw(), state.reserve_b().raw());
    Ok((a * s / x).min(b * s / y))
}

fn bench_price_impact(c: &mut Criterion) {
    let mut g = c.benchmark_group("deposit_price_impact");
    g.warm_up_time(Duration::from_secs(2));
    g.measurement_time(Duration::from_secs(5));
    g.sample_size(300);
    g.throughput(Throughput::Elements(1));

    let cases: [(&str, ExchangeState, Amount, Amount); 5] = [
        ("balanced_small", pool(1_000_000, 1_000_000, 2_000_000), 1_000, 1_000),
        ("single_sided", pool(1_000_000, 1_000_000, 2_000_000), 100_000, 0),
        ("skewed_pool", pool(9_000_000_000_000, 1_000_000_000_000, 10_000_000_000_000), 5_000_000, 1_000_000),
        ("large_u64_scale", pool(u64::MAX as Amount, u64::MAX as Amount, u64::MAX as Amount), 123_456_789, 987_654_321),
        ("zero_deposit", pool(1_000_000, 1_000_000, 2_000_000), 0, 0),
    ];

    for (label, state, a, b) in cases.iter() {
        g.bench_function(*label, |bench| {
            bench.iter(|| {
                let p = calculate_deposit_price_impact(black_box(state), black_box(*a), black_box(*b), &proportional_mint)
                    .expect("impact ok");
                black_box(p);
            });
        });
    }
    g.finish();
}

criterion_group!(benches, bench_price_impact);
criterion_main!(benches);
