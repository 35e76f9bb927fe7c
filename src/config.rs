//! Configuração via variáveis de ambiente (limiares de alerta e telemetria).

use anyhow::{bail, Context, Result};

use crate::amm::percent::{Percent, BPS_SCALE};

pub const ENV_WARN_BPS: &str = "SWAP_IMPACT_WARN_BPS";
pub const ENV_DANGER_BPS: &str = "SWAP_IMPACT_DANGER_BPS";
pub const ENV_OTLP_ENDPOINT: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";
pub const ENV_COMMIT_SHA: &str = "SWAP_PRICING_COMMIT_SHA";

pub const DEFAULT_WARN_BPS: u32 = 100; // 1%
pub const DEFAULT_DANGER_BPS: u32 = 500; // 5%
pub const DEFAULT_OTLP_ENDPOINT: &str = "http://localhost:4318";

/// Limiares (em bps) usados para classificar o price impact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImpactThresholds {
    warning_bps: u32,
    danger_bps: u32,
}

impl ImpactThresholds {
    pub fn new(warning_bps: u32, danger_bps: u32) -> Result<Self> {
        let t = Self { warning_bps, danger_bps };
        t.validate()?;
        Ok(t)
    }

    pub fn validate(&self) -> Result<()> {
        if self.warning_bps == 0 {
            bail!("warning threshold must be > 0 bps");
        }
        if self.warning_bps > self.danger_bps {
            bail!(
                "warning threshold ({} bps) above danger threshold ({} bps)",
                self.warning_bps,
                self.danger_bps
            );
        }
        if self.danger_bps > BPS_SCALE {
            bail!("danger threshold ({} bps) above 100%", self.danger_bps);
        }
        Ok(())
    }

    pub fn warning_bps(&self) -> u32 {
        self.warning_bps
    }

    pub fn danger_bps(&self) -> u32 {
        self.danger_bps
    }

    pub fn warning(&self) -> Percent {
        Percent::from_bps(self.warning_bps)
    }

    pub fn danger(&self) -> Percent {
        Percent::from_bps(self.danger_bps)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Igual a [`from_env`](Self::from_env), mas lendo de `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let warning_bps = parse_bps(&lookup, ENV_WARN_BPS, DEFAULT_WARN_BPS)?;
        let danger_bps = parse_bps(&lookup, ENV_DANGER_BPS, DEFAULT_DANGER_BPS)?;
        Self::new(warning_bps, danger_bps).context("invalid price impact thresholds")
    }
}

impl Default for ImpactThresholds {
    fn default() -> Self {
        Self { warning_bps: DEFAULT_WARN_BPS, danger_bps: DEFAULT_DANGER_BPS }
    }
}

fn parse_bps<F>(lookup: &F, key: &str, default: u32) -> Result<u32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .with_context(|| format!("{key} must be an integer number of bps, got {raw:?}")),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub otlp_endpoint: String,
    pub commit_sha: String,
}

impl TelemetryConfig {
    pub fn from_env(service_name: &str) -> Self {
        Self::from_lookup(service_name, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(service_name: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            service_name: service_name.to_string(),
            otlp_endpoint: lookup(ENV_OTLP_ENDPOINT).unwrap_or_else(|| DEFAULT_OTLP_ENDPOINT.to_string()),
            commit_sha: lookup(ENV_COMMIT_SHA).unwrap_or_else(|| "unknown".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn t_defaults_when_unset() {
        let t = ImpactThresholds::from_lookup(env(&[])).unwrap();
        assert_eq!(t, ImpactThresholds::default());
        assert_eq!(t.warning(), Percent::from_bps(100));
    }

    #[test]
    fn t_overrides_from_env() {
        let t = ImpactThresholds::from_lookup(env(&[(ENV_WARN_BPS, " 50 "), (ENV_DANGER_BPS, "300")])).unwrap();
        assert_eq!((t.warning_bps(), t.danger_bps()), (50, 300));
    }

    #[test]
    fn t_rejects_garbage_and_inverted() {
        let err = ImpactThresholds::from_lookup(env(&[(ENV_WARN_BPS, "abc")])).unwrap_err();
        assert!(err.to_string().contains(ENV_WARN_BPS));
        assert!(ImpactThresholds::from_lookup(env(&[(ENV_WARN_BPS, "600")])).is_err());
        assert!(ImpactThresholds::new(0, 10).is_err());
        assert!(ImpactThresholds::new(10, 20_000).is_err());
    }

    #[test]
    fn t_telemetry_config() {
        let c = TelemetryConfig::from_lookup("svc", env(&[(ENV_COMMIT_SHA, "abc123")]));
        assert_eq!(c.service_name, "svc");
        assert_eq!(c.otlp_endpoint, DEFAULT_OTLP_ENDPOINT);
        assert_eq!(c.commit_sha, "abc123");
    }
}
