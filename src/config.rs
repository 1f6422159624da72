use crate::payment::SandboxDecision;
use crate::state::DEFAULT_FEATURED_COUNT;
use crate::types::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub payment: PaymentConfig,
    pub tui: TuiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// JSON catalog file; the built-in catalog is used when unset
    pub path: Option<PathBuf>,
    pub featured_count: usize,
}

#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub client_id: String,
    pub currency: String,
    pub sandbox_outcome: SandboxDecision,
    pub sandbox_latency: Duration,
}

#[derive(Debug, Clone)]
pub struct TuiConfig {
    pub tick_rate: Duration,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub dir: PathBuf,
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                path: None,
                featured_count: DEFAULT_FEATURED_COUNT,
            },
            payment: PaymentConfig {
                client_id: "test".to_string(),
                currency: "USD".to_string(),
                sandbox_outcome: SandboxDecision::Approve,
                sandbox_latency: Duration::from_millis(800),
            },
            tui: TuiConfig {
                tick_rate: Duration::from_millis(100),
            },
            logging: LoggingConfig {
                dir: default_log_dir(),
                filter: "storefront=info".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            catalog: CatalogConfig {
                path: lookup("STOREFRONT_CATALOG").map(PathBuf::from),
                featured_count: parse_or(&lookup, "STOREFRONT_FEATURED_COUNT", defaults.catalog.featured_count)?,
            },
            payment: PaymentConfig {
                client_id: lookup("PAYMENT_CLIENT_ID").unwrap_or(defaults.payment.client_id),
                currency: lookup("PAYMENT_CURRENCY")
                    .map(|c| c.trim().to_uppercase())
                    .unwrap_or(defaults.payment.currency),
                sandbox_outcome: parse_or(&lookup, "PAYMENT_SANDBOX_OUTCOME", defaults.payment.sandbox_outcome)?,
                sandbox_latency: Duration::from_millis(parse_or(
                    &lookup,
                    "PAYMENT_SANDBOX_LATENCY_MS",
                    defaults.payment.sandbox_latency.as_millis() as u64,
                )?),
            },
            tui: TuiConfig {
                tick_rate: tick_rate(&lookup, defaults.tui.tick_rate)?,
            },
            logging: LoggingConfig {
                dir: lookup("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.logging.dir),
                filter: lookup("RUST_LOG").unwrap_or(defaults.logging.filter),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{}={}: {}", key, raw, e))),
        None => Ok(default),
    }
}

/// The event loop's interval timer cannot run with a zero period
fn tick_rate<F>(lookup: &F, default: Duration) -> AppResult<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let millis: u64 = parse_or(lookup, "TUI_TICK_RATE_MS", default.as_millis() as u64)?;
    if millis == 0 {
        return Err(AppError::Config("TUI_TICK_RATE_MS=0: must be at least 1".to_string()));
    }
    Ok(Duration::from_millis(millis))
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storefront")
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.catalog.featured_count, 4);
        assert_eq!(config.payment.client_id, "test");
        assert_eq!(config.payment.currency, "USD");
        assert_eq!(config.payment.sandbox_outcome, SandboxDecision::Approve);
        assert_eq!(config.tui.tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("STOREFRONT_CATALOG", "/tmp/catalog.json"),
            ("STOREFRONT_FEATURED_COUNT", "8"),
            ("PAYMENT_CURRENCY", "eur"),
            ("PAYMENT_SANDBOX_OUTCOME", "cancel"),
            ("PAYMENT_SANDBOX_LATENCY_MS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.catalog.path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.catalog.featured_count, 8);
        assert_eq!(config.payment.currency, "EUR");
        assert_eq!(config.payment.sandbox_outcome, SandboxDecision::Cancel);
        assert!(config.payment.sandbox_latency.is_zero());
    }

    #[test]
    fn test_parse_failure_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[("STOREFRONT_FEATURED_COUNT", "many")]));
        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("STOREFRONT_FEATURED_COUNT")));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let result = Config::from_lookup(lookup_from(&[("TUI_TICK_RATE_MS", "0")]));
        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("TUI_TICK_RATE_MS")));

        let config = Config::from_lookup(lookup_from(&[("TUI_TICK_RATE_MS", "1")])).unwrap();
        assert_eq!(config.tui.tick_rate, Duration::from_millis(1));
    }
}
