//! Client configuration, built in code or populated from environment variables.

use std::time::Duration;

use thiserror::Error;

use crate::session::Session;
use crate::transport::HttpTransport;

/// Connection settings for a [`crate::PanelClient`].
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `SARBAN_ADDRESS` | (required) | Panel `host[:port]`, scheme optional |
/// | `SARBAN_HTTPS` | `true` | Scheme to use when the address has none |
/// | `SARBAN_VERIFY_TLS` | value of `SARBAN_HTTPS` | Verify the panel's TLS certificate |
/// | `SARBAN_TIMEOUT_SECS` | `30` | Per-request timeout |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Panel address, e.g. `"panel.example.com:8000"`.
    pub address: String,

    pub https: bool,

    /// `None` means "same as `https`".
    pub verify_tls: Option<bool>,

    pub timeout: Duration,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SARBAN_ADDRESS is not set")]
    MissingAddress,

    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

impl ClientConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            https: true,
            verify_tls: None,
            timeout: HttpTransport::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_https(mut self, https: bool) -> Self {
        self.https = https;
        self
    }

    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = Some(verify_tls);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Populate config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Populate config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let address = lookup("SARBAN_ADDRESS")
            .filter(|a| !a.trim().is_empty())
            .ok_or(ConfigError::MissingAddress)?;

        let mut config = Self::new(address);
        if let Some(v) = lookup("SARBAN_HTTPS") {
            config.https = parse_bool("SARBAN_HTTPS", &v)?;
        }
        if let Some(v) = lookup("SARBAN_VERIFY_TLS") {
            config.verify_tls = Some(parse_bool("SARBAN_VERIFY_TLS", &v)?);
        }
        if let Some(v) = lookup("SARBAN_TIMEOUT_SECS") {
            let secs = v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    var: "SARBAN_TIMEOUT_SECS",
                    value: v.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Effective TLS verification flag.
    pub fn verify_tls(&self) -> bool {
        self.verify_tls.unwrap_or(self.https)
    }

    /// An anonymous session for this configuration.
    pub fn session(&self) -> Session {
        Session::new(&self.address, self.https).with_verify_tls(self.verify_tls())
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let c = ClientConfig::from_lookup(lookup(&[("SARBAN_ADDRESS", "panel.example.com")])).unwrap();
        assert!(c.https);
        assert!(c.verify_tls());
        assert_eq!(c.timeout, Duration::from_secs(30));
        assert_eq!(c.session().base_address(), "https://panel.example.com");
    }

    #[test]
    fn missing_address() {
        assert_eq!(
            ClientConfig::from_lookup(lookup(&[])),
            Err(ConfigError::MissingAddress)
        );
        assert_eq!(
            ClientConfig::from_lookup(lookup(&[("SARBAN_ADDRESS", "  ")])),
            Err(ConfigError::MissingAddress)
        );
    }

    #[test]
    fn verify_tls_follows_https_unless_overridden() {
        let plain = ClientConfig::from_lookup(lookup(&[
            ("SARBAN_ADDRESS", "10.0.0.2:8000"),
            ("SARBAN_HTTPS", "false"),
        ]))
        .unwrap();
        assert!(!plain.verify_tls());
        assert_eq!(plain.session().base_address(), "http://10.0.0.2:8000");

        let self_signed = ClientConfig::from_lookup(lookup(&[
            ("SARBAN_ADDRESS", "panel.example.com"),
            ("SARBAN_VERIFY_TLS", "0"),
        ]))
        .unwrap();
        assert!(self_signed.https);
        assert!(!self_signed.session().verify_tls());
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = ClientConfig::from_lookup(lookup(&[
            ("SARBAN_ADDRESS", "panel.example.com"),
            ("SARBAN_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: "SARBAN_TIMEOUT_SECS",
                value: "soon".into()
            }
        );

        let err = ClientConfig::from_lookup(lookup(&[
            ("SARBAN_ADDRESS", "panel.example.com"),
            ("SARBAN_HTTPS", "maybe"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "SARBAN_HTTPS", .. }));
    }

    #[test]
    fn builder() {
        let c = ClientConfig::new("panel.example.com")
            .with_https(false)
            .with_verify_tls(true)
            .with_timeout(Duration::from_secs(5));
        assert_eq!(c.session().base_address(), "http://panel.example.com");
        assert!(c.session().verify_tls());
        assert_eq!(c.timeout, Duration::from_secs(5));
    }
}
