use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::workflows::loans::{DecisionConfig, DecisionConfigError};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the loan advisor service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub decision: DecisionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut decision = DecisionConfig::default();
        if let Ok(raw) = env::var("LOAN_APPROVAL_THRESHOLD") {
            let threshold = raw
                .trim()
                .parse::<i16>()
                .map_err(|_| ConfigError::InvalidApprovalThreshold)?;
            decision = decision.with_approval_threshold(threshold);
        }
        if let Ok(raw) = env::var("LOAN_ASSUMED_ANNUAL_RATE") {
            let rate = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidAnnualRate)?;
            if !rate.is_finite() || rate <= 0.0 || rate >= 1.0 {
                return Err(ConfigError::InvalidAnnualRate);
            }
            decision.assumed_annual_rate = rate;
        }
        decision
            .validate()
            .map_err(|source| ConfigError::InvalidDecision { source })?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            decision,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidApprovalThreshold,
    InvalidAnnualRate,
    InvalidDecision { source: DecisionConfigError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidApprovalThreshold => {
                write!(f, "LOAN_APPROVAL_THRESHOLD must be a whole number of points")
            }
            ConfigError::InvalidAnnualRate => write!(
                f,
                "LOAN_ASSUMED_ANNUAL_RATE must be a decimal rate between 0 and 1"
            ),
            ConfigError::InvalidDecision { source } => {
                write!(f, "decision rubric settings are invalid: {}", source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidDecision { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidApprovalThreshold
            | ConfigError::InvalidAnnualRate => None,
        }
    }
}
