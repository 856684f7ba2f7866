use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub roster: RosterConfig,
    pub report: ReportConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let size = env::var("ROSTER_SIZE")
            .unwrap_or_else(|_| "12".to_string())
            .parse::<usize>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or(ConfigError::InvalidRosterSize)?;

        let seed = match env::var("ROSTER_SEED") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidSeed { source })?,
            ),
            _ => None,
        };

        let highlight_count = env::var("REPORT_HIGHLIGHT_COUNT")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidHighlightCount)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            roster: RosterConfig { size, seed },
            report: ReportConfig { highlight_count },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings for the generated demo roster.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub size: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub highlight_count: usize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRosterSize,
    InvalidSeed { source: std::num::ParseIntError },
    InvalidHighlightCount,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRosterSize => {
                write!(f, "ROSTER_SIZE must be a positive integer")
            }
            ConfigError::InvalidSeed { .. } => write!(f, "ROSTER_SEED must be a valid u64"),
            ConfigError::InvalidHighlightCount => {
                write!(f, "REPORT_HIGHLIGHT_COUNT must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidSeed { source } => Some(source),
            ConfigError::InvalidRosterSize | ConfigError::InvalidHighlightCount => None,
        }
    }
}
