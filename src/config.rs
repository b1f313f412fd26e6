use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

fn default_port() -> u16 { 8080 }
fn default_true() -> bool { true }

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tariff: TariffConfig,
    #[serde(default)]
    pub policy: EstimatorPolicy,
    #[serde(default)]
    pub presentation: PresentationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

/// Tariff and installation cost constants.
///
/// The defaults are the figures the calculator ships with; `config.json` may
/// override any of them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, ToSchema)]
#[serde(default)]
pub struct TariffConfig {
    /// Rated output of a single panel (W)
    pub panel_wattage: f64,
    /// Installed cost per kW of capacity (₹)
    pub cost_per_kw: f64,
    /// Average daily generation per installed kW (units)
    pub daily_gen_per_kw_hours: f64,
    /// Grid electricity price before tax (₹/unit)
    pub base_electricity_rate: f64,
    /// Tax applied on top of the base rate
    pub tax_rate: f64,
    /// Yearly electricity price escalation used by the 20-year projection
    pub price_escalation_rate: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            panel_wattage: 525.0,
            cost_per_kw: 65_000.0,
            daily_gen_per_kw_hours: 4.2,
            base_electricity_rate: 6.2,
            tax_rate: 0.09,
            price_escalation_rate: 0.05,
        }
    }
}

impl TariffConfig {
    /// Grid price per unit including tax.
    pub fn total_rate(&self) -> f64 {
        self.base_electricity_rate * (1.0 + self.tax_rate)
    }

    /// Capacity of one panel in kW.
    pub fn panel_kw(&self) -> f64 {
        self.panel_wattage / 1000.0
    }
}

/// How the requested size is turned into a whole number of panels.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Never install less than requested.
    #[default]
    Ceil,
    /// Closest panel count, ties to the even count, at least one.
    Nearest,
}

/// Which quantity selects the subsidy slab.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubsidyTierPolicy {
    /// ≤2 panels, ≤4 panels, more.
    #[default]
    PanelCount,
    /// ≤1 kW, ≤2 kW, more.
    SystemSize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, ToSchema)]
#[serde(default)]
pub struct EstimatorPolicy {
    pub rounding: RoundingPolicy,
    pub subsidy_tiers: SubsidyTierPolicy,
    pub twenty_year_projection: bool,
}

impl Default for EstimatorPolicy {
    fn default() -> Self {
        Self {
            rounding: RoundingPolicy::default(),
            subsidy_tiers: SubsidyTierPolicy::default(),
            twenty_year_projection: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PresentationConfig {
    #[serde(default = "default_true")]
    pub payback_chart: bool,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self { payback_chart: true }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Like [`Config::load`], but a missing file yields the built-in defaults.
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path, "configuration file not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    fn parse(path: &str, content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }
}
