//! Audit thresholds configuration
//!
//! Thresholds for anomaly detection, approval backlog, budget concentration
//! and compliance scoring. The defaults reproduce the fixed heuristics of the
//! audit report; a TOML file can tune them.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a three-layer resolution:
//! 1. An explicit path (`--config` / `TALLY_CONFIG`)
//! 2. An override in the data dir (~/.local/share/tally/config/audit.toml)
//! 3. Embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/audit.toml");

/// Effective audit thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// An expense above `avg * medium_multiplier` is an anomaly
    pub anomaly_medium_multiplier: f64,
    /// An anomaly above `avg * high_multiplier` has "High" severity
    pub anomaly_high_multiplier: f64,
    /// Pending ratio above which a score penalty and recommendation apply
    pub pending_warning_ratio: f64,
    /// Pending ratio above which a further penalty applies and risk is High
    pub pending_critical_ratio: f64,
    /// Category share above which a budget review is recommended
    pub concentration_ratio: f64,
    pub anomaly_penalty: u32,
    pub pending_warning_penalty: u32,
    pub pending_critical_penalty: u32,
    /// Risk is High when the anomaly count exceeds this
    pub high_risk_anomaly_count: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            anomaly_medium_multiplier: 2.0,
            anomaly_high_multiplier: 3.0,
            pending_warning_ratio: 0.3,
            pending_critical_ratio: 0.5,
            concentration_ratio: 0.4,
            anomaly_penalty: 10,
            pending_warning_penalty: 20,
            pending_critical_penalty: 30,
            high_risk_anomaly_count: 2,
        }
    }
}

impl AuditConfig {
    /// Load configuration (explicit path, then data-dir override, then defaults)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => {
                info!(path = %path.display(), "Loading audit config");
                fs::read_to_string(path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?
            }
            None => match default_config_path() {
                Some(default_path) if default_path.exists() => {
                    info!(path = %default_path.display(), "Loading audit config override");
                    fs::read_to_string(&default_path).map_err(|e| {
                        Error::Config(format!("Failed to read config: {}", e))
                    })?
                }
                _ => DEFAULT_CONFIG.to_string(),
            },
        };

        Self::from_toml_str(&content)
    }

    /// Parse config from TOML content; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(anomaly) = raw.anomaly {
            if let Some(v) = anomaly.medium_multiplier {
                config.anomaly_medium_multiplier = v;
            }
            if let Some(v) = anomaly.high_multiplier {
                config.anomaly_high_multiplier = v;
            }
        }

        if let Some(approvals) = raw.approvals {
            if let Some(v) = approvals.pending_warning_ratio {
                config.pending_warning_ratio = v;
            }
            if let Some(v) = approvals.pending_critical_ratio {
                config.pending_critical_ratio = v;
            }
        }

        if let Some(v) = raw.budget.and_then(|b| b.concentration_ratio) {
            config.concentration_ratio = v;
        }

        if let Some(scoring) = raw.scoring {
            if let Some(v) = scoring.anomaly_penalty {
                config.anomaly_penalty = v;
            }
            if let Some(v) = scoring.pending_warning_penalty {
                config.pending_warning_penalty = v;
            }
            if let Some(v) = scoring.pending_critical_penalty {
                config.pending_critical_penalty = v;
            }
        }

        if let Some(v) = raw.risk.and_then(|r| r.high_anomaly_count) {
            config.high_risk_anomaly_count = v;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject thresholds that would make the heuristics meaningless
    pub fn validate(&self) -> Result<()> {
        if self.anomaly_medium_multiplier.is_nan() || self.anomaly_medium_multiplier <= 0.0 {
            return Err(Error::Config(
                "anomaly.medium_multiplier must be positive".into(),
            ));
        }
        if self.anomaly_high_multiplier < self.anomaly_medium_multiplier {
            return Err(Error::Config(
                "anomaly.high_multiplier must be >= anomaly.medium_multiplier".into(),
            ));
        }
        for (name, ratio) in [
            ("approvals.pending_warning_ratio", self.pending_warning_ratio),
            ("approvals.pending_critical_ratio", self.pending_critical_ratio),
            ("budget.concentration_ratio", self.concentration_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(Error::Config(format!("{} must be within [0, 1]", name)));
            }
        }
        if self.pending_critical_ratio < self.pending_warning_ratio {
            return Err(Error::Config(
                "approvals.pending_critical_ratio must be >= approvals.pending_warning_ratio"
                    .into(),
            ));
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("tally").join("config").join("audit.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    anomaly: Option<RawAnomaly>,
    approvals: Option<RawApprovals>,
    budget: Option<RawBudget>,
    scoring: Option<RawScoring>,
    risk: Option<RawRisk>,
}

#[derive(Debug, Deserialize)]
struct RawAnomaly {
    medium_multiplier: Option<f64>,
    high_multiplier: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawApprovals {
    pending_warning_ratio: Option<f64>,
    pending_critical_ratio: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawBudget {
    concentration_ratio: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawScoring {
    anomaly_penalty: Option<u32>,
    pending_warning_penalty: Option<u32>,
    pending_critical_penalty: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawRisk {
    high_anomaly_count: Option<usize>,
}
