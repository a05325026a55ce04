//! Config validation — referential integrity for `SimConfig`.
//!
//! DESIGN
//! ======
//! The store accepts any config as-is; this module is the separable check a
//! producer runs before handing a config over. It verifies the three
//! cross-reference edges in the config graph:
//!
//! - `SimProcess.required_resources` → a `SimResource.name`
//! - `SimProcess.next_processes`     → a `SimProcess.name`
//! - `SimInsightRule.metric`         → a `SimMetric.name`
//!
//! A process routing to itself is a valid loop, not a violation. Duplicate
//! names are accepted by the store but make references ambiguous, so they
//! surface as warnings rather than violations.

use std::collections::HashSet;

use crate::event::ErrorCode;
use crate::model::SimConfig;

// =============================================================================
// TYPES
// =============================================================================

/// A dangling reference inside a [`SimConfig`]. Fatal: the config graph
/// points at an entity that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("process '{process}' requires unknown resource '{resource}'")]
    UnknownResource { process: String, resource: String },
    #[error("process '{process}' routes to unknown process '{target}'")]
    UnknownProcess { process: String, target: String },
    #[error("insight rule references unknown metric '{metric}'")]
    UnknownMetric { metric: String },
}

impl ErrorCode for Violation {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownResource { .. } => "E_UNKNOWN_RESOURCE",
            Self::UnknownProcess { .. } => "E_UNKNOWN_PROCESS",
            Self::UnknownMetric { .. } => "E_UNKNOWN_METRIC",
        }
    }
}

/// Allowed-but-discouraged shapes. Non-fatal; the config is still usable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
    #[error("duplicate resource name '{0}'")]
    DuplicateResourceName(String),
    #[error("duplicate process name '{0}'")]
    DuplicateProcessName(String),
    #[error("duplicate metric name '{0}'")]
    DuplicateMetricName(String),
}

/// Outcome of validating one config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub warnings: Vec<Warning>,
}

impl ValidationReport {
    /// True when the config has no dangling references. Warnings alone do
    /// not invalidate.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Convert into a `Result` for producers that propagate with `?`.
    /// The `Ok` side carries any non-fatal warnings.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfig`] when the report holds any violation.
    pub fn into_result(self) -> Result<Vec<Warning>, InvalidConfig> {
        if self.violations.is_empty() {
            Ok(self.warnings)
        } else {
            Err(InvalidConfig { violations: self.violations, warnings: self.warnings })
        }
    }
}

/// A config rejected for dangling references.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sim config: {} dangling reference(s)", violations.len())]
pub struct InvalidConfig {
    pub violations: Vec<Violation>,
    pub warnings: Vec<Warning>,
}

impl ErrorCode for InvalidConfig {
    fn error_code(&self) -> &'static str {
        "E_INVALID_CONFIG"
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Check every cross-reference in `config` and report what dangles.
#[must_use]
pub fn validate(config: &SimConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    let resources: HashSet<&str> = config.resources.iter().map(|r| r.name.as_str()).collect();
    let processes: HashSet<&str> = config.processes.iter().map(|p| p.name.as_str()).collect();
    let metrics: HashSet<&str> = config.target_metrics.iter().map(|m| m.name.as_str()).collect();

    for process in &config.processes {
        for resource in &process.required_resources {
            if !resources.contains(resource.as_str()) {
                report.violations.push(Violation::UnknownResource {
                    process: process.name.clone(),
                    resource: resource.clone(),
                });
            }
        }
        // A target equal to the process's own name is a self-loop, which the
        // name set already contains; only genuinely absent names dangle.
        for target in process.next_processes.iter().flatten() {
            if !processes.contains(target.as_str()) {
                report.violations.push(Violation::UnknownProcess {
                    process: process.name.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    for rule in &config.insight_rules {
        if !metrics.contains(rule.metric.as_str()) {
            report
                .violations
                .push(Violation::UnknownMetric { metric: rule.metric.clone() });
        }
    }

    push_duplicate_warnings(
        config.resources.iter().map(|r| r.name.as_str()),
        &mut report.warnings,
        Warning::DuplicateResourceName,
    );
    push_duplicate_warnings(
        config.processes.iter().map(|p| p.name.as_str()),
        &mut report.warnings,
        Warning::DuplicateProcessName,
    );
    push_duplicate_warnings(
        config.target_metrics.iter().map(|m| m.name.as_str()),
        &mut report.warnings,
        Warning::DuplicateMetricName,
    );

    report
}

/// Warn once per name that appears more than once.
fn push_duplicate_warnings<'a>(
    names: impl Iterator<Item = &'a str>,
    warnings: &mut Vec<Warning>,
    make: impl Fn(String) -> Warning,
) {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();
    for name in names {
        if !seen.insert(name) && reported.insert(name) {
            warnings.push(make(name.to_string()));
        }
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
