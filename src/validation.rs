//! Configuration validation.
//!
//! Runs every rule against a [`RankConfig`] and collects all findings into
//! a [`ValidationReport`] — it never short-circuits on the first problem,
//! so callers see everything at once. Errors block solving via
//! [`rank_documents_with`](crate::rank_documents_with); warnings do not.

use std::fmt;

use serde::Serialize;

use crate::types::RankConfig;

// ─── Error codes ────────────────────────────────────────────────────────────

/// Stable machine-readable codes for configuration findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Damping factor outside the open interval (0, 1).
    DampingOutOfRange,
    /// Convergence threshold is zero, negative, or not finite.
    EpsilonNotPositive,
    /// Iteration cap of zero would skip the mandatory first sweep.
    ZeroIterationCap,
    /// Damping close enough to 1 that the default cap may stop the solver
    /// before convergence.
    SlowConvergenceRisk,
}

// ─── ConfigError ────────────────────────────────────────────────────────────

/// A single configuration finding: code, offending field, and message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigError {
    pub code: ErrorCode,
    /// The `RankConfig` field the finding is about.
    pub field: &'static str,
    pub message: String,
}

impl ConfigError {
    pub fn new(code: ErrorCode, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a finding blocks solving or merely flags a risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A finding together with its severity.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: ConfigError,
}

impl ValidationDiagnostic {
    pub fn error(err: ConfigError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: ConfigError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected findings from running every rule.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity findings.
    pub fn errors(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity findings.
    pub fn warnings(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Whether any finding has error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for d in &self.diagnostics {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            match d.severity {
                Severity::Error => write!(f, "error: {}", d.error)?,
                Severity::Warning => write!(f, "warning: {}", d.error)?,
            }
        }
        Ok(())
    }
}

// ─── Rules ──────────────────────────────────────────────────────────────────

/// Damping above this with the default cap is flagged as a convergence
/// risk: the contraction rate equals the damping factor, so 100 sweeps of
/// 0.995 leave the L1 delta far above the default threshold.
const SLOW_DAMPING_WARN: f64 = 0.99;

/// Validate a configuration, running every rule.
pub fn validate(config: &RankConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !config.damping.is_finite() || config.damping <= 0.0 || config.damping >= 1.0 {
        report
            .diagnostics
            .push(ValidationDiagnostic::error(ConfigError::new(
                ErrorCode::DampingOutOfRange,
                "damping",
                format!(
                    "damping factor must lie strictly between 0 and 1, got {}",
                    config.damping
                ),
            )));
    } else if config.damping > SLOW_DAMPING_WARN {
        report
            .diagnostics
            .push(ValidationDiagnostic::warning(ConfigError::new(
                ErrorCode::SlowConvergenceRisk,
                "damping",
                format!(
                    "damping of {} converges slowly and may hit the iteration cap",
                    config.damping
                ),
            )));
    }

    if !config.epsilon.is_finite() || config.epsilon <= 0.0 {
        report
            .diagnostics
            .push(ValidationDiagnostic::error(ConfigError::new(
                ErrorCode::EpsilonNotPositive,
                "epsilon",
                format!(
                    "convergence threshold must be positive and finite, got {}",
                    config.epsilon
                ),
            )));
    }

    if config.max_iterations == 0 {
        report
            .diagnostics
            .push(ValidationDiagnostic::error(ConfigError::new(
                ErrorCode::ZeroIterationCap,
                "max_iterations",
                "iteration cap must allow at least one sweep",
            )));
    }

    report
}

// ─── InvalidConfig ──────────────────────────────────────────────────────────

/// Returned by solving entry points when validation found errors.
///
/// Carries the full report, so every finding (including warnings) reaches
/// the caller in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct InvalidConfig {
    pub report: ValidationReport,
}

impl fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid rank configuration: {}", self.report)
    }
}

impl std::error::Error for InvalidConfig {}
