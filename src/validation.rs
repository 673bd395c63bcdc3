//! Input validation for simulation requests.
//!
//! Checks every domain constraint before the engine runs. Detects:
//! - Empty process sets
//! - Negative arrival times
//! - Non-positive burst times
//! - Negative priorities
//! - Missing or non-positive Round Robin quantum
//!
//! Validation is exhaustive: all violations are reported at once, and
//! the engine performs no simulation work for an invalid request.

use std::fmt;

use crate::engine::SimulationRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The request contains no processes.
    EmptyProcessSet,
    /// A process has a negative arrival time.
    InvalidArrival,
    /// A process has a burst time below 1.
    InvalidBurst,
    /// A process has a negative priority.
    InvalidPriority,
    /// Round Robin was selected without a quantum of at least 1.
    InvalidQuantum,
    /// A policy name could not be recognized.
    UnknownPolicy,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a simulation request.
///
/// Checks:
/// 1. At least one process is present
/// 2. Every arrival time is non-negative
/// 3. Every burst time is at least 1
/// 4. Every priority is non-negative
/// 5. A quantum ≥ 1 is present when the policy requires one
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &SimulationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "At least one process is required",
        ));
    }

    for (i, p) in request.processes.iter().enumerate() {
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!("Process {i} has negative arrival time {}", p.arrival),
            ));
        }
        if p.burst < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process {i} has burst time {} (minimum 1)", p.burst),
            ));
        }
        if p.priority < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPriority,
                format!("Process {i} has negative priority {}", p.priority),
            ));
        }
    }

    if request.policy.requires_quantum() {
        match request.quantum {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("{} requires a quantum", request.policy.name()),
            )),
            Some(q) if q < 1 => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Quantum {q} is below the minimum of 1"),
            )),
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
