//! Submission validation -- parse the raw form fields, then range-check.
//!
//! Two phases, short-circuiting on the first failure: every numeric field
//! goes through one explicit parse-or-reject step (malformed text is a
//! distinct rejection, never a silent zero), then the range checks run in
//! fixed order. A rejection leaves the store untouched.

use serde::Deserialize;
use thiserror::Error;

/// Raw POST body for the tracker form. All fields arrive as text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubmission {
    #[serde(default)]
    pub runner_name: String,
    #[serde(default)]
    pub total_distance: String,
    #[serde(default)]
    pub distance_covered: String,
    #[serde(default)]
    pub elapsed_time: String,
    #[serde(default)]
    pub target_time: String,
}

/// A submission that passed validation. Values go to the calculator and
/// the store unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub runner_name: String,
    pub total_distance: f64,
    pub distance_covered: f64,
    pub elapsed_time: f64,
    pub target_time: f64,
}

/// The user-facing rejection reasons. `Display` output is shown verbatim
/// above the form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields correctly.")]
    MissingField,

    #[error("Please enter valid decimal numbers.")]
    MalformedNumber,

    #[error("Distance covered cannot exceed total distance.")]
    CoveredExceedsTotal,

    #[error("Elapsed time cannot exceed target time.")]
    ElapsedExceedsTarget,
}

/// Parse one numeric field. Empty counts as missing; non-empty text that
/// is not a decimal number is a malformed-number rejection.
fn parse_field(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField);
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::MalformedNumber)?;
    // f64::from_str accepts "inf" and "NaN"; neither is a usable entry.
    if !value.is_finite() {
        return Err(ValidationError::MalformedNumber);
    }
    Ok(value)
}

/// Validate a raw form submission. Returns the parsed values on accept,
/// or the first failing check's rejection.
pub fn validate(raw: &RawSubmission) -> Result<Submission, ValidationError> {
    let runner_name = raw.runner_name.trim().to_string();

    let total_distance = parse_field(&raw.total_distance)?;
    let distance_covered = parse_field(&raw.distance_covered)?;
    let elapsed_time = parse_field(&raw.elapsed_time)?;
    let target_time = parse_field(&raw.target_time)?;

    if runner_name.is_empty()
        || total_distance <= 0.0
        || distance_covered < 0.0
        || elapsed_time < 0.0
        || target_time <= 0.0
    {
        return Err(ValidationError::MissingField);
    }
    if distance_covered > total_distance {
        return Err(ValidationError::CoveredExceedsTotal);
    }
    if elapsed_time > target_time {
        return Err(ValidationError::ElapsedExceedsTarget);
    }

    Ok(Submission {
        runner_name,
        total_distance,
        distance_covered,
        elapsed_time,
        target_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, total: &str, covered: &str, elapsed: &str, target: &str) -> RawSubmission {
        RawSubmission {
            runner_name: name.to_string(),
            total_distance: total.to_string(),
            distance_covered: covered.to_string(),
            elapsed_time: elapsed.to_string(),
            target_time: target.to_string(),
        }
    }

    #[test]
    fn test_accepts_valid_submission() {
        let s = validate(&raw("Alice", "42.2", "21.1", "2.0", "4.0")).unwrap();
        assert_eq!(s.runner_name, "Alice");
        assert!((s.total_distance - 42.2).abs() < 1e-9);
        assert!((s.distance_covered - 21.1).abs() < 1e-9);
    }

    #[test]
    fn test_trims_runner_name() {
        let s = validate(&raw("  Alice  ", "42.2", "21.1", "2.0", "4.0")).unwrap();
        assert_eq!(s.runner_name, "Alice");
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = validate(&raw("", "5", "1", "1", "2")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField);
        assert_eq!(err.to_string(), "Please fill all fields correctly.");
    }

    #[test]
    fn test_rejects_whitespace_only_name() {
        let err = validate(&raw("   ", "5", "1", "1", "2")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField);
    }

    #[test]
    fn test_rejects_nonpositive_totals() {
        assert_eq!(
            validate(&raw("Bob", "0", "0", "1", "2")).unwrap_err(),
            ValidationError::MissingField
        );
        assert_eq!(
            validate(&raw("Bob", "10", "1", "1", "0")).unwrap_err(),
            ValidationError::MissingField
        );
        assert_eq!(
            validate(&raw("Bob", "10", "-1", "1", "2")).unwrap_err(),
            ValidationError::MissingField
        );
        assert_eq!(
            validate(&raw("Bob", "10", "1", "-1", "2")).unwrap_err(),
            ValidationError::MissingField
        );
    }

    #[test]
    fn test_rejects_covered_exceeding_total() {
        let err = validate(&raw("Bob", "10", "15", "1", "2")).unwrap_err();
        assert_eq!(err, ValidationError::CoveredExceedsTotal);
        assert_eq!(
            err.to_string(),
            "Distance covered cannot exceed total distance."
        );
    }

    #[test]
    fn test_rejects_elapsed_exceeding_target() {
        let err = validate(&raw("Cara", "10", "5", "3", "2")).unwrap_err();
        assert_eq!(err, ValidationError::ElapsedExceedsTarget);
        assert_eq!(err.to_string(), "Elapsed time cannot exceed target time.");
    }

    #[test]
    fn test_rejects_malformed_decimal() {
        let err = validate(&raw("Bob", "ten", "1", "1", "2")).unwrap_err();
        assert_eq!(err, ValidationError::MalformedNumber);
    }

    #[test]
    fn test_rejects_non_finite_numbers() {
        assert_eq!(
            validate(&raw("Bob", "inf", "1", "1", "2")).unwrap_err(),
            ValidationError::MalformedNumber
        );
        assert_eq!(
            validate(&raw("Bob", "10", "NaN", "1", "2")).unwrap_err(),
            ValidationError::MalformedNumber
        );
    }

    #[test]
    fn test_empty_numeric_field_is_missing_not_malformed() {
        let err = validate(&raw("Bob", "", "1", "1", "2")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField);
    }

    #[test]
    fn test_boundary_values_accepted() {
        // covered == total and elapsed == target are both legal
        let s = validate(&raw("Dee", "10", "10", "2", "2")).unwrap();
        assert!((s.distance_covered - s.total_distance).abs() < 1e-9);
        assert!((s.elapsed_time - s.target_time).abs() < 1e-9);
    }
}
