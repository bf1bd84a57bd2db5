//! Progress calculations -- current speed and required-to-finish speed.
//!
//! Both functions are pure and total over f64 inputs. Out-of-range
//! combinations are rejected upstream by validation; the only guards here
//! are the division-by-zero cases, which return 0 rather than erroring.

use crate::store::RunnerRecord;
use crate::validate::Submission;

/// Speed unit appended to every formatted speed.
pub const SPEED_UNIT: &str = "km/h";

/// Current speed in km/h: distance covered divided by elapsed time.
/// Returns 0 when no time has elapsed.
pub fn current_speed(distance_covered: f64, elapsed_time: f64) -> f64 {
    if elapsed_time <= 0.0 {
        return 0.0;
    }
    distance_covered / elapsed_time
}

/// Speed required to cover the remaining distance within the remaining
/// time. Returns 0 when no time remains.
pub fn required_speed(
    total_distance: f64,
    distance_covered: f64,
    target_time: f64,
    elapsed_time: f64,
) -> f64 {
    let remaining_distance = total_distance - distance_covered;
    let remaining_time = target_time - elapsed_time;
    if remaining_time <= 0.0 {
        return 0.0;
    }
    remaining_distance / remaining_time
}

/// Render a speed with two decimal places and the unit suffix.
pub fn format_speed(speed: f64) -> String {
    format!("{:.2} {}", speed, SPEED_UNIT)
}

/// Build a full record from a validated submission, computing both
/// derived speeds.
pub fn build_record(s: Submission) -> RunnerRecord {
    let current = current_speed(s.distance_covered, s.elapsed_time);
    let required = required_speed(
        s.total_distance,
        s.distance_covered,
        s.target_time,
        s.elapsed_time,
    );

    RunnerRecord {
        runner_name: s.runner_name,
        total_distance: s.total_distance,
        distance_covered: s.distance_covered,
        elapsed_time: s.elapsed_time,
        target_time: s.target_time,
        current_speed: current,
        required_speed: required,
    }
}
