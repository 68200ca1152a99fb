//! Maps a workout code and its positional sensor arguments to a record.

use std::str::FromStr;

use tracing::debug;

use crate::errors::{Result, WorkoutError};
use crate::models::{Running, SportsWalking, Swimming, Workout, WorkoutCode};

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SWM" => Ok(WorkoutCode::Swimming),
            "RUN" => Ok(WorkoutCode::Running),
            "WLK" => Ok(WorkoutCode::SportsWalking),
            other => Err(WorkoutError::UnknownWorkoutCode(other.to_string())),
        }
    }
}

/// Builds the workout record selected by `code` from `args`.
///
/// Argument order per code:
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, length_pool, count_pool
pub fn read_package(code: &str, args: &[f64]) -> Result<Workout> {
    let code: WorkoutCode = code.parse()?;
    if args.len() != code.arity() {
        return Err(WorkoutError::ArityMismatch {
            code: code.as_str(),
            expected: code.arity(),
            actual: args.len(),
        });
    }

    let action = whole_number("action", args[0])?;
    let (duration, weight) = (args[1], args[2]);

    let workout = match code {
        WorkoutCode::Running => Running::new(action, duration, weight).into(),
        WorkoutCode::SportsWalking => {
            let height = whole_number("height", args[3])?;
            SportsWalking::new(action, duration, weight, height).into()
        }
        WorkoutCode::Swimming => {
            let length_pool = whole_number("length_pool", args[3])?;
            let count_pool = whole_number("count_pool", args[4])?;
            Swimming::new(action, duration, weight, length_pool, count_pool).into()
        }
    };

    debug!(code = code.as_str(), ?workout, "Built workout record");
    Ok(workout)
}

fn whole_number(field: &'static str, value: f64) -> Result<u32> {
    if value.is_finite() && value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidArgument { field, value })
    }
}
