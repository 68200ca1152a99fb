use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("No such workout type: {0}")]
    UnknownWorkoutCode(String),

    #[error("Workout {code} takes {expected} arguments, got {actual}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid value for {field}: {value} is not a non-negative whole number")]
    InvalidArgument { field: &'static str, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WorkoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_message() {
        let err = WorkoutError::UnknownWorkoutCode("XYZ".into());
        assert_eq!(err.to_string(), "No such workout type: XYZ");
    }

    #[test]
    fn test_arity_message() {
        let err = WorkoutError::ArityMismatch {
            code: "WLK",
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Workout WLK takes 4 arguments, got 3");
    }
}
