use serde::{Deserialize, Serialize};

/// Kilometre-equivalent length of one step on land.
pub const LEN_STEP: f64 = 0.65;
/// Length of one swimming stroke.
pub const LEN_STROKE: f64 = 1.38;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

/// Three-letter workout selector carried by every sensor package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutCode {
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
    #[serde(rename = "SWM")]
    Swimming,
}

impl WorkoutCode {
    pub const ALL: [WorkoutCode; 3] = [
        WorkoutCode::Swimming,
        WorkoutCode::Running,
        WorkoutCode::SportsWalking,
    ];

    /// Returns the wire code ("RUN", "WLK", "SWM").
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Running => "RUN",
            WorkoutCode::SportsWalking => "WLK",
            WorkoutCode::Swimming => "SWM",
        }
    }

    /// Training type label shown in the summary line.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutCode::Running => "Running",
            WorkoutCode::SportsWalking => "SportsWalking",
            WorkoutCode::Swimming => "Swimming",
        }
    }

    /// Number of positional sensor arguments the workout is built from.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutCode::Running => 3,
            WorkoutCode::SportsWalking => 4,
            WorkoutCode::Swimming => 5,
        }
    }
}

/// A run: steps, hours, kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
}

impl Running {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Race-walking. `height` is in centimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
    pub height: u32,
}

impl SportsWalking {
    pub fn new(action: u32, duration: f64, weight: f64, height: u32) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }
}

/// Pool swimming. `action` counts strokes, `length_pool` is in metres and
/// `count_pool` is the number of laps swum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
    pub length_pool: u32,
    pub count_pool: u32,
}

impl Swimming {
    pub fn new(action: u32, duration: f64, weight: f64, length_pool: u32, count_pool: u32) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }
}

/// One workout record, immutable once built from a sensor package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn code(&self) -> WorkoutCode {
        match self {
            Workout::Running(_) => WorkoutCode::Running,
            Workout::SportsWalking(_) => WorkoutCode::SportsWalking,
            Workout::Swimming(_) => WorkoutCode::Swimming,
        }
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Workout::Running(value)
    }
}

impl From<SportsWalking> for Workout {
    fn from(value: SportsWalking) -> Self {
        Workout::SportsWalking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Workout::Swimming(value)
    }
}
