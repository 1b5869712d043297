use workout_algos::{Running, SportsWalking, Swimming, Workout};
use workout_types::ActivityCode;

use crate::{ValueReader, WorkoutError};

/// Raw reading as it arrives from the sensors: an activity code and its
/// positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub code: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    pub fn read(&self) -> Result<Workout, WorkoutError> {
        read_package(&self.code, &self.data)
    }
}

/// Builds the workout described by `code` from its positional values.
///
/// Layouts:
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, length_pool, count_pool
///
/// The code and the sample length are checked before any value is read.
/// Inputs are range checked as they are read, and the derived distance,
/// speed and calories must come out finite (a subnormal duration or a huge
/// weight passes the range checks but overflows the formulas).
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let activity: ActivityCode = code.parse()?;

    let expected = activity.arity();
    if data.len() != expected {
        return Err(WorkoutError::InvalidArity {
            code: activity,
            expected,
            actual: data.len(),
        });
    }

    let mut buf = data;
    let action = buf.read_count("action")?;
    let duration = buf.read_positive("duration")?;
    let weight = buf.read_non_negative("weight")?;

    let workout: Workout = match activity {
        ActivityCode::Running => Running::new(action, duration, weight).into(),
        ActivityCode::SportsWalking => {
            let height = buf.read_positive("height")?;
            SportsWalking::new(action, duration, weight, height).into()
        }
        ActivityCode::Swimming => {
            let length_pool = buf.read_non_negative("length_pool")?;
            let count_pool = buf.read_count("count_pool")?;
            Swimming::new(action, duration, weight, length_pool, count_pool).into()
        }
    };

    check_finite(&workout)?;

    debug!("Read {} package: {:?}", activity, workout);
    Ok(workout)
}

fn check_finite(workout: &Workout) -> Result<(), WorkoutError> {
    let derived = [
        ("distance", workout.distance_km()),
        ("speed", workout.mean_speed_kmh()),
        ("calories", workout.spent_calories()),
    ];

    match derived.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((name, value)) => Err(WorkoutError::InvalidParameter { name, value }),
        None => Ok(()),
    }
}
