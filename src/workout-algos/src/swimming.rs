use workout_types::ActivityCode;

use crate::{Training, TrainingBase};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub base: TrainingBase,
    /// Meters
    pub length_pool: f64,
    pub count_pool: u32,
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    const CODE: ActivityCode = ActivityCode::Swimming;
    const LEN_STEP: f64 = 1.38;

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// Speed comes from pool laps, not strokes. `distance_km` keeps the
    /// stroke based default and is what the summary reports.
    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / Self::M_IN_KM / self.base.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight
            * self.base.duration
    }
}
