use workout_types::ActivityCode;

use crate::{Training, TrainingBase};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub base: TrainingBase,
    /// Centimeters
    pub height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const CM_IN_M: f64 = 100.0;
    const KMH_IN_MSEC: f64 = 0.278;

    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            height,
        }
    }
}

impl Training for SportsWalking {
    const CODE: ActivityCode = ActivityCode::SportsWalking;

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let speed_ms = self.mean_speed_kmh() * Self::KMH_IN_MSEC;
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.base.weight
            + (speed_ms.powi(2) / (self.height / Self::CM_IN_M))
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.base.weight)
            * (self.base.duration * Self::MIN_IN_H)
    }
}
