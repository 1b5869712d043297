use workout_types::ActivityCode;

use crate::{Training, TrainingBase};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub base: TrainingBase,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    const CODE: ActivityCode = ActivityCode::Running;

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight
            / Self::M_IN_KM
            * self.base.duration
            * Self::MIN_IN_H
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_and_speed() {
        let run = Running::new(15000, 1.0, 75.0);
        assert!((run.distance_km() - 9.75).abs() < 1e-12);
        assert!((run.mean_speed_kmh() - 9.75).abs() < 1e-12);
    }

    #[test]
    fn calories() {
        // (18 x 9.75 + 1.79) x 75 / 1000 x 1 x 60
        let run = Running::new(15000, 1.0, 75.0);
        assert!((run.spent_calories() - 797.805).abs() < 1e-9);
    }

    #[test]
    fn half_hour_doubles_speed() {
        let run = Running::new(15000, 0.5, 75.0);
        assert!((run.mean_speed_kmh() - 19.5).abs() < 1e-12);
        // (18 x 19.5 + 1.79) x 75 / 1000 x 0.5 x 60
        assert!((run.spent_calories() - 793.7775).abs() < 1e-9);
    }

    #[test]
    fn summary_line() {
        let run = Running::new(15000, 1.0, 75.0);
        assert_eq!(
            run.show_training_info().get_message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
        );
    }
}
