use workout_types::{ActivityCode, InfoMessage};

use crate::{Running, SportsWalking, Swimming, Training};

/// A single training of any supported kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

macro_rules! dispatch {
    ($self:ident, $t:ident => $body:expr) => {
        match $self {
            Workout::Running($t) => $body,
            Workout::SportsWalking($t) => $body,
            Workout::Swimming($t) => $body,
        }
    };
}

impl Workout {
    pub fn code(&self) -> ActivityCode {
        match self {
            Workout::Running(_) => Running::CODE,
            Workout::SportsWalking(_) => SportsWalking::CODE,
            Workout::Swimming(_) => Swimming::CODE,
        }
    }

    pub fn distance_km(&self) -> f64 {
        dispatch!(self, t => t.distance_km())
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        dispatch!(self, t => t.mean_speed_kmh())
    }

    pub fn spent_calories(&self) -> f64 {
        dispatch!(self, t => t.spent_calories())
    }

    pub fn show_training_info(&self) -> InfoMessage {
        dispatch!(self, t => t.show_training_info())
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Self::Running(value)
    }
}

impl From<SportsWalking> for Workout {
    fn from(value: SportsWalking) -> Self {
        Self::SportsWalking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Self::Swimming(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_workouts(size: usize) -> Vec<Workout> {
        let mut rng = rand::rng();

        (0..size)
            .map(|i| {
                let action = rng.random_range(0..=40_000);
                let duration = rng.random_range(0.05..=6.0);
                let weight = rng.random_range(30.0..=150.0);
                match i % 3 {
                    0 => Running::new(action, duration, weight).into(),
                    1 => {
                        let height = rng.random_range(120.0..=220.0);
                        SportsWalking::new(action, duration, weight, height).into()
                    }
                    _ => {
                        let length_pool = rng.random_range(10.0..=50.0);
                        let count_pool = rng.random_range(0..=200);
                        Swimming::new(action, duration, weight, length_pool, count_pool).into()
                    }
                }
            })
            .collect()
    }

    #[test]
    fn code_follows_variant() {
        assert_eq!(
            Workout::from(Running::new(1, 1.0, 1.0)).code(),
            ActivityCode::Running
        );
        assert_eq!(
            Workout::from(SportsWalking::new(1, 1.0, 1.0, 1.0)).code(),
            ActivityCode::SportsWalking
        );
        assert_eq!(
            Workout::from(Swimming::new(1, 1.0, 1.0, 1.0, 1)).code(),
            ActivityCode::Swimming
        );
    }

    #[test]
    fn forwards_to_variant_formulas() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40);
        let workout = Workout::from(swim);
        assert_eq!(workout.distance_km(), swim.distance_km());
        assert_eq!(workout.mean_speed_kmh(), swim.mean_speed_kmh());
        assert_eq!(workout.spent_calories(), swim.spent_calories());
        assert_eq!(workout.show_training_info(), swim.show_training_info());
    }

    #[test]
    fn repeated_computation_is_stable() {
        for workout in random_workouts(300) {
            let first = workout.show_training_info();
            let second = workout.show_training_info();
            assert_eq!(first, second);
            assert_eq!(workout.distance_km(), first.distance);
            assert_eq!(workout.mean_speed_kmh(), first.speed);
            assert_eq!(workout.spent_calories(), first.calories);
        }
    }

    #[test]
    fn message_always_has_three_decimals() {
        for workout in random_workouts(300) {
            let message = workout.show_training_info().get_message();
            let numbers = message
                .split(|c: char| !(c.is_ascii_digit() || c == '.'))
                .filter(|s| s.chars().any(|c| c.is_ascii_digit()))
                .collect::<Vec<_>>();

            assert_eq!(numbers.len(), 4, "unexpected message: {}", message);
            for number in numbers {
                let number = number.trim_end_matches('.');
                let (_, fraction) = number.split_once('.').unwrap();
                assert_eq!(fraction.len(), 3, "bad precision in {}", message);
            }
        }
    }

    #[test]
    fn calories_are_non_negative_for_sane_inputs() {
        for workout in random_workouts(300) {
            let calories = workout.spent_calories();
            assert!(calories.is_finite() && calories >= 0.0, "got {}", calories);
        }
    }
}
