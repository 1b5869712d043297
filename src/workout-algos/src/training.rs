use workout_types::{ActivityCode, InfoMessage};

/// Inputs every training shares: steps or strokes, hours spent and body weight in kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
}

impl TrainingBase {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Per activity capability table.
///
/// `distance_km` and `mean_speed_kmh` have step based defaults, each variant
/// picks which ones to override. `spent_calories` has no default, so every
/// activity must supply its own formula.
///
/// Inputs are not validated here: zero duration yields `inf`/`NaN`.
pub trait Training {
    const CODE: ActivityCode;

    /// Meters covered by a single step or stroke.
    const LEN_STEP: f64 = 0.65;

    const M_IN_KM: f64 = 1000.0;
    const MIN_IN_H: f64 = 60.0;

    fn base(&self) -> &TrainingBase;

    fn distance_km(&self) -> f64 {
        f64::from(self.base().action) * Self::LEN_STEP / Self::M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration
    }

    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: Self::CODE.name().to_owned(),
            duration: self.base().duration,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}
