use std::fmt::Display;

/// Summary of a finished training, ready to be printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// Kilometers per hour
    pub speed: f64,
    /// Kilocalories
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl Display for InfoMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        ))
    }
}
