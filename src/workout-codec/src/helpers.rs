use crate::WorkoutError;

type Result<T> = std::result::Result<T, WorkoutError>;

/// Reads named values from the front of a positional sample.
///
/// Callers check the sample length up front, running out of values is
/// reported against the value that was asked for.
pub trait ValueReader {
    fn next_value(&mut self, name: &'static str) -> Result<f64>;

    /// Any finite number.
    fn read_f64(&mut self, name: &'static str) -> Result<f64> {
        let value = self.next_value(name)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(WorkoutError::InvalidParameter { name, value })
        }
    }

    /// Finite and `>= 0`.
    fn read_non_negative(&mut self, name: &'static str) -> Result<f64> {
        let value = self.read_f64(name)?;
        if value >= 0.0 {
            Ok(value)
        } else {
            Err(WorkoutError::InvalidParameter { name, value })
        }
    }

    /// Finite and `> 0`, for values the formulas divide by.
    fn read_positive(&mut self, name: &'static str) -> Result<f64> {
        let value = self.read_f64(name)?;
        if value > 0.0 {
            Ok(value)
        } else {
            Err(WorkoutError::InvalidParameter { name, value })
        }
    }

    /// Whole, non-negative number that fits in a `u32`.
    fn read_count(&mut self, name: &'static str) -> Result<u32> {
        let value = self.read_non_negative(name)?;
        if value.fract() == 0.0 && value <= f64::from(u32::MAX) {
            Ok(value as u32)
        } else {
            Err(WorkoutError::InvalidParameter { name, value })
        }
    }
}

impl ValueReader for &[f64] {
    fn next_value(&mut self, name: &'static str) -> Result<f64> {
        match self.split_first() {
            Some((first, rest)) => {
                *self = rest;
                Ok(*first)
            }
            None => Err(WorkoutError::InvalidParameter {
                name,
                value: f64::NAN,
            }),
        }
    }
}
