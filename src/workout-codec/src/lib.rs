#[macro_use]
extern crate log;

#[macro_use]
extern crate serde;

mod error;
pub use error::WorkoutError;

mod helpers;
pub use helpers::ValueReader;

mod package;
pub use package::{SensorPackage, read_package};
