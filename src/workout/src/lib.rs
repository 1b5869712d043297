#[macro_use]
extern crate log;

pub mod packages;
pub use packages::default_packages;

pub mod report;
pub use report::{OutputFormat, process, render, run};

pub use workout_codec::{SensorPackage, WorkoutError, read_package};
