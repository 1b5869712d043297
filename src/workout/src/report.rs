use std::io::Write;

use clap::ValueEnum;
use workout_codec::{SensorPackage, WorkoutError};
use workout_types::InfoMessage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human readable line per training
    #[default]
    Text,
    /// One JSON object per training
    Json,
}

pub fn process(package: &SensorPackage) -> Result<InfoMessage, WorkoutError> {
    let workout = package.read()?;
    Ok(workout.show_training_info())
}

pub fn render(info: &InfoMessage, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(info.get_message()),
        OutputFormat::Json => Ok(serde_json::to_string(info)?),
    }
}

/// Processes packages in order, writing each line as soon as it is rendered.
/// Stops at the first package that fails; lines already written stay written.
pub fn run(
    packages: &[SensorPackage],
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for package in packages {
        let info = process(package).inspect_err(|e| error!("{}: {}", package.code, e))?;
        writeln!(out, "{}", render(&info, format)?)?;
    }

    Ok(())
}
