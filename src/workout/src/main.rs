#[macro_use]
extern crate log;

use clap::{Parser, Subcommand};
use workout::{OutputFormat, SensorPackage, default_packages, run};

#[derive(Parser)]
pub struct WorkoutCli {
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub subcommand: Option<WorkoutCommand>,
}

#[derive(Subcommand)]
pub enum WorkoutCommand {
    ///
    /// Print summaries for the built-in sensor packages
    ///
    Demo,
    ///
    /// Read a single sensor package, e.g. `read RUN 15000 1 75`
    ///
    Read {
        /// RUN, WLK or SWM
        code: String,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = WorkoutCli::parse();
    let packages = match cli.subcommand.unwrap_or(WorkoutCommand::Demo) {
        WorkoutCommand::Demo => default_packages(),
        WorkoutCommand::Read { code, values } => vec![SensorPackage::new(code, values)],
    };

    debug!("Processing {} package(s)", packages.len());
    run(&packages, cli.format, &mut std::io::stdout().lock())
}
