use clap::{Parser, Subcommand};

use dayahead::{
    config::{DayType, Season, Weather},
    runner::Mode,
};

#[derive(Parser)]
#[command(author, version, about, long_about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a single 24-hour simulation under one engine.
    Simulate(SimulateArgs),

    /// Run both engines and report the delta.
    Compare(SimulateArgs),
}

#[derive(Parser)]
pub struct SimulateArgs {
    #[clap(long, value_enum, default_value = "summer", env = "SEASON")]
    pub season: Season,

    #[clap(long, value_enum, default_value = "sunny", env = "WEATHER")]
    pub weather: Weather,

    #[clap(long = "day-type", value_enum, default_value = "weekday", env = "DAY_TYPE")]
    pub day_type: DayType,

    /// Tomorrow's weather. Fed into `RuleEngine::should_conserve` after the
    /// run to warn on hours where the rule engine would have held back
    /// discharge ahead of a cloudy or rainy day.
    #[clap(long = "tomorrow-weather", value_enum, env = "TOMORROW_WEATHER")]
    pub tomorrow_weather: Option<Weather>,

    #[clap(long, default_value = "42", env = "SEED")]
    pub seed: u64,

    #[clap(long, value_enum, default_value = "rule", env = "MODE")]
    pub mode: Mode,

    #[clap(long = "initial-soc", default_value = "0.50", env = "INITIAL_SOC")]
    pub initial_soc: f64,

    /// Emit the result as JSON instead of a table.
    #[clap(long, env = "JSON")]
    pub json: bool,
}
