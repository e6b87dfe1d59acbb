mod cli;
mod prelude;
mod render;

use clap::Parser;
use dayahead::{
    battery::BatteryState,
    comparator,
    config::{Config, Weather},
    environment::EnvironmentConfig,
    forecast::NullForecastProvider,
    milp_engine::MilpEngine,
    report::SimulationResult,
    rule_engine::RuleEngine,
    runner::SimulationRunner,
};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command, SimulateArgs},
    prelude::*,
    render::{render_comparison, render_result},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .without_time()
        .compact()
        .init();

    let args = Args::parse();

    match args.command {
        Command::Simulate(simulate_args) => simulate(&simulate_args)?,
        Command::Compare(simulate_args) => compare(&simulate_args)?,
    }

    Ok(())
}

fn env_config(args: &SimulateArgs) -> EnvironmentConfig {
    EnvironmentConfig::builder().season(args.season).weather(args.weather).day_type(args.day_type).build()
}

/// Replay `should_conserve` against each hour's outcome and warn on the
/// hours where the rule engine would have held back discharge in
/// anticipation of a weak solar day tomorrow.
fn warn_on_conservation_hours(config: &Config, result: &SimulationResult, tomorrow_weather: Option<Weather>) {
    let tomorrow_cloudy = matches!(tomorrow_weather, Some(Weather::Cloudy | Weather::Rainy));
    for report in &result.hourly {
        let battery = BatteryState {
            charge_kwh: report.battery_level_kwh,
            capacity_kwh: config.capacity,
            soc: report.battery_soc,
        };
        if RuleEngine::should_conserve(report.hour, &battery, tomorrow_cloudy) {
            warn!(hour = report.hour, soc = battery.soc, tomorrow_cloudy, "should conserve battery this hour");
        }
    }
}

fn simulate(args: &SimulateArgs) -> Result {
    let config = Config::default();
    let provider = NullForecastProvider;
    let mut runner = SimulationRunner::new(config, args.initial_soc).context("invalid simulation config")?;

    let result = runner
        .run(env_config(args), &provider, args.seed, args.mode, MilpEngine::default())
        .context("simulation failed")?;

    warn_on_conservation_hours(&config, &result, args.tomorrow_weather);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.clone().rounded())?);
    } else {
        println!("{}", render_result(&result));
        info!(total_cost = result.total_cost.0, total_savings = result.total_savings.0, "simulation complete");
    }

    Ok(())
}

fn compare(args: &SimulateArgs) -> Result {
    let config = Config::default();
    let provider = NullForecastProvider;

    let comparison =
        comparator::compare(config, env_config(args), &provider, args.seed, args.initial_soc, MilpEngine::default())
            .context("comparison failed")?;

    warn_on_conservation_hours(&config, &comparison.rule_result, args.tomorrow_weather);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison.clone().rounded())?);
    } else {
        println!("{}", render_comparison(&comparison));
    }

    Ok(())
}
