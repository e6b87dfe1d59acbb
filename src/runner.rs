//! Orchestrates one 24-hour simulation: generates the environment, steps
//! the battery through whichever engine was chosen, and emits a report.

use tracing::info;

use crate::{
    action::Action,
    battery::Battery,
    config::Config,
    environment::{EnvironmentConfig, EnvironmentGenerator, EnvironmentState},
    error::EngineError,
    forecast::ForecastProvider,
    milp_engine::MilpEngine,
    quantity::{Quantity, cost::Cost, energy::KilowattHours},
    report::{HourlyReport, SimulationResult},
    rule_engine::RuleEngine,
};

/// Which decision engine drives a run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Rule,
    Milp,
}

/// Owns a battery for the duration of one `run()` call.
pub struct SimulationRunner {
    config: Config,
    battery: Battery,
}

impl SimulationRunner {
    /// # Errors
    ///
    /// Fails if `config` or `initial_soc` is invalid.
    pub fn new(config: Config, initial_soc: f64) -> Result<Self, EngineError> {
        let battery = Battery::new(config, initial_soc)?;
        Ok(Self { config, battery })
    }

    /// Run a full 24-hour simulation under `mode`.
    ///
    /// # Errors
    ///
    /// Propagates `EngineError::SolverFailure` from the MILP engine.
    pub fn run(
        &mut self,
        env_config: EnvironmentConfig,
        forecast: &dyn ForecastProvider,
        seed: u64,
        mode: Mode,
        milp: MilpEngine,
    ) -> Result<SimulationResult, EngineError> {
        let mut generator = EnvironmentGenerator::new(self.config, env_config, forecast, seed);
        let envs = generator.generate_24h();

        let planned_actions = match mode {
            Mode::Rule => None,
            Mode::Milp => {
                let solution = milp.optimize(&self.config, &envs, &self.battery.state())?;
                if solution.suboptimal {
                    info!("MILP solver returned a suboptimal incumbent");
                }
                Some(solution.actions)
            }
        };

        let rule_engine = RuleEngine;
        let mut hourly = Vec::with_capacity(24);
        for (t, env) in envs.iter().enumerate() {
            let action = match planned_actions {
                Some(actions) => actions[t],
                None => rule_engine.decide(&self.config, env, &self.battery.state()),
            };
            hourly.push(self.step(env, action));
        }

        Ok(SimulationResult::from_hourly(hourly, seed))
    }

    /// Apply one action to the live battery and build its hourly report.
    /// This is the single source of truth for grid flows and cost — the
    /// decision engines only choose actions, they never compute energy
    /// balance themselves.
    fn step(&mut self, env: &EnvironmentState, action: Action) -> HourlyReport {
        let (grid_import, grid_export) = Self::apply_action(&mut self.battery, action, env);
        let state = self.battery.state();

        let baseline_cost: Cost = Quantity((env.load_kwh.0 - env.solar_kwh.0).max(0.0) * env.price.0);
        let cost = grid_import * env.price - grid_export * self.config.export_price;
        let savings = baseline_cost - cost;

        HourlyReport {
            hour: env.hour,
            solar_kwh: env.solar_kwh,
            load_kwh: env.load_kwh,
            battery_level_kwh: state.charge_kwh,
            battery_soc: state.soc,
            grid_import_kwh: grid_import,
            grid_export_kwh: grid_export,
            net_energy: env.net_energy(),
            action,
            price: env.price,
            cost,
            savings,
        }
    }

    /// The apply mapping: action + net energy for the hour → grid flows,
    /// with the battery call embedded in the charge/discharge arms.
    ///
    /// The rule engine never emits a "wrong-sign" combination, but MILP may
    /// (e.g. `ChargeBattery` during a deficit hour); this table makes such
    /// combinations a no-op rather than a panic, and any uncovered deficit
    /// surfaces as an energy-balance discrepancy for callers to catch.
    fn apply_action(battery: &mut Battery, action: Action, env: &EnvironmentState) -> (KilowattHours, KilowattHours) {
        let net = env.net_energy();
        match action {
            Action::ChargeBattery => {
                if net.is_positive() {
                    battery.charge(net);
                }
                (KilowattHours::ZERO, KilowattHours::ZERO)
            }
            Action::DischargeBattery => {
                if net.is_negative() {
                    let (_drawn, delivered) = battery.discharge(net.abs());
                    (net.abs() - delivered, KilowattHours::ZERO)
                } else {
                    (KilowattHours::ZERO, KilowattHours::ZERO)
                }
            }
            Action::SellToGrid => {
                if net.is_positive() { (KilowattHours::ZERO, net) } else { (KilowattHours::ZERO, KilowattHours::ZERO) }
            }
            Action::UseGrid => {
                if net.is_negative() { (net.abs(), KilowattHours::ZERO) } else { (KilowattHours::ZERO, KilowattHours::ZERO) }
            }
            Action::Idle => (KilowattHours::ZERO, KilowattHours::ZERO),
        }
    }

    /// No-battery, no-export cost: every hour's unmet load is imported.
    #[must_use]
    pub fn baseline_cost(envs: &[EnvironmentState; 24]) -> Cost {
        envs.iter().map(|env| Quantity((env.load_kwh.0 - env.solar_kwh.0).max(0.0) * env.price.0)).sum()
    }
}
