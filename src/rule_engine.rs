//! Greedy per-hour rule engine.
//!
//! Stateless by construction — a unit struct with an inherent method rather
//! than a trait object, since the policy itself carries no state.

use crate::{action::Action, battery::BatteryState, config::Config, environment::EnvironmentState};

#[derive(Clone, Copy, Debug, Default)]
pub struct RuleEngine;

impl RuleEngine {
    /// Decide the action for one hour from its environment and the battery
    /// snapshot entering that hour. Never mutates, never emits `Action::Idle`.
    #[must_use]
    pub fn decide(&self, config: &Config, env: &EnvironmentState, battery: &BatteryState) -> Action {
        let net = env.net_energy();
        let peak = Config::is_peak_hour(env.hour);

        if net.0 >= 0.0 {
            if battery.soc < config.max_soc { Action::ChargeBattery } else { Action::SellToGrid }
        } else if peak && battery.soc > config.peak_soc_threshold {
            Action::DischargeBattery
        } else if battery.soc > config.min_soc_threshold {
            Action::DischargeBattery
        } else {
            Action::UseGrid
        }
    }

    /// True iff the battery should hold back discharge in anticipation of a
    /// weak solar day tomorrow.
    #[must_use]
    pub fn should_conserve(hour: u8, battery: &BatteryState, tomorrow_cloudy: bool) -> bool {
        (hour >= 20 && battery.soc < 0.30 && tomorrow_cloudy) || battery.soc < 0.15
    }
}
