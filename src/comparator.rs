//! Runs both decision engines under identical conditions and reports the
//! delta between them.

use crate::{
    config::Config,
    environment::EnvironmentConfig,
    error::EngineError,
    forecast::ForecastProvider,
    milp_engine::MilpEngine,
    quantity::cost::Cost,
    report::SimulationResult,
    runner::{Mode, SimulationRunner},
};

/// Outcome of running both engines against the same day.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Comparison {
    pub rule_result: SimulationResult,
    pub milp_result: SimulationResult,
    pub cost_savings: Cost,
    pub improvement_percent: f64,
    pub different_decisions: usize,
}

/// Run both engines from fresh batteries at identical initial SOC.
///
/// # Errors
///
/// Propagates `EngineError` from either engine's run.
pub fn compare(
    config: Config,
    env_config: EnvironmentConfig,
    forecast: &dyn ForecastProvider,
    seed: u64,
    initial_soc: f64,
    milp: MilpEngine,
) -> Result<Comparison, EngineError> {
    let mut rule_runner = SimulationRunner::new(config, initial_soc)?;
    let rule_result = rule_runner.run(env_config, forecast, seed, Mode::Rule, milp)?;

    let mut milp_runner = SimulationRunner::new(config, initial_soc)?;
    let milp_result = milp_runner.run(env_config, forecast, seed, Mode::Milp, milp)?;

    let cost_savings = rule_result.total_cost - milp_result.total_cost;
    let improvement_percent =
        if rule_result.total_cost.0.abs() > f64::EPSILON { cost_savings.0 / rule_result.total_cost.0.abs() * 100.0 } else { 0.0 };
    let different_decisions =
        rule_result.hourly.iter().zip(milp_result.hourly.iter()).filter(|(r, m)| r.action != m.action).count();

    Ok(Comparison { rule_result, milp_result, cost_savings, improvement_percent, different_decisions })
}

impl Comparison {
    /// Round both results and the cost delta for report output. See
    /// [`SimulationResult::rounded`].
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            rule_result: self.rule_result.rounded(),
            milp_result: self.milp_result.rounded(),
            cost_savings: self.cost_savings.rounded(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DayType, Season, Weather};
    use crate::forecast::NullForecastProvider;

    #[test]
    fn test_milp_never_costs_more_than_rule_beyond_tolerance() {
        let config = Config::default();
        let env_config =
            EnvironmentConfig::builder().season(Season::Summer).weather(Weather::Sunny).day_type(DayType::Weekday).build();
        let provider = NullForecastProvider;
        let comparison =
            compare(config, env_config, &provider, 42, Config::INITIAL_SOC, MilpEngine::default()).unwrap();
        let tolerance = 0.01 * comparison.rule_result.total_cost.0.abs();
        assert!(comparison.milp_result.total_cost.0 <= comparison.rule_result.total_cost.0 + tolerance);
    }
}
