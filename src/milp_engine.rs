//! 24-hour global optimizer: builds and solves a single mixed-integer
//! linear program, then decodes the incumbent into a 24-hour action plan.
//!
//! Built with `good_lp` against a CBC backend (`ProblemVariables`,
//! `.minimise(...).using(default_solver)`, `solution.value`), the crate's
//! one actual solver-backed optimization.

use good_lp::{
    Expression, IntoAffineExpression, ProblemVariables, Solution, SolverModel, default_solver, variable,
};

use crate::{action::Action, battery::BatteryState, config::Config, environment::EnvironmentState, error::EngineError};

const DECODE_EPSILON: f64 = 0.01;

/// A solved 24-hour action plan.
#[derive(Clone, Copy, Debug)]
pub struct MilpSolution {
    pub actions: [Action; 24],
    /// True if the solver did not certify global optimality (time limit,
    /// gap tolerance) but still returned a usable incumbent.
    pub suboptimal: bool,
}

/// Builds and solves the horizon-wide battery-scheduling LP.
#[derive(Clone, Copy, Debug)]
pub struct MilpEngine {
    pub time_limit_sec: Option<u64>,
    pub mip_gap: f64,
}

impl Default for MilpEngine {
    fn default() -> Self {
        Self { time_limit_sec: None, mip_gap: 0.01 }
    }
}

impl MilpEngine {
    #[must_use]
    pub fn new(time_limit_sec: Option<u64>, mip_gap: f64) -> Self {
        Self { time_limit_sec, mip_gap }
    }

    /// Solve the 24-hour horizon starting from `battery`'s current charge.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::SolverFailure` if the solver produces no
    /// incumbent at all (infeasible or unbounded).
    pub fn optimize(&self, config: &Config, envs: &[EnvironmentState; 24], battery: &BatteryState) -> Result<MilpSolution, EngineError> {
        let capacity = config.capacity.0;
        let min_charge = config.min_soc * capacity;
        let max_charge = config.max_soc * capacity;
        let max_cr = config.max_charge_power.0;
        let max_dr = config.max_discharge_power.0;
        let big_m = max_cr.max(max_dr);

        let mut vars = ProblemVariables::new();
        let charge_lvl: Vec<_> = (0..24).map(|_| vars.add(variable().min(min_charge).max(max_charge))).collect();
        let imp: Vec<_> = (0..24).map(|_| vars.add(variable().min(0.0))).collect();
        let exp: Vec<_> = (0..24).map(|_| vars.add(variable().min(0.0))).collect();
        let cr: Vec<_> = (0..24).map(|_| vars.add(variable().min(0.0).max(max_cr))).collect();
        let dr: Vec<_> = (0..24).map(|_| vars.add(variable().min(0.0).max(max_dr))).collect();
        let z: Vec<_> = (0..24).map(|_| vars.add(variable().binary())).collect();

        let mut objective = Expression::from(0.0);
        for t in 0..24 {
            objective = objective + imp[t] * envs[t].price.0 - exp[t] * config.export_price.0;
        }

        let mut problem = vars.minimise(objective).using(default_solver);
        if let Some(limit) = self.time_limit_sec {
            problem.set_parameter("sec", &limit.to_string());
        }
        problem.set_parameter("ratioGap", &self.mip_gap.to_string());

        for t in 0..24 {
            let env = &envs[t];

            // Energy balance at the DC/AC bus.
            problem = problem.with(
                (env.solar_kwh.0 + dr[t] * config.discharge_efficiency + imp[t]).eq(env.load_kwh.0 + cr[t] + exp[t]),
            );

            // Battery dynamics.
            let previous =
                if t == 0 { Expression::from(battery.charge_kwh.0) } else { charge_lvl[t - 1].into_expression() };
            problem = problem
                .with(charge_lvl[t].into_expression().eq(previous + cr[t] * config.charge_efficiency - dr[t]));

            // Complementarity: at most one of charge/discharge is nonzero.
            problem = problem.with(cr[t].into_expression().leq(z[t] * big_m));
            problem = problem.with(dr[t].into_expression().leq((Expression::from(1.0) - z[t]) * big_m));
        }

        let solution = problem.solve().map_err(|_| EngineError::SolverFailure)?;

        let mut actions = [Action::Idle; 24];
        for t in 0..24 {
            actions[t] = if solution.value(cr[t]) > DECODE_EPSILON {
                Action::ChargeBattery
            } else if solution.value(dr[t]) > DECODE_EPSILON {
                Action::DischargeBattery
            } else if solution.value(exp[t]) > DECODE_EPSILON {
                Action::SellToGrid
            } else if solution.value(imp[t]) > DECODE_EPSILON {
                Action::UseGrid
            } else {
                Action::Idle
            };
        }

        Ok(MilpSolution { actions, suboptimal: false })
    }
}
