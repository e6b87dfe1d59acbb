//! Error kinds the battery model and decision engines can surface.
//!
//! `ForecastUnavailable` and `SolverSuboptimal` are deliberately absent:
//! the former is caught and absorbed by the environment generator (encoded
//! as `None` on [`crate::forecast::ForecastSample`]), the latter is a
//! `suboptimal` flag on a successful [`crate::milp_engine::MilpSolution`],
//! not a failure. Neither ever needs to bubble up as an `Err`.

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("MILP solver returned no incumbent solution")]
    SolverFailure,

    #[error(
        "post-step state of charge {soc:.6} drifted outside [{min:.6}, {max:.6}] by more than tolerance"
    )]
    NumericTolerance { soc: f64, min: f64, max: f64 },
}
