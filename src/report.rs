//! Per-hour and aggregate simulation output.

use crate::{action::Action, quantity::{cost::Cost, energy::KilowattHours, price::Price}};

/// One hour's complete outcome: inputs, the chosen action, and its effects.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, bon::Builder)]
pub struct HourlyReport {
    pub hour: u8,
    pub solar_kwh: KilowattHours,
    pub load_kwh: KilowattHours,
    pub battery_level_kwh: KilowattHours,
    pub battery_soc: f64,
    pub grid_import_kwh: KilowattHours,
    pub grid_export_kwh: KilowattHours,
    pub net_energy: KilowattHours,
    pub action: Action,
    pub price: Price,
    pub cost: Cost,
    pub savings: Cost,
}

/// A full 24-hour run: ordered reports plus the day's aggregates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SimulationResult {
    pub hourly: Vec<HourlyReport>,
    pub total_solar: KilowattHours,
    pub total_consumption: KilowattHours,
    pub total_grid_import: KilowattHours,
    pub total_grid_export: KilowattHours,
    pub total_cost: Cost,
    pub total_savings: Cost,
    pub seed: u64,
}

impl HourlyReport {
    /// Round every energy field to 2 decimals and every cost field to 3,
    /// for report output. Internal computation never calls this — only the
    /// JSON response boundary needs it.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            solar_kwh: self.solar_kwh.rounded(),
            load_kwh: self.load_kwh.rounded(),
            battery_level_kwh: self.battery_level_kwh.rounded(),
            grid_import_kwh: self.grid_import_kwh.rounded(),
            grid_export_kwh: self.grid_export_kwh.rounded(),
            net_energy: self.net_energy.rounded(),
            cost: self.cost.rounded(),
            savings: self.savings.rounded(),
            ..self
        }
    }
}

impl SimulationResult {
    #[must_use]
    pub fn from_hourly(hourly: Vec<HourlyReport>, seed: u64) -> Self {
        let total_solar = hourly.iter().map(|r| r.solar_kwh).sum();
        let total_consumption = hourly.iter().map(|r| r.load_kwh).sum();
        let total_grid_import = hourly.iter().map(|r| r.grid_import_kwh).sum();
        let total_grid_export = hourly.iter().map(|r| r.grid_export_kwh).sum();
        let total_cost = hourly.iter().map(|r| r.cost).sum();
        let total_savings = hourly.iter().map(|r| r.savings).sum();
        Self { hourly, total_solar, total_consumption, total_grid_import, total_grid_export, total_cost, total_savings, seed }
    }

    /// Round every field for report output. See [`HourlyReport::rounded`].
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            hourly: self.hourly.into_iter().map(HourlyReport::rounded).collect(),
            total_solar: self.total_solar.rounded(),
            total_consumption: self.total_consumption.rounded(),
            total_grid_import: self.total_grid_import.rounded(),
            total_grid_export: self.total_grid_export.rounded(),
            total_cost: self.total_cost.rounded(),
            total_savings: self.total_savings.rounded(),
            ..self
        }
    }
}
