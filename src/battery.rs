//! Stateful battery model.
//!
//! A single owned struct applying power/energy requests against SOC bounds
//! and an asymmetric round-trip efficiency, with an immutable snapshot type
//! for read-only consumers.

use crate::{config::Config, error::EngineError, quantity::{Quantity, energy::KilowattHours, time::Hours}};

/// An immutable snapshot of a [`Battery`] at a point in time.
///
/// Cloning a `Battery` and calling `state()` on it, then mutating the
/// original, must never change an already-taken snapshot — this type
/// carries no reference back to the battery, only plain values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BatteryState {
    pub charge_kwh: KilowattHours,
    pub capacity_kwh: KilowattHours,
    pub soc: f64,
}

/// A mutable, single-owner energy store.
#[derive(Clone, Debug)]
pub struct Battery {
    config: Config,
    charge: KilowattHours,
}

impl Battery {
    /// Construct a battery at the given capacity and initial state-of-charge.
    ///
    /// # Errors
    ///
    /// Fails if `capacity <= 0` or `initial_soc` is outside `[0, 1]`.
    pub fn new(config: Config, initial_soc: f64) -> Result<Self, EngineError> {
        config.validate()?;
        if !(0.0..=1.0).contains(&initial_soc) {
            return Err(EngineError::InvalidConfig("initial_soc must be within [0, 1]".into()));
        }
        let charge = config.capacity * initial_soc;
        Ok(Self { config, charge })
    }

    /// Reset the battery to the given state-of-charge.
    ///
    /// # Errors
    ///
    /// Fails if `soc` is outside `[0, 1]`.
    pub fn reset(&mut self, soc: f64) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&soc) {
            return Err(EngineError::InvalidConfig("soc must be within [0, 1]".into()));
        }
        self.charge = self.config.capacity * soc;
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> BatteryState {
        BatteryState {
            charge_kwh: self.charge,
            capacity_kwh: self.config.capacity,
            soc: self.charge.0 / self.config.capacity.0,
        }
    }

    fn max_charge(&self) -> KilowattHours {
        self.config.capacity * self.config.max_soc
    }

    fn min_charge(&self) -> KilowattHours {
        self.config.capacity * self.config.min_soc
    }

    /// Charge the battery with up to `available` kWh arriving at the DC bus.
    ///
    /// # Returns
    ///
    /// `(energy_consumed, energy_stored)`: the converted (bus-side) energy
    /// and the energy actually added to the cell, which is smaller by the
    /// charge efficiency.
    pub fn charge(&mut self, available: KilowattHours) -> (KilowattHours, KilowattHours) {
        if available.0 <= 0.0 {
            return (KilowattHours::ZERO, KilowattHours::ZERO);
        }
        let headroom = self.max_charge() - self.charge;
        let convertible = headroom / self.config.charge_efficiency;
        let consumed = available.min(convertible).min(self.config.max_charge_power * Hours::ONE);
        let stored = consumed * self.config.charge_efficiency;
        self.charge += stored;
        (consumed, stored)
    }

    /// Discharge the battery to deliver up to `demand` kWh at the DC bus.
    ///
    /// # Returns
    ///
    /// `(energy_drawn, energy_delivered)`: the energy drawn from the cell
    /// and the energy actually delivered to the bus, which is smaller by
    /// the discharge efficiency.
    pub fn discharge(&mut self, demand: KilowattHours) -> (KilowattHours, KilowattHours) {
        if demand.0 <= 0.0 {
            return (KilowattHours::ZERO, KilowattHours::ZERO);
        }
        let reserve = self.charge - self.min_charge();
        let needed = demand / self.config.discharge_efficiency;
        let drawn = needed.min(reserve).min(self.config.max_discharge_power * Hours::ONE);
        let delivered = drawn * self.config.discharge_efficiency;
        self.charge -= drawn;
        (drawn, delivered)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn battery_at(soc: f64) -> Battery {
        Battery::new(Config::default(), soc).unwrap()
    }

    #[test]
    fn test_new_rejects_non_positive_capacity() {
        let mut config = Config::default();
        config.capacity = Quantity(0.0);
        assert!(Battery::new(config, 0.5).is_err());
    }

    #[test]
    fn test_new_rejects_out_of_range_soc() {
        assert!(Battery::new(Config::default(), 1.5).is_err());
        assert!(Battery::new(Config::default(), -0.1).is_err());
    }

    #[test]
    fn test_charge_non_positive_is_noop() {
        let mut battery = battery_at(0.5);
        let before = battery.state();
        let (consumed, stored) = battery.charge(Quantity(0.0));
        assert_eq!(consumed, KilowattHours::ZERO);
        assert_eq!(stored, KilowattHours::ZERO);
        assert_eq!(battery.state(), before);
    }

    #[test]
    fn test_discharge_non_positive_is_noop() {
        let mut battery = battery_at(0.5);
        let before = battery.state();
        let (drawn, delivered) = battery.discharge(Quantity(-1.0));
        assert_eq!(drawn, KilowattHours::ZERO);
        assert_eq!(delivered, KilowattHours::ZERO);
        assert_eq!(battery.state(), before);
    }

    /// S4 — battery cannot overcharge.
    #[test]
    fn test_cannot_overcharge() {
        let mut battery = battery_at(0.94);
        let (consumed, stored) = battery.charge(Quantity(100.0));
        let state = battery.state();
        assert!(state.soc <= 0.95 + 1e-9);
        assert!(consumed.0 < 100.0);
        assert_abs_diff_eq!(stored.0, consumed.0 * 0.96, epsilon = 1e-9);
    }

    /// S5 — battery cannot over-discharge.
    #[test]
    fn test_cannot_overdischarge() {
        let mut battery = battery_at(0.21);
        let (_drawn, delivered) = battery.discharge(Quantity(100.0));
        let state = battery.state();
        assert!(state.soc >= 0.20 - 1e-9);
        assert!(delivered.0 < 100.0);
    }

    #[test]
    fn test_round_trip_is_lossy() {
        let mut battery = battery_at(0.5);
        let start_soc = battery.state().soc;
        let (_consumed, stored) = battery.charge(Quantity(1.0));
        battery.discharge(stored * 0.96);
        assert!(battery.state().soc < start_soc);
    }

    #[test]
    fn test_stored_never_exceeds_consumed() {
        let mut battery = battery_at(0.3);
        let (consumed, stored) = battery.charge(Quantity(2.0));
        assert!(stored.0 <= consumed.0);
    }

    #[test]
    fn test_delivered_never_exceeds_drawn() {
        let mut battery = battery_at(0.7);
        let (drawn, delivered) = battery.discharge(Quantity(2.0));
        assert!(delivered.0 <= drawn.0);
    }

    #[test]
    fn test_snapshot_does_not_mutate_with_battery() {
        let mut battery = battery_at(0.5);
        let snapshot = battery.state();
        battery.charge(Quantity(1.0));
        assert_eq!(snapshot.soc, 0.5);
    }

    #[test]
    fn test_reset_rejects_out_of_range_soc() {
        let mut battery = battery_at(0.5);
        assert!(battery.reset(1.2).is_err());
        assert!(battery.reset(0.5).is_ok());
    }
}
