//! Frozen configuration tables.
//!
//! Every physical constant the engines depend on lives here, so tests can
//! build an alternate [`Config`] without touching engine code.

use crate::quantity::{energy::KilowattHours, power::Kilowatts, price::Price, Quantity};

/// Calendar season, driving both the solar peak and the load season factor.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Summer,
    Winter,
}

/// Sky condition, driving the solar weather multiplier.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
}

/// Calendar day type, driving the base-load table used by the load synth.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Weekday,
    Weekend,
}

impl Season {
    #[must_use]
    pub fn solar_peak_kwh(self) -> f64 {
        match self {
            Self::Summer => 10.0,
            Self::Winter => 5.0,
        }
    }

    #[must_use]
    pub fn load_factor(self) -> f64 {
        match self {
            Self::Summer => 1.3,
            Self::Winter => 0.8,
        }
    }
}

impl Weather {
    #[must_use]
    pub fn solar_multiplier(self) -> f64 {
        match self {
            Self::Sunny => 1.0,
            Self::PartlyCloudy => 0.7,
            Self::Cloudy => 0.4,
            Self::Rainy => 0.2,
        }
    }
}

/// Battery, tariff, and rule-engine constants.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub capacity: KilowattHours,
    pub charge_efficiency: f64,
    pub discharge_efficiency: f64,
    pub min_soc: f64,
    pub max_soc: f64,
    pub max_charge_power: Kilowatts,
    pub max_discharge_power: Kilowatts,

    pub peak_price: Price,
    pub night_price: Price,
    pub normal_price: Price,
    pub export_price: Price,

    pub peak_soc_threshold: f64,
    pub min_soc_threshold: f64,
    pub max_soc_threshold: f64,

    /// Inverter clamp applied to the solar synth, in kWh over the hour.
    pub inverter_max: KilowattHours,
}

/// Hours `{18, 19, 20, 21}`.
pub const PEAK_HOURS: [u8; 4] = [18, 19, 20, 21];

/// Hours `{23, 0, 1, 2, 3, 4, 5, 6}`.
pub const NIGHT_HOURS: [u8; 8] = [23, 0, 1, 2, 3, 4, 5, 6];

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: Quantity(13.5),
            charge_efficiency: 0.96,
            discharge_efficiency: 0.96,
            min_soc: 0.20,
            max_soc: 0.95,
            max_charge_power: Quantity(5.0),
            max_discharge_power: Quantity(5.0),

            peak_price: Quantity(6.78),
            night_price: Quantity(4.80),
            normal_price: Quantity(5.65),
            export_price: Quantity(4.00),

            peak_soc_threshold: 0.40,
            min_soc_threshold: 0.20,
            max_soc_threshold: 0.95,

            inverter_max: Quantity(8.0),
        }
    }
}

impl Config {
    /// Default initial state-of-charge used when a caller does not override it.
    pub const INITIAL_SOC: f64 = 0.50;

    pub fn validate(&self) -> Result<(), crate::error::EngineError> {
        if self.capacity.0 <= 0.0 {
            return Err(crate::error::EngineError::InvalidConfig(
                "capacity must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_soc) || !(0.0..=1.0).contains(&self.max_soc) {
            return Err(crate::error::EngineError::InvalidConfig(
                "min_soc/max_soc must be within [0, 1]".into(),
            ));
        }
        if self.min_soc > self.max_soc {
            return Err(crate::error::EngineError::InvalidConfig(
                "min_soc must not exceed max_soc".into(),
            ));
        }
        Ok(())
    }

    pub fn is_peak_hour(hour: u8) -> bool {
        PEAK_HOURS.contains(&hour)
    }

    pub fn is_night_hour(hour: u8) -> bool {
        NIGHT_HOURS.contains(&hour)
    }
}
