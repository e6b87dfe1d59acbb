//! Deterministic 24-hour environment generation.
//!
//! Draws solar and load for each hour from the forecast provider when it has
//! an opinion, otherwise from a seeded synth model. A seeded `StdRng` makes
//! a whole day's scenario reproducible from a single `u64`.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::{Config, DayType, Season, Weather},
    forecast::ForecastProvider,
    quantity::{Quantity, energy::KilowattHours, price::Price},
    tariff::{Period, period_of, price_of},
};

/// One hour's read-only environment, produced once by the generator.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EnvironmentState {
    pub hour: u8,
    pub solar_kwh: KilowattHours,
    pub load_kwh: KilowattHours,
    pub price: Price,
}

impl EnvironmentState {
    #[must_use]
    pub fn net_energy(&self) -> KilowattHours {
        self.solar_kwh - self.load_kwh
    }
}

/// Inputs to a single day's environment generation.
#[derive(Clone, Copy, Debug, bon::Builder)]
pub struct EnvironmentConfig {
    pub season: Season,
    pub weather: Weather,
    pub day_type: DayType,
    #[builder(default = 1)]
    pub day: u8,
    #[builder(default = 6)]
    pub month: u8,
}

/// Produces a deterministic 24-hour `EnvironmentState` sequence.
pub struct EnvironmentGenerator<'a> {
    config: Config,
    env_config: EnvironmentConfig,
    forecast: &'a dyn ForecastProvider,
    rng: StdRng,
}

impl<'a> EnvironmentGenerator<'a> {
    #[must_use]
    pub fn new(config: Config, env_config: EnvironmentConfig, forecast: &'a dyn ForecastProvider, seed: u64) -> Self {
        Self { config, env_config, forecast, rng: StdRng::seed_from_u64(seed) }
    }

    /// Generate the 24-hour sequence, hours `0..24` in ascending order.
    pub fn generate_24h(&mut self) -> [EnvironmentState; 24] {
        std::array::from_fn(|hour| self.generate_hour(hour as u8))
    }

    fn generate_hour(&mut self, hour: u8) -> EnvironmentState {
        let sample = self.forecast.predict(
            hour,
            self.env_config.day,
            self.env_config.month,
            self.env_config.weather,
            self.env_config.season,
        );

        let solar_kwh = match sample.solar_kwh {
            Some(v) if (0.0..=15.0).contains(&v) => Quantity(v),
            _ => self.synth_solar(hour),
        };
        let load_kwh = match sample.load_kwh {
            Some(v) if (0.0..=10.0).contains(&v) => Quantity(v),
            _ => self.synth_load(hour),
        };

        EnvironmentState { hour, solar_kwh, load_kwh, price: price_of(&self.config, hour) }
    }

    fn synth_solar(&mut self, hour: u8) -> KilowattHours {
        let peak = self.env_config.season.solar_peak_kwh() * self.env_config.weather.solar_multiplier();
        let h = f64::from(hour);
        let base = if (6.0..=12.0).contains(&h) {
            peak * (((h - 6.0) / 6.0) * std::f64::consts::FRAC_PI_2).sin()
        } else if (12.0..=14.0).contains(&h) {
            peak
        } else if (14.0..=18.0).contains(&h) {
            peak * (((18.0 - h) / 4.0) * std::f64::consts::FRAC_PI_2).sin()
        } else {
            0.0
        };
        let noise = self.rng.gen_range(0.7..=1.0);
        Quantity((base * noise).min(self.config.inverter_max.0).max(0.0))
    }

    fn synth_load(&mut self, hour: u8) -> KilowattHours {
        let base = base_load_kwh(period_of(hour), self.env_config.day_type);
        let noise = self.rng.gen_range(0.85..=1.15);
        Quantity(base * self.env_config.season.load_factor() * noise)
    }
}

/// Base-load table by consumption period and day type, before season/noise.
fn base_load_kwh(period: Period, day_type: DayType) -> f64 {
    match (period, day_type) {
        (Period::Night, DayType::Weekday) => 0.5,
        (Period::Night, DayType::Weekend) => 0.6,
        (Period::Morning, DayType::Weekday) => 2.5,
        (Period::Morning, DayType::Weekend) => 3.0,
        (Period::Day, DayType::Weekday) => 1.0,
        (Period::Day, DayType::Weekend) => 2.0,
        (Period::Evening, DayType::Weekday) => 4.0,
        (Period::Evening, DayType::Weekend) => 3.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::NullForecastProvider;

    fn env_config(day_type: DayType) -> EnvironmentConfig {
        EnvironmentConfig::builder().season(Season::Summer).weather(Weather::Sunny).day_type(day_type).build()
    }

    #[test]
    fn test_generate_24h_is_deterministic_for_same_seed() {
        let provider = NullForecastProvider;
        let mut gen_a =
            EnvironmentGenerator::new(Config::default(), env_config(DayType::Weekday), &provider, 42);
        let mut gen_b =
            EnvironmentGenerator::new(Config::default(), env_config(DayType::Weekday), &provider, 42);
        assert_eq!(gen_a.generate_24h(), gen_b.generate_24h());
    }

    #[test]
    fn test_generate_24h_differs_across_seeds() {
        let provider = NullForecastProvider;
        let mut gen_a =
            EnvironmentGenerator::new(Config::default(), env_config(DayType::Weekday), &provider, 1);
        let mut gen_b =
            EnvironmentGenerator::new(Config::default(), env_config(DayType::Weekday), &provider, 2);
        assert_ne!(gen_a.generate_24h(), gen_b.generate_24h());
    }

    #[test]
    fn test_night_hours_have_no_solar() {
        let provider = NullForecastProvider;
        let mut generator = EnvironmentGenerator::new(Config::default(), env_config(DayType::Weekday), &provider, 7);
        let envs = generator.generate_24h();
        assert_eq!(envs[2].solar_kwh, KilowattHours::ZERO);
        assert_eq!(envs[23].solar_kwh, KilowattHours::ZERO);
    }

    #[test]
    fn test_day_type_changes_load_fallback() {
        let provider = NullForecastProvider;
        let mut weekday =
            EnvironmentGenerator::new(Config::default(), env_config(DayType::Weekday), &provider, 42);
        let mut weekend =
            EnvironmentGenerator::new(Config::default(), env_config(DayType::Weekend), &provider, 42);
        assert_ne!(weekday.generate_24h(), weekend.generate_24h());
    }

    #[test]
    fn test_hours_are_ascending() {
        let provider = NullForecastProvider;
        let mut generator = EnvironmentGenerator::new(Config::default(), env_config(DayType::Weekday), &provider, 42);
        let envs = generator.generate_24h();
        for (i, env) in envs.iter().enumerate() {
            assert_eq!(env.hour, i as u8);
        }
    }
}
