//! Forecast provider contract: a pluggable source of per-hour solar/load
//! predictions the environment generator consults before falling back to
//! its own synth model.

use crate::config::{Season, Weather};

/// A single hour's prediction, or `None` if the provider has no opinion.
///
/// `None` communicates "fall back to synth" without an `Err` — an absent or
/// out-of-range prediction is absorbed by the environment generator, never
/// propagated as a failure.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ForecastSample {
    pub solar_kwh: Option<f64>,
    pub load_kwh: Option<f64>,
}

/// Operational state of a forecast provider, for diagnostics.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderStatus {
    /// Serving predictions normally.
    Ready,
    /// Not wired to a real predictor; every call returns `None`.
    Disabled,
}

/// A process-wide, read-only source of hourly predictions.
///
/// Implementations load any heavy prediction artifacts once and serve
/// concurrent queries thereafter; the core never holds a `&mut` to one.
pub trait ForecastProvider: Send + Sync {
    fn predict(&self, hour: u8, day: u8, month: u8, weather: Weather, season: Season) -> ForecastSample;

    fn status(&self) -> ProviderStatus;
}

/// Default provider: always defers to the environment generator's synth.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullForecastProvider;

impl ForecastProvider for NullForecastProvider {
    fn predict(&self, _hour: u8, _day: u8, _month: u8, _weather: Weather, _season: Season) -> ForecastSample {
        ForecastSample::default()
    }

    fn status(&self) -> ProviderStatus {
        ProviderStatus::Disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_provider_always_defers() {
        let provider = NullForecastProvider;
        let sample = provider.predict(12, 1, 6, Weather::Sunny, Season::Summer);
        assert_eq!(sample, ForecastSample::default());
        assert_eq!(provider.status(), ProviderStatus::Disabled);
    }
}
