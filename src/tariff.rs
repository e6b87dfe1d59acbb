//! Time-of-use price lookup and consumption-period classification.

use crate::{config::Config, quantity::price::Price};

/// Consumption period classification for an hour of day.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Night,
    Morning,
    Day,
    Evening,
}

/// Look up the TOU price for `hour` (`0..24`) from the frozen tariff table.
pub fn price_of(config: &Config, hour: u8) -> Price {
    if Config::is_peak_hour(hour) {
        config.peak_price
    } else if Config::is_night_hour(hour) {
        config.night_price
    } else {
        config.normal_price
    }
}

/// Classify `hour` (`0..24`) into a consumption period.
pub fn period_of(hour: u8) -> Period {
    match hour {
        h if Config::is_night_hour(h) => Period::Night,
        7..=8 => Period::Morning,
        9..=17 => Period::Day,
        _ => Period::Evening,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_of_peak() {
        let config = Config::default();
        for hour in [18, 19, 20, 21] {
            assert_eq!(price_of(&config, hour), config.peak_price);
        }
    }

    #[test]
    fn test_price_of_night() {
        let config = Config::default();
        for hour in [23, 0, 1, 2, 3, 4, 5, 6] {
            assert_eq!(price_of(&config, hour), config.night_price);
        }
    }

    #[test]
    fn test_price_of_normal() {
        let config = Config::default();
        for hour in [7, 8, 12, 17, 22] {
            assert_eq!(price_of(&config, hour), config.normal_price);
        }
    }

    #[test]
    fn test_period_of_night_takes_priority_over_morning() {
        assert_eq!(period_of(6), Period::Night);
        assert_eq!(period_of(23), Period::Night);
    }

    #[test]
    fn test_period_of_evening_is_fallthrough() {
        assert_eq!(period_of(18), Period::Evening);
        assert_eq!(period_of(22), Period::Evening);
    }

    #[test]
    fn test_period_of_morning_is_7_to_8() {
        assert_eq!(period_of(7), Period::Morning);
        assert_eq!(period_of(8), Period::Morning);
    }

    #[test]
    fn test_period_of_day_starts_at_9() {
        assert_eq!(period_of(9), Period::Day);
        assert_eq!(period_of(10), Period::Day);
        assert_eq!(period_of(17), Period::Day);
    }
}
