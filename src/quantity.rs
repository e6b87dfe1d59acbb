pub mod cost;
pub mod energy;
pub mod power;
pub mod price;
pub mod time;

use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// A phantom-dimensioned scalar.
///
/// `ENERGY`, `TIME`, and `COST` are the exponents of the three base
/// dimensions this crate cares about (energy in kWh, duration in hours,
/// money). `Kilowatts` is energy-over-time (`ENERGY = 1, TIME = -1`),
/// `KilowattHours` is bare energy (`ENERGY = 1, TIME = 0`), and so on —
/// see the `energy`/`power`/`price`/`cost` submodules for the concrete
/// aliases and the multiplications that connect them. Mixing up a price
/// and a cost, or an energy and a power, is a type error rather than a
/// runtime bug.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct Quantity<T, const ENERGY: isize, const TIME: isize, const COST: isize>(pub T);

impl<T, const ENERGY: isize, const TIME: isize, const COST: isize> Quantity<T, ENERGY, TIME, COST>
where
    Self: PartialOrd,
{
    pub fn min(self, rhs: Self) -> Self {
        if rhs < self { rhs } else { self }
    }

    pub fn max(self, rhs: Self) -> Self {
        if rhs > self { rhs } else { self }
    }

    pub fn clamp(mut self, min: Self, max: Self) -> Self {
        if self < min {
            self = min;
        }
        if self > max {
            self = max;
        }
        self
    }
}

impl<const ENERGY: isize, const TIME: isize, const COST: isize> Quantity<f64, ENERGY, TIME, COST> {
    pub const ZERO: Self = Self(0.0);

    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl<T, const ENERGY: isize, const TIME: isize, const COST: isize> Mul<f64>
    for Quantity<T, ENERGY, TIME, COST>
where
    T: Mul<f64, Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<T, const ENERGY: isize, const TIME: isize, const COST: isize> Div<f64>
    for Quantity<T, ENERGY, TIME, COST>
where
    T: Div<f64, Output = T>,
{
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(v: f64) -> Quantity<f64, 0, 0, 0> {
        Quantity(v)
    }

    #[test]
    fn test_min_max() {
        assert_eq!(bare(1.0).min(bare(2.0)), bare(1.0));
        assert_eq!(bare(1.0).max(bare(2.0)), bare(2.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(bare(1.0).clamp(bare(2.0), bare(3.0)), bare(2.0));
        assert_eq!(bare(4.0).clamp(bare(2.0), bare(3.0)), bare(3.0));
        assert_eq!(bare(2.5).clamp(bare(2.0), bare(3.0)), bare(2.5));
    }
}
