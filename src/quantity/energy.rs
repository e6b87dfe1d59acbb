use crate::quantity::{Quantity, cost::Cost, price::Price};

/// Energy, in kilowatt-hours.
pub type KilowattHours = Quantity<f64, 1, 0, 0>;

impl KilowattHours {
    /// Round to 2 decimal places for report output.
    pub fn rounded(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}

impl std::ops::Mul<Price> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: Price) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_times_price_is_cost() {
        let energy: KilowattHours = Quantity(2.0);
        let price: Price = Quantity(5.65);
        assert_eq!(energy * price, Quantity(11.3));
    }
}
