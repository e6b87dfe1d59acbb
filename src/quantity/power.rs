use crate::quantity::{Quantity, energy::KilowattHours, time::Hours};

/// Power, in kilowatts. One hour of this power is one `KilowattHours`.
pub type Kilowatts = Quantity<f64, 1, -1, 0>;

impl std::ops::Mul<Hours> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
