use crate::quantity::{Quantity, energy::KilowattHours, power::Kilowatts};

/// Duration, in hours.
pub type Hours = Quantity<f64, 0, 1, 0>;

impl Hours {
    pub const ONE: Self = Self(1.0);
}

impl std::ops::Mul<Kilowatts> for Hours {
    type Output = KilowattHours;

    fn mul(self, rhs: Kilowatts) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
