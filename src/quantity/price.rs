use crate::quantity::Quantity;

/// A price, in currency per kilowatt-hour.
pub type Price = Quantity<f64, -1, 0, 1>;
