//! The tagged action a decision engine emits for one hour.

/// One hour's chosen operation, exhaustively matched wherever it is applied
/// to the battery and grid — never compared as a string.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    ChargeBattery,
    DischargeBattery,
    SellToGrid,
    UseGrid,
    Idle,
}
