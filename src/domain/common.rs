/// Rounds a monetary value to two decimal places, with half-cents rounding up
/// toward positive infinity. Never yields `-0.0`.
pub fn round_currency(value: f64) -> f64 {
    let rounded = (value * 100.0 + 0.5).floor() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
