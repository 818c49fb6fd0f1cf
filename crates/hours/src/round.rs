/// Scale used to snap representation error off `x * 100` before rounding.
const SNAP: f64 = 1e6;

/// Rounds to 2 decimals, half-up.
///
/// Works on the decimal value the caller wrote: `1.005` rounds to `1.01`
/// even though its nearest `f64` is slightly below `1.005`.
pub fn round2(x: f64) -> f64 {
    let cents = (x * 100.0 * SNAP).round() / SNAP;
    (cents + 0.5).floor() / 100.0
}
