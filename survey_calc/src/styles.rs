//! Text formatting for angular values.

/// Formats decimal degrees as degrees, minutes and whole seconds,
/// e.g. `123°45'6"`. Negative angles keep a leading minus sign.
pub fn format_dms(degrees: f64) -> String {
    let sign = if degrees < 0.0 { "-" } else { "" };
    let abs = degrees.abs();
    let mut d = abs.trunc();
    let minutes = (abs - d) * 60.0;
    let mut m = minutes.trunc();
    let mut s = ((minutes - m) * 60.0).round();
    if s >= 60.0 {
        s -= 60.0;
        m += 1.0;
    }
    if m >= 60.0 {
        m -= 60.0;
        d += 1.0;
    }
    format!("{sign}{d:.0}\u{00B0}{m:.0}'{s:.0}\"")
}
