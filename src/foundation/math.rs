pub(crate) const MAX_SLOPE: f64 = 2.0;

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// `y = m*x + b`, with the product rounded to the nearest pixel.
///
/// Rounding only the product keeps `line_eq_y(m, x, b + 1) == line_eq_y(m, x, b) + 1`.
pub(crate) fn line_eq_y(m: f64, x: i32, b: i32) -> i32 {
    (m * f64::from(x)).round() as i32 + b
}

/// `b = y - m*x`, with the product rounded to the nearest pixel.
pub(crate) fn line_eq_b(m: f64, x: i32, y: i32) -> i32 {
    y - (m * f64::from(x)).round() as i32
}

pub(crate) fn clamp_noise(noise: f64) -> f64 {
    if noise.is_nan() {
        return 0.0;
    }
    noise.clamp(0.0, 1.0)
}

pub(crate) fn clamp_slope(slope: f64) -> f64 {
    if slope.is_nan() {
        return 0.0;
    }
    slope.clamp(-MAX_SLOPE, MAX_SLOPE)
}

/// Number of shapes an effect draws: `round(noise * per_unit)`.
pub(crate) fn shape_count(noise: f64, per_unit: u32) -> usize {
    (clamp_noise(noise) * f64::from(per_unit)).round() as usize
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
