use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(128, 128), 64);
    assert_eq!(mul_div255_u8(0, 200), 0);
}

#[test]
fn line_equation_helpers_agree() {
    let m = -0.5;
    let b = line_eq_b(m, 10, 3);
    assert_eq!(b, 8);
    assert_eq!(line_eq_y(m, 10, b), 3);
    assert_eq!(line_eq_y(0.0, 123, 7), 7);
}

#[test]
fn noise_and_slope_are_clamped() {
    assert_eq!(clamp_noise(-1.0), 0.0);
    assert_eq!(clamp_noise(3.0), 1.0);
    assert_eq!(clamp_noise(f64::NAN), 0.0);
    assert_eq!(clamp_slope(5.0), 2.0);
    assert_eq!(clamp_slope(-5.0), -2.0);
    assert_eq!(clamp_slope(1.25), 1.25);
}

#[test]
fn shape_count_rounds() {
    assert_eq!(shape_count(0.0, 100), 0);
    assert_eq!(shape_count(0.5, 10), 5);
    assert_eq!(shape_count(0.26, 10), 3);
    assert_eq!(shape_count(2.0, 20), 20);
}
