use rstest::rstest;

use crate::scalar::Scalar;

#[rstest]
#[case::exact(0.25, 25)]
#[case::truncates_down(0.3, 30)]
#[case::truncates_toward_zero(0.333, 33)]
#[case::negative(-0.1, -10)]
#[case::over_one(1.2, 120)]
fn of_rate_integral(#[case] rate: f64, #[case] expected: i32) {
	assert_eq!(100_i32.of_rate(rate), expected);
}

#[test]
fn of_rate_floating_keeps_fraction() {
	assert_eq!(100.0_f64.of_rate(0.25), 25.0);
	assert_eq!(10.0_f32.of_rate(0.5), 5.0);
	assert_eq!(100.0_f64.of_rate(-0.5), -50.0);
}

#[test]
fn of_rate_unrepresentable_collapses_to_zero() {
	// A negative product has no u16 representation.
	assert_eq!(100_u16.of_rate(-0.1), 0);
}

#[test]
fn of_rate_zero_length() {
	assert_eq!(0_i32.of_rate(0.7), 0);
	assert_eq!(0.0_f64.of_rate(0.7), 0.0);
}
