pub mod single;
pub mod double;

/// Generic float numbers representation.
///
/// Connection weights are stored in this type, so it can be
/// used to choose between single and double precision networks.
pub trait Float:
    Default + Clone + Copy + PartialEq + std::fmt::Debug + std::fmt::Display + Sized
{
    /// Constant equal to `Self::from_f32(0.0)`.
    ///
    /// Default weight of every new connection.
    const ZERO: Self;

    /// Convert machine f32 to the current type.
    fn from_f32(float: f32) -> Self;

    /// Returns true if this number is neither infinite nor NaN.
    fn is_finite(&self) -> bool;

    /// Generate random float in `[-1.0, 1.0]` range.
    fn random() -> Self {
        Self::from_f32(fastrand::f32() * 2.0 - 1.0)
    }
}

#[test]
fn test_float_random_and_finite() {
    assert_eq!(<f64 as Float>::from_f32(-0.25), -0.25);

    assert!(Float::is_finite(&1.0_f32));
    assert!(!Float::is_finite(&f32::NAN));
    assert!(!Float::is_finite(&f64::INFINITY));

    for _ in 0..100 {
        let value = <f64 as Float>::random();

        assert!(Float::is_finite(&value));
        assert!((-1.0..=1.0).contains(&value));
    }
}
