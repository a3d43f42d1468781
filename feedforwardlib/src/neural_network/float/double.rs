//! Double precision weights.

use super::*;

impl Float for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn from_f32(float: f32) -> Self {
        float as f64
    }

    #[inline]
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}
