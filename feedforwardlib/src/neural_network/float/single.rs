//! Single precision weights.

use super::*;

impl Float for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn from_f32(float: f32) -> Self {
        float
    }

    #[inline]
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}
