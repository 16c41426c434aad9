//! Easing curves
//!
//! All curves take a normalized progress in `[0, 1]`; inputs outside that range
//! are clamped.

#[inline]
fn clamp01(p: f32) -> f32 {
    p.clamp(0.0, 1.0)
}

/// Ease-out cubic: `1 - (1 - p)^3`
#[inline]
pub fn ease_out_cubic(p: f32) -> f32 {
    let inv = 1.0 - clamp01(p);
    1.0 - inv * inv * inv
}

/// Ease-in quadratic: `p^2`
#[inline]
pub fn ease_in_quad(p: f32) -> f32 {
    let p = clamp01(p);
    p * p
}

/// Linear ramp, clamped
#[inline]
pub fn linear(p: f32) -> f32 {
    clamp01(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_ease_out_cubic_clamps() {
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_ease_out_is_front_loaded() {
        for i in 1..10 {
            let p = i as f32 / 10.0;
            assert!(ease_out_cubic(p) >= linear(p));
            assert!(ease_in_quad(p) <= linear(p));
        }
    }
}
