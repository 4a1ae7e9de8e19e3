//! Cardinal sine and hyperbolic sine

/// Below this magnitude the Taylor polynomial is exact to f64 precision
const TAYLOR_BOUND: f64 = 1e-4;

/// sin(x) / x, with value 1 at x = 0
#[inline]
pub fn sinc_pi(x: f64) -> f64 {
    if x.abs() < TAYLOR_BOUND {
        let x2 = x * x;
        1.0 - x2 / 6.0 + x2 * x2 / 120.0
    } else {
        x.sin() / x
    }
}

/// sinh(x) / x, with value 1 at x = 0
#[inline]
pub fn sinhc_pi(x: f64) -> f64 {
    if x.abs() < TAYLOR_BOUND {
        let x2 = x * x;
        1.0 + x2 / 6.0 + x2 * x2 / 120.0
    } else {
        x.sinh() / x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_zero() {
        assert_eq!(sinc_pi(0.0), 1.0);
        assert_eq!(sinhc_pi(0.0), 1.0);
    }

    #[test]
    fn test_continuity_at_bound() {
        let x = TAYLOR_BOUND * 0.999;
        assert!((sinc_pi(x) - x.sin() / x).abs() < 1e-15);
        assert!((sinhc_pi(x) - x.sinh() / x).abs() < 1e-15);
    }

    #[test]
    fn test_regular_values() {
        assert!((sinc_pi(std::f64::consts::PI)).abs() < 1e-15);
        assert!((sinhc_pi(1.0) - 1.0f64.sinh()).abs() < 1e-15);
    }
}
