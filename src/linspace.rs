// src/linspace.rs

//! Evenly spaced boundary-value generator.
//!
//! The uniform-width strategy asks for `zones + 1` boundaries over its
//! fixed report-unit domain; this is the only producer of those values.

/// Returns `count` evenly spaced values from `start` to `stop` inclusive.
///
/// `count == 0` yields an empty vector and `count == 1` yields just
/// `start`; both endpoints are exact, interior points are interpolated.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // Pin the final endpoint; accumulated rounding must not leak
            // into the table's max boundary.
            values[count - 1] = stop;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_exact() {
        let v = linspace(-100.0, 100.0, 21);
        assert_eq!(v.len(), 21);
        assert_eq!(v[0], -100.0);
        assert_eq!(v[20], 100.0);
    }

    #[test]
    fn test_uniform_step() {
        let v = linspace(-100.0, 100.0, 21);
        for (i, val) in v.iter().enumerate() {
            assert!((val - (-100.0 + 10.0 * i as f64)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.5, 9.0, 1), vec![3.5]);
        assert_eq!(linspace(1.0, 2.0, 2), vec![1.0, 2.0]);
    }
}
