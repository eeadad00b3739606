use ndarray::Array1;

/// Largest absolute entry of `v`, `NaN` as soon as any entry is `NaN`.
pub fn max_abs(v: &Array1<f64>) -> f64 {
    v.iter().fold(0.0, |m: f64, &vi| {
        if vi.is_nan() || m.is_nan() {
            f64::NAN
        } else {
            m.max(vi.abs())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn picks_largest_magnitude() {
        assert_eq!(max_abs(&array![1.0, -4.0, 3.0]), 4.0);
        assert_eq!(max_abs(&Array1::zeros(0)), 0.0);
    }

    #[test]
    fn propagates_nan() {
        assert!(max_abs(&array![1.0, f64::NAN, 3.0]).is_nan());
    }
}
