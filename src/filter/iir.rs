//! Direct-form causal IIR filtering with explicit zero initial state.

use crate::error::{Error, Result};
use crate::filter::design::FilterCoefficients;
use crate::float::Float;
use crate::signal::Signal;

/// Run `signal` through the filter described by `coefficients`, forward in
/// time with zero history before sample 0:
///
/// > a[0] * y[n] = sum_k b[k] * x[n-k] - sum_{k>=1} a[k] * y[n-k]
///
/// The output has the same length and sample rate as the input. This is a
/// single causal pass; the phase delay it introduces is part of the contract
/// and must not be compensated with a second backward pass.
pub fn filter<T: Float>(
    signal: &Signal<T>,
    coefficients: &FilterCoefficients<T>,
) -> Result<Signal<T>> {
    let b = &coefficients.b;
    let a = &coefficients.a;
    if b.len() != a.len() {
        return Err(Error::ShapeMismatch {
            b: b.len(),
            a: a.len(),
        });
    }

    let x = signal.samples();
    let mut y = Vec::with_capacity(x.len());
    for n in 0..x.len() {
        // Missing history (indices below 0) contributes nothing, so short
        // signals still produce an equal-length output via partial sums.
        let mut acc = T::zero();
        for (k, &bk) in b.iter().enumerate().take(n + 1) {
            acc = acc + bk * x[n - k];
        }
        for (k, &ak) in a.iter().enumerate().take(n + 1).skip(1) {
            acc = acc - ak * y[n - k];
        }
        y.push(acc / a[0]);
    }

    Ok(Signal::new(y, signal.sample_rate()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn coeffs(b: Vec<f64>, a: Vec<f64>) -> FilterCoefficients<f64> {
        FilterCoefficients { b, a }
    }

    #[test]
    fn identity_filter_passes_samples_through() {
        let signal = Signal::new(vec![1.0, -2.0, 3.0], 8000);
        let out = filter(&signal, &coeffs(vec![1.0, 0.0], vec![1.0, 0.0])).unwrap();
        assert_eq!(out.samples(), signal.samples());
        assert_eq!(out.sample_rate(), 8000);
    }

    #[test]
    fn feedback_recurrence_uses_past_outputs() {
        // y[n] = x[n] + 0.5 * y[n-1]
        let signal = Signal::new(vec![1.0, 0.0, 0.0, 0.0], 8000);
        let out = filter(&signal, &coeffs(vec![1.0, 0.0], vec![1.0, -0.5])).unwrap();
        let expected = [1.0, 0.5, 0.25, 0.125];
        for (got, want) in out.samples().iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn output_is_normalized_by_leading_feedback_coefficient() {
        let signal = Signal::new(vec![1.0, 1.0], 8000);
        let out = filter(&signal, &coeffs(vec![2.0, 0.0], vec![2.0, 0.0])).unwrap();
        assert_abs_diff_eq!(out.samples()[0], 1.0);
        assert_abs_diff_eq!(out.samples()[1], 1.0);
    }

    #[test]
    fn signal_shorter_than_filter_order_still_filters() {
        let signal = Signal::new(vec![2.0], 8000);
        let out = filter(
            &signal,
            &coeffs(vec![0.5, 0.1, 0.1, 0.1], vec![1.0, 0.0, 0.0, 0.0]),
        )
        .unwrap();
        assert_eq!(out.len(), 1);
        assert_abs_diff_eq!(out.samples()[0], 1.0);
    }

    #[test]
    fn mismatched_coefficient_lengths_are_rejected() {
        let signal = Signal::new(vec![1.0, 2.0], 8000);
        let err = filter(&signal, &coeffs(vec![1.0, 0.0, 0.0], vec![1.0, 0.0])).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { b: 3, a: 2 });
    }
}
