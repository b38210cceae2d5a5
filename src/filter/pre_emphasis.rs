//! First-order pre-emphasis, boosting high frequencies ahead of the
//! autocorrelation stage.

use crate::float::Float;
use crate::signal::Signal;

/// Default pre-emphasis coefficient.
pub const DEFAULT_COEFFICIENT: f64 = 0.97;

/// Apply `y[0] = x[0]`, `y[i] = x[i] - coefficient * x[i-1]`.
///
/// Stateless, causal, one pass; the output keeps the input's length and
/// sample rate.
pub fn pre_emphasis<T: Float>(signal: &Signal<T>, coefficient: T) -> Signal<T> {
    let x = signal.samples();
    let mut y = Vec::with_capacity(x.len());
    if let Some(&first) = x.first() {
        y.push(first);
        for w in x.windows(2) {
            y.push(w[1] - coefficient * w[0]);
        }
    }
    Signal::new(y, signal.sample_rate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn first_sample_is_unchanged() {
        let signal = Signal::new(vec![0.5, 0.2, -0.1], 8000);
        let out = pre_emphasis(&signal, 0.97);
        assert_abs_diff_eq!(out.samples()[0], 0.5);
    }

    #[test]
    fn difference_uses_previous_input_sample() {
        let signal = Signal::new(vec![1.0, 1.0, 1.0], 8000);
        let out = pre_emphasis(&signal, 0.97);
        assert_abs_diff_eq!(out.samples()[1], 1.0 - 0.97);
        assert_abs_diff_eq!(out.samples()[2], 1.0 - 0.97);
    }

    #[test]
    fn length_and_rate_are_preserved() {
        let signal = Signal::new(vec![0.0; 17], 44100);
        let out = pre_emphasis(&signal, 0.5);
        assert_eq!(out.len(), 17);
        assert_eq!(out.sample_rate(), 44100);
    }
}
