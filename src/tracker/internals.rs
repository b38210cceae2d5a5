//! Frame-level building blocks: FFT autocorrelation and the peak-lag search.

use rustfft::FftPlanner;

use crate::float::Float;
use crate::utils::buffer::{copy_complex_to_real, copy_real_to_complex, modulus_squared, BufferPool};

/// Compute the non-negative-lag half of the linear autocorrelation of `frame`
/// into `result` (`result.len()` lags, lag 0 first).
///
/// The frame is zero-padded to the pool's buffer size before the FFT, which
/// must be at least `2 * frame.len()` so the circular correlation of the
/// padded frame equals the linear one.
pub fn autocorrelation<T>(frame: &[T], buffers: &mut BufferPool<T>, result: &mut [T])
where
    T: Float,
{
    assert!(buffers.buffer_size >= 2 * frame.len());
    assert!(result.len() <= frame.len());

    let (mut ref1, mut ref2) = (buffers.get_complex_buffer(), buffers.get_complex_buffer());
    let frame_complex = &mut ref1[..];
    let scratch = &mut ref2[..];

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(frame_complex.len());
    let inv_fft = planner.plan_fft_inverse(frame_complex.len());

    copy_real_to_complex(frame, frame_complex);
    fft.process_with_scratch(frame_complex, scratch);
    modulus_squared(frame_complex);
    inv_fft.process_with_scratch(frame_complex, scratch);

    // rustfft does not normalize; one division by the length covers the
    // forward/inverse round trip.
    let normalization = T::one() / T::from_usize(frame_complex.len()).unwrap();
    frame_complex
        .iter_mut()
        .for_each(|c| *c = *c * normalization);
    copy_complex_to_real(frame_complex, result);
}

/// First lag whose first difference is positive, i.e. where the
/// autocorrelation stops decaying away from lag 0 and starts rising towards
/// the first period peak. `None` means the sequence never rises (silence or
/// noise-like content).
pub fn first_rising_lag<T: Float>(corr: &[T]) -> Option<usize> {
    corr.windows(2).position(|w| w[1] > w[0])
}

/// Lag of the maximum autocorrelation value at or after `start`. The first
/// occurrence wins ties.
pub fn peak_lag<T: Float>(corr: &[T], start: usize) -> usize {
    let mut best = start;
    let mut best_value = corr[start];
    for (lag, &value) in corr.iter().enumerate().skip(start + 1) {
        if value > best_value {
            best = lag;
            best_value = value;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn autocorrelation_matches_direct_computation() {
        let frame: Vec<f64> = vec![0., 1., 2., 0., -1., -2.];
        let buffers = &mut BufferPool::new(2 * frame.len());

        let expected: Vec<f64> = (0..frame.len())
            .map(|lag| {
                frame[..frame.len() - lag]
                    .iter()
                    .zip(frame[lag..].iter())
                    .map(|(a, b)| a * b)
                    .sum()
            })
            .collect();

        let mut computed = vec![0.; frame.len()];
        autocorrelation(&frame, buffers, &mut computed);
        for (got, want) in computed.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
        }
    }

    #[test]
    fn lag_zero_dominates_for_a_dc_free_frame() {
        let frame: Vec<f64> = (0..64)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 / 16.0).sin())
            .collect();
        let buffers = &mut BufferPool::new(2 * frame.len());
        let mut corr = vec![0.; frame.len()];
        autocorrelation(&frame, buffers, &mut corr);
        let max = corr.iter().cloned().fold(f64::MIN, f64::max);
        assert_abs_diff_eq!(corr[0], max, epsilon = 1e-9);
    }

    #[test]
    fn rising_lag_is_the_first_positive_difference() {
        let corr = [5.0, 3.0, 1.0, 2.0, 4.0, 0.0];
        assert_eq!(first_rising_lag(&corr), Some(2));
    }

    #[test]
    fn flat_or_decaying_sequences_have_no_rising_lag() {
        assert_eq!(first_rising_lag(&[0.0f64; 8]), None);
        assert_eq!(first_rising_lag(&[4.0, 3.0, 2.0, 1.0]), None);
    }

    #[test]
    fn peak_search_is_restricted_to_lags_after_start() {
        let corr = [5.0, 3.0, 1.0, 2.0, 4.0, 0.0];
        assert_eq!(peak_lag(&corr, 2), 4);
        // Without the restriction the zero-lag energy would win.
        assert_eq!(peak_lag(&corr, 0), 0);
    }

    #[test]
    fn earlier_lag_wins_a_tie() {
        let corr = [1.0, 0.0, 3.0, 0.0, 3.0];
        assert_eq!(peak_lag(&corr, 1), 2);
    }
}
