//! Frame-wise autocorrelation pitch tracking.

use log::debug;

use crate::float::Float;
use crate::signal::{PitchTrack, Signal};
use crate::utils::buffer::{new_real_buffer, BufferPool};

pub mod internals;

use internals::{autocorrelation, first_rising_lag, peak_lag};

/// Default analysis window, in samples.
pub const DEFAULT_FRAME_LENGTH: usize = 2048;
/// Default step between successive windows, in samples.
pub const DEFAULT_HOP_LENGTH: usize = 512;
/// Estimates at or above this frequency are treated as detection failures
/// (a harmonic or noise lock-in) and reported as unvoiced. Voice fundamentals
/// surviving the 80-300 Hz band-pass cannot plausibly reach it.
pub const PITCH_CEILING_HZ: f64 = 500.0;

/// Slides a fixed-length window across a signal and estimates one pitch per
/// frame from the autocorrelation peak.
///
/// Frames are processed independently; there is no cross-frame smoothing or
/// hysteresis. Scratch buffers live in a [BufferPool], so a tracker can chew
/// through long signals without re-allocating per frame.
pub struct PitchTracker<T>
where
    T: Float,
{
    frame_length: usize,
    hop_length: usize,
    pitch_ceiling: T,
    buffers: BufferPool<T>,
}

impl<T> PitchTracker<T>
where
    T: Float,
{
    pub fn new(frame_length: usize, hop_length: usize) -> Self {
        assert!(frame_length > 0, "frame length must be positive");
        assert!(hop_length > 0, "hop length must be positive");
        PitchTracker {
            frame_length,
            hop_length,
            pitch_ceiling: T::from_f64(PITCH_CEILING_HZ).unwrap(),
            buffers: BufferPool::new(2 * frame_length),
        }
    }

    /// Replace the default [PITCH_CEILING_HZ] outlier cutoff.
    pub fn with_pitch_ceiling(mut self, ceiling_hz: T) -> Self {
        self.pitch_ceiling = ceiling_hz;
        self
    }

    /// Estimate one pitch per frame. A signal shorter than one frame yields
    /// an empty track; frames with no detectable periodicity yield pitch `0`.
    pub fn track(&mut self, signal: &Signal<T>) -> PitchTrack<T> {
        let sample_rate = T::from_usize(signal.sample_rate()).unwrap();
        let capacity = signal
            .len()
            .saturating_sub(self.frame_length)
            .div_ceil(self.hop_length);
        let mut track = PitchTrack::with_capacity(capacity);

        let mut centered = new_real_buffer::<T>(self.frame_length);
        let mut corr = new_real_buffer::<T>(self.frame_length);

        for frame in signal.frames(self.frame_length, self.hop_length) {
            let samples = frame.samples();

            // DC removal, so lag 0 reflects signal energy rather than offset.
            let sum = samples.iter().fold(T::zero(), |acc, &s| acc + s);
            let mean = sum / T::from_usize(samples.len()).unwrap();
            centered
                .iter_mut()
                .zip(samples.iter())
                .for_each(|(c, &s)| *c = s - mean);

            autocorrelation(&centered, &mut self.buffers, &mut corr);

            let pitch = match first_rising_lag(&corr) {
                // Monotonically decaying autocorrelation: silence or noise.
                None => T::zero(),
                Some(start) => {
                    let lag = peak_lag(&corr, start);
                    if lag == 0 {
                        T::zero()
                    } else {
                        let pitch = sample_rate / T::from_usize(lag).unwrap();
                        if pitch >= self.pitch_ceiling {
                            T::zero()
                        } else {
                            pitch
                        }
                    }
                }
            };

            let time = T::from_usize(frame.offset()).unwrap() / sample_rate;
            track.push(time, pitch);
        }

        debug!(
            "tracked {} frames (frame {}, hop {})",
            track.len(),
            self.frame_length,
            self.hop_length
        );
        track
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f64, size: usize, sample_rate: usize) -> Signal<f64> {
        let dx = 2.0 * std::f64::consts::PI * freq / sample_rate as f64;
        let samples = (0..size).map(|i| (i as f64 * dx).sin()).collect();
        Signal::new(samples, sample_rate)
    }

    #[test]
    fn pure_tone_is_tracked_near_its_frequency() {
        let signal = sine(150.0, 16000, 16000);
        let mut tracker = PitchTracker::new(2048, 512);
        let track = tracker.track(&signal);
        assert!(!track.is_empty());
        for point in &track {
            assert!(
                (point.pitch - 150.0).abs() < 3.0,
                "pitch {} at t={}",
                point.pitch,
                point.time
            );
        }
    }

    #[test]
    fn silence_yields_the_unvoiced_sentinel() {
        let signal = Signal::new(vec![0.0f64; 8192], 16000);
        let mut tracker = PitchTracker::new(2048, 512);
        for point in &tracker.track(&signal) {
            assert_eq!(point.pitch, 0.0);
        }
    }

    #[test]
    fn short_signal_yields_an_empty_track() {
        let signal = sine(150.0, 2048, 16000);
        let mut tracker = PitchTracker::new(2048, 512);
        assert!(tracker.track(&signal).is_empty());
    }

    #[test]
    fn estimates_above_the_ceiling_are_zeroed() {
        // A 800 Hz tone is a valid periodicity but an implausible voice
        // fundamental, so the ceiling folds it to 0.
        let signal = sine(800.0, 16000, 16000);
        let mut tracker = PitchTracker::new(2048, 512);
        for point in &tracker.track(&signal) {
            assert_eq!(point.pitch, 0.0);
        }
    }

    #[test]
    fn times_are_frame_offsets_over_the_sample_rate() {
        let signal = sine(150.0, 4097, 16000);
        let mut tracker = PitchTracker::new(2048, 512);
        let track = tracker.track(&signal);
        let times = track.times();
        for (i, time) in times.iter().enumerate() {
            let expected = (i * 512) as f64 / 16000.0;
            assert!((time - expected).abs() < 1e-12);
        }
        // Strictly increasing by construction.
        assert!(times.windows(2).all(|w| w[1] > w[0]));
    }
}
