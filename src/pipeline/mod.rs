//! The fixed-order composition: band-pass filter, pre-emphasis, pitch tracker.

use log::debug;

use crate::error::Result;
use crate::filter::design::butter_bandpass;
use crate::filter::iir::filter;
use crate::filter::pre_emphasis::{pre_emphasis, DEFAULT_COEFFICIENT};
use crate::float::Float;
use crate::signal::{PitchTrack, Signal};
use crate::tracker::{PitchTracker, DEFAULT_FRAME_LENGTH, DEFAULT_HOP_LENGTH};

/// Default band-pass edges in Hz, bracketing typical voice fundamentals.
pub const DEFAULT_BAND_HZ: (f64, f64) = (80.0, 300.0);
/// Default Butterworth prototype order.
pub const DEFAULT_ORDER: usize = 5;

/// Configuration for one pitch-extraction run.
///
/// The stages compose in a fixed order with no branching: the signal is
/// band-limited, pre-emphasized, then handed to the tracker. A configuration
/// error from the filter design aborts the run; ambiguous acoustic content
/// never does (it shows up as `0` pitches in the track).
#[derive(Debug, Clone)]
pub struct Pipeline<T>
where
    T: Float,
{
    /// Low and high band-pass cutoffs in Hz.
    pub band: (T, T),
    /// Butterworth prototype order (the band-pass doubles it).
    pub order: usize,
    /// Pre-emphasis coefficient.
    pub pre_emphasis: T,
    /// Analysis window in samples.
    pub frame_length: usize,
    /// Step between windows in samples.
    pub hop_length: usize,
}

impl<T> Default for Pipeline<T>
where
    T: Float,
{
    fn default() -> Self {
        Pipeline {
            band: (
                T::from_f64(DEFAULT_BAND_HZ.0).unwrap(),
                T::from_f64(DEFAULT_BAND_HZ.1).unwrap(),
            ),
            order: DEFAULT_ORDER,
            pre_emphasis: T::from_f64(DEFAULT_COEFFICIENT).unwrap(),
            frame_length: DEFAULT_FRAME_LENGTH,
            hop_length: DEFAULT_HOP_LENGTH,
        }
    }
}

impl<T> Pipeline<T>
where
    T: Float,
{
    /// Run the full pipeline on `signal` and return the pitch track.
    pub fn run(&self, signal: &Signal<T>) -> Result<PitchTrack<T>> {
        debug!(
            "pipeline start: {} samples at {} Hz, band {}..{} Hz, order {}",
            signal.len(),
            signal.sample_rate(),
            self.band.0,
            self.band.1,
            self.order
        );

        let coefficients =
            butter_bandpass(self.band.0, self.band.1, signal.sample_rate(), self.order)?;
        let band_limited = filter(signal, &coefficients)?;
        let emphasized = pre_emphasis(&band_limited, self.pre_emphasis);

        let mut tracker = PitchTracker::new(self.frame_length, self.hop_length);
        Ok(tracker.track(&emphasized))
    }
}
