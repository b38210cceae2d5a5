//! # Pitch Track
//! *pitch_track* extracts a time-varying fundamental-frequency estimate from
//! a monophonic voice recording. The pipeline band-limits the signal with a
//! Butterworth band-pass, applies pre-emphasis, then slides a frame window
//! across the result and estimates one pitch per frame from the
//! autocorrelation peak.
//!
//! Decoding, resampling and plotting are out of scope: the input is a mono
//! sample buffer plus its sample rate, and the output is an ordered sequence
//! of `(time, pitch)` pairs where a pitch of `0` marks an unvoiced or
//! unreliable frame.
//!
//! # Examples
//! ```
//! use pitch_track::pipeline::Pipeline;
//! use pitch_track::signal::Signal;
//!
//! fn main() {
//!     const SAMPLE_RATE: usize = 16000;
//!     const SIZE: usize = 4 * SAMPLE_RATE;
//!
//!     // Signal coming from some source (decoded file, microphone, etc...)
//!     let dt = 1.0 / SAMPLE_RATE as f64;
//!     let freq = 150.0;
//!     let samples: Vec<f64> = (0..SIZE)
//!         .map(|x| (2.0 * std::f64::consts::PI * x as f64 * dt * freq).sin())
//!         .collect();
//!     let signal = Signal::new(samples, SAMPLE_RATE);
//!
//!     let track = Pipeline::default().run(&signal).unwrap();
//!
//!     for point in &track {
//!         println!("t = {:.3} s, pitch = {:.1} Hz", point.time, point.pitch);
//!     }
//! }
//! ```

pub use error::{Error, Result};
pub use filter::design::FilterCoefficients;
pub use pipeline::Pipeline;
pub use signal::{PitchPoint, PitchTrack, Signal};

pub mod error;
pub mod filter;
pub mod float;
pub mod pipeline;
pub mod signal;
pub mod tracker;
pub mod utils;
