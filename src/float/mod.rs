//! Generic [Float] type which acts as a stand-in for `f32` or `f64`.
use rustfft::num_traits::Float as NumFloat;
use rustfft::FftNum;
use std::fmt::{Debug, Display};

/// Signals are processed as arrays of [Float]s. A [Float] is normally `f32` or `f64`.
///
/// The full `num_traits::Float` bound (rather than `FloatCore`) is needed so
/// the filter design can take `tan`, `sqrt` and complex square roots.
pub trait Float: Display + Debug + NumFloat + FftNum {}

impl Float for f64 {}
impl Float for f32 {}
