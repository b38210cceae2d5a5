//! Butterworth band-pass design: analog prototype poles, low-pass to
//! band-pass transform, bilinear transform, then polynomial expansion into
//! direct-form `b`/`a` coefficients.

use log::debug;
use rustfft::num_complex::Complex;

use crate::error::{Error, Result};
use crate::float::Float;

/// Feed-forward (`b`) and feedback (`a`) coefficients of a causal linear
/// filter. Both vectors have length `order + 1` for a filter of that order;
/// `a[0]` is the normalization reference and is `1` after design.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCoefficients<T> {
    pub b: Vec<T>,
    pub a: Vec<T>,
}

impl<T: Float> FilterCoefficients<T> {
    /// Magnitude of the frequency response `|H(e^{jω})|` at `freq_hz`.
    pub fn magnitude_at(&self, freq_hz: T, sample_rate: usize) -> T {
        let two_pi = T::from_f64(2.0 * std::f64::consts::PI).unwrap();
        let omega = two_pi * freq_hz / T::from_usize(sample_rate).unwrap();
        let eval = |coeffs: &[T]| {
            coeffs
                .iter()
                .enumerate()
                .fold(Complex::new(T::zero(), T::zero()), |acc, (k, &c)| {
                    acc + Complex::from_polar(c, -omega * T::from_usize(k).unwrap())
                })
        };
        (eval(&self.b) / eval(&self.a)).norm()
    }
}

/// Design a digital Butterworth band-pass filter.
///
/// Cutoffs are in Hz and must satisfy `0 < low_hz < high_hz < sample_rate / 2`;
/// `order` is the analog prototype order (the band-pass doubles it, so the
/// returned vectors have length `2 * order + 1`). The design is maximally flat
/// in the pass band and `a[0]` comes out as exactly `1`.
pub fn butter_bandpass<T: Float>(
    low_hz: T,
    high_hz: T,
    sample_rate: usize,
    order: usize,
) -> Result<FilterCoefficients<T>> {
    let two = T::from_f64(2.0).unwrap();
    let nyquist = T::from_usize(sample_rate).unwrap() / two;
    if low_hz <= T::zero() || low_hz >= high_hz || high_hz >= nyquist {
        return Err(Error::InvalidBand);
    }
    if order < 1 {
        return Err(Error::InvalidOrder);
    }

    let pi = T::from_f64(std::f64::consts::PI).unwrap();
    let four = T::from_f64(4.0).unwrap();

    // Band edges normalized by Nyquist, pre-warped to compensate for the
    // frequency compression of the bilinear transform (internal rate fs = 2).
    let warped_low = four * (pi * (low_hz / nyquist) / two).tan();
    let warped_high = four * (pi * (high_hz / nyquist) / two).tan();
    let bandwidth = warped_high - warped_low;
    let center = (warped_low * warped_high).sqrt();

    // Poles of the analog low-pass prototype: evenly spaced on the left half
    // of the unit circle.
    let prototype: Vec<Complex<T>> = (0..order)
        .map(|k| {
            let m = T::from_isize(2 * k as isize + 1 - order as isize).unwrap();
            let theta = pi * m / (two * T::from_usize(order).unwrap());
            -Complex::new(T::zero(), theta).exp()
        })
        .collect();

    // Low-pass to band-pass: each prototype pole splits into a pair around the
    // band center, and `order` zeros appear at the origin.
    let half_bw = bandwidth / two;
    let center_sq = Complex::new(center * center, T::zero());
    let mut poles = Vec::with_capacity(2 * order);
    for p in &prototype {
        let scaled = *p * half_bw;
        let delta = (scaled * scaled - center_sq).sqrt();
        poles.push(scaled + delta);
        poles.push(scaled - delta);
    }
    let mut gain = bandwidth.powi(order as i32);

    // Bilinear transform at twice the internal rate. The `order` zeros at the
    // analog origin map to +1; the degree deficit pads with zeros at -1.
    let fs2 = two * two;
    let one = Complex::new(T::one(), T::zero());
    let mut zeros = vec![one; order];
    zeros.resize(2 * order, -one);

    let mut denominator = one;
    for p in poles.iter_mut() {
        denominator = denominator * (Complex::new(fs2, T::zero()) - *p);
        *p = (Complex::new(fs2, T::zero()) + *p) / (Complex::new(fs2, T::zero()) - *p);
    }
    gain = gain * (Complex::new(fs2.powi(order as i32), T::zero()) / denominator).re;

    let b = poly(&zeros).iter().map(|c| c.re * gain).collect();
    let a = poly(&poles).iter().map(|c| c.re).collect();

    debug!(
        "designed order-{} band-pass for {}..{} Hz at {} Hz",
        order, low_hz, high_hz, sample_rate
    );
    Ok(FilterCoefficients { b, a })
}

/// Expand a monic polynomial from its roots, leading coefficient first.
fn poly<T: Float>(roots: &[Complex<T>]) -> Vec<Complex<T>> {
    let mut coeffs = vec![Complex::new(T::one(), T::zero())];
    for r in roots {
        coeffs.push(Complex::new(T::zero(), T::zero()));
        for i in (1..coeffs.len()).rev() {
            let prev = coeffs[i - 1];
            coeffs[i] = coeffs[i] - *r * prev;
        }
    }
    coeffs
}
