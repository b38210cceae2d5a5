//! The buffers flowing through the pipeline: sample sequences, borrowed
//! analysis frames, and the resulting pitch track.

use crate::float::Float;

/// A mono sample sequence together with its sample rate in Hz.
///
/// Each pipeline stage consumes a `Signal` and produces a new one; nothing is
/// mutated in place across stage boundaries.
#[derive(Debug, Clone)]
pub struct Signal<T> {
    samples: Vec<T>,
    sample_rate: usize,
}

impl<T: Float> Signal<T> {
    pub fn new(samples: Vec<T>, sample_rate: usize) -> Self {
        assert!(sample_rate > 0, "sample rate must be positive");
        Signal {
            samples,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    pub fn sample_rate(&self) -> usize {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over fixed-length analysis windows starting at
    /// `0, hop_length, 2 * hop_length, …`, strictly below
    /// `len - frame_length`. A signal no longer than `frame_length`
    /// yields no frames at all.
    pub fn frames(&self, frame_length: usize, hop_length: usize) -> Frames<'_, T> {
        assert!(frame_length > 0, "frame length must be positive");
        assert!(hop_length > 0, "hop length must be positive");
        Frames {
            samples: &self.samples,
            frame_length,
            hop_length,
            offset: 0,
        }
    }
}

/// A borrowed, fixed-length window of a [Signal] plus its start offset.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a, T> {
    offset: usize,
    samples: &'a [T],
}

impl<'a, T: Float> Frame<'a, T> {
    /// Start offset of the frame, in samples from the beginning of the signal.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn samples(&self) -> &'a [T] {
        self.samples
    }
}

/// Lazy, finite iterator of [Frame]s over a signal. See [Signal::frames].
pub struct Frames<'a, T> {
    samples: &'a [T],
    frame_length: usize,
    hop_length: usize,
    offset: usize,
}

impl<'a, T: Float> Iterator for Frames<'a, T> {
    type Item = Frame<'a, T>;

    fn next(&mut self) -> Option<Frame<'a, T>> {
        if self.samples.len() <= self.frame_length || self.offset >= self.samples.len() - self.frame_length
        {
            return None;
        }
        let frame = Frame {
            offset: self.offset,
            samples: &self.samples[self.offset..self.offset + self.frame_length],
        };
        self.offset += self.hop_length;
        Some(frame)
    }
}

/// One per-frame estimate: the frame's start time in seconds and the detected
/// pitch in Hz, where `0` encodes "no pitch detected".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchPoint<T> {
    pub time: T,
    pub pitch: T,
}

/// The ordered sequence of per-frame pitch estimates produced by one pipeline
/// run. Times are strictly increasing; pitches are `0` or in `(0, ceiling)`.
#[derive(Debug, Clone, Default)]
pub struct PitchTrack<T> {
    points: Vec<PitchPoint<T>>,
}

impl<T: Float> PitchTrack<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        PitchTrack {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, time: T, pitch: T) {
        self.points.push(PitchPoint { time, pitch });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PitchPoint<T>] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PitchPoint<T>> {
        self.points.iter()
    }

    /// Frame start times in seconds, as a column for plotting.
    pub fn times(&self) -> Vec<T> {
        self.points.iter().map(|p| p.time).collect()
    }

    /// Pitch estimates in Hz, as a column for plotting.
    pub fn pitches(&self) -> Vec<T> {
        self.points.iter().map(|p| p.pitch).collect()
    }
}

impl<'a, T> IntoIterator for &'a PitchTrack<T> {
    type Item = &'a PitchPoint<T>;
    type IntoIter = std::slice::Iter<'a, PitchPoint<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
