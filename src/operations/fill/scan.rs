use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use super::rotated::RotatedSegment;
use crate::geometry::{Boundary, LineStyle, Segment};
use crate::math::{Point2, ScanFrame};

/// Lazy sequence of fill strokes produced by [`super::ScanlineFill`].
///
/// Strokes come out in scan order: by sample position along the scan axis,
/// then by ascending crossing pair within one sample. The iterator cannot be
/// restarted; run the fill again for a fresh scan.
#[derive(Debug, Clone)]
pub struct FillIter {
    frame: ScanFrame,
    style: LineStyle,
    spacing: f64,
    segments: Vec<RotatedSegment>,
    min_x: f64,
    max_x: f64,
    /// Highest sample index that can still land on or before `max_x`.
    last_step: Option<usize>,
    /// Index of the next sample to scan.
    step: usize,
    /// Sorted crossings of the current sample.
    crossings: Vec<f64>,
    current_x: f64,
    next_pair: usize,
    finished: bool,
}

impl FillIter {
    pub(super) fn new(boundary: &Boundary, frame: ScanFrame, spacing: f64, style: LineStyle) -> Self {
        let mut segments = Vec::with_capacity(boundary.len());
        for segment in boundary {
            if !segment.is_finite() {
                warn!(?segment, "skipping boundary segment with non-finite coordinates");
                continue;
            }
            segments.push(RotatedSegment::new(segment, &frame));
        }

        let min_x = segments
            .iter()
            .map(|s| s.p1.x)
            .fold(f64::INFINITY, f64::min);
        let max_x = segments
            .iter()
            .map(|s| s.p2.x)
            .fold(f64::NEG_INFINITY, f64::max);

        debug!(
            segments = segments.len(),
            min_x, max_x, spacing, "starting scanline fill"
        );

        Self {
            frame,
            style,
            spacing,
            finished: segments.is_empty(),
            crossings: Vec::with_capacity(segments.len()),
            segments,
            min_x,
            max_x,
            last_step: last_step(min_x, max_x, spacing),
            step: 0,
            current_x: min_x,
            next_pair: 0,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn sample_x(&self, step: usize) -> f64 {
        self.min_x + step as f64 * self.spacing
    }

    /// Returns the position of the next sample strictly past `current_x`.
    ///
    /// When `spacing` is finer than the float step at `current_x`, several
    /// indices round to the same position; those are skipped so no sample
    /// is scanned twice.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn next_distinct_sample(&mut self) -> f64 {
        let mut x = self.sample_x(self.step);
        if self.step == 0 || x > self.current_x {
            return x;
        }
        // Jump to just below the first index whose exact position lies past
        // the midpoint between `current_x` and its successor.
        let half_ulp = (next_up(self.current_x) - self.current_x) / 2.0;
        let jump = ((self.current_x - self.min_x + half_ulp) / self.spacing).ceil() - 1.0;
        if jump.is_finite() && jump > self.step as f64 && jump < usize::MAX as f64 {
            self.step = jump as usize;
            x = self.sample_x(self.step);
        }
        while x <= self.current_x {
            self.step += 1;
            x = self.sample_x(self.step);
        }
        x
    }

    /// Moves to the next sample. Returns `false` once the scan is past `max_x`.
    fn advance(&mut self) -> bool {
        if self.finished {
            return false;
        }
        let x = self.next_distinct_sample();
        if x > self.max_x {
            self.finished = true;
            self.crossings.clear();
            self.next_pair = 0;
            return false;
        }
        self.step += 1;
        self.current_x = x;
        self.next_pair = 0;
        self.crossings.clear();
        self.crossings
            .extend(self.segments.iter().filter_map(|s| s.crossing_at(x)));
        self.crossings.sort_by(f64::total_cmp);
        trace!(x, crossings = self.crossings.len(), "scan sample");
        true
    }

    fn stroke(&self, y_low: f64, y_high: f64) -> Segment {
        let start = self.frame.from_scan(&Point2::new(self.current_x, y_low));
        let end = self.frame.from_scan(&Point2::new(self.current_x, y_high));
        Segment::with_style(start, end, self.style)
    }

    fn pending_pairs(&self) -> usize {
        self.crossings.len().saturating_sub(self.next_pair) / 2
    }

    /// Upper bound on the samples still to scan, counted by index.
    fn remaining_samples(&self) -> Option<usize> {
        self.last_step
            .map(|last| last.saturating_add(1).saturating_sub(self.step))
    }
}

/// Highest index `i` for which `min_x + i * spacing` can round to a value
/// not greater than `max_x`, or `None` if that index does not fit a `usize`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn last_step(min_x: f64, max_x: f64, spacing: f64) -> Option<usize> {
    // Covers the rounding of both the product and the sum in `sample_x`.
    let slack = 4.0 * f64::EPSILON * (min_x.abs() + max_x.abs());
    let last = ((max_x - min_x + slack) / spacing).floor() + 1.0;
    (last.is_finite() && last >= 0.0 && last < usize::MAX as f64).then_some(last as usize)
}

/// Smallest `f64` greater than a finite `x`.
fn next_up(x: f64) -> f64 {
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

impl Iterator for FillIter {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            if self.next_pair + 1 < self.crossings.len() {
                let y_low = self.crossings[self.next_pair];
                let y_high = self.crossings[self.next_pair + 1];
                self.next_pair += 2;
                return Some(self.stroke(y_low, y_high));
            }
            if !self.advance() {
                return None;
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.pending_pairs();
        if self.finished {
            return (pending, Some(pending));
        }
        let per_sample = self.segments.len() / 2;
        let upper = self
            .remaining_samples()
            .and_then(|samples| samples.checked_mul(per_sample))
            .and_then(|strokes| strokes.checked_add(pending));
        (pending, upper)
    }
}

impl FusedIterator for FillIter {}
