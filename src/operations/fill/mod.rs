mod rotated;
mod scan;

pub use scan::FillIter;

use crate::error::{ParameterError, Result};
use crate::geometry::{Boundary, LineStyle, Segment};
use crate::math::ScanFrame;

/// Fills the interior of a boundary with parallel strokes.
///
/// The boundary is rotated by `angle_degrees` so that the scan axis becomes
/// the x axis, sampled every `spacing` units from its minimum extent, and at
/// each sample the sorted crossings are paired by the even-odd rule. Each
/// pair becomes one stroke, rotated back into world coordinates.
///
/// An odd leftover crossing is dropped, so open boundaries and lone segments
/// contribute nothing where they are not matched by another crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanlineFill {
    angle_degrees: f64,
    spacing: f64,
    style: LineStyle,
}

impl ScanlineFill {
    /// Creates a new `ScanlineFill` operation.
    ///
    /// * `angle_degrees` - Rotation of the scan frame, counter-clockwise.
    /// * `spacing` - Distance between consecutive strokes.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError` if the angle is not finite, or the spacing is
    /// not finite or not positive.
    pub fn new(angle_degrees: f64, spacing: f64) -> Result<Self> {
        if !angle_degrees.is_finite() {
            return Err(ParameterError::NonFiniteAngle(angle_degrees).into());
        }
        if !spacing.is_finite() {
            return Err(ParameterError::NonFiniteSpacing(spacing).into());
        }
        if spacing <= 0.0 {
            return Err(ParameterError::NonPositiveSpacing(spacing).into());
        }
        Ok(Self {
            angle_degrees,
            spacing,
            style: LineStyle::default(),
        })
    }

    /// Sets the kind and width attached to every produced stroke.
    #[must_use]
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the fill angle in degrees.
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// Returns the stroke spacing.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the style attached to produced strokes.
    #[must_use]
    pub fn style(&self) -> LineStyle {
        self.style
    }

    /// Starts a fresh scan over `boundary`.
    ///
    /// The boundary is read once up front; the returned iterator does not
    /// borrow it.
    #[must_use]
    pub fn execute(&self, boundary: &Boundary) -> FillIter {
        FillIter::new(
            boundary,
            ScanFrame::from_degrees(self.angle_degrees),
            self.spacing,
            self.style,
        )
    }

    /// Runs the fill to completion.
    #[must_use]
    pub fn collect_into_vec(&self, boundary: &Boundary) -> Vec<Segment> {
        self.execute(boundary).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::TrackFillError;
    use crate::geometry::LineKind;
    use crate::math::Point2;

    const EPS: f64 = 1e-9;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::from_coords(x1, y1, x2, y2)
    }

    fn polygon(points: &[(f64, f64)]) -> Boundary {
        let n = points.len();
        (0..n)
            .map(|i| {
                let (x1, y1) = points[i];
                let (x2, y2) = points[(i + 1) % n];
                seg(x1, y1, x2, y2)
            })
            .collect()
    }

    fn two_rails() -> Boundary {
        Boundary::from_segments(vec![seg(0.0, 0.0, 10.0, 0.0), seg(0.0, 10.0, 10.0, 10.0)])
    }

    fn assert_point(p: &Point2, x: f64, y: f64) {
        assert_abs_diff_eq!(p.x, x, epsilon = EPS);
        assert_abs_diff_eq!(p.y, y, epsilon = EPS);
    }

    #[test]
    fn two_rails_at_zero_degrees() {
        let fill = ScanlineFill::new(0.0, 5.0).unwrap();
        let strokes = fill.collect_into_vec(&two_rails());

        assert_eq!(strokes.len(), 3);
        for (stroke, x) in strokes.iter().zip([0.0, 5.0, 10.0]) {
            assert_point(&stroke.start, x, 0.0);
            assert_point(&stroke.end, x, 10.0);
        }
    }

    #[test]
    fn two_rails_parallel_to_strokes_at_ninety_degrees() {
        // Both rails collapse to single points on the scan axis, so every
        // sample sees exactly one crossing and nothing is paired.
        let fill = ScanlineFill::new(90.0, 5.0).unwrap();
        assert!(fill.collect_into_vec(&two_rails()).is_empty());
    }

    #[test]
    fn square_at_ninety_degrees_gives_horizontal_strokes() {
        let square = polygon(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let strokes = ScanlineFill::new(90.0, 3.0).unwrap().collect_into_vec(&square);

        assert_eq!(strokes.len(), 4);
        for (stroke, y) in strokes.iter().zip([10.0, 7.0, 4.0, 1.0]) {
            assert_point(&stroke.start, 0.0, y);
            assert_point(&stroke.end, 10.0, y);
        }
    }

    #[test]
    fn square_at_forty_five_degrees_stays_inside() {
        let square = polygon(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let strokes = ScanlineFill::new(45.0, 1.0).unwrap().collect_into_vec(&square);

        assert!(strokes.len() > 10);
        for stroke in &strokes {
            let d = stroke.end - stroke.start;
            assert_abs_diff_eq!(d.x, d.y, epsilon = EPS);
            for p in [stroke.start, stroke.end] {
                assert!((-EPS..=10.0 + EPS).contains(&p.x), "x={} outside", p.x);
                assert!((-EPS..=10.0 + EPS).contains(&p.y), "y={} outside", p.y);
            }
        }
    }

    #[test]
    fn empty_boundary_yields_nothing() {
        for angle in [0.0, 33.0, 90.0, 271.5] {
            let fill = ScanlineFill::new(angle, 0.5).unwrap();
            let mut iter = fill.execute(&Boundary::new());
            assert_eq!(iter.size_hint(), (0, Some(0)));
            assert!(iter.next().is_none());
        }
    }

    #[test]
    fn spacing_wider_than_span_samples_once() {
        let strokes = ScanlineFill::new(0.0, 20.0)
            .unwrap()
            .collect_into_vec(&two_rails());
        assert_eq!(strokes.len(), 1);
        assert_point(&strokes[0].start, 0.0, 0.0);
        assert_point(&strokes[0].end, 0.0, 10.0);
    }

    #[test]
    fn single_segment_yields_nothing() {
        let lone = [
            seg(0.0, 0.0, 10.0, 3.0),
            seg(0.0, 0.0, 0.0, 10.0),
            seg(4.0, 4.0, 4.0, 4.0),
        ];
        for segment in lone {
            let boundary = Boundary::from_segments(vec![segment]);
            for angle in [0.0, 15.0, 90.0, 180.0, 359.0] {
                for spacing in [0.1, 1.0, 7.5] {
                    let fill = ScanlineFill::new(angle, spacing).unwrap();
                    assert_eq!(fill.execute(&boundary).count(), 0);
                }
            }
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let shape = polygon(&[(0.0, 0.0), (12.0, 1.0), (9.0, 7.0), (4.0, 3.0), (1.0, 8.0)]);
        let fill = ScanlineFill::new(23.0, 0.7).unwrap();
        let first = fill.collect_into_vec(&shape);
        let second = fill.collect_into_vec(&shape);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn zero_angle_strokes_end_on_boundary() {
        let triangle = polygon(&[(0.0, 0.0), (9.0, 2.0), (3.0, 8.0)]);
        let strokes = ScanlineFill::new(0.0, 0.5).unwrap().collect_into_vec(&triangle);
        assert!(!strokes.is_empty());

        for stroke in &strokes {
            assert_eq!(stroke.start.x, stroke.end.x);
            let x = stroke.start.x;
            let boundary_ys: Vec<f64> = triangle
                .iter()
                .filter(|s| x >= s.start.x.min(s.end.x) && x <= s.start.x.max(s.end.x))
                .map(|s| s.start.y + (x - s.start.x) / (s.end.x - s.start.x) * (s.end.y - s.start.y))
                .collect();
            for y in [stroke.start.y, stroke.end.y] {
                assert!(
                    boundary_ys.iter().any(|b| (b - y).abs() < 1e-12),
                    "y={y} at x={x} not on boundary"
                );
            }
        }
    }

    #[test]
    fn stroke_count_per_sample_is_half_the_crossings() {
        // Arrow-like outline with no vertical edges.
        let shape = polygon(&[
            (0.0, 5.0),
            (8.0, 0.0),
            (6.0, 4.0),
            (14.0, 1.0),
            (11.0, 9.0),
            (5.0, 7.0),
        ]);
        let fill = ScanlineFill::new(0.0, 0.3).unwrap();

        let mut per_x: BTreeMap<u64, usize> = BTreeMap::new();
        for stroke in fill.execute(&shape) {
            *per_x.entry(stroke.start.x.to_bits()).or_default() += 1;
        }

        let mut x = 0.0_f64;
        let mut step = 0_u32;
        while x <= 14.0 {
            let covering = shape
                .iter()
                .filter(|s| x >= s.start.x.min(s.end.x) && x <= s.start.x.max(s.end.x))
                .count();
            let produced = per_x.get(&x.to_bits()).copied().unwrap_or(0);
            assert_eq!(produced, covering / 2, "at x={x}");
            step += 1;
            x = f64::from(step) * 0.3;
        }
    }

    #[test]
    fn non_convex_shape_leaves_notch_empty() {
        // A "C" opening to the right; the notch spans y in (10, 20) for x > 10.
        let shape = polygon(&[
            (0.0, 0.0),
            (30.0, 0.0),
            (30.0, 10.0),
            (10.0, 10.0),
            (10.0, 20.0),
            (30.0, 20.0),
            (30.0, 30.0),
            (0.0, 30.0),
        ]);
        let strokes = ScanlineFill::new(0.0, 4.0).unwrap().collect_into_vec(&shape);

        let at_12: Vec<&Segment> = strokes.iter().filter(|s| s.start.x == 12.0).collect();
        assert_eq!(at_12.len(), 2);
        assert_point(&at_12[0].start, 12.0, 0.0);
        assert_point(&at_12[0].end, 12.0, 10.0);
        assert_point(&at_12[1].start, 12.0, 20.0);
        assert_point(&at_12[1].end, 12.0, 30.0);

        let at_4: Vec<&Segment> = strokes.iter().filter(|s| s.start.x == 4.0).collect();
        assert_eq!(at_4.len(), 1);
        assert_point(&at_4[0].end, 4.0, 30.0);
    }

    #[test]
    fn disjoint_shapes_fill_independently() {
        let mut boundary = two_rails();
        boundary.push(seg(20.0, 0.0, 30.0, 0.0));
        boundary.push(seg(20.0, 10.0, 30.0, 10.0));

        let xs: Vec<f64> = ScanlineFill::new(0.0, 5.0)
            .unwrap()
            .execute(&boundary)
            .map(|s| s.start.x)
            .collect();
        assert_eq!(xs, vec![0.0, 5.0, 10.0, 20.0, 25.0, 30.0]);
    }

    #[test]
    fn input_order_and_orientation_do_not_matter() {
        let points = [(0.0, 0.0), (12.0, 1.0), (9.0, 7.0), (4.0, 3.0), (1.0, 8.0)];
        let forward = polygon(&points);
        let shuffled: Boundary = forward
            .iter()
            .rev()
            .map(|s| Segment::new(s.end, s.start))
            .collect();

        let fill = ScanlineFill::new(61.0, 0.8).unwrap();
        assert_eq!(fill.collect_into_vec(&forward), fill.collect_into_vec(&shuffled));
    }

    #[test]
    fn strokes_carry_requested_style() {
        let style = LineStyle::new(LineKind::Acceleration, 2.5);
        let strokes = ScanlineFill::new(0.0, 5.0)
            .unwrap()
            .with_style(style)
            .collect_into_vec(&two_rails());
        assert!(strokes.iter().all(|s| s.style() == style));
    }

    #[test]
    fn non_finite_segments_are_skipped() {
        let mut boundary = two_rails();
        boundary.push(seg(f64::NAN, 0.0, 4.0, 4.0));
        boundary.push(seg(0.0, 0.0, f64::INFINITY, 4.0));
        let strokes = ScanlineFill::new(0.0, 5.0).unwrap().collect_into_vec(&boundary);
        assert_eq!(strokes.len(), 3);
    }

    #[test]
    fn size_hint_bounds_output() {
        let shape = polygon(&[(0.0, 0.0), (12.0, 1.0), (9.0, 7.0), (4.0, 3.0), (1.0, 8.0)]);
        let fill = ScanlineFill::new(17.0, 0.25).unwrap();
        let iter = fill.execute(&shape);
        let (lower, upper) = iter.size_hint();
        let count = iter.count();
        assert_eq!(lower, 0);
        assert!(upper.unwrap() >= count);
    }

    #[test]
    fn spacing_below_float_resolution_does_not_repeat_samples() {
        // At 1e16 adjacent doubles are 2.0 apart, so a 0.25 stride rounds
        // many indices onto the same position.
        const BASE: f64 = 1e16;
        let boundary = Boundary::from_segments(vec![
            seg(BASE, 0.0, BASE + 4.0, 0.0),
            seg(BASE, 10.0, BASE + 4.0, 10.0),
        ]);
        let mut iter = ScanlineFill::new(0.0, 0.25).unwrap().execute(&boundary);

        let mut offsets = Vec::new();
        loop {
            let (_, upper) = iter.size_hint();
            let remaining = iter.clone().count();
            assert!(upper.unwrap() >= remaining, "{upper:?} < {remaining}");
            match iter.next() {
                Some(stroke) => offsets.push(stroke.start.x - BASE),
                None => break,
            }
        }

        assert_eq!(offsets, vec![0.0, 2.0, 4.0]);
        // ⌈(maxX - minX) / spacing⌉ * ⌊n / 2⌋
        assert!(offsets.len() <= 16);
    }

    #[test]
    fn iterator_is_fused() {
        let mut iter = ScanlineFill::new(0.0, 5.0).unwrap().execute(&two_rails());
        assert_eq!(iter.by_ref().count(), 3);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn invalid_parameters_rejected() {
        let cases = [
            (0.0, 0.0, ParameterError::NonPositiveSpacing(0.0)),
            (0.0, -1.0, ParameterError::NonPositiveSpacing(-1.0)),
            (0.0, f64::INFINITY, ParameterError::NonFiniteSpacing(f64::INFINITY)),
            (f64::INFINITY, 1.0, ParameterError::NonFiniteAngle(f64::INFINITY)),
        ];
        for (angle, spacing, expected) in cases {
            match ScanlineFill::new(angle, spacing) {
                Err(TrackFillError::Parameter(err)) => assert_eq!(err, expected),
                other => panic!("expected parameter error, got {other:?}"),
            }
        }
        assert!(ScanlineFill::new(0.0, f64::NAN).is_err());
        assert!(ScanlineFill::new(f64::NAN, 1.0).is_err());
    }
}
