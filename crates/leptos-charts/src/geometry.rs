//! Chart Geometry
//!
//! Pure layout math shared by the chart components.
//! Coordinates are SVG user units with the origin at the top-left corner.

use std::f64::consts::PI;

/// Drawing area inside an SVG viewBox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Frame {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pad_left: 44.0,
            pad_right: 12.0,
            pad_top: 12.0,
            pad_bottom: 28.0,
        }
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.pad_left - self.pad_right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.pad_top - self.pad_bottom).max(0.0)
    }

    pub fn right(&self) -> f64 {
        self.width - self.pad_right
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.pad_bottom
    }

    /// Vertical position of `value` on `scale`, clamped to the plot area
    pub fn y_for(&self, value: f64, scale: &Scale) -> f64 {
        let span = scale.max - scale.min;
        if span <= 0.0 {
            return self.bottom();
        }
        let ratio = ((value - scale.min) / span).clamp(0.0, 1.0);
        self.bottom() - ratio * self.plot_height()
    }
}

/// Value range of the vertical axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
}

impl Scale {
    /// Smallest "nice" range that contains zero and every finite value
    pub fn fit(values: impl IntoIterator<Item = f64>) -> Self {
        let (mut lo, mut hi) = (0.0f64, 0.0f64);
        for v in values.into_iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        let max = nice_ceiling(hi);
        let min = -nice_ceiling(-lo);
        if max - min <= 0.0 {
            return Self { min: 0.0, max: 1.0 };
        }
        Self { min, max }
    }

    /// `count + 1` evenly spaced tick values from min to max
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let count = count.max(1);
        let step = (self.max - self.min) / count as f64;
        (0..=count).map(|i| self.min + step * i as f64).collect()
    }
}

/// Round up to 1, 2, 5 or 10 times a power of ten
pub fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    let exponent = 10f64.powf(value.log10().floor());
    let fraction = value / exponent;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * exponent
}

/// Short tick label: 1500 -> "1.5k", 2000000 -> "2M"
pub fn format_tick(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (value / 1_000.0, "k")
    } else {
        (value, "")
    };
    if (scaled - scaled.round()).abs() < 1e-9 {
        format!("{}{}", scaled.round() as i64, suffix)
    } else {
        format!("{:.1}{}", scaled, suffix)
    }
}

/// Horizontal positions for `count` labels.
/// Banded layouts centre each label in its band; point layouts spread
/// labels edge to edge.
pub fn label_positions(count: usize, frame: &Frame, banded: bool) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let width = frame.plot_width();
    if banded || count == 1 {
        let band = width / count as f64;
        return (0..count)
            .map(|i| frame.pad_left + band * (i as f64 + 0.5))
            .collect();
    }
    let step = width / (count - 1) as f64;
    (0..count).map(|i| frame.pad_left + step * i as f64).collect()
}

/// Points of a line series, one per value
pub fn line_points(values: &[f64], frame: &Frame, scale: &Scale) -> Vec<(f64, f64)> {
    label_positions(values.len(), frame, false)
        .into_iter()
        .zip(values)
        .map(|(x, v)| (x, frame.y_for(*v, scale)))
        .collect()
}

/// SVG `points` attribute for a polyline
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One rectangle of a grouped bar chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub series: usize,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out grouped bars: one band per label, one bar per series inside it
pub fn bar_rects(series: &[Vec<f64>], label_count: usize, frame: &Frame, scale: &Scale) -> Vec<BarRect> {
    if label_count == 0 || series.is_empty() {
        return Vec::new();
    }
    let band = frame.plot_width() / label_count as f64;
    let group = band * 0.8;
    let bar_width = group / series.len() as f64;
    let zero = frame.y_for(0.0, scale);

    let mut rects = Vec::new();
    for (s, values) in series.iter().enumerate() {
        for (index, value) in values.iter().take(label_count).enumerate() {
            let top = frame.y_for(*value, scale);
            rects.push(BarRect {
                series: s,
                index,
                x: frame.pad_left + band * index as f64 + band * 0.1 + bar_width * s as f64,
                y: top.min(zero),
                width: bar_width,
                height: (zero - top).abs(),
            });
        }
    }
    rects
}

/// One ring segment of a doughnut chart
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Index of the source value
    pub index: usize,
    pub fraction: f64,
    pub start: f64,
    pub end: f64,
    pub path: String,
}

/// Ring segments for non-negative values, clockwise from twelve o'clock.
/// Zero and negative values produce no segment.
pub fn doughnut_segments(values: &[f64], cx: f64, cy: f64, outer: f64, inner: f64) -> Vec<Segment> {
    let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -PI / 2.0;
    let mut segments = Vec::new();
    for (index, value) in values.iter().enumerate() {
        if !value.is_finite() || *value <= 0.0 {
            continue;
        }
        let fraction = value / total;
        let start = angle;
        let end = start + fraction * 2.0 * PI;
        angle = end;
        segments.push(Segment {
            index,
            fraction,
            start,
            end,
            path: ring_path(cx, cy, outer, inner, start, end),
        });
    }
    segments
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Path of a ring sector between two angles (radians).
/// A full turn is drawn as two half arcs; render it with `fill-rule="evenodd"`.
pub fn ring_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep >= 2.0 * PI - 1e-9 {
        let (ox0, oy0) = polar(cx, cy, outer, start);
        let (ox1, oy1) = polar(cx, cy, outer, start + PI);
        let (ix0, iy0) = polar(cx, cy, inner, start);
        let (ix1, iy1) = polar(cx, cy, inner, start + PI);
        return format!(
            "M {ox0:.2} {oy0:.2} A {outer} {outer} 0 1 1 {ox1:.2} {oy1:.2} A {outer} {outer} 0 1 1 {ox0:.2} {oy0:.2} \
             M {ix0:.2} {iy0:.2} A {inner} {inner} 0 1 0 {ix1:.2} {iy1:.2} A {inner} {inner} 0 1 0 {ix0:.2} {iy0:.2} Z"
        );
    }

    let large = if sweep > PI { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    let (ix0, iy0) = polar(cx, cy, inner, start);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    format!(
        "M {ox0:.2} {oy0:.2} A {outer} {outer} 0 {large} 1 {ox1:.2} {oy1:.2} \
         L {ix1:.2} {iy1:.2} A {inner} {inner} 0 {large} 0 {ix0:.2} {iy0:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 0.0);
        assert_eq!(nice_ceiling(-3.0), 0.0);
        assert!(approx(nice_ceiling(37.0), 50.0));
        assert!(approx(nice_ceiling(100.0), 100.0));
        assert!(approx(nice_ceiling(101.0), 200.0));
        assert!(approx(nice_ceiling(7.2), 10.0));
        assert!(approx(nice_ceiling(0.3), 0.5));
    }

    #[test]
    fn test_scale_fit() {
        let scale = Scale::fit(vec![3.0, 12.0, 7.0]);
        assert_eq!(scale, Scale { min: 0.0, max: 20.0 });

        let scale = Scale::fit(vec![-4.0, 9.0]);
        assert!(approx(scale.min, -5.0));
        assert!(approx(scale.max, 10.0));

        // All zero or empty falls back to a unit range
        assert_eq!(Scale::fit(Vec::new()), Scale { min: 0.0, max: 1.0 });
        assert_eq!(Scale::fit(vec![0.0, 0.0]), Scale { min: 0.0, max: 1.0 });

        // Non-finite values are ignored
        assert_eq!(Scale::fit(vec![f64::NAN, 4.0]), Scale { min: 0.0, max: 5.0 });
    }

    #[test]
    fn test_ticks() {
        let ticks = Scale { min: 0.0, max: 100.0 }.ticks(4);
        assert_eq!(ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(25.0), "25");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(1500.0), "1.5k");
        assert_eq!(format_tick(2_000_000.0), "2M");
        assert_eq!(format_tick(-3000.0), "-3k");
    }

    #[test]
    fn test_y_for_maps_range_to_plot() {
        let frame = Frame::new(200.0, 140.0);
        let scale = Scale { min: 0.0, max: 10.0 };
        assert!(approx(frame.y_for(0.0, &scale), frame.bottom()));
        assert!(approx(frame.y_for(10.0, &scale), frame.pad_top));
        assert!(approx(frame.y_for(5.0, &scale), frame.bottom() - frame.plot_height() / 2.0));
        // Out of range values are clamped
        assert!(approx(frame.y_for(50.0, &scale), frame.pad_top));
    }

    #[test]
    fn test_line_points_span_plot_width() {
        let frame = Frame::new(200.0, 140.0);
        let scale = Scale { min: 0.0, max: 10.0 };
        let points = line_points(&[0.0, 5.0, 10.0], &frame, &scale);
        assert_eq!(points.len(), 3);
        assert!(approx(points[0].0, frame.pad_left));
        assert!(approx(points[2].0, frame.right()));
        assert!(approx(points[2].1, frame.pad_top));

        // A single value sits in the middle
        let single = line_points(&[5.0], &frame, &scale);
        assert!(approx(single[0].0, frame.pad_left + frame.plot_width() / 2.0));
    }

    #[test]
    fn test_points_attr() {
        assert_eq!(points_attr(&[(1.0, 2.0), (3.5, 4.25)]), "1.00,2.00 3.50,4.25");
        assert_eq!(points_attr(&[]), "");
    }

    #[test]
    fn test_bar_rects_grouped() {
        let frame = Frame::new(256.0, 140.0);
        let scale = Scale { min: 0.0, max: 10.0 };
        let series = vec![vec![10.0, 5.0], vec![0.0, 2.0]];
        let rects = bar_rects(&series, 2, &frame, &scale);
        assert_eq!(rects.len(), 4);

        let band = frame.plot_width() / 2.0;
        let first = rects[0];
        assert_eq!((first.series, first.index), (0, 0));
        assert!(approx(first.x, frame.pad_left + band * 0.1));
        assert!(approx(first.width, band * 0.4));
        assert!(approx(first.y, frame.pad_top));
        assert!(approx(first.height, frame.plot_height()));

        // Second series sits right of the first inside the same band
        let second = rects[2];
        assert_eq!((second.series, second.index), (1, 0));
        assert!(approx(second.x, first.x + first.width));
        assert!(approx(second.height, 0.0));
    }

    #[test]
    fn test_bar_rects_ignore_extra_values() {
        let frame = Frame::new(256.0, 140.0);
        let scale = Scale { min: 0.0, max: 10.0 };
        let rects = bar_rects(&[vec![1.0, 2.0, 3.0]], 2, &frame, &scale);
        assert_eq!(rects.len(), 2);
        assert!(bar_rects(&[vec![1.0]], 0, &frame, &scale).is_empty());
    }

    #[test]
    fn test_doughnut_segments_cover_full_turn() {
        let segments = doughnut_segments(&[1.0, 0.0, 3.0], 50.0, 50.0, 40.0, 25.0);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].index, 0);
        assert_eq!(segments[1].index, 2);
        assert!(approx(segments[0].fraction, 0.25));
        assert!(approx(segments[0].start, -PI / 2.0));
        assert!(approx(segments[0].end, 0.0));
        assert!(approx(segments[1].end, 3.0 * PI / 2.0));
        let total: f64 = segments.iter().map(|s| s.fraction).sum();
        assert!(approx(total, 1.0));
    }

    #[test]
    fn test_doughnut_single_value_draws_full_ring() {
        let segments = doughnut_segments(&[7.0], 50.0, 50.0, 40.0, 25.0);
        assert_eq!(segments.len(), 1);
        // Two outer and two inner half arcs
        assert_eq!(segments[0].path.matches(" A ").count(), 4);
    }

    #[test]
    fn test_doughnut_empty_when_no_positive_total() {
        assert!(doughnut_segments(&[], 50.0, 50.0, 40.0, 25.0).is_empty());
        assert!(doughnut_segments(&[0.0, -2.0], 50.0, 50.0, 40.0, 25.0).is_empty());
    }

    #[test]
    fn test_ring_path_large_arc_flag() {
        let small = ring_path(0.0, 0.0, 10.0, 5.0, 0.0, PI / 2.0);
        assert!(small.contains("A 10 10 0 0 1"));
        let large = ring_path(0.0, 0.0, 10.0, 5.0, 0.0, 3.0 * PI / 2.0);
        assert!(large.contains("A 10 10 0 1 1"));
    }
}
