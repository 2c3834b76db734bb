//! Chart Data
//!
//! Turns API chart payloads into series and slices for `leptos_charts`.

use leptos_charts::{Series, Slice};

use crate::models::{CategoryCount, ChartData};

/// Base colours as RGB triples, cycled by index
const PALETTE: [(u8, u8, u8); 5] = [
    (79, 70, 229),
    (59, 130, 246),
    (16, 185, 129),
    (249, 115, 22),
    (156, 163, 175),
];

const FILL_ALPHA: f64 = 0.8;

fn palette_color(index: usize, alpha: f64) -> String {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

/// Doughnut slices, one per category
pub fn category_slices(counts: &[CategoryCount]) -> Vec<Slice> {
    counts
        .iter()
        .enumerate()
        .map(|(i, c)| Slice {
            label: if c.category.is_empty() { "Uncategorized".to_string() } else { c.category.clone() },
            value: c.count,
            fill: palette_color(i, FILL_ALPHA),
            stroke: palette_color(i, 1.0),
        })
        .collect()
}

/// One series per dataset, values aligned to the label count
pub fn to_series(chart: &ChartData) -> Vec<Series> {
    let len = chart.labels.len();
    chart
        .datasets
        .iter()
        .enumerate()
        .map(|(i, ds)| {
            let mut values: Vec<f64> = ds.data.iter().copied().take(len).collect();
            values.resize(len, 0.0);
            let color = ds
                .border_color
                .as_ref()
                .and_then(|c| c.first())
                .or_else(|| ds.background_color.as_ref().and_then(|c| c.first()))
                .map(str::to_string)
                .unwrap_or_else(|| palette_color(i, 1.0));
            Series {
                label: ds.label.clone().unwrap_or_else(|| format!("Series {}", i + 1)),
                values,
                color,
            }
        })
        .collect()
}

pub fn has_trend(chart: &ChartData) -> bool {
    !chart.labels.is_empty() && !chart.datasets.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColorSpec, Dataset};

    fn dataset(label: Option<&str>, data: Vec<f64>, border: Option<ColorSpec>, background: Option<ColorSpec>) -> Dataset {
        Dataset {
            label: label.map(str::to_string),
            data,
            border_color: border,
            background_color: background,
        }
    }

    #[test]
    fn test_category_slices_cycle_palette() {
        let counts: Vec<CategoryCount> = (0..6)
            .map(|i| CategoryCount { category: format!("C{}", i), count: i as f64 })
            .collect();
        let slices = category_slices(&counts);
        assert_eq!(slices.len(), 6);
        assert_eq!(slices[0].fill, "rgba(79, 70, 229, 0.8)");
        assert_eq!(slices[0].stroke, "rgba(79, 70, 229, 1)");
        assert_eq!(slices[5].fill, slices[0].fill);
        assert_eq!(slices[3].value, 3.0);
    }

    #[test]
    fn test_unnamed_category() {
        let slices = category_slices(&[CategoryCount { category: String::new(), count: 2.0 }]);
        assert_eq!(slices[0].label, "Uncategorized");
    }

    #[test]
    fn test_series_color_precedence() {
        let chart = ChartData {
            labels: vec!["Mon".into(), "Tue".into()],
            datasets: vec![
                dataset(Some("A"), vec![1.0, 2.0], Some(ColorSpec::One("red".into())), Some(ColorSpec::One("blue".into()))),
                dataset(Some("B"), vec![1.0, 2.0], None, Some(ColorSpec::Many(vec!["green".into(), "pink".into()]))),
                dataset(None, vec![1.0, 2.0], None, None),
            ],
        };
        let series = to_series(&chart);
        assert_eq!(series[0].color, "red");
        assert_eq!(series[1].color, "green");
        assert_eq!(series[2].color, "rgba(16, 185, 129, 1)");
        assert_eq!(series[2].label, "Series 3");
    }

    #[test]
    fn test_series_aligned_to_labels() {
        let chart = ChartData {
            labels: vec!["a".into(), "b".into(), "c".into()],
            datasets: vec![
                dataset(Some("short"), vec![5.0], None, None),
                dataset(Some("long"), vec![1.0, 2.0, 3.0, 4.0], None, None),
            ],
        };
        let series = to_series(&chart);
        assert_eq!(series[0].values, vec![5.0, 0.0, 0.0]);
        assert_eq!(series[1].values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_has_trend() {
        assert!(!has_trend(&ChartData::default()));
        let labels_only = ChartData { labels: vec!["x".into()], datasets: vec![] };
        assert!(!has_trend(&labels_only));
        let full = ChartData {
            labels: vec!["x".into()],
            datasets: vec![dataset(None, vec![1.0], None, None)],
        };
        assert!(has_trend(&full));
    }
}
